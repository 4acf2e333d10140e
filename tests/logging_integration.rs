mod common;

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use common::{item, FakeHost};
use link_export::platform::open_log_file_secure_append;
use link_export::{run_export, ExportOptions, OsLinks};
use tempfile::tempdir;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt as tsfmt, registry};

/// Appends written bytes into a shared in-memory buffer.
#[derive(Clone)]
struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn export_emits_structured_events() {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let make_writer = {
        let buf = buf.clone();
        move || BufferWriter(buf.clone())
    };
    let layer = tsfmt::layer()
        .with_writer(make_writer)
        .with_target(false)
        .with_ansi(false)
        .compact();
    let subscriber = registry().with(EnvFilter::new("debug")).with(layer);

    let dest = tempdir().unwrap();
    let host = FakeHost::with_items(vec![item("7", "ghost", None)], dest.path());

    // Scoped dispatch keeps the global subscriber untouched for other tests.
    let dispatch = tracing::Dispatch::new(subscriber);
    tracing::dispatcher::with_default(&dispatch, || {
        run_export(&host, &OsLinks, &ExportOptions::default());
    });

    let contents = String::from_utf8_lossy(&buf.lock().unwrap()).to_string();
    assert!(contents.contains("Exporting links"), "contents={contents}");
    assert!(contents.contains("item has no file path"), "contents={contents}");
    assert!(contents.contains("Export finished"), "contents={contents}");
    assert!(contents.contains("failed=1"), "contents={contents}");
}

#[test]
fn file_logging_writes_to_custom_path() {
    let td = tempdir().expect("tempdir");
    let log_path = td.path().join("link_export_test.log");

    // The binary refuses file logging below a symlinked ancestor (common on macOS temp dirs).
    if link_export::path_has_symlink_ancestor(&log_path).unwrap() {
        eprintln!("Skipping file logging test: symlink ancestor in {}", log_path.display());
        return;
    }

    let file = open_log_file_secure_append(&log_path).expect("open_log_file_secure_append");
    let (writer, guard): (tracing_appender::non_blocking::NonBlocking, WorkerGuard) =
        tracing_appender::non_blocking(file);
    let file_layer = tsfmt::layer()
        .with_writer(move || writer.clone())
        .with_target(false)
        .compact();
    let subscriber = registry().with(EnvFilter::new("info")).with(file_layer);

    let dispatch = tracing::Dispatch::new(subscriber);
    tracing::dispatcher::with_default(&dispatch, || {
        tracing::info!("file-logging-test: written");
    });
    drop(guard);

    let contents = std::fs::read_to_string(&log_path).expect("read log file");
    assert!(contents.contains("file-logging-test"), "contents={contents}");
}
