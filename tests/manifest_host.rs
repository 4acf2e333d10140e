use assert_fs::TempDir;
use serial_test::serial;
use std::fs;
use std::path::Path;

use link_export::{
    run_export, DirectoryChoice, ExportOptions, ExportReport, HostClient, LinkExportError,
    ManifestHost, OsLinks,
};

#[test]
fn relative_paths_resolve_against_manifest_dir() {
    let td = TempDir::new().unwrap();
    let root = fs::canonicalize(td.path()).unwrap();
    let manifest = root.join("selection.json");
    fs::write(
        &manifest,
        r#"{"items": [{"id": "1", "name": "a", "filePath": "pics/a.png"}]}"#,
    )
    .unwrap();

    let host = ManifestHost::from_path(&manifest).unwrap();
    let items = host.selected_items().unwrap();
    assert_eq!(items[0].file_path.as_deref(), Some(root.join("pics/a.png").as_path()));
}

#[test]
fn folder_lookup_follows_manifest_entries() {
    let td = TempDir::new().unwrap();
    let manifest = td.path().join("m.json");
    fs::write(
        &manifest,
        r#"{
  "items": [],
  "folders": [{"id": "p", "name": "Parent"}, {"id": "c", "name": "Child", "parent": "p"}],
  "selectedFolders": ["c"]
}"#,
    )
    .unwrap();

    let host = ManifestHost::from_path(&manifest).unwrap();
    let selected = host.selected_folders().unwrap();
    assert_eq!(selected[0].parent.as_deref(), Some("p"));
    assert_eq!(host.folder_by_id("p").unwrap().unwrap().label(), "Parent");
    assert!(host.folder_by_id("zzz").unwrap().is_none());
}

#[test]
fn preset_destination_is_created() {
    let td = TempDir::new().unwrap();
    let dest = td.path().join("new").join("dest");
    let host = ManifestHost::default().with_destination(Some(dest.clone()));
    assert_eq!(host.pick_directory().unwrap(), DirectoryChoice::Chosen(dest.clone()));
    assert!(dest.is_dir());
}

#[test]
fn unreadable_manifest_is_typed_error() {
    let td = TempDir::new().unwrap();
    let err = ManifestHost::from_path(&td.path().join("missing.json")).unwrap_err();
    let typed = err.downcast_ref::<LinkExportError>().expect("typed error");
    assert_eq!(typed.code(), 50);
}

/// Restores the working directory when dropped.
struct CwdGuard(std::path::PathBuf);

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.0);
    }
}

#[test]
#[serial]
fn relative_manifest_path_yields_absolute_item_paths() {
    let td = TempDir::new().unwrap();
    let root = fs::canonicalize(td.path()).unwrap();
    fs::create_dir_all(root.join("lib")).unwrap();
    fs::write(root.join("lib").join("a.png"), b"a").unwrap();
    fs::write(
        root.join("sel.json"),
        r#"{"items": [{"id": "1", "name": "a", "filePath": "lib/a.png"}]}"#,
    )
    .unwrap();

    let _cwd = CwdGuard(std::env::current_dir().unwrap());
    std::env::set_current_dir(&root).unwrap();

    let host = ManifestHost::from_path(Path::new("sel.json")).unwrap();
    let items = host.selected_items().unwrap();
    let file_path = items[0].file_path.as_deref().unwrap();
    assert!(file_path.is_absolute(), "got {}", file_path.display());
    assert_eq!(file_path, root.join("lib").join("a.png"));

    #[cfg(unix)]
    {
        let dest = root.join("out");
        let host = host.with_destination(Some(dest.clone()));
        match run_export(&host, &OsLinks, &ExportOptions::default()) {
            ExportReport::Finished(outcome) => assert_eq!(outcome.success_count, 1),
            other => panic!("expected a finished batch, got {other:?}"),
        }
        let link = dest.join("a.png");
        assert!(fs::read_link(&link).unwrap().is_absolute());
        assert_eq!(fs::read(&link).unwrap(), b"a", "link resolves to the source");
    }
}
