//! Plugin lifecycle.
//!
//! The host drives the plugin through a handful of hooks; creation happens once
//! before any user action, the rest may arrive in any order. The exporter
//! itself only runs from `export`, the user's action.

use tracing::debug;

use crate::export::{run_export, ExportOptions, ExportReport};
use crate::fs_ops::LinkBackend;
use crate::host::{HostClient, Reporter, Severity};
use crate::i18n::{keys, Translator};

/// Link export plugin wired to its host, filesystem, message surface and messages.
pub struct LinkExportPlugin<H, B, R, T> {
    host: H,
    backend: B,
    reporter: R,
    translator: T,
    options: ExportOptions,
    created: bool,
}

impl<H, B, R, T> LinkExportPlugin<H, B, R, T>
where
    H: HostClient,
    B: LinkBackend,
    R: Reporter,
    T: Translator,
{
    pub fn new(host: H, backend: B, reporter: R, translator: T, options: ExportOptions) -> Self {
        Self {
            host,
            backend,
            reporter,
            translator,
            options,
            created: false,
        }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    fn say(&self, key: &str, severity: Severity) {
        let msg = self.translator.translate(key, &[]);
        self.reporter.report(&msg, severity);
    }

    /// Creation hook: greet with the selection state. Later calls are ignored.
    pub fn on_create(&mut self) {
        if self.created {
            debug!("on_create called again; ignoring");
            return;
        }
        self.created = true;
        debug!("plugin created");

        match self.host.selected_items() {
            Ok(items) if items.is_empty() => self.say(keys::NO_ITEMS_SELECTED_ON_LOAD, Severity::Error),
            Ok(_) => self.say(keys::READY, Severity::Info),
            Err(e) => {
                debug!(error = %e, "selection query failed during create");
                self.say(keys::READY, Severity::Info);
            }
        }
    }

    pub fn on_run(&self) {
        debug!("plugin run");
    }

    pub fn on_show(&self) {
        debug!("plugin shown");
    }

    pub fn on_hide(&self) {
        debug!("plugin hidden");
    }

    pub fn on_before_exit(&self) {
        debug!("plugin before exit");
    }

    /// User action: export links for the current selection and report the result.
    pub fn export(&self) -> ExportReport {
        self.say(keys::EXPORTING_LINKS, Severity::Info);
        let report = run_export(&self.host, &self.backend, &self.options);
        let (msg, severity) = report.render(&self.translator);
        self.reporter.report(&msg, severity);
        report
    }
}
