//! Application orchestrator.
//! Loads/merges config, initializes logging, builds the manifest host and runs
//! the plugin hooks around one export action.

use anyhow::Result;
use tracing::{debug, error, info, warn};

use link_export::cli::Args;
use link_export::config::{load_or_init, LoadResult, CONFIG_ENV};
use link_export::output::{self as out, ConsoleReporter};
use link_export::{
    default_config_path, Catalog, Config, ExportOptions, ExportReport, LinkExportError,
    LinkExportPlugin, ManifestHost, OsLinks,
};

use crate::logging::init_tracing;

fn print_config_location() {
    if let Some(p) = std::env::var_os(CONFIG_ENV) {
        out::print_info(&format!("Using {CONFIG_ENV} (explicit):\n  {}\n", p.to_string_lossy()));
        return;
    }
    match default_config_path() {
        Ok(p) => {
            out::print_info(&format!("Default link_export config path:\n  {}\n", p.display()));
            if p.exists() {
                out::print_info("A config file already exists at that location.");
            } else {
                out::print_info("No config file exists there yet; one is created on first run.");
            }
        }
        Err(e) => out::print_error(&format!("Could not determine a default config path: {e}")),
    }
}

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    if args.print_config {
        print_config_location();
        return Ok(());
    }

    let mut cfg = match load_or_init()? {
        LoadResult::Loaded(cfg) => cfg,
        LoadResult::Defaults => Config::default(),
        LoadResult::CreatedTemplate(path) => {
            out::print_info(&format!("A template link_export config was written to: {}", path.display()));
            Config::default()
        }
    };
    args.apply_overrides(&mut cfg);

    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {e}"));
        e
    })?;
    debug!("Starting link_export: {:?}", args);

    let translator = match cfg.locale_file.as_deref() {
        Some(path) => Catalog::from_path(path).unwrap_or_else(|e| {
            warn!(error = %format!("{e:#}"), "locale file unusable; falling back to English");
            Catalog::english()
        }),
        None => Catalog::english(),
    };

    let Some(manifest) = args.manifest.as_deref() else {
        // clap enforces MANIFEST unless --print-config, handled above.
        return Ok(());
    };
    let host = match ManifestHost::from_path(manifest) {
        Ok(host) => host,
        Err(e) => {
            if let Some(typed) = e.downcast_ref::<LinkExportError>() {
                error!(code = typed.code(), kind = "manifest", error = %typed, "Cannot load selection");
            }
            return Err(e);
        }
    };
    let interactive = !args.no_prompt && atty::is(atty::Stream::Stdin);
    let host = host.with_destination(args.dest.clone()).interactive(interactive);

    let mut plugin = LinkExportPlugin::new(
        host,
        OsLinks,
        ConsoleReporter,
        translator,
        ExportOptions::from(&cfg),
    );
    plugin.on_create();
    plugin.on_run();
    let report = plugin.export();
    plugin.on_before_exit();

    if let ExportReport::Finished(outcome) = &report {
        info!(
            created = outcome.success_count,
            failed = outcome.errors.len(),
            aborted = outcome.aborted,
            "Export completed"
        );
    }
    Ok(())
}
