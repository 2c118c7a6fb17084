//! Export command implementation.

use std::path::Path;

use vaultpress_core::export::{ExportOptions, Exporter};

use super::{exit_config_error, load_config};
use crate::{ExportArgs, logging};

pub fn run(config: Option<&Path>, profile: Option<&str>, verbose: u8, args: &ExportArgs) {
    let mut rc = match load_config(config, profile, &args.vault) {
        Ok(rc) => rc,
        Err(e) => exit_config_error(&e),
    };

    logging::init(&rc.logging, verbose);

    if let Some(ref template) = args.template {
        rc.html_template = Some(template.clone());
    }
    if let Some(ref out_dir) = args.out_dir {
        rc.out_dir = out_dir.clone();
    }

    println!("Exporting vault: {}", rc.vault_root.display());

    match Exporter::new(ExportOptions::from(&rc)).run() {
        Ok(report) => {
            println!();
            println!("Export complete:");
            println!("  Notes found:    {}", report.notes);
            println!("  Backlinks:      {}", report.backlinks);
            println!("  Pages written:  {}", report.pages_written);
            println!("  Assets copied:  {}", report.assets_copied);
            println!();
            println!("Output written to: {}", report.out_dir.display());
        }
        Err(e) => {
            tracing::error!(kind = %e.kind(), "export failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
