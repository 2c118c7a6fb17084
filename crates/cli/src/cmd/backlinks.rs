//! Backlinks command implementation.

use std::path::Path;

use vaultpress_core::NoteId;
use vaultpress_core::vault::{BacklinkIndex, NoteRepository};

use super::output::{
    BacklinkOutput, print_backlinks_json, print_backlinks_quiet, print_backlinks_table,
};
use super::{exit_config_error, load_config};
use crate::{BacklinksArgs, OutputFormat, logging};

pub fn run(config: Option<&Path>, profile: Option<&str>, verbose: u8, args: &BacklinksArgs) {
    let rc = match load_config(config, profile, &args.vault) {
        Ok(rc) => rc,
        Err(e) => exit_config_error(&e),
    };

    logging::init(&rc.logging, verbose);

    let repo = match NoteRepository::discover_excluding(
        &rc.vault_root,
        &rc.extra_folders,
        rc.excluded_folders.clone(),
    ) {
        Ok(repo) => repo,
        Err(e) => {
            eprintln!("Error reading vault: {e}");
            std::process::exit(1);
        }
    };

    let id = NoteId::from_relative_path(Path::new(&normalize_note(&args.note)));
    if repo.get(&id).is_none() {
        eprintln!("Note not found in vault: {id}");
        eprintln!("Hint: notes at the vault root need --extra-folder .");
        std::process::exit(1);
    }

    let index = BacklinkIndex::build(&repo);
    let outputs: Vec<BacklinkOutput> =
        index.backlinks_of(&id).iter().map(BacklinkOutput::from).collect();

    match resolve_format(args.output, args.json, args.quiet) {
        OutputFormat::Table => print_backlinks_table(&outputs, &id.to_string()),
        OutputFormat::Json => print_backlinks_json(&outputs),
        OutputFormat::Quiet => print_backlinks_quiet(&outputs),
    }
}

/// Normalize note path by removing leading ./ and using `/` separators.
fn normalize_note(note: &str) -> String {
    let note = note.replace('\\', "/");
    note.strip_prefix("./").unwrap_or(&note).to_string()
}

fn resolve_format(output: OutputFormat, json: bool, quiet: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else if quiet {
        OutputFormat::Quiet
    } else {
        output
    }
}
