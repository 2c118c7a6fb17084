mod cmd;
mod logging;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "vaultpress",
    version,
    about = "Export a wiki-linked markdown vault to static HTML with backlinks"
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    /// Log more to stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved paths
    Doctor,

    /// Render every note to HTML and copy assets
    Export(ExportArgs),

    /// Show the notes that link to a note
    Backlinks(BacklinksArgs),
}

/// Vault selection shared by commands that read notes.
#[derive(Debug, Args, Clone, Default)]
pub struct VaultArgs {
    /// Vault root; when given, profile paths from the config file are ignored
    #[arg(long)]
    pub vault_root: Option<PathBuf>,

    /// Folder (relative to the vault root) whose notes are also included.
    /// Use "." for notes at the vault root. Repeatable.
    #[arg(long = "extra-folder", value_name = "FOLDER")]
    pub extra_folders: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub vault: VaultArgs,

    /// HTML template with {title} and {content} placeholders ({{ and }} for literal braces)
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Output directory (default: <vault_root>/html)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct BacklinksArgs {
    /// Note identity relative to the vault root (e.g. "projects/Plan" or "projects/Plan.md")
    pub note: String,

    #[command(flatten)]
    pub vault: VaultArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Shorthand for --output json
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,

    /// Print only the linking note identities
    #[arg(long, short)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Quiet,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Doctor => {
            cmd::doctor::run(cli.config.as_deref(), cli.profile.as_deref());
        }
        Commands::Export(args) => {
            cmd::export::run(cli.config.as_deref(), cli.profile.as_deref(), cli.verbose, &args);
        }
        Commands::Backlinks(args) => {
            cmd::backlinks::run(cli.config.as_deref(), cli.profile.as_deref(), cli.verbose, &args);
        }
    }
}
