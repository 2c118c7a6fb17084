//! Tracing setup for commands that read the vault.
//!
//! Diagnostics go to stderr so that `backlinks --json` output on stdout
//! stays machine-readable. An optional log file receives its own level.

use std::fs::{self, File};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use vaultpress_core::config::LoggingConfig;

static LOG_GUARD: Mutex<Option<tracing_appender::non_blocking::WorkerGuard>> =
    Mutex::new(None);

/// Install the global subscriber.
///
/// `verbose` is the number of `-v` flags. It can only raise the configured
/// stderr level, never lower it. `RUST_LOG` still overrides both.
pub fn init(cfg: &LoggingConfig, verbose: u8) {
    let stderr_level = stderr_level(cfg, verbose);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .without_time()
        .with_filter(filter(stderr_level));

    let registry = tracing_subscriber::registry().with(stderr_layer);

    let Some(ref path) = cfg.file else {
        registry.init();
        return;
    };

    let file_level = cfg
        .file_level
        .as_deref()
        .and_then(parse_level)
        .unwrap_or_else(|| stderr_level.max(LevelFilter::DEBUG));

    let file = open_log_file(path).unwrap_or_else(|e| {
        eprintln!("Error: failed to create log file {}: {e}", path.display());
        std::process::exit(1);
    });
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    // Dropping the guard would lose buffered lines at exit.
    if let Ok(mut g) = LOG_GUARD.lock() {
        *g = Some(guard);
    }

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(filter(file_level));

    registry.with(file_layer).init();
}

fn filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::builder().with_default_directive(level.into()).from_env_lossy()
}

/// Level for the stderr layer: the configured one, raised by `-v` / `-vv`.
fn stderr_level(cfg: &LoggingConfig, verbose: u8) -> LevelFilter {
    let configured = parse_level(&cfg.level).unwrap_or(LevelFilter::INFO);
    let requested = match verbose {
        0 => LevelFilter::OFF,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    configured.max(requested)
}

/// Log files usually live next to the export (`{{vault_root}}/logs/...`),
/// a folder that may not exist on the first run.
fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    s.trim().parse().ok()
}
