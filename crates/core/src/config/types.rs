use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    pub vault_root: String,
    /// Folders (relative to vault_root) whose direct notes are also exported.
    /// `"."` includes the notes at the vault root.
    #[serde(default)]
    pub extra_folders: Vec<String>,
    /// HTML page template with `{title}` and `{content}` placeholders.
    pub html_template: Option<String>,
    /// Output directory (defaults to `{{vault_root}}/html`).
    pub out_dir: Option<String>,
    /// Folders to skip during discovery and asset copy (relative to vault_root).
    #[serde(default)]
    pub excluded_folders: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub vault_root: PathBuf,
    pub extra_folders: Vec<String>,
    pub html_template: Option<PathBuf>,
    pub out_dir: PathBuf,
    pub excluded_folders: Vec<PathBuf>,
    pub logging: LoggingConfig,
}

impl ResolvedConfig {
    /// Configuration for a vault given only by its root, with every option
    /// at its default.
    pub fn for_vault(vault_root: PathBuf) -> Self {
        Self {
            active_profile: "default".to_string(),
            out_dir: default_out_dir(&vault_root),
            vault_root,
            extra_folders: Vec::new(),
            html_template: None,
            excluded_folders: Vec::new(),
            logging: LoggingConfig::default(),
        }
    }
}

pub fn default_out_dir(vault_root: &std::path::Path) -> PathBuf {
    vault_root.join("html")
}
