use std::path::{Component, Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use shellexpand::full;
use thiserror::Error;

use crate::config::types::{
    ConfigFile, LoggingConfig, Profile, ResolvedConfig, default_out_dir,
};

/// Profile used when neither `--profile` nor the file's `profile` key names one.
pub const DEFAULT_PROFILE: &str = "default";

/// Environment variable that points at a config file outside the XDG location.
pub const CONFIG_ENV: &str = "VAULTPRESS_CONFIG";

const SUPPORTED_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("profile '{0}' not found")]
    ProfileNotFound(String),

    #[error("no profiles defined in config")]
    NoProfiles,

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("home directory not available to expand '~'")]
    NoHome,

    #[error("extra folder '{folder}' in profile '{profile}' must be relative to the vault root")]
    FolderOutsideVault { profile: String, folder: String },
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(
        config_path: Option<&Path>,
        profile_override: Option<&str>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let path = config_path.map_or_else(default_config_path, Path::to_path_buf);

        if !path.is_file() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let source = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;
        let file: ConfigFile = toml::from_str(&source)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if file.version != SUPPORTED_VERSION {
            return Err(ConfigError::BadVersion(file.version));
        }
        if file.profiles.is_empty() {
            return Err(ConfigError::NoProfiles);
        }

        let active = profile_override
            .or(file.profile.as_deref())
            .unwrap_or(DEFAULT_PROFILE);
        let profile = file
            .profiles
            .get(active)
            .ok_or_else(|| ConfigError::ProfileNotFound(active.to_string()))?;

        resolve_profile(active, profile, &file.logging)
    }
}

/// Expands `~`, environment variables and the `{{vault_root}}` placeholder
/// in the paths of one profile.
struct PathExpander {
    vault_root: PathBuf,
}

impl PathExpander {
    fn new(vault_root: &str) -> Result<Self, ConfigError> {
        Ok(Self { vault_root: expand_path(vault_root)? })
    }

    fn expand(&self, raw: &str) -> Result<PathBuf, ConfigError> {
        expand_path(&raw.replace("{{vault_root}}", &self.vault_root.to_string_lossy()))
    }
}

fn resolve_profile(
    name: &str,
    profile: &Profile,
    logging: &LoggingConfig,
) -> Result<ResolvedConfig, ConfigError> {
    let paths = PathExpander::new(&profile.vault_root)?;

    for folder in &profile.extra_folders {
        if !stays_inside_vault(Path::new(folder)) {
            return Err(ConfigError::FolderOutsideVault {
                profile: name.to_string(),
                folder: folder.clone(),
            });
        }
    }

    let html_template = profile.html_template.as_deref().map(|t| paths.expand(t)).transpose()?;
    let out_dir = match profile.out_dir.as_deref() {
        Some(dir) => paths.expand(dir)?,
        None => default_out_dir(&paths.vault_root),
    };
    let excluded_folders = profile
        .excluded_folders
        .iter()
        .map(|f| paths.expand(f))
        .collect::<Result<Vec<_>, _>>()?;

    let logging = LoggingConfig {
        file: logging.file.as_deref().map(|f| paths.expand(&f.to_string_lossy())).transpose()?,
        ..logging.clone()
    };

    Ok(ResolvedConfig {
        active_profile: name.to_string(),
        extra_folders: profile.extra_folders.clone(),
        html_template,
        out_dir,
        excluded_folders,
        vault_root: paths.vault_root,
        logging,
    })
}

/// Extra folders are listed relative to the root; `..` or an absolute
/// path would pull notes from outside the vault.
fn stays_inside_vault(folder: &Path) -> bool {
    folder.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// `$VAULTPRESS_CONFIG`, else `$XDG_CONFIG_HOME/vaultpress/config.toml`,
/// else `~/.config/vaultpress/config.toml`.
pub fn default_config_path() -> PathBuf {
    if let Some(path) = env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("vaultpress").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("vaultpress").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.into_owned()))
}
