pub mod backlinks;
pub mod doctor;
pub mod export;
pub mod output;

use std::path::Path;

use vaultpress_core::config::{ConfigError, ConfigLoader, ResolvedConfig};

use crate::VaultArgs;

/// Resolve configuration for a command that reads the vault.
///
/// With `--vault-root`, the config file is optional: only its logging
/// section is used, and a missing default config is not an error.
pub fn load_config(
    config: Option<&Path>,
    profile: Option<&str>,
    vault: &VaultArgs,
) -> Result<ResolvedConfig, ConfigError> {
    let loaded = ConfigLoader::load(config, profile);

    let mut rc = match (&vault.vault_root, loaded) {
        (Some(root), Ok(file_cfg)) => {
            let mut rc = ResolvedConfig::for_vault(root.clone());
            rc.logging = file_cfg.logging;
            rc
        }
        (Some(root), Err(ConfigError::NotFound(_))) if config.is_none() => {
            ResolvedConfig::for_vault(root.clone())
        }
        (_, Ok(rc)) => rc,
        (_, Err(e)) => return Err(e),
    };

    if !vault.extra_folders.is_empty() {
        rc.extra_folders = vault.extra_folders.clone();
    }

    Ok(rc)
}

/// Print a config error and exit.
pub fn exit_config_error(e: &ConfigError) -> ! {
    eprintln!("Error loading config: {e}");
    if matches!(e, ConfigError::NotFound(_)) {
        eprintln!("Hint: pass --vault-root or create a config file (see 'vaultpress doctor').");
    }
    std::process::exit(1);
}
