use std::path::Path;

use vaultpress_core::config::{ConfigLoader, default_config_path};

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            println!("OK   vaultpress doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("vault_root: {}", rc.vault_root.display());
            println!("extra_folders: {}", rc.extra_folders.join(", "));
            println!(
                "html_template: {}",
                rc.html_template
                    .as_ref()
                    .map_or_else(|| "(none)".to_string(), |p| p.display().to_string())
            );
            println!("out_dir: {}", rc.out_dir.display());
            println!("logging.level: {}", rc.logging.level);
        }
        Err(e) => {
            println!("FAIL vaultpress doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
