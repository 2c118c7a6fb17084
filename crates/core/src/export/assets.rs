//! Copies non-markdown files (images, attachments, stylesheets) into the
//! export tree.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::ExportError;
use crate::vault::VaultWalker;

/// Copy every non-note file under the walker's root to the same relative
/// location below `out_dir`. Returns the number of files copied.
pub fn copy_assets(walker: &VaultWalker, out_dir: &Path) -> Result<usize, ExportError> {
    let assets = walker.walk_assets(Some(out_dir))?;

    for asset in &assets {
        let dest = out_dir.join(&asset.relative_path);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| ExportError::CreateDir {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        fs::copy(&asset.absolute_path, &dest).map_err(|e| ExportError::Copy {
            from: asset.absolute_path.display().to_string(),
            to: dest.display().to_string(),
            source: e,
        })?;
        debug!(asset = %asset.relative_path.display(), "copied asset");
    }

    Ok(assets.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copies_assets_byte_for_byte() {
        let vault = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::create_dir_all(vault.path().join("img")).unwrap();
        fs::write(vault.path().join("img/logo.png"), [0u8, 159, 146, 150]).unwrap();
        fs::write(vault.path().join("img/note.md"), "# not an asset").unwrap();

        let walker = VaultWalker::new(vault.path()).unwrap();
        let copied = copy_assets(&walker, out.path()).unwrap();

        assert_eq!(copied, 1);
        assert_eq!(fs::read(out.path().join("img/logo.png")).unwrap(), [0u8, 159, 146, 150]);
        assert!(!out.path().join("img/note.md").exists());
    }
}
