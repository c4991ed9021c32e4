//! File System Utilities
//!
//! Configuration directory management.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use home::home_dir;
use std::fs;
use std::path::{Path, PathBuf};

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/gallery-gui/` or `$XDG_CONFIG_HOME/gallery-gui/`
/// - **macOS**: `~/Library/Application Support/dev.gallery.gallery-gui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\gallery\gallery-gui\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("dev", "gallery", "gallery-gui") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    // Handle migration from the old dot-directory location if needed
    if let Some(home) = home_dir() {
        let old_config_path = home.join(".gallery-gui");
        if old_config_path.exists() {
            let _ = copy_dir_files(&old_config_path, config_dir);
            let _ = fs::remove_dir_all(&old_config_path);
        }
    }

    Ok(config_dir.to_path_buf())
}

/// Copy files (not directories) from source to destination
fn copy_dir_files(src: &PathBuf, dst: &Path) -> Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            continue;
        }

        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        fs::copy(&src_path, &dst_path)?;
    }
    Ok(())
}

/// Check if running in development mode
pub fn is_development() -> bool {
    cfg!(debug_assertions)
}
