//! Platform-specific config directory detection

use std::path::{Path, PathBuf};

use super::APP_DIR_NAME;

/// Fallback next to the working directory, matching a portable install
const PORTABLE_DIR: &str = "config";

/// True when `dir` already holds at least one settings file
fn has_settings(dir: &Path) -> bool {
    dir.join(super::USER_SETTINGS_FILE).is_file() || dir.join(super::DEFAULT_SETTINGS_FILE).is_file()
}

/// Pick the settings directory.
///
/// A `config/` folder in the working directory with settings in it wins, so a
/// copy of the program carried on a USB stick keeps its own look. Otherwise
/// the platform config dir is used (`~/.config/lucky-draw` on Linux,
/// `%APPDATA%\lucky-draw` on Windows, `~/Library/Application Support/lucky-draw`
/// on macOS).
pub fn detect_config_dir() -> PathBuf {
    let portable = PathBuf::from(PORTABLE_DIR);
    if has_settings(&portable) {
        return portable;
    }

    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or(portable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_config_dir() {
        let dir = detect_config_dir();
        assert!(dir.ends_with(APP_DIR_NAME) || dir.ends_with(PORTABLE_DIR));
    }

    #[test]
    fn test_has_settings() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!has_settings(dir.path()));
        std::fs::write(dir.path().join(super::super::DEFAULT_SETTINGS_FILE), "[]").unwrap();
        assert!(has_settings(dir.path()));
    }
}
