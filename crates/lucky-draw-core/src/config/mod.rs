//! File locations for settings, the candidate list and logs

mod paths;

pub use paths::*;

use std::path::{Path, PathBuf};

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "lucky-draw";
/// Settings edited by the operator
pub const USER_SETTINGS_FILE: &str = "user.json";
/// Settings shipped with the program, used when the user file is unusable
pub const DEFAULT_SETTINGS_FILE: &str = "default.json";
/// Candidate list read when no list is given
pub const DEFAULT_LIST_FILE: &str = "LIST.txt";
/// Log file written in TUI mode
pub const LOG_FILE: &str = "lucky-draw.log";

/// Where the two settings files live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsPaths {
    /// Written on save, read first on load
    pub user: PathBuf,
    /// Read when the user file is unusable and for "restore defaults"
    pub defaults: PathBuf,
}

impl SettingsPaths {
    /// Both files inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            user: dir.join(USER_SETTINGS_FILE),
            defaults: dir.join(DEFAULT_SETTINGS_FILE),
        }
    }

    /// Files in the detected config directory
    pub fn detect() -> Self {
        Self::in_dir(detect_config_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_dir() {
        let paths = SettingsPaths::in_dir("/etc/draw");
        assert_eq!(paths.user, PathBuf::from("/etc/draw/user.json"));
        assert_eq!(paths.defaults, PathBuf::from("/etc/draw/default.json"));
    }
}
