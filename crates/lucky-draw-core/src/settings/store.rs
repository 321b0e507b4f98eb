//! Loading, validating and saving settings files

use std::path::Path;

use tracing::{info, warn};

use super::document::SettingsDocument;
use super::schema;
use super::session::EditSession;
use crate::config::SettingsPaths;
use crate::error::{Error, Result};

/// Which file the live settings came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsSource {
    UserFile,
    DefaultFile,
}

impl SettingsSource {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::UserFile => "user settings",
            Self::DefaultFile => "default settings",
        }
    }
}

/// Live settings plus the defaults used by "restore defaults"
#[derive(Debug, Clone)]
pub struct SettingsStore {
    paths: SettingsPaths,
    live: SettingsDocument,
    defaults: SettingsDocument,
    source: SettingsSource,
}

/// Parse a settings file and check it against the schema
pub fn load_document(path: &Path) -> Result<SettingsDocument> {
    let document = SettingsDocument::read(path)?;
    schema::check(&document)?;
    Ok(document)
}

impl SettingsStore {
    /// Load the user file, falling back to the default file.
    ///
    /// Fails with [`Error::Configuration`] when neither file parses and
    /// validates.
    pub fn load(paths: SettingsPaths) -> Result<Self> {
        let (live, source) = Self::load_live(&paths)?;
        let defaults = Self::load_defaults(&paths);
        info!(source = source.describe(), entries = live.len(), "Settings loaded");
        Ok(Self {
            paths,
            live,
            defaults,
            source,
        })
    }

    /// Build a store from documents already in memory
    pub fn from_parts(paths: SettingsPaths, live: SettingsDocument, defaults: SettingsDocument) -> Self {
        Self {
            paths,
            live,
            defaults,
            source: SettingsSource::UserFile,
        }
    }

    /// The fallback chain: user file, then default file
    pub fn load_live(paths: &SettingsPaths) -> Result<(SettingsDocument, SettingsSource)> {
        let user_error = match load_document(&paths.user) {
            Ok(document) => return Ok((document, SettingsSource::UserFile)),
            Err(e) => e,
        };
        warn!(path = %paths.user.display(), error = %user_error, "User settings unusable, trying defaults");

        match load_document(&paths.defaults) {
            Ok(document) => Ok((document, SettingsSource::DefaultFile)),
            Err(default_error) => Err(Error::Configuration(format!(
                "{}: {}; {}: {}",
                paths.user.display(),
                user_error,
                paths.defaults.display(),
                default_error
            ))),
        }
    }

    /// The default file, or the built-in schema when it is unusable
    pub fn load_defaults(paths: &SettingsPaths) -> SettingsDocument {
        match load_document(&paths.defaults) {
            Ok(document) => document,
            Err(e) => {
                warn!(path = %paths.defaults.display(), error = %e, "Default settings unusable, using built-in defaults");
                schema::builtin_defaults()
            }
        }
    }

    /// Write the built-in schema to the default file.
    ///
    /// Returns `false` without touching anything when the file exists and
    /// `overwrite` is not set.
    pub fn install_defaults(paths: &SettingsPaths, overwrite: bool) -> Result<bool> {
        if paths.defaults.exists() && !overwrite {
            return Ok(false);
        }
        write_document(&paths.defaults, &schema::builtin_defaults())?;
        info!(path = %paths.defaults.display(), "Default settings written");
        Ok(true)
    }

    pub fn paths(&self) -> &SettingsPaths {
        &self.paths
    }

    pub fn live(&self) -> &SettingsDocument {
        &self.live
    }

    pub fn defaults(&self) -> &SettingsDocument {
        &self.defaults
    }

    pub fn source(&self) -> SettingsSource {
        self.source
    }

    /// Change the upper bound of an int setting in both live and default
    /// documents. Used to fit the text position to the screen height.
    pub fn fit_int_max(&mut self, key: &str, max: i64) {
        self.live.set_int_max(key, max);
        self.defaults.set_int_max(key, max);
    }

    /// Write `document` to the user file, replacing whatever is there
    pub fn save(&self, document: &SettingsDocument) -> Result<()> {
        write_document(&self.paths.user, document)?;
        info!(path = %self.paths.user.display(), "User settings saved");
        Ok(())
    }

    /// Start editing a copy of the live settings
    pub fn begin_edit(&self) -> EditSession {
        EditSession::new(&self.live)
    }

    /// Save `document` and make it the live settings
    pub fn commit(&mut self, document: SettingsDocument) -> Result<()> {
        self.save(&document)?;
        self.live = document;
        self.source = SettingsSource::UserFile;
        Ok(())
    }
}

fn write_document(path: &Path, document: &SettingsDocument) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }
    let json = document.to_json()?;
    std::fs::write(path, json).map_err(|e| Error::io(path, e))
}
