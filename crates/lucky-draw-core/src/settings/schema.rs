//! Built-in settings schema and defaults
//!
//! A settings document is valid when it has an entry for every key listed
//! here. Extra keys and ordering are not checked.

use super::document::SettingsDocument;
use super::font::{FontSpec, FontStyle};
use super::value::{IntRange, SettingEntry, SettingValue};
use crate::error::{Error, Result};

/// Setting names, which double as the keys in the settings files
pub mod keys {
    pub const BACKGROUND_IMAGE: &str = "Background image path";
    pub const BACKGROUND_COLOR: &str = "Background color";
    pub const WELCOME_TEXT: &str = "Welcome text";
    pub const TEXT_POSITION: &str = "Main text vertical position";
    pub const MAIN_FONT: &str = "Main text font";
    pub const MAIN_COLOR: &str = "Main text color";
    pub const WINNER_LABEL: &str = "Congratulations text";
    pub const BUTTON_FONT: &str = "Rolling button font";
    pub const BUTTON_FOREGROUND: &str = "Rolling button foreground color";
    pub const BUTTON_BACKGROUND: &str = "Rolling button background color";
    pub const BEGIN_TEXT: &str = "Begin rolling text";
    pub const STOP_TEXT: &str = "End rolling text";
    pub const VISIBLE_LEFT: &str = "Left visible letter count";
    pub const VISIBLE_RIGHT: &str = "Right visible letter count";
}

/// Every required key, in display order
pub const REQUIRED_KEYS: [&str; 14] = [
    keys::BACKGROUND_IMAGE,
    keys::BACKGROUND_COLOR,
    keys::WELCOME_TEXT,
    keys::TEXT_POSITION,
    keys::MAIN_FONT,
    keys::MAIN_COLOR,
    keys::WINNER_LABEL,
    keys::BUTTON_FONT,
    keys::BUTTON_FOREGROUND,
    keys::BUTTON_BACKGROUND,
    keys::BEGIN_TEXT,
    keys::STOP_TEXT,
    keys::VISIBLE_LEFT,
    keys::VISIBLE_RIGHT,
];

/// The built-in value for a schema key
pub fn builtin_value(key: &str) -> Option<SettingValue> {
    let heading_font = || FontSpec::new("Arial", 20).with_style(FontStyle::Bold);
    let text = |s: &str| SettingValue::Text(s.to_string());
    let color = |s: &str| SettingValue::Color(s.to_string());

    let value = match key {
        keys::BACKGROUND_IMAGE => SettingValue::Path("../image.jpg".to_string()),
        keys::BACKGROUND_COLOR => color("#000000"),
        keys::WELCOME_TEXT => text("Lucky Draw!"),
        keys::TEXT_POSITION => SettingValue::Int(IntRange::new(0, 200, 40)),
        keys::MAIN_FONT => SettingValue::Font(heading_font()),
        keys::MAIN_COLOR => color("#FF0000"),
        keys::WINNER_LABEL => text("Congratulations!"),
        keys::BUTTON_FONT => SettingValue::Font(heading_font()),
        keys::BUTTON_FOREGROUND => color("#3A4BFF"),
        keys::BUTTON_BACKGROUND => color("#FFC6BF"),
        keys::BEGIN_TEXT => text("Begin!"),
        keys::STOP_TEXT => text("Stop"),
        keys::VISIBLE_LEFT => SettingValue::Int(IntRange::new(0, 50, 3)),
        keys::VISIBLE_RIGHT => SettingValue::Int(IntRange::new(0, 50, 4)),
        _ => return None,
    };
    Some(value)
}

/// The built-in settings document
pub fn builtin_defaults() -> SettingsDocument {
    REQUIRED_KEYS
        .iter()
        .filter_map(|key| builtin_value(key).map(|value| SettingEntry::new(*key, value)))
        .collect()
}

/// Schema keys missing from `document`, in schema order
pub fn missing_keys(document: &SettingsDocument) -> Vec<&'static str> {
    REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|key| !document.contains(key))
        .collect()
}

/// True iff every schema key appears in `document`
pub fn validate(document: &SettingsDocument) -> bool {
    REQUIRED_KEYS.iter().all(|key| document.contains(key))
}

/// Like [`validate`], but names the first missing key
pub fn check(document: &SettingsDocument) -> Result<()> {
    match missing_keys(document).first() {
        Some(missing) => Err(Error::Validation {
            missing: missing.to_string(),
        }),
        None => Ok(()),
    }
}
