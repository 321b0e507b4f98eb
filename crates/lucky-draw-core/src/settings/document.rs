//! Ordered settings document

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::color::Rgb;
use super::font::FontSpec;
use super::value::{IntRange, SettingEntry, SettingValue};
use crate::error::{Error, Result};

/// An ordered list of settings.
///
/// Lookups scan in document order and the first entry with a matching name
/// wins. Setters only touch an entry whose kind matches the setter and report
/// whether anything was changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsDocument {
    entries: Vec<SettingEntry>,
}

impl SettingsDocument {
    pub fn new(entries: Vec<SettingEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SettingEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SettingEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&SettingEntry> {
        self.entries.iter().find(|e| e.name == key)
    }

    pub fn value(&self, key: &str) -> Option<&SettingValue> {
        self.get(key).map(|e| &e.value)
    }

    fn value_mut(&mut self, key: &str) -> Option<&mut SettingValue> {
        self.entries
            .iter_mut()
            .find(|e| e.name == key)
            .map(|e| &mut e.value)
    }

    pub fn int(&self, key: &str) -> Option<IntRange> {
        match self.value(key)? {
            SettingValue::Int(range) => Some(*range),
            _ => None,
        }
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.value(key)? {
            SettingValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn font(&self, key: &str) -> Option<&FontSpec> {
        match self.value(key)? {
            SettingValue::Font(font) => Some(font),
            _ => None,
        }
    }

    /// Raw color string as stored
    pub fn color(&self, key: &str) -> Option<&str> {
        match self.value(key)? {
            SettingValue::Color(s) => Some(s),
            _ => None,
        }
    }

    /// Parsed color, `None` when missing or not a valid hex color
    pub fn rgb(&self, key: &str) -> Option<Rgb> {
        self.color(key)?.parse().ok()
    }

    pub fn path(&self, key: &str) -> Option<&str> {
        match self.value(key)? {
            SettingValue::Path(s) => Some(s),
            _ => None,
        }
    }

    /// Set an int value, clamped to its range
    pub fn set_int(&mut self, key: &str, value: i64) -> bool {
        match self.value_mut(key) {
            Some(SettingValue::Int(range)) => {
                range.set(value);
                true
            }
            _ => false,
        }
    }

    /// Raise or lower the upper bound of an int setting
    pub fn set_int_max(&mut self, key: &str, max: i64) -> bool {
        match self.value_mut(key) {
            Some(SettingValue::Int(range)) => {
                range.set_max(max);
                true
            }
            _ => false,
        }
    }

    pub fn set_text(&mut self, key: &str, text: impl Into<String>) -> bool {
        match self.value_mut(key) {
            Some(SettingValue::Text(s)) => {
                *s = text.into();
                true
            }
            _ => false,
        }
    }

    pub fn set_font(&mut self, key: &str, font: FontSpec) -> bool {
        match self.value_mut(key) {
            Some(SettingValue::Font(f)) => {
                *f = font;
                true
            }
            _ => false,
        }
    }

    /// Store a color in canonical `#RRGGBB` form
    pub fn set_color(&mut self, key: &str, color: Rgb) -> bool {
        match self.value_mut(key) {
            Some(SettingValue::Color(s)) => {
                *s = color.to_string();
                true
            }
            _ => false,
        }
    }

    pub fn set_path(&mut self, key: &str, path: impl Into<String>) -> bool {
        match self.value_mut(key) {
            Some(SettingValue::Path(s)) => {
                *s = path.into();
                true
            }
            _ => false,
        }
    }

    /// Replace a whole value, whatever its kind; appends when the key is absent
    pub fn put(&mut self, key: &str, value: SettingValue) {
        match self.value_mut(key) {
            Some(slot) => *slot = value,
            None => self.entries.push(SettingEntry::new(key, value)),
        }
    }

    /// Remove the first entry with `key`
    pub fn remove(&mut self, key: &str) -> Option<SettingEntry> {
        let index = self.entries.iter().position(|e| e.name == key)?;
        Some(self.entries.remove(index))
    }

    /// Parse a document from JSON text (no schema check)
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Render as tab-indented JSON with non-ASCII text kept verbatim
    pub fn to_json(&self) -> Result<String> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut serializer)?;
        // serde_json only ever writes valid UTF-8
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    /// Read and parse a document file (no schema check)
    pub fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&text)
    }
}

impl FromIterator<SettingEntry> for SettingsDocument {
    fn from_iter<I: IntoIterator<Item = SettingEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for SettingsDocument {
    type Item = SettingEntry;
    type IntoIter = std::vec::IntoIter<SettingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a SettingsDocument {
    type Item = &'a SettingEntry;
    type IntoIter = std::slice::Iter<'a, SettingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
