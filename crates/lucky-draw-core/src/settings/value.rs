//! Typed setting entries and their on-disk layout
//!
//! Each entry is stored as a three element JSON array, `[name, kind, value]`:
//!
//! ```json
//! ["Main text vertical position", "int", [0, 200, 40]]
//! ```

use serde::de::{self, Deserializer};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};

use super::font::FontSpec;

/// Kind tag of a setting, as written in the settings files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingKind {
    Int,
    Text,
    Font,
    Color,
    Path,
}

impl SettingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Text => "text",
            Self::Font => "font",
            Self::Color => "color",
            Self::Path => "path",
        }
    }
}

/// A bounded integer: `[min, max, value]` on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(i64, i64, i64)", into = "(i64, i64, i64)")]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
    pub value: i64,
}

impl IntRange {
    pub fn new(min: i64, max: i64, value: i64) -> Self {
        Self { min, max, value }
    }

    /// Set the value, clamped into `[min, max]`
    pub fn set(&mut self, value: i64) {
        self.value = value.clamp(self.min, self.max.max(self.min));
    }

    /// Change the upper bound, pulling the value down if needed
    pub fn set_max(&mut self, max: i64) {
        self.max = max.max(self.min);
        self.set(self.value);
    }

    /// The value as a count, negative values read as zero
    pub fn as_count(&self) -> usize {
        usize::try_from(self.value).unwrap_or(0)
    }
}

impl From<(i64, i64, i64)> for IntRange {
    fn from((min, max, value): (i64, i64, i64)) -> Self {
        Self { min, max, value }
    }
}

impl From<IntRange> for (i64, i64, i64) {
    fn from(range: IntRange) -> Self {
        (range.min, range.max, range.value)
    }
}

/// Value of a setting, one variant per kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Int(IntRange),
    Text(String),
    Font(FontSpec),
    /// Hex color such as `#FF0000`
    Color(String),
    Path(String),
}

impl SettingValue {
    pub fn kind(&self) -> SettingKind {
        match self {
            Self::Int(_) => SettingKind::Int,
            Self::Text(_) => SettingKind::Text,
            Self::Font(_) => SettingKind::Font,
            Self::Color(_) => SettingKind::Color,
            Self::Path(_) => SettingKind::Path,
        }
    }

    /// Short human readable form for lists and logs
    pub fn summary(&self) -> String {
        match self {
            Self::Int(range) => format!("{} ({}..={})", range.value, range.min, range.max),
            Self::Text(s) | Self::Color(s) | Self::Path(s) => s.clone(),
            Self::Font(font) => font.to_string(),
        }
    }

    fn from_payload(kind: SettingKind, payload: serde_json::Value) -> serde_json::Result<Self> {
        Ok(match kind {
            SettingKind::Int => Self::Int(serde_json::from_value(payload)?),
            SettingKind::Text => Self::Text(serde_json::from_value(payload)?),
            SettingKind::Font => Self::Font(serde_json::from_value(payload)?),
            SettingKind::Color => Self::Color(serde_json::from_value(payload)?),
            SettingKind::Path => Self::Path(serde_json::from_value(payload)?),
        })
    }
}

/// A named setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingEntry {
    pub name: String,
    pub value: SettingValue,
}

impl SettingEntry {
    pub fn new(name: impl Into<String>, value: SettingValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn kind(&self) -> SettingKind {
        self.value.kind()
    }
}

impl Serialize for SettingEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.name)?;
        tuple.serialize_element(&self.kind())?;
        match &self.value {
            SettingValue::Int(range) => tuple.serialize_element(range)?,
            SettingValue::Font(font) => tuple.serialize_element(font)?,
            SettingValue::Text(s) | SettingValue::Color(s) | SettingValue::Path(s) => {
                tuple.serialize_element(s)?
            }
        }
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for SettingEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (name, kind, payload): (String, SettingKind, serde_json::Value) =
            Deserialize::deserialize(deserializer)?;
        let value = SettingValue::from_payload(kind, payload).map_err(|e| {
            de::Error::custom(format!("bad {} value for '{}': {}", kind.as_str(), name, e))
        })?;
        Ok(Self { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::FontStyle;

    #[test]
    fn test_entry_json_layout() {
        let entry = SettingEntry::new("Main text vertical position", SettingValue::Int(IntRange::new(0, 200, 40)));
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"["Main text vertical position","int",[0,200,40]]"#
        );

        let entry = SettingEntry::new("Background color", SettingValue::Color("#000000".into()));
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r##"["Background color","color","#000000"]"##
        );
    }

    #[test]
    fn test_entry_parses_each_kind() {
        let parse = |s: &str| serde_json::from_str::<SettingEntry>(s).unwrap().value;

        assert_eq!(parse(r#"["n", "int", [0, 50, 3]]"#), SettingValue::Int(IntRange::new(0, 50, 3)));
        assert_eq!(parse(r#"["n", "text", "Begin!"]"#), SettingValue::Text("Begin!".into()));
        assert_eq!(parse(r##"["n", "color", "#FF0000"]"##), SettingValue::Color("#FF0000".into()));
        assert_eq!(parse(r#"["n", "path", "../image.jpg"]"#), SettingValue::Path("../image.jpg".into()));
        assert_eq!(
            parse(r#"["n", "font", ["Arial", "20", "bold"]]"#),
            SettingValue::Font(FontSpec::new("Arial", 20).with_style(FontStyle::Bold))
        );
    }

    #[test]
    fn test_entry_rejects_unknown_kind_and_bad_payload() {
        assert!(serde_json::from_str::<SettingEntry>(r#"["n", "slider", 3]"#).is_err());
        assert!(serde_json::from_str::<SettingEntry>(r#"["n", "int", "3"]"#).is_err());
        assert!(serde_json::from_str::<SettingEntry>(r#"["n", "text", 3]"#).is_err());
        assert!(serde_json::from_str::<SettingEntry>(r#"["n", "text"]"#).is_err());
    }

    #[test]
    fn test_int_range_clamps() {
        let mut range = IntRange::new(0, 50, 3);
        range.set(99);
        assert_eq!(range.value, 50);
        range.set(-4);
        assert_eq!(range.value, 0);

        let mut position = IntRange::new(0, 200, 150);
        position.set_max(100);
        assert_eq!(position, IntRange::new(0, 100, 100));
        position.set_max(1080);
        assert_eq!(position, IntRange::new(0, 1080, 100));
    }

    #[test]
    fn test_int_range_as_count() {
        assert_eq!(IntRange::new(-5, 5, -2).as_count(), 0);
        assert_eq!(IntRange::new(0, 50, 4).as_count(), 4);
    }
}
