//! Font descriptors stored in settings
//!
//! On disk a font is a JSON array `["Arial", "20", "bold"]`: family, size
//! (string or number) and any number of style flags. The settings dialog edits
//! the same data as text, `Arial 20 bold`. Both forms are parsed into a
//! [`FontSpec`]; nothing stored is ever evaluated.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A style flag on a font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontStyle {
    Bold,
    Italic,
    Underline,
    Overstrike,
}

impl FontStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Overstrike => "overstrike",
        }
    }
}

/// Outcome of reading one style word
enum StyleWord {
    Flag(FontStyle),
    /// `normal` and `roman` are the absence of bold/italic
    Plain,
}

fn parse_style_word(word: &str) -> Option<StyleWord> {
    match word.to_ascii_lowercase().as_str() {
        "bold" => Some(StyleWord::Flag(FontStyle::Bold)),
        "italic" => Some(StyleWord::Flag(FontStyle::Italic)),
        "underline" => Some(StyleWord::Flag(FontStyle::Underline)),
        "overstrike" => Some(StyleWord::Flag(FontStyle::Overstrike)),
        "normal" | "roman" => Some(StyleWord::Plain),
        _ => None,
    }
}

/// Family, point size and style flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
    pub family: String,
    pub size: u16,
    styles: Vec<FontStyle>,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: u16) -> Self {
        Self {
            family: family.into(),
            size,
            styles: Vec::new(),
        }
    }

    /// Add a style flag; duplicates are ignored
    pub fn with_style(mut self, style: FontStyle) -> Self {
        if !self.styles.contains(&style) {
            self.styles.push(style);
        }
        self
    }

    pub fn styles(&self) -> &[FontStyle] {
        &self.styles
    }

    pub fn has_style(&self, style: FontStyle) -> bool {
        self.styles.contains(&style)
    }

    pub fn is_bold(&self) -> bool {
        self.has_style(FontStyle::Bold)
    }

    fn from_parts(family: &str, size: &str, styles: &[&str], source: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidFont(source.to_string());

        let family = family.trim();
        if family.is_empty() {
            return Err(invalid());
        }
        let size: u16 = size.trim().parse().map_err(|_| invalid())?;

        // A part may hold several space-joined styles, or none at all
        let mut font = Self::new(family, size);
        for word in styles.iter().flat_map(|part| part.split_whitespace()) {
            match parse_style_word(word).ok_or_else(invalid)? {
                StyleWord::Flag(style) => font = font.with_style(style),
                StyleWord::Plain => {}
            }
        }
        Ok(font)
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.size)?;
        for style in &self.styles {
            write!(f, " {}", style.as_str())?;
        }
        Ok(())
    }
}

impl FromStr for FontSpec {
    type Err = Error;

    /// Parse `Family Size [styles...]`. The family may contain spaces or be
    /// wrapped in braces, e.g. `{Times New Roman} 12 italic`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();

        if let Some(rest) = text.strip_prefix('{') {
            let (family, tail) = rest
                .split_once('}')
                .ok_or_else(|| Error::InvalidFont(s.to_string()))?;
            let mut words = tail.split_whitespace();
            let size = words.next().ok_or_else(|| Error::InvalidFont(s.to_string()))?;
            let styles: Vec<&str> = words.collect();
            return Self::from_parts(family, size, &styles, s);
        }

        let words: Vec<&str> = text.split_whitespace().collect();
        // The size is the last number that is only followed by style words
        let size_at = (1..words.len())
            .rev()
            .find(|&i| {
                words[i].parse::<u16>().is_ok()
                    && words[i + 1..].iter().all(|w| parse_style_word(w).is_some())
            })
            .ok_or_else(|| Error::InvalidFont(s.to_string()))?;

        let family = words[..size_at].join(" ");
        Self::from_parts(&family, words[size_at], &words[size_at + 1..], s)
    }
}

impl Serialize for FontSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(2 + self.styles.len()))?;
        seq.serialize_element(&self.family)?;
        seq.serialize_element(&self.size.to_string())?;
        for style in &self.styles {
            seq.serialize_element(style.as_str())?;
        }
        seq.end()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FontPart {
    Text(String),
    Number(u64),
}

impl FontPart {
    fn into_text(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for FontSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parts: Vec<String> = Vec::<FontPart>::deserialize(deserializer)?
            .into_iter()
            .map(FontPart::into_text)
            .collect();

        if parts.len() < 2 {
            return Err(de::Error::invalid_length(
                parts.len(),
                &"a font array of family, size and optional styles",
            ));
        }

        let styles: Vec<&str> = parts[2..].iter().map(String::as_str).collect();
        let source = parts.join(" ");
        Self::from_parts(&parts[0], &parts[1], &styles, &source).map_err(de::Error::custom)
    }
}
