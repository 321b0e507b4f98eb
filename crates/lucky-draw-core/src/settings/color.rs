//! Hex colors as stored in settings (`#RRGGBB`)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived brightness in 0..=255, for picking readable text on top
    pub fn luma(&self) -> u8 {
        ((299 * self.r as u32 + 587 * self.g as u32 + 114 * self.b as u32) / 1000) as u8
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Accepts `#RRGGBB` and the short `#RGB` form, any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                Ok(Self::new(short(0)?, short(1)?, short(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short_forms() {
        assert_eq!("#3A4BFF".parse::<Rgb>().unwrap(), Rgb::new(0x3A, 0x4B, 0xFF));
        assert_eq!("#ffc6bf".parse::<Rgb>().unwrap(), Rgb::new(0xFF, 0xC6, 0xBF));
        assert_eq!("#f00".parse::<Rgb>().unwrap(), Rgb::new(255, 0, 0));
        assert_eq!(" #000000 ".parse::<Rgb>().unwrap(), Rgb::BLACK);
    }

    #[test]
    fn test_parse_rejects_invalid() {
        for bad in ["", "#", "000000", "#12345", "#GGGGGG", "red", "#+1+2+3", "#ÿÿÿ"] {
            assert!(bad.parse::<Rgb>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn test_display_round_trips() {
        let color = Rgb::new(0x3A, 0x4B, 0xFF);
        assert_eq!(color.to_string(), "#3A4BFF");
        assert_eq!(color.to_string().parse::<Rgb>().unwrap(), color);
    }

    #[test]
    fn test_luma() {
        assert_eq!(Rgb::BLACK.luma(), 0);
        assert_eq!(Rgb::WHITE.luma(), 255);
        assert!(Rgb::new(255, 255, 0).luma() > Rgb::new(0, 0, 255).luma());
    }
}
