//! Parsed, typed view of the cosmetic settings
//!
//! The presentation layer never reads settings by key. It holds an
//! [`Appearance`], which edit sessions refresh on every change.

use std::path::PathBuf;

use crate::draw::{DisplayOptions, DrawState, MaskWidths};
use crate::settings::{
    builtin_defaults, keys, FontSpec, IntRange, Rgb, SettingsDocument, SettingsObserver,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    pub background_image: PathBuf,
    pub background_color: Rgb,
    pub welcome_text: String,
    /// Vertical position of the main text, in screen rows
    pub text_position: IntRange,
    pub main_font: FontSpec,
    pub main_color: Rgb,
    /// Line shown above the winner's name
    pub winner_label: String,
    pub button_font: FontSpec,
    pub button_foreground: Rgb,
    pub button_background: Rgb,
    pub begin_text: String,
    pub stop_text: String,
    pub mask: MaskWidths,
}

impl Appearance {
    /// Read every cosmetic setting. Values that are missing, of the wrong
    /// kind or unparseable fall back to the built-in defaults.
    pub fn from_settings(settings: &SettingsDocument) -> Self {
        let builtin = builtin_defaults();
        let text = |key: &str| {
            settings
                .text(key)
                .or_else(|| builtin.text(key))
                .unwrap_or_default()
                .to_string()
        };
        let rgb = |key: &str| {
            settings
                .rgb(key)
                .or_else(|| builtin.rgb(key))
                .unwrap_or(Rgb::BLACK)
        };
        let font = |key: &str| {
            settings
                .font(key)
                .or_else(|| builtin.font(key))
                .cloned()
                .unwrap_or_else(|| FontSpec::new("Arial", 20))
        };
        let int = |key: &str| {
            settings
                .int(key)
                .or_else(|| builtin.int(key))
                .unwrap_or(IntRange::new(0, 0, 0))
        };
        let path = settings
            .path(keys::BACKGROUND_IMAGE)
            .or_else(|| builtin.path(keys::BACKGROUND_IMAGE))
            .unwrap_or_default();

        Self {
            background_image: PathBuf::from(path),
            background_color: rgb(keys::BACKGROUND_COLOR),
            welcome_text: text(keys::WELCOME_TEXT),
            text_position: int(keys::TEXT_POSITION),
            main_font: font(keys::MAIN_FONT),
            main_color: rgb(keys::MAIN_COLOR),
            winner_label: text(keys::WINNER_LABEL),
            button_font: font(keys::BUTTON_FONT),
            button_foreground: rgb(keys::BUTTON_FOREGROUND),
            button_background: rgb(keys::BUTTON_BACKGROUND),
            begin_text: text(keys::BEGIN_TEXT),
            stop_text: text(keys::STOP_TEXT),
            mask: MaskWidths::new(
                int(keys::VISIBLE_LEFT).as_count(),
                int(keys::VISIBLE_RIGHT).as_count(),
            ),
        }
    }

    /// What the engine needs to render its label
    pub fn display_options(&self, masked: bool) -> DisplayOptions<'_> {
        DisplayOptions {
            welcome: &self.welcome_text,
            winner_label: &self.winner_label,
            mask: masked.then_some(self.mask),
        }
    }

    /// Label of the start/stop button in a given draw state
    pub fn button_text(&self, state: DrawState) -> &str {
        match state {
            DrawState::Rolling => &self.stop_text,
            DrawState::Idle | DrawState::Result => &self.begin_text,
        }
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self::from_settings(&builtin_defaults())
    }
}

impl SettingsObserver for Appearance {
    fn settings_changed(&mut self, settings: &SettingsDocument) {
        *self = Self::from_settings(settings);
    }
}
