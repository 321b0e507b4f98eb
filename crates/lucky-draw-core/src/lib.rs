//! # lucky-draw-core
//!
//! Core library for a lucky draw (raffle) program.
//!
//! This crate provides:
//! - Loading the candidate list from a plain text file
//! - The draw engine: a shrinking candidate pool and the idle/rolling/result
//!   state machine, with optional masking of the shown name
//! - The settings store: a schema-checked, ordered list of typed options read
//!   from a user file with a fallback to a default file, edited through
//!   sessions that preview live and are saved on commit
//! - A typed [`Appearance`] projected from settings for the presentation layer
//!
//! ## Modules
//!
//! - [`appearance`] - Parsed cosmetic settings
//! - [`background`] - Background image decoding
//! - [`candidates`] - Candidate list parsing
//! - [`config`] - File locations
//! - [`draw`] - Draw engine and masking
//! - [`error`] - Error types and Result alias
//! - [`settings`] - Settings schema, documents, store and edit sessions
//!
//! ## Example
//!
//! ```no_run
//! use lucky_draw_core::{candidates, Appearance, DrawEngine, SettingsPaths, SettingsStore};
//!
//! let store = SettingsStore::load(SettingsPaths::detect()).expect("settings");
//! let look = Appearance::from_settings(store.live());
//!
//! let mut engine = DrawEngine::new(candidates::load("LIST.txt").expect("list"));
//! engine.start().expect("start");
//! engine.tick().expect("tick");
//! let winner = engine.stop().expect("stop");
//! println!("{}", engine.display_text(&look.display_options(true)));
//! # let _ = winner;
//! ```

// Module declarations
pub mod appearance;
pub mod background;
pub mod candidates;
pub mod config;
pub mod draw;
pub mod error;
pub mod settings;

// Re-export key types for convenience

// Error types
pub use error::{Error, Result};

// Drawing
pub use draw::{mask, DisplayOptions, DrawEngine, DrawState, MaskWidths};

// Settings
pub use settings::{
    EditSession, FontSpec, FontStyle, IntRange, Rgb, SettingEntry, SettingKind, SettingValue,
    SettingsDocument, SettingsObserver, SettingsSource, SettingsStore,
};

// Configuration
pub use config::{detect_config_dir, SettingsPaths};

// Presentation support
pub use appearance::Appearance;
pub use background::{check_image, BackgroundImage};
