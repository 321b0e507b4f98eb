//! Settings store
//!
//! Settings are an ordered list of named, typed options. The operator's copy
//! lives in the user file; when that is missing or broken the default file is
//! used instead. Edits go through an [`EditSession`] so they can be previewed
//! and then either committed (saved) or discarded.

mod color;
mod document;
mod font;
pub mod schema;
mod session;
mod store;
mod value;

pub use color::Rgb;
pub use document::SettingsDocument;
pub use font::{FontSpec, FontStyle};
pub use schema::{builtin_defaults, keys, validate};
pub use session::{EditSession, SettingsObserver};
pub use store::{load_document, SettingsSource, SettingsStore};
pub use value::{IntRange, SettingEntry, SettingKind, SettingValue};
