//! Reusable TUI widgets

mod backdrop;
mod footer;

pub use backdrop::Backdrop;
pub use footer::{hint_spans, render_footer};
