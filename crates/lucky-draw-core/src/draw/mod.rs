//! Draw engine: candidate pool, random pick and the idle/rolling/result machine

mod engine;
mod mask;

pub use engine::{DisplayOptions, DrawEngine};
pub use mask::{mask, MaskWidths, MASK_CHAR};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mode of the draw
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawState {
    /// Nothing drawn yet, the welcome text is shown
    #[default]
    Idle,
    /// Names are shuffling on every tick
    Rolling,
    /// The last pick was removed from the pool and is shown as the winner
    Result,
}

impl DrawState {
    /// Short name used in logs and the status line
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Rolling => "rolling",
            Self::Result => "showing a result",
        }
    }
}

impl fmt::Display for DrawState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
