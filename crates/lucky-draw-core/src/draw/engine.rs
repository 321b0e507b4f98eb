//! The draw state machine

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::{DrawState, MaskWidths};
use crate::error::{Error, Result};

/// Texts needed to turn the engine state into something to show
#[derive(Debug, Clone, Copy)]
pub struct DisplayOptions<'a> {
    /// Shown while idle
    pub welcome: &'a str,
    /// Put on its own line above the winner
    pub winner_label: &'a str,
    /// Mask the pick when set
    pub mask: Option<MaskWidths>,
}

#[derive(Debug, Clone)]
struct Pick {
    /// Index into the pool as it was when the pick was drawn
    index: usize,
    name: String,
}

/// Candidate pool plus the idle/rolling/result state machine.
///
/// The engine does not own a timer. The presentation layer calls
/// [`tick`](Self::tick) on a fixed cadence while [`is_rolling`](Self::is_rolling).
#[derive(Debug)]
pub struct DrawEngine<R = StdRng> {
    original: Vec<String>,
    pool: Vec<String>,
    state: DrawState,
    pick: Option<Pick>,
    winners: Vec<String>,
    rng: R,
}

impl DrawEngine<StdRng> {
    /// Create an engine seeded from OS entropy
    pub fn new(candidates: Vec<String>) -> Self {
        Self::with_rng(candidates, StdRng::from_entropy())
    }

    /// Create an engine with a fixed seed, for reproducible draws
    pub fn with_seed(candidates: Vec<String>, seed: u64) -> Self {
        Self::with_rng(candidates, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DrawEngine<R> {
    /// Create an engine with a caller-supplied random source
    pub fn with_rng(candidates: Vec<String>, rng: R) -> Self {
        Self {
            pool: candidates.clone(),
            original: candidates,
            state: DrawState::Idle,
            pick: None,
            winners: Vec::new(),
            rng,
        }
    }

    pub fn state(&self) -> DrawState {
        self.state
    }

    pub fn is_rolling(&self) -> bool {
        self.state == DrawState::Rolling
    }

    /// Candidates not drawn yet
    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    /// The list as loaded, used by [`reset`](Self::reset)
    pub fn original(&self) -> &[String] {
        &self.original
    }

    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    /// Winners since the last reset, oldest first
    pub fn winners(&self) -> &[String] {
        &self.winners
    }

    /// The name on display; only present while rolling or showing a result
    pub fn current_pick(&self) -> Option<&str> {
        match self.state {
            DrawState::Idle => None,
            DrawState::Rolling | DrawState::Result => self.pick.as_ref().map(|p| p.name.as_str()),
        }
    }

    /// Begin rolling. Allowed from idle or from a shown result.
    pub fn start(&mut self) -> Result<()> {
        if self.state == DrawState::Rolling {
            return Err(self.invalid("start"));
        }
        if self.pool.is_empty() {
            return Err(Error::EmptyPool);
        }

        self.state = DrawState::Rolling;
        self.roll();
        debug!(remaining = self.pool.len(), "Draw started");
        Ok(())
    }

    /// Draw a new random pick from the current pool
    pub fn tick(&mut self) -> Result<&str> {
        if self.state != DrawState::Rolling {
            return Err(self.invalid("tick"));
        }
        Ok(self.roll())
    }

    /// Stop rolling and take the current pick out of the pool
    pub fn stop(&mut self) -> Result<String> {
        if self.state != DrawState::Rolling {
            return Err(self.invalid("stop"));
        }
        let index = match &self.pick {
            Some(pick) => pick.index,
            None => return Err(self.invalid("stop")),
        };

        let winner = self.pool.remove(index);
        self.winners.push(winner.clone());
        self.state = DrawState::Result;
        info!(winner = %winner, remaining = self.pool.len(), "Winner drawn");
        Ok(winner)
    }

    /// Put every candidate back and return to idle
    pub fn reset(&mut self) {
        self.pool = self.original.clone();
        self.pick = None;
        self.winners.clear();
        self.state = DrawState::Idle;
        info!(candidates = self.pool.len(), "Draw reset");
    }

    /// Text for the main label in the current state
    pub fn display_text(&self, options: &DisplayOptions<'_>) -> String {
        let shown = |name: &str| match options.mask {
            Some(widths) => widths.apply(name),
            None => name.to_string(),
        };

        match (self.state, self.current_pick()) {
            (DrawState::Rolling, Some(name)) => shown(name),
            (DrawState::Result, Some(name)) => {
                format!("{}\n{}", options.winner_label, shown(name))
            }
            _ => options.welcome.to_string(),
        }
    }

    fn roll(&mut self) -> &str {
        let index = self.rng.gen_range(0..self.pool.len());
        let name = self.pool[index].clone();
        &self.pick.insert(Pick { index, name }).name
    }

    fn invalid(&self, operation: &'static str) -> Error {
        Error::InvalidState {
            operation,
            state: self.state,
        }
    }
}
