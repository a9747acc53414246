//! Game configuration types.
//!
//! Hosts configure a game at startup by providing a `GameConfig`:
//! - `DrawMode`: how many cards each draw turns over
//! - `seed`: fixed RNG seed for reproducible deals, or `None` for entropy

use serde::{Deserialize, Serialize};

/// How many cards a single draw moves from stock to waste.
///
/// Fixed for the lifetime of a deal; only a new game changes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawMode {
    #[default]
    One,
    Three,
}

impl DrawMode {
    /// Number of cards turned over per draw.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            DrawMode::One => 1,
            DrawMode::Three => 3,
        }
    }

    /// Draw mode for a raw card count.
    ///
    /// Returns `None` for anything other than 1 or 3.
    #[must_use]
    pub const fn from_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(DrawMode::One),
            3 => Some(DrawMode::Three),
            _ => None,
        }
    }
}

/// Host configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Draw mode of the first deal.
    pub draw_mode: DrawMode,

    /// RNG seed. `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a new config with custom draw mode.
    #[must_use]
    pub fn with_draw_mode(mut self, draw_mode: DrawMode) -> Self {
        self.draw_mode = draw_mode;
        self
    }

    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
