//! Engine configuration parameters.

use serde::{Deserialize, Serialize};

/// Engine configuration.
///
/// Only settings that affect engine behaviour live here; card sizes,
/// display density and theming belong to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Random seed for the shuffle RNG.
    /// Same seed produces the same sequence of deals.
    pub seed: u64,

    /// Maximum number of undo snapshots retained (`None` = unbounded).
    /// When full, the oldest snapshot is discarded. `Some(0)` set directly
    /// or loaded from a file is treated as unbounded.
    pub history_limit: Option<usize>,

    /// Record every move attempt in the built-in `MoveLog`.
    pub record_moves: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            history_limit: None,
            record_moves: true,
        }
    }
}

impl EngineConfig {
    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Bound the undo history.
    ///
    /// Panics if `limit` is zero.
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        assert!(limit > 0, "History limit must be at least 1");
        self.history_limit = Some(limit);
        self
    }

    /// Enable or disable the built-in move log.
    #[must_use]
    pub fn with_move_recording(mut self, enabled: bool) -> Self {
        self.record_moves = enabled;
        self
    }
}
