//! Difficulty tiers and the search feature flags each tier fixes.

use serde::{Deserialize, Serialize};

/// Player-facing difficulty tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Search configuration, fixed per difficulty tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Nominal search depth in plies.
    pub max_depth: u32,
    /// Extend leaf evaluation with a capture-only quiescence search.
    pub use_quiescence: bool,
    /// Cache completed results in the transposition table.
    pub use_transposition: bool,
    /// Reorder legal moves heuristically before searching them.
    pub use_move_ordering: bool,
    /// Ply budget for the quiescence extension.
    pub max_quiescence_depth: u32,
    /// Add history-table bonuses during move ordering.
    pub use_history: bool,
}

impl EngineConfig {
    /// The fixed configuration for a difficulty tier.
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => EngineConfig {
                max_depth: 2,
                use_quiescence: false,
                use_transposition: false,
                use_move_ordering: false,
                max_quiescence_depth: 0,
                use_history: false,
            },
            Difficulty::Medium => EngineConfig {
                max_depth: 3,
                use_quiescence: true,
                use_transposition: true,
                use_move_ordering: true,
                max_quiescence_depth: 4,
                use_history: true,
            },
            Difficulty::Hard => EngineConfig {
                max_depth: 4,
                use_quiescence: true,
                use_transposition: true,
                use_move_ordering: true,
                max_quiescence_depth: 6,
                use_history: true,
            },
        }
    }
}

impl From<Difficulty> for EngineConfig {
    fn from(difficulty: Difficulty) -> Self {
        EngineConfig::for_difficulty(difficulty)
    }
}
