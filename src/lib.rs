//! Osprey is a difficulty-tiered chess search engine built on the [`chess`]
//! crate for board representation and legal move generation.
//!
//! The engine runs a depth-limited minimax search with alpha-beta pruning,
//! extended by a capture-only quiescence search, heuristic move ordering
//! (MVV-LVA, promotions, checks, history), and a transposition cache keyed
//! by position hash. An iterative deepening driver re-searches at increasing
//! depths under a wall-clock budget and always hands back a legal move.
//!
//! # Example
//!
//! ```
//! use osprey::{BoardStack, Difficulty, Engine};
//!
//! let mut engine = Engine::new(Difficulty::Easy);
//! let mut board = BoardStack::new();
//! let mv = engine.get_best_move(&mut board).unwrap();
//! assert!(board.legal_moves().contains(&mv));
//! ```

pub mod board_stack;
pub mod config;
pub mod engine;
pub mod eval;
pub mod search;
pub mod transposition;

pub use board_stack::BoardStack;
pub use config::{Difficulty, EngineConfig};
pub use engine::{Engine, EngineError};
pub use eval::{EvalOptions, Evaluator};
pub use search::{HistoryTable, SearchReport};
pub use transposition::{TranspositionEntry, TranspositionTable};
