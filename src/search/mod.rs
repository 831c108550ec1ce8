//! Move search: alpha-beta with quiescence extension, heuristic move
//! ordering, and an iterative deepening driver.

pub mod alpha_beta;
pub mod history;
pub mod iterative_deepening;
pub mod ordering;
pub mod quiescence;

pub use alpha_beta::alpha_beta_search;
pub use history::HistoryTable;
pub use iterative_deepening::{iterative_deepening_search, SearchReport};
pub use ordering::order_moves;
pub use quiescence::quiescence_search;

/// Search window bound, safely above any evaluation the scorer can produce.
pub const INFINITY: i32 = 1_000_000;
