//! Position evaluation
//!
//! The evaluator encodes every row, column, and diagonal as a sequence of
//! three-valued marks ([`line`]), matches a declarative catalog of stone
//! shapes against each sequence ([`patterns`]), and combines the per-side
//! totals into a single score ([`heuristic`]).

pub mod heuristic;
pub mod line;
pub mod patterns;

pub use heuristic::{eval_side, evaluate_for};
pub use line::Mark;
pub use patterns::{score_line, PatternWeight};
