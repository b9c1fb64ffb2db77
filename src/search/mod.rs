//! Search for the best move
//!
//! Contains:
//! - Neighbor-pruned, pre-ordered move generation
//! - Iterative-deepening negamax with alpha-beta pruning and a wall-clock
//!   deadline

pub mod alphabeta;
pub mod movegen;

pub use alphabeta::{SearchResult, Searcher};
pub use movegen::generate_moves;
