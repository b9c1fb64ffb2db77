//! Gobang (five-in-a-row) decision engine
//!
//! A time-bounded AI for standard Gomoku on a 15x15 board:
//! - 5 or more in a row wins, any direction
//! - No captures, no forbidden moves
//! - Pattern-based evaluation with a slight defensive bias
//! - Iterative-deepening negamax with alpha-beta pruning under a
//!   wall-clock deadline
//!
//! # Architecture
//!
//! - [`board`]: Grid representation with last-move tracking and undo
//! - [`rules`]: Win detection around a just-played stone
//! - [`eval`]: Line scanning, the shape catalog, and the heuristic score
//! - [`search`]: Candidate generation and the deadline-bounded searcher
//! - [`engine`]: Priority pipeline tying the phases together
//!
//! # Quick Start
//!
//! ```
//! use gobang::{Board, Difficulty, Engine, Pos, Stone};
//!
//! let mut board = Board::new();
//! board.place(Pos::new(7, 7), Stone::Black)?;
//!
//! let engine = Engine::new(Stone::White);
//! let result = engine.find_best_move(&mut board, Difficulty::Easy.into());
//! if let Some(pos) = result.best_move {
//!     board.place(pos, Stone::White)?;
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! # Ok::<(), gobang::PlaceError>(())
//! ```
//!
//! # Move Selection
//!
//! Each decision runs a priority pipeline:
//! 1. Complete an own five immediately
//! 2. Block the opponent's move-away win
//! 3. Iterative-deepening alpha-beta within the time budget
//! 4. Fall back to the top quick-ordered candidate

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, PlaceError, Pos, Stone, BOARD_SIZE, CENTER};
pub use engine::{Difficulty, Engine, MoveResult, SearchKind, SearchLimits};
pub use search::{SearchResult, Searcher};
