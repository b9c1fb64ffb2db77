//! Game rules for Gomoku
//!
//! Freestyle rules: five or more in a row wins, overlines count.

pub mod win;

pub use win::is_win_at;
