//! Decision engine integrating the search components
//!
//! The engine orchestrates move selection as a priority pipeline:
//!
//! 1. **Immediate win**: any move that completes five right now
//! 2. **Defense**: block the opponent's move-away win
//! 3. **Alpha-beta**: iterative-deepening search within the time budget
//! 4. **Fallback**: the top quick-ordered candidate if no depth completed
//!
//! Each call is a pure function of the board passed in; the board is
//! mutated during the search but always restored before returning.

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::board::{Board, Pos, Stone, BOARD_SIZE};
use crate::rules::is_win_at;
use crate::search::alphabeta::WIN;
use crate::search::{generate_moves, SearchResult, Searcher};

/// Playing strength preset mapping to a time budget and depth cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Expert,
}

/// Concrete search limits: wall-clock budget and maximum depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub time_budget: Duration,
    pub max_depth: u8,
}

impl From<Difficulty> for SearchLimits {
    fn from(difficulty: Difficulty) -> Self {
        let (ms, max_depth) = match difficulty {
            Difficulty::Easy => (180, 2),
            Difficulty::Normal => (400, 4),
            Difficulty::Hard => (800, 5),
            Difficulty::Expert => (1500, 6),
        };
        Self {
            time_budget: Duration::from_millis(ms),
            max_depth,
        }
    }
}

/// Which phase of the pipeline produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// A move that completes five immediately
    ImmediateWin,
    /// Block of the opponent's immediate win
    Defense,
    /// Regular iterative-deepening alpha-beta result
    AlphaBeta,
    /// Top quick-ordered candidate, used when no depth finished in time
    Fallback,
}

/// A chosen move with search statistics.
#[derive(Debug, Clone, Copy)]
pub struct MoveResult {
    /// Best move found; `None` only when the board is full
    pub best_move: Option<Pos>,
    /// Score from the engine's perspective
    pub score: i32,
    /// Pipeline phase that produced the move
    pub kind: SearchKind,
    /// Deepest completed search depth (0 for shortcut phases)
    pub depth: u8,
    /// Nodes visited by the alpha-beta phase
    pub nodes: u64,
    /// Wall-clock time spent, in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn immediate_win(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: WIN,
            kind: SearchKind::ImmediateWin,
            depth: 0,
            nodes: 0,
            time_ms,
        }
    }

    #[inline]
    fn defense(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: 0,
            kind: SearchKind::Defense,
            depth: 0,
            nodes: 0,
            time_ms,
        }
    }

    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            kind: SearchKind::AlphaBeta,
            depth: result.depth,
            nodes: result.nodes,
            time_ms,
        }
    }

    #[inline]
    fn fallback(pos: Option<Pos>, nodes: u64, time_ms: u64) -> Self {
        Self {
            best_move: pos,
            score: 0,
            kind: SearchKind::Fallback,
            depth: 0,
            nodes,
            time_ms,
        }
    }
}

/// The decision engine for one side.
///
/// Stateless apart from its color: every decision is computed fresh from
/// the board it is handed, so the engine can be shared across games.
#[derive(Debug, Clone, Copy)]
pub struct Engine {
    color: Stone,
}

impl Engine {
    #[must_use]
    pub fn new(color: Stone) -> Self {
        debug_assert!(color != Stone::Empty);
        Self { color }
    }

    #[must_use]
    pub fn color(&self) -> Stone {
        self.color
    }

    /// Pick the engine's move under the given limits.
    ///
    /// The board is borrowed mutably for trial placements but is unchanged
    /// when this returns. `best_move` is `None` only on a full board.
    pub fn find_best_move(&self, board: &mut Board, limits: SearchLimits) -> MoveResult {
        let start = Instant::now();
        let deadline = start + limits.time_budget;

        if let Some(pos) = find_immediate_win(board, self.color) {
            info!("immediate win at ({}, {})", pos.row, pos.col);
            return MoveResult::immediate_win(pos, elapsed_ms(start));
        }

        if let Some(pos) = find_immediate_win(board, self.color.opponent()) {
            info!("blocking opponent win at ({}, {})", pos.row, pos.col);
            return MoveResult::defense(pos, elapsed_ms(start));
        }

        let mut searcher = Searcher::new(deadline);
        let result = searcher.run(board, self.color, limits.max_depth);
        if result.depth > 0 && result.best_move.is_some() {
            if let Some(pos) = result.best_move {
                info!(
                    "search chose ({}, {}): score {}, depth {}, {} nodes in {}ms",
                    pos.row,
                    pos.col,
                    result.score,
                    result.depth,
                    result.nodes,
                    elapsed_ms(start)
                );
            }
            return MoveResult::from_search(result, elapsed_ms(start));
        }

        // Deadline expired before depth 1 finished, or the board is full.
        // The quick ordering is still a sane choice; center on an empty
        // board comes out of generation itself.
        let top = generate_moves(board, self.color).first().map(|&(pos, _)| pos);
        debug!("falling back to top candidate {top:?}");
        MoveResult::fallback(top, result.nodes, elapsed_ms(start))
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

/// Find a square where `side` completes five, if one exists.
///
/// Probes every empty cell with a trial placement, undone immediately.
fn find_immediate_win(board: &mut Board, side: Stone) -> Option<Pos> {
    for r in 0..BOARD_SIZE as u8 {
        for c in 0..BOARD_SIZE as u8 {
            let pos = Pos::new(r, c);
            if !board.is_empty(pos) {
                continue;
            }
            let prev_last = board.place_stone(pos, side);
            let wins = is_win_at(board, pos);
            board.remove_stone(pos, prev_last);
            if wins {
                return Some(pos);
            }
        }
    }
    None
}
