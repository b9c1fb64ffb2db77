//! Iterative-deepening negamax with alpha-beta pruning
//!
//! The search is a single synchronous computation bounded by a wall-clock
//! deadline. The deadline is checked at the top of every recursive call and
//! every deepening round; when it passes, a unit timeout error propagates
//! up through the recursion with `?`. Every trial placement is undone
//! before the error is rethrown, so the board is restored on the abort
//! path exactly as on the normal path.
//!
//! Scores are from the side-to-move's perspective (negamax convention):
//! a child's score is negated, and alpha/beta swap and negate across the
//! recursion. Winning scores carry a small depth bonus so wins found
//! closer to the root are preferred over equal wins found deeper.

use std::time::{Duration, Instant};

use log::debug;

use crate::board::{Board, Pos, Stone};
use crate::eval::evaluate_for;
use crate::rules::is_win_at;

use super::movegen::generate_moves;

/// Score for a completed five, far above any evaluator total.
pub const WIN: i32 = 1_000_000_000;

/// Alpha-beta bounds. `i32::MAX` negates safely, `i32::MIN` would not.
const INF: i32 = i32::MAX;

/// Neutral score for a node with no legal moves.
const DRAW: i32 = 0;

/// Stop deepening when less than this much budget remains; the next round
/// would only be thrown away.
const DEADLINE_MARGIN: Duration = Duration::from_millis(5);

/// Deadline passed mid-search. Internal: the caller falls back to the last
/// completed depth, never surfaces this.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DeadlineExceeded;

/// Result of an iterative-deepening run.
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    /// Best move from the last fully-completed depth, if any completed
    pub best_move: Option<Pos>,
    /// Score of the best move, from the searched side's perspective
    pub score: i32,
    /// Deepest fully-completed depth
    pub depth: u8,
    /// Total nodes visited, including abandoned rounds
    pub nodes: u64,
}

/// Deadline-bounded searcher. One instance drives one `run` call; only one
/// search may mutate a given board at a time.
pub struct Searcher {
    deadline: Instant,
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new(deadline: Instant) -> Self {
        Self { deadline, nodes: 0 }
    }

    /// Iterative deepening: search depth 1, 2, ... up to `max_depth`,
    /// keeping the move from the last depth that completed before the
    /// deadline. An interrupted round's partial result is discarded.
    pub fn run(&mut self, board: &mut Board, side: Stone, max_depth: u8) -> SearchResult {
        let mut best = SearchResult {
            best_move: None,
            score: DRAW,
            depth: 0,
            nodes: 0,
        };

        for depth in 1..=max_depth {
            match self.search_root(board, side, depth) {
                Ok((score, best_move)) => {
                    debug!("depth {depth} complete: score {score}, nodes {}", self.nodes);
                    best = SearchResult {
                        best_move,
                        score,
                        depth,
                        nodes: self.nodes,
                    };
                    if best_move.is_none() {
                        break; // no legal moves; deeper rounds change nothing
                    }
                }
                Err(DeadlineExceeded) => {
                    debug!("depth {depth} hit the deadline, keeping depth {}", best.depth);
                    break;
                }
            }
            if Instant::now() + DEADLINE_MARGIN > self.deadline {
                break;
            }
        }

        best.nodes = self.nodes;
        best
    }

    /// Full-window search at the root, tracking the best move.
    fn search_root(
        &mut self,
        board: &mut Board,
        side: Stone,
        depth: u8,
    ) -> Result<(i32, Option<Pos>), DeadlineExceeded> {
        self.nodes += 1;
        if Instant::now() > self.deadline {
            return Err(DeadlineExceeded);
        }

        let moves = generate_moves(board, side);
        if moves.is_empty() {
            return Ok((DRAW, None));
        }

        let mut alpha = -INF;
        let mut best_score = -INF;
        let mut best_move = moves[0].0;

        for (pos, _) in moves {
            let prev_last = board.place_stone(pos, side);
            let outcome = if is_win_at(board, pos) {
                Ok(WIN + i32::from(depth))
            } else {
                self.negamax(board, side.opponent(), depth - 1, -INF, -alpha)
                    .map(|s| -s)
            };
            board.remove_stone(pos, prev_last);

            let score = outcome?;
            if score > best_score {
                best_score = score;
                best_move = pos;
            }
            alpha = alpha.max(best_score);
        }

        Ok((best_score, Some(best_move)))
    }

    /// Recursive negamax with alpha-beta pruning.
    fn negamax(
        &mut self,
        board: &mut Board,
        side: Stone,
        depth: u8,
        mut alpha: i32,
        beta: i32,
    ) -> Result<i32, DeadlineExceeded> {
        self.nodes += 1;
        if Instant::now() > self.deadline {
            return Err(DeadlineExceeded);
        }

        // Terminal: the previous mover completed a five. From the side to
        // move, that is a loss; nearer losses score worse.
        if let Some(last) = board.last_move() {
            if is_win_at(board, last) {
                return Ok(-(WIN + i32::from(depth)));
            }
        }

        if depth == 0 {
            return Ok(evaluate_for(board, side));
        }

        let moves = generate_moves(board, side);
        if moves.is_empty() {
            return Ok(DRAW);
        }

        let mut best = -INF;
        for (pos, _) in moves {
            let prev_last = board.place_stone(pos, side);
            let outcome = if is_win_at(board, pos) {
                Ok(WIN + i32::from(depth))
            } else {
                self.negamax(board, side.opponent(), depth - 1, -beta, -alpha)
                    .map(|s| -s)
            };
            // Restore before propagating any timeout: LIFO discipline holds
            // on every exit path.
            board.remove_stone(pos, prev_last);
            let score = outcome?;

            best = best.max(score);
            alpha = alpha.max(best);
            if alpha >= beta {
                break; // beta cutoff
            }
        }

        Ok(best)
    }
}
