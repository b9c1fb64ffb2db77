//! Candidate move generation with neighbor pruning and quick ordering
//!
//! Only empty cells within Chebyshev distance 2 of an existing stone are
//! candidates; on a mostly-empty board this keeps the branching factor
//! tractable. Each candidate gets a cheap one-ply score used purely for
//! ordering: alpha-beta prunes far more when strong moves come first, but
//! a bad ordering never changes the search result.

use crate::board::{Board, Pos, Stone, BOARD_SIZE, CENTER};
use crate::eval::evaluate_for;
use crate::rules::is_win_at;

/// Quick-score bonus for a trial placement that wins on the spot. Large
/// enough to dominate any evaluator total.
pub const WIN_BONUS: i32 = 1_000_000_000;

/// Chebyshev radius of the neighborhood a candidate must touch.
const NEIGHBOR_RADIUS: i32 = 2;

/// Divisor discounting the denial snapshot against the own-gain snapshot.
const DENIAL_DIVISOR: i32 = 5;

/// Generate candidate moves for `side`, best-first.
///
/// On an empty board the only candidate is the center. Otherwise every
/// neighbor-adjacent empty cell is scored by two trial placements: once
/// with `side`'s stone (own gain, plus [`WIN_BONUS`] if it completes five)
/// and once with the opponent's stone (what the square would be worth to
/// deny). Both trials are undone; the board is unchanged on return.
///
/// Returns an empty vector only when the board is full.
pub fn generate_moves(board: &mut Board, side: Stone) -> Vec<(Pos, i32)> {
    debug_assert!(side != Stone::Empty);
    if board.is_board_empty() {
        return vec![(CENTER, 0)];
    }

    let mut moves = Vec::new();
    for idx in 0..crate::board::TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        if !board.is_empty(pos) || !has_neighbor(board, pos) {
            continue;
        }

        let mut quick = 0i32;

        let prev_last = board.place_stone(pos, side);
        if is_win_at(board, pos) {
            quick += WIN_BONUS;
        }
        let own = evaluate_for(board, side);
        board.remove_stone(pos, prev_last);

        let prev_last = board.place_stone(pos, side.opponent());
        let denial = evaluate_for(board, side);
        board.remove_stone(pos, prev_last);

        // Denial is from our perspective with the opponent occupying the
        // square, so it is typically negative; subtracting a fifth of it
        // rewards squares the opponent wants too.
        quick += own - denial / DENIAL_DIVISOR;
        moves.push((pos, quick));
    }

    // Stable sort keeps scan order on ties, so generation is deterministic.
    moves.sort_by(|a, b| b.1.cmp(&a.1));
    moves
}

/// Whether any occupied cell lies within the candidate neighborhood.
fn has_neighbor(board: &Board, pos: Pos) -> bool {
    let sz = BOARD_SIZE as i32;
    for dr in -NEIGHBOR_RADIUS..=NEIGHBOR_RADIUS {
        for dc in -NEIGHBOR_RADIUS..=NEIGHBOR_RADIUS {
            if dr == 0 && dc == 0 {
                continue;
            }
            let r = i32::from(pos.row) + dr;
            let c = i32::from(pos.col) + dc;
            if r >= 0 && r < sz && c >= 0 && c < sz && !board.is_empty(Pos::new(r as u8, c as u8))
            {
                return true;
            }
        }
    }
    false
}
