//! Heuristic evaluation function
//!
//! Scores a position by sweeping the shape catalog over every board line
//! for each side. The combined score is taken from the perspective of the
//! side passed in, with the opponent's total weighted slightly above 1.0:
//! when attack and defense are otherwise balanced, not losing wins the tie.

use crate::board::{Board, Stone};

use super::line::for_each_line;
use super::patterns::score_line;

/// Defensive weight as a ratio (1.02): the opponent's threats count a touch
/// more than our own. Tunable policy; must stay slightly above 1.
const DEFENSE_NUM: i64 = 102;
const DEFENSE_DEN: i64 = 100;

/// Sum the pattern score for one side across every row, column, and
/// diagonal of both families.
#[must_use]
pub fn eval_side(board: &Board, side: Stone) -> i32 {
    debug_assert!(side != Stone::Empty);
    let mut total = 0i32;
    for_each_line(board, side, |marks| total += score_line(marks));
    total
}

/// Evaluate the position from `side`'s perspective:
/// `eval_side(side) - eval_side(opponent) * 1.02`.
///
/// Pure function of the board contents. Antisymmetric under swapping the
/// perspective side, up to the defensive weight.
#[must_use]
pub fn evaluate_for(board: &Board, side: Stone) -> i32 {
    let own = i64::from(eval_side(board, side));
    let opp = i64::from(eval_side(board, side.opponent()));
    (own - opp * DEFENSE_NUM / DEFENSE_DEN) as i32
}
