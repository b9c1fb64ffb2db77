//! Stone-shape catalog and weights
//!
//! Each shape is a fixed window of marks matched by direct comparison while
//! sliding over an encoded line; occurrences are counted independently per
//! shape, so overlaps across different shapes all score.
//!
//! The weights are tuned policy; the load-bearing contracts are the
//! orderings. An open four must dwarf an open three (it wins next move and
//! cannot be stopped by a single block), an open three must beat a blocked
//! three, and a consecutive five is deliberately absent from the catalog:
//! finished wins are the win detector's business, not the evaluator's.

use super::line::Mark;

use Mark::{Friendly as F, Hostile as H, Vacant as V};

/// Shape weights, ordered by threat severity.
pub struct PatternWeight;

impl PatternWeight {
    /// Open four `_XXXX_`: wins next move, a single block cannot stop it
    pub const OPEN_FOUR: i32 = 1_000_000;
    /// Open four with extra breathing room on one side `__XXXX_`
    pub const WIDE_FOUR: i32 = 140_000;
    /// Four blocked on one side `OXXXX_`, or a gap four `XX_XX`: one
    /// completing square exists
    pub const BLOCKED_FOUR: i32 = 120_000;
    /// Open three with room on both flanks `__XXX__`
    pub const FENCED_THREE: i32 = 10_000;
    /// Open three `_XXX_`: promotes to an open four if ignored
    pub const OPEN_THREE: i32 = 8_000;
    /// Split three `_X_XX_` / `_XX_X_`
    pub const BROKEN_THREE: i32 = 5_000;
    /// Double-gap three `X_X_X`
    pub const GAPPED_THREE: i32 = 3_000;
    /// Three blocked on one side `OXXX_`
    pub const BLOCKED_THREE: i32 = 2_000;
    /// Two with extension room
    pub const OPEN_TWO: i32 = 800;
    /// Isolated two with wide open space
    pub const SPACED_TWO: i32 = 600;
}

/// A catalog entry: the mark window and its weight.
pub struct Shape {
    pub marks: &'static [Mark],
    pub weight: i32,
}

/// The ordered shape catalog.
///
/// Hostile marks match the edge sentinel too, so a four pressed against the
/// border scores as blocked, not open.
pub const CATALOG: &[Shape] = &[
    Shape { marks: &[V, F, F, F, F, V], weight: PatternWeight::OPEN_FOUR },
    Shape { marks: &[V, V, F, F, F, F, V], weight: PatternWeight::WIDE_FOUR },
    Shape { marks: &[V, F, F, F, F, V, V], weight: PatternWeight::WIDE_FOUR },
    Shape { marks: &[H, F, F, F, F, V], weight: PatternWeight::BLOCKED_FOUR },
    Shape { marks: &[V, F, F, F, F, H], weight: PatternWeight::BLOCKED_FOUR },
    Shape { marks: &[F, F, F, V, F], weight: PatternWeight::BLOCKED_FOUR },
    Shape { marks: &[F, F, V, F, F], weight: PatternWeight::BLOCKED_FOUR },
    Shape { marks: &[F, V, F, F, F], weight: PatternWeight::BLOCKED_FOUR },
    Shape { marks: &[V, V, F, F, F, V, V], weight: PatternWeight::FENCED_THREE },
    Shape { marks: &[V, F, F, F, V], weight: PatternWeight::OPEN_THREE },
    Shape { marks: &[V, F, V, F, F, V], weight: PatternWeight::BROKEN_THREE },
    Shape { marks: &[V, F, F, V, F, V], weight: PatternWeight::BROKEN_THREE },
    Shape { marks: &[V, F, V, F, V, F, V], weight: PatternWeight::GAPPED_THREE },
    Shape { marks: &[H, F, F, F, V, V], weight: PatternWeight::BLOCKED_THREE },
    Shape { marks: &[V, V, F, F, F, H], weight: PatternWeight::BLOCKED_THREE },
    Shape { marks: &[V, V, F, F, V, V], weight: PatternWeight::OPEN_TWO },
    Shape { marks: &[V, V, F, V, F, V, V], weight: PatternWeight::OPEN_TWO },
    Shape { marks: &[V, F, V, F, V, V], weight: PatternWeight::OPEN_TWO },
    Shape { marks: &[V, V, V, F, F, V, V, V], weight: PatternWeight::SPACED_TWO },
];

/// Score one encoded line: sum of `occurrences x weight` over the catalog.
pub fn score_line(marks: &[Mark]) -> i32 {
    let mut total = 0;
    for shape in CATALOG {
        if marks.len() < shape.marks.len() {
            continue;
        }
        let hits = marks
            .windows(shape.marks.len())
            .filter(|w| *w == shape.marks)
            .count();
        total += hits as i32 * shape.weight;
    }
    total
}
