//! Line extraction for pattern matching
//!
//! For a given side, every board line (row, column, or diagonal) is encoded
//! as a linear mark sequence: friendly stone, vacant cell, or hostile stone.
//! Both ends carry a hostile sentinel standing in for the wall beyond the
//! board edge, so shapes touching the border are scored as blocked.

use crate::board::{Board, Pos, Stone, BOARD_SIZE};

/// Cell classification relative to the side under evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Friendly,
    Vacant,
    Hostile,
}

/// Longest possible encoded line: a full board line plus two sentinels.
pub const MAX_LINE: usize = BOARD_SIZE + 2;

/// An encoded line. Fixed-capacity to keep the hot evaluation path free of
/// heap allocation.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    marks: [Mark; MAX_LINE],
    len: usize,
}

impl Line {
    #[inline]
    pub fn as_slice(&self) -> &[Mark] {
        &self.marks[..self.len]
    }
}

/// Encode the line starting at `(row, col)` and stepping by `(dr, dc)` until
/// it leaves the board, from `side`'s perspective.
pub fn scan_line(board: &Board, side: Stone, row: i32, col: i32, dr: i32, dc: i32) -> Line {
    debug_assert!(side != Stone::Empty);
    let mut marks = [Mark::Hostile; MAX_LINE];
    let mut len = 1; // leading sentinel
    let mut r = row;
    let mut c = col;
    while Pos::is_valid(r, c) {
        let cell = board.get(Pos::new(r as u8, c as u8));
        marks[len] = if cell == Stone::Empty {
            Mark::Vacant
        } else if cell == side {
            Mark::Friendly
        } else {
            Mark::Hostile
        };
        len += 1;
        r += dr;
        c += dc;
    }
    len += 1; // trailing sentinel (already Hostile)
    Line { marks, len }
}

/// Visit every line of the board once: all rows, all columns, and every
/// diagonal of both families.
pub fn for_each_line<F: FnMut(&[Mark])>(board: &Board, side: Stone, mut f: F) {
    let n = BOARD_SIZE as i32;
    for i in 0..n {
        f(scan_line(board, side, i, 0, 0, 1).as_slice()); // row i
        f(scan_line(board, side, 0, i, 1, 0).as_slice()); // column i
    }
    for k in 0..n {
        // SE diagonals, starting from the top edge and the left edge
        f(scan_line(board, side, 0, k, 1, 1).as_slice());
        if k > 0 {
            f(scan_line(board, side, k, 0, 1, 1).as_slice());
        }
        // SW diagonals, starting from the top edge and the right edge
        f(scan_line(board, side, 0, k, 1, -1).as_slice());
        if k > 0 {
            f(scan_line(board, side, k, n - 1, 1, -1).as_slice());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_empty_row() {
        let board = Board::new();
        let line = scan_line(&board, Stone::Black, 7, 0, 0, 1);
        let marks = line.as_slice();
        assert_eq!(marks.len(), BOARD_SIZE + 2);
        assert_eq!(marks[0], Mark::Hostile, "leading edge sentinel");
        assert_eq!(marks[BOARD_SIZE + 1], Mark::Hostile, "trailing edge sentinel");
        assert!(marks[1..=BOARD_SIZE].iter().all(|&m| m == Mark::Vacant));
    }

    #[test]
    fn test_scan_classifies_cells() {
        let mut board = Board::new();
        board.place(Pos::new(7, 0), Stone::Black).unwrap();
        board.place(Pos::new(7, 1), Stone::White).unwrap();

        let line = scan_line(&board, Stone::Black, 7, 0, 0, 1);
        assert_eq!(line.as_slice()[1], Mark::Friendly);
        assert_eq!(line.as_slice()[2], Mark::Hostile);
        assert_eq!(line.as_slice()[3], Mark::Vacant);

        // Same cells from White's perspective flip
        let line = scan_line(&board, Stone::White, 7, 0, 0, 1);
        assert_eq!(line.as_slice()[1], Mark::Hostile);
        assert_eq!(line.as_slice()[2], Mark::Friendly);
    }

    #[test]
    fn test_diagonal_scan_length() {
        let board = Board::new();
        // Main SE diagonal: 15 cells + 2 sentinels
        let line = scan_line(&board, Stone::Black, 0, 0, 1, 1);
        assert_eq!(line.as_slice().len(), 17);
        // Corner diagonal: 1 cell + 2 sentinels
        let line = scan_line(&board, Stone::Black, 14, 0, 1, 1);
        assert_eq!(line.as_slice().len(), 3);
    }

    #[test]
    fn test_for_each_line_count() {
        // 15 rows + 15 columns + 29 SE diagonals + 29 SW diagonals
        let board = Board::new();
        let mut count = 0;
        for_each_line(&board, Stone::Black, |_| count += 1);
        assert_eq!(count, 15 + 15 + 29 + 29);
    }

    #[test]
    fn test_every_cell_visited_once_per_family() {
        // Each of the four line families must cover each cell exactly once.
        let mut board = Board::new();
        board.place(Pos::new(6, 9), Stone::Black).unwrap();
        let mut friendly = 0;
        for_each_line(&board, Stone::Black, |marks| {
            friendly += marks.iter().filter(|&&m| m == Mark::Friendly).count();
        });
        assert_eq!(friendly, 4, "one stone appears in exactly 4 lines");
    }
}
