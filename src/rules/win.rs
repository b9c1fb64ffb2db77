//! Win condition checking
//!
//! A win is five or more same-colored stones consecutive along one of the
//! four line directions. The check is always anchored at a specific cell
//! (the most recent placement): a new five must pass through the stone that
//! completed it, so no full-board scan exists anywhere in the crate.

use crate::board::{Board, Pos, Stone, BOARD_SIZE};

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Five-in-a-row check at a specific position.
///
/// Counts consecutive same-colored stones extending both ways from `pos`
/// (inclusive) in each of the 4 directions. Bounded scan, no allocation.
/// Returns false for an empty cell.
#[inline]
pub fn is_win_at(board: &Board, pos: Pos) -> bool {
    let color = board.get(pos);
    if color == Stone::Empty {
        return false;
    }
    let sz = BOARD_SIZE as i32;
    for (dr, dc) in DIRECTIONS {
        let mut count = 1i32;
        // Positive direction
        let mut r = i32::from(pos.row) + dr;
        let mut c = i32::from(pos.col) + dc;
        while r >= 0 && r < sz && c >= 0 && c < sz && board.get(Pos::new(r as u8, c as u8)) == color
        {
            count += 1;
            r += dr;
            c += dc;
        }
        // Negative direction
        r = i32::from(pos.row) - dr;
        c = i32::from(pos.col) - dc;
        while r >= 0 && r < sz && c >= 0 && c < sz && board.get(Pos::new(r as u8, c as u8)) == color
        {
            count += 1;
            r -= dr;
            c -= dc;
        }
        if count >= 5 {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_line(
        start: (u8, u8),
        step: (i8, i8),
        len: u8,
        stone: Stone,
    ) -> Board {
        let mut board = Board::new();
        for i in 0..len {
            let r = (start.0 as i8 + step.0 * i as i8) as u8;
            let c = (start.1 as i8 + step.1 * i as i8) as u8;
            board.place(Pos::new(r, c), stone).unwrap();
        }
        board
    }

    #[test]
    fn test_horizontal_five() {
        let board = board_with_line((7, 3), (0, 1), 5, Stone::Black);
        for i in 3..8 {
            assert!(is_win_at(&board, Pos::new(7, i)), "win at every stone of the five");
        }
    }

    #[test]
    fn test_vertical_five() {
        let board = board_with_line((3, 7), (1, 0), 5, Stone::White);
        assert!(is_win_at(&board, Pos::new(5, 7)));
    }

    #[test]
    fn test_diagonal_five() {
        let board = board_with_line((4, 4), (1, 1), 5, Stone::Black);
        assert!(is_win_at(&board, Pos::new(6, 6)));
    }

    #[test]
    fn test_anti_diagonal_five() {
        let board = board_with_line((4, 8), (1, -1), 5, Stone::White);
        assert!(is_win_at(&board, Pos::new(4, 8)));
        assert!(is_win_at(&board, Pos::new(8, 4)));
    }

    #[test]
    fn test_four_is_not_a_win() {
        let board = board_with_line((7, 3), (0, 1), 4, Stone::Black);
        for i in 3..7 {
            assert!(!is_win_at(&board, Pos::new(7, i)));
        }
    }

    #[test]
    fn test_overline_wins() {
        let board = board_with_line((7, 3), (0, 1), 6, Stone::Black);
        assert!(is_win_at(&board, Pos::new(7, 5)));
    }

    #[test]
    fn test_broken_run_is_not_a_win() {
        let mut board = board_with_line((7, 3), (0, 1), 4, Stone::Black);
        // Gap at (7,7), then a fifth stone beyond it
        board.place(Pos::new(7, 8), Stone::Black).unwrap();
        for i in [3u8, 4, 5, 6, 8] {
            assert!(!is_win_at(&board, Pos::new(7, i)));
        }
    }

    #[test]
    fn test_opponent_stone_blocks() {
        let mut board = board_with_line((7, 3), (0, 1), 4, Stone::Black);
        board.place(Pos::new(7, 7), Stone::White).unwrap();
        board.place(Pos::new(7, 2), Stone::Black).unwrap();
        assert!(is_win_at(&board, Pos::new(7, 4)), "2..=6 is five consecutive");
        assert!(!is_win_at(&board, Pos::new(7, 7)));
    }

    #[test]
    fn test_five_at_board_edge() {
        let board = board_with_line((14, 0), (0, 1), 5, Stone::Black);
        assert!(is_win_at(&board, Pos::new(14, 4)));
    }

    #[test]
    fn test_five_into_corner() {
        let board = board_with_line((10, 10), (1, 1), 5, Stone::White);
        assert!(is_win_at(&board, Pos::new(14, 14)));
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let board = Board::new();
        assert!(!is_win_at(&board, Pos::new(7, 7)));
    }

    #[test]
    fn test_no_false_positive_during_play() {
        // Alternate placements with no five anywhere; every placed cell
        // must report no win.
        let mut board = Board::new();
        let moves = [
            (7, 7, Stone::Black),
            (7, 8, Stone::White),
            (8, 7, Stone::Black),
            (8, 8, Stone::White),
            (9, 7, Stone::Black),
            (9, 8, Stone::White),
            (10, 7, Stone::Black),
            (10, 8, Stone::White),
        ];
        for (r, c, s) in moves {
            let pos = Pos::new(r, c);
            board.place(pos, s).unwrap();
            assert!(!is_win_at(&board, pos), "no win yet at ({r}, {c})");
        }
        // Fifth black in the column completes it
        board.place(Pos::new(11, 7), Stone::Black).unwrap();
        assert!(is_win_at(&board, Pos::new(11, 7)));
    }
}
