//! Board structure with last-move tracking

use thiserror::Error;

use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};

/// A rejected placement. Both variants leave the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },
    #[error("cell ({}, {}) is already occupied", pos.row, pos.col)]
    Occupied { pos: Pos },
}

/// Game board: 15x15 cell grid plus the most recent placement.
///
/// The search mutates the board destructively via [`place_stone`] /
/// [`remove_stone`] and restores it in strict LIFO order; `place_stone`
/// hands back the previous last-move so the undo can restore it exactly.
///
/// [`place_stone`]: Board::place_stone
/// [`remove_stone`]: Board::remove_stone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Stone; TOTAL_CELLS],
    last_move: Option<Pos>,
    stones: u16,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Stone::Empty; TOTAL_CELLS],
            last_move: None,
            stones: 0,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// The most recently placed stone, if any.
    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        u32::from(self.stones)
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stones == 0
    }

    /// Checked placement for game moves. Rejects occupied cells and leaves
    /// the board unchanged on failure.
    pub fn place(&mut self, pos: Pos, stone: Stone) -> Result<(), PlaceError> {
        debug_assert!(stone != Stone::Empty);
        if !self.is_empty(pos) {
            return Err(PlaceError::Occupied { pos });
        }
        self.place_stone(pos, stone);
        Ok(())
    }

    /// Checked placement from raw coordinates, for callers that map pointer
    /// input straight to cell coordinates.
    pub fn place_at(&mut self, row: i32, col: i32, stone: Stone) -> Result<Pos, PlaceError> {
        if !Pos::is_valid(row, col) {
            return Err(PlaceError::OutOfBounds { row, col });
        }
        let pos = Pos::new(row as u8, col as u8);
        self.place(pos, stone)?;
        Ok(pos)
    }

    /// Unchecked placement: sets the cell, records it as the last move, and
    /// returns the previous last move for the matching [`remove_stone`].
    ///
    /// [`remove_stone`]: Board::remove_stone
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) -> Option<Pos> {
        debug_assert!(self.is_empty(pos));
        self.cells[pos.to_index()] = stone;
        self.stones += 1;
        self.last_move.replace(pos)
    }

    /// Undo a trial placement, restoring the last move returned by the
    /// corresponding [`place_stone`] call.
    ///
    /// [`place_stone`]: Board::place_stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos, prev_last: Option<Pos>) {
        debug_assert!(!self.is_empty(pos));
        self.cells[pos.to_index()] = Stone::Empty;
        self.stones -= 1;
        self.last_move = prev_last;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_and_get() {
        let mut board = Board::new();
        let pos = Pos::new(7, 7);
        assert!(board.place(pos, Stone::Black).is_ok());
        assert_eq!(board.get(pos), Stone::Black);
        assert_eq!(board.last_move(), Some(pos));
        assert_eq!(board.stone_count(), 1);
    }

    #[test]
    fn test_place_occupied_rejected() {
        let mut board = Board::new();
        let pos = Pos::new(3, 4);
        board.place(pos, Stone::Black).unwrap();
        let snapshot = board.clone();

        let err = board.place(pos, Stone::White);
        assert_eq!(err, Err(PlaceError::Occupied { pos }));
        assert_eq!(board, snapshot, "failed placement must not change state");
    }

    #[test]
    fn test_place_at_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(
            board.place_at(-1, 5, Stone::Black),
            Err(PlaceError::OutOfBounds { row: -1, col: 5 })
        );
        assert_eq!(
            board.place_at(5, 15, Stone::Black),
            Err(PlaceError::OutOfBounds { row: 5, col: 15 })
        );
        assert!(board.is_board_empty());
    }

    #[test]
    fn test_place_undo_round_trip() {
        let mut board = Board::new();
        board.place(Pos::new(7, 7), Stone::Black).unwrap();
        let snapshot = board.clone();

        // Simulate a search backtrack
        let trial = Pos::new(8, 8);
        let prev_last = board.place_stone(trial, Stone::White);
        assert_eq!(board.last_move(), Some(trial));
        board.remove_stone(trial, prev_last);

        assert_eq!(board, snapshot, "undo must restore cells and last move");
    }

    #[test]
    fn test_nested_place_undo() {
        let mut board = Board::new();
        board.place(Pos::new(7, 7), Stone::Black).unwrap();
        let snapshot = board.clone();

        let a = Pos::new(7, 8);
        let b = Pos::new(8, 8);
        let prev_a = board.place_stone(a, Stone::White);
        let prev_b = board.place_stone(b, Stone::Black);
        board.remove_stone(b, prev_b);
        board.remove_stone(a, prev_a);

        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_default_is_empty() {
        let board = Board::default();
        assert!(board.is_board_empty());
        assert_eq!(board.last_move(), None);
    }
}
