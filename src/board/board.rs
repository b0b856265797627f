//! Board structure with move history

use std::fmt;

use tracing::trace;

use super::{Cell, Move, Player, Pos, SIZE_CEILING};
use crate::error::BoardError;

/// Game board: an N×N grid plus the ordered list of moves that filled it.
///
/// A fresh board has size 0 and accepts no moves until [`Board::set_size`]
/// succeeds. Every occupied cell has exactly one entry in the history.
#[derive(Debug, Clone, Default)]
pub struct Board {
    size: usize,
    /// Row-major cells
    grid: Vec<Cell>,
    history: Vec<Move>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an empty board of the given size, bounded by `max_size`
    pub fn with_size(size: i64, max_size: usize) -> Result<Self, BoardError> {
        let mut board = Self::new();
        board.set_size(size, max_size)?;
        Ok(board)
    }

    /// Reallocate an all-empty `n`x`n` grid and clear the history.
    ///
    /// Fails with [`BoardError::InvalidSize`] when `n` is not in `1..=max_size`
    /// or exceeds [`SIZE_CEILING`], leaving the board as it was.
    pub fn set_size(&mut self, n: i64, max_size: usize) -> Result<(), BoardError> {
        let limit = max_size.min(SIZE_CEILING);
        let cells = usize::try_from(n)
            .ok()
            .filter(|&size| size > 0 && size <= limit)
            .and_then(|size| size.checked_mul(size))
            .ok_or(BoardError::InvalidSize(n))?;
        let size = n as usize;
        self.size = size;
        self.grid = vec![Cell::Empty; cells];
        self.history = Vec::with_capacity(cells);
        Ok(())
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.grid[pos.to_index(self.size)]
    }

    /// Get cell at signed coordinates, `None` off the board
    #[inline]
    pub fn cell_at(&self, row: i64, col: i64) -> Option<Cell> {
        if Pos::is_valid(row, col, self.size) {
            Some(self.get(Pos::new(row as usize, col as usize)))
        } else {
            None
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Apply a move given in raw wire values.
    ///
    /// Checks, in order: coordinates in range, player id is 1 or 2, target
    /// cell empty. Nothing is mutated unless every check passes.
    pub fn apply_move(&mut self, row: i64, col: i64, player: i64) -> Result<Move, BoardError> {
        if !Pos::is_valid(row, col, self.size) {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        let player = Player::from_id(player).ok_or(BoardError::InvalidPlayer(player))?;
        self.place(Pos::new(row as usize, col as usize), player)
    }

    /// Place a stone on an in-range position
    pub fn place(&mut self, pos: Pos, player: Player) -> Result<Move, BoardError> {
        if pos.row >= self.size || pos.col >= self.size {
            return Err(BoardError::OutOfBounds {
                row: pos.row as i64,
                col: pos.col as i64,
                size: self.size,
            });
        }
        let idx = pos.to_index(self.size);
        if self.grid[idx] != Cell::Empty {
            return Err(BoardError::CellOccupied(pos));
        }
        self.grid[idx] = player.cell();
        let mv = Move { pos, player };
        self.history.push(mv);
        trace!(row = pos.row, col = pos.col, player = player.id(), "stone placed");
        Ok(mv)
    }

    /// Moves in the order they were applied
    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.history
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.history.len()
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() == self.grid.len()
    }

    /// Iterate positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.grid.len()).map(move |idx| Pos::from_index(idx, self.size))
    }
}

/// One text row per board row: `.` empty, `1` and `2` for the players
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.chunks(self.size.max(1)) {
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Player1 => '1',
                    Cell::Player2 => '2',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
