//! Move selection
//!
//! The engine does not search. It picks, in priority order:
//!
//! 1. **Immediate win**: a cell completing five for the engine
//! 2. **Defense**: a cell where the opponent would complete five
//! 3. **Fallback**: the first empty cell in row-major order
//!
//! Each step scans the board in row-major order, so the choice is fully
//! deterministic for a given position.
//!
//! # Example
//!
//! ```
//! use gomoku::{engine, Board, Player, Pos, SearchType, MAX_BOARD_SIZE};
//!
//! let mut board = Board::with_size(15, MAX_BOARD_SIZE).unwrap();
//! for col in 0..4 {
//!     board.place(Pos::new(7, col), Player::Two).unwrap();
//! }
//!
//! let result = engine::select_move(&board, Player::One, Player::Two).unwrap();
//! assert_eq!(result.best_move, Pos::new(7, 4));
//! assert_eq!(result.search_type, SearchType::Defense);
//! ```

use tracing::debug;

use crate::board::{Board, Player, Pos};
use crate::error::BoardError;
use crate::rules::{find_immediate_win, first_empty_cell};

/// Rule that produced the chosen move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Completes five for the side to move
    ImmediateWin,
    /// Blocks the opponent's five
    Defense,
    /// Nothing urgent; first empty cell
    Fallback,
}

/// Chosen move and how it was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub best_move: Pos,
    pub search_type: SearchType,
}

/// Pick a move for `own` without placing it.
///
/// Fails with [`BoardError::NoMovesAvailable`] on a full (or unsized) board.
pub fn select_move(board: &Board, own: Player, opponent: Player) -> Result<MoveResult, BoardError> {
    if board.is_full() {
        return Err(BoardError::NoMovesAvailable);
    }
    let (best_move, search_type) = if let Some(pos) = find_immediate_win(board, own) {
        (pos, SearchType::ImmediateWin)
    } else if let Some(pos) = find_immediate_win(board, opponent) {
        (pos, SearchType::Defense)
    } else {
        let pos = first_empty_cell(board).ok_or(BoardError::NoMovesAvailable)?;
        (pos, SearchType::Fallback)
    };

    debug!(row = best_move.row, col = best_move.col, ?search_type, "move selected");
    Ok(MoveResult {
        best_move,
        search_type,
    })
}

/// Select a move for `own` against its opponent and place it
pub fn play_move(board: &mut Board, own: Player) -> Result<MoveResult, BoardError> {
    let result = select_move(board, own, own.opponent())?;
    board.place(result.best_move, own)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, MAX_BOARD_SIZE};

    fn board(size: i64) -> Board {
        Board::with_size(size, MAX_BOARD_SIZE).unwrap()
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut board = board(20);
        for i in 0..4 {
            board.place(Pos::new(9, i), Player::One).unwrap();
        }

        let result = select_move(&board, Player::One, Player::Two).unwrap();
        assert_eq!(result.best_move, Pos::new(9, 4));
        assert_eq!(result.search_type, SearchType::ImmediateWin);
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let mut board = board(20);
        for i in 0..4 {
            board.place(Pos::new(9, i), Player::Two).unwrap();
        }
        board.place(Pos::new(10, 5), Player::One).unwrap();

        let result = select_move(&board, Player::One, Player::Two).unwrap();
        assert_eq!(result.best_move, Pos::new(9, 4));
        assert_eq!(result.search_type, SearchType::Defense);
    }

    #[test]
    fn test_win_beats_block() {
        let mut board = board(20);
        // Opponent threat comes first in row-major order
        for i in 0..4 {
            board.place(Pos::new(2, i), Player::Two).unwrap();
        }
        for i in 0..4 {
            board.place(Pos::new(12, i + 6), Player::One).unwrap();
        }

        let result = select_move(&board, Player::One, Player::Two).unwrap();
        assert_eq!(result.best_move, Pos::new(12, 5));
        assert_eq!(result.search_type, SearchType::ImmediateWin);
    }

    #[test]
    fn test_engine_fallback_first_empty() {
        let mut board = board(20);
        board.place(Pos::new(0, 0), Player::Two).unwrap();

        let result = select_move(&board, Player::One, Player::Two).unwrap();
        assert_eq!(result.best_move, Pos::new(0, 1));
        assert_eq!(result.search_type, SearchType::Fallback);
    }

    #[test]
    fn test_engine_empty_board() {
        let board = board(20);
        let result = select_move(&board, Player::One, Player::Two).unwrap();
        assert_eq!(result.best_move, Pos::new(0, 0));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = board(2);
        board.place(Pos::new(0, 0), Player::One).unwrap();
        board.place(Pos::new(0, 1), Player::Two).unwrap();
        board.place(Pos::new(1, 0), Player::One).unwrap();
        board.place(Pos::new(1, 1), Player::Two).unwrap();

        assert_eq!(
            select_move(&board, Player::One, Player::Two),
            Err(BoardError::NoMovesAvailable)
        );
        assert_eq!(
            select_move(&Board::new(), Player::One, Player::Two),
            Err(BoardError::NoMovesAvailable)
        );
    }

    #[test]
    fn test_play_move_places_stone() {
        let mut board = board(20);
        let result = play_move(&mut board, Player::One).unwrap();
        assert_eq!(result.best_move, Pos::new(0, 0));
        assert_eq!(board.get(Pos::new(0, 0)), Cell::Player1);
        assert_eq!(board.stone_count(), 1);
    }

    #[test]
    fn test_selection_is_deterministic() {
        let mut board = board(20);
        for i in 0..4 {
            board.place(Pos::new(5, 5 + i), Player::Two).unwrap();
        }
        let first = select_move(&board, Player::One, Player::Two).unwrap();
        let second = select_move(&board, Player::One, Player::Two).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.best_move, Pos::new(5, 4));
    }
}
