//! Five-in-a-row detection
//!
//! A win is five or more stones of one player aligned horizontally,
//! vertically or on either diagonal. Overlines count as wins.
//!
//! Detection here is counterfactual: it asks whether *placing* a stone on
//! an empty cell would complete a line, and never touches the grid.

use crate::board::{Board, Cell, Player, Pos, WIN_LENGTH};

/// Axis pairs: each entry is a direction and its opposite
const AXES: [((i64, i64), (i64, i64)); 4] = [
    ((0, -1), (0, 1)),   // Horizontal
    ((-1, 0), (1, 0)),   // Vertical
    ((-1, 1), (1, -1)),  // Anti-diagonal
    ((-1, -1), (1, 1)),  // Diagonal
];

/// Count consecutive `cell` stones stepping away from `pos`, not counting `pos`.
///
/// Stops at the board edge, at any other cell content, or after
/// `WIN_LENGTH - 1` steps.
#[inline]
fn count_direction(board: &Board, pos: Pos, cell: Cell, (dr, dc): (i64, i64)) -> usize {
    let mut count = 0;
    let mut r = pos.row as i64;
    let mut c = pos.col as i64;
    for _ in 1..WIN_LENGTH {
        r += dr;
        c += dc;
        if board.cell_at(r, c) != Some(cell) {
            break;
        }
        count += 1;
    }
    count
}

/// Whether a stone of `player` at `pos` would sit in a line of five or more.
///
/// `pos` itself is assumed to carry the player's stone; its current content
/// is not read.
pub fn is_winning_move(board: &Board, pos: Pos, player: Player) -> bool {
    let cell = player.cell();
    AXES.iter().any(|&(back, forward)| {
        count_direction(board, pos, cell, back) + count_direction(board, pos, cell, forward)
            >= WIN_LENGTH - 1
    })
}

/// First empty cell, in row-major order, where `player` wins by playing
pub fn find_immediate_win(board: &Board, player: Player) -> Option<Pos> {
    board
        .positions()
        .find(|&pos| board.is_empty(pos) && is_winning_move(board, pos, player))
}

/// First empty cell in row-major order
pub fn first_empty_cell(board: &Board) -> Option<Pos> {
    board.positions().find(|&pos| board.is_empty(pos))
}

/// Check whether the stone already at `pos` is part of a five
pub fn has_five_at_pos(board: &Board, pos: Pos) -> bool {
    match board.get(pos) {
        Cell::Player1 => is_winning_move(board, pos, Player::One),
        Cell::Player2 => is_winning_move(board, pos, Player::Two),
        Cell::Empty => false,
    }
}

/// Player owning a five anywhere on the board, recomputed on every call
pub fn check_winner(board: &Board) -> Option<Player> {
    board.moves().iter().find_map(|mv| {
        if is_winning_move(board, mv.pos, mv.player) {
            Some(mv.player)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::MAX_BOARD_SIZE;

    fn board(size: i64) -> Board {
        Board::with_size(size, MAX_BOARD_SIZE).unwrap()
    }

    fn place(board: &mut Board, row: usize, col: usize, player: Player) {
        board.place(Pos::new(row, col), player).unwrap();
    }

    #[test]
    fn test_horizontal_four_open_both_ends() {
        let mut board = board(20);
        for c in 5..9 {
            place(&mut board, 9, c, Player::One);
        }
        assert!(is_winning_move(&board, Pos::new(9, 4), Player::One));
        assert!(is_winning_move(&board, Pos::new(9, 9), Player::One));
        // Row-major first open end
        assert_eq!(find_immediate_win(&board, Player::One), Some(Pos::new(9, 4)));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = board(20);
        for r in 0..4 {
            place(&mut board, r, 7, Player::Two);
        }
        assert_eq!(find_immediate_win(&board, Player::Two), Some(Pos::new(4, 7)));
        assert_eq!(find_immediate_win(&board, Player::One), None);
    }

    #[test]
    fn test_diagonal_win() {
        let mut board = board(20);
        for i in 1..5 {
            place(&mut board, i, i, Player::One);
        }
        assert_eq!(find_immediate_win(&board, Player::One), Some(Pos::new(0, 0)));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let mut board = board(20);
        // (4,8) .. (7,5), completion at (3,9) or (8,4)
        for i in 0..4 {
            place(&mut board, 4 + i, 8 - i, Player::Two);
        }
        assert_eq!(find_immediate_win(&board, Player::Two), Some(Pos::new(3, 9)));
    }

    #[test]
    fn test_gap_fill_wins() {
        let mut board = board(20);
        for c in [2, 3, 5, 6] {
            place(&mut board, 10, c, Player::One);
        }
        assert_eq!(find_immediate_win(&board, Player::One), Some(Pos::new(10, 4)));
    }

    #[test]
    fn test_blocked_line_does_not_win() {
        let mut board = board(20);
        // 2 1 1 1 1 2
        place(&mut board, 0, 0, Player::Two);
        for c in 1..5 {
            place(&mut board, 0, c, Player::One);
        }
        place(&mut board, 0, 5, Player::Two);
        assert_eq!(find_immediate_win(&board, Player::One), None);
    }

    #[test]
    fn test_three_is_not_a_win() {
        let mut board = board(20);
        for c in 0..3 {
            place(&mut board, 5, c, Player::One);
        }
        assert_eq!(find_immediate_win(&board, Player::One), None);
    }

    #[test]
    fn test_win_at_board_edge() {
        let mut board = board(20);
        for c in 15..19 {
            place(&mut board, 19, c, Player::One);
        }
        assert_eq!(find_immediate_win(&board, Player::One), Some(Pos::new(19, 14)));
    }

    #[test]
    fn test_detection_does_not_mutate() {
        let mut board = board(20);
        for c in 0..4 {
            place(&mut board, 3, c, Player::One);
        }
        let before = board.to_string();
        let first = find_immediate_win(&board, Player::One);
        let second = find_immediate_win(&board, Player::One);
        assert_eq!(first, second);
        assert_eq!(board.to_string(), before);
        assert_eq!(board.stone_count(), 4);
    }

    #[test]
    fn test_first_empty_cell() {
        let mut board = board(3);
        assert_eq!(first_empty_cell(&board), Some(Pos::new(0, 0)));
        place(&mut board, 0, 0, Player::One);
        place(&mut board, 0, 2, Player::Two);
        assert_eq!(first_empty_cell(&board), Some(Pos::new(0, 1)));
        place(&mut board, 0, 1, Player::One);
        assert_eq!(first_empty_cell(&board), Some(Pos::new(1, 0)));
    }

    #[test]
    fn test_first_empty_cell_full_board() {
        let mut board = board(2);
        for pos in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            place(&mut board, pos.0, pos.1, Player::One);
        }
        assert_eq!(first_empty_cell(&board), None);
        assert_eq!(first_empty_cell(&Board::new()), None);
    }

    #[test]
    fn test_small_board_never_wins() {
        let mut board = board(4);
        for c in 0..3 {
            place(&mut board, 0, c, Player::One);
        }
        assert_eq!(find_immediate_win(&board, Player::One), None);
    }

    #[test]
    fn test_check_winner() {
        let mut board = board(20);
        assert_eq!(check_winner(&board), None);
        for c in 0..5 {
            place(&mut board, 2, c, Player::Two);
        }
        assert!(has_five_at_pos(&board, Pos::new(2, 2)));
        assert!(!has_five_at_pos(&board, Pos::new(3, 3)));
        assert_eq!(check_winner(&board), Some(Player::Two));
    }
}
