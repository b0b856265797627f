//! Board representation for Gomoku

pub mod board;


// Re-exports
pub use board::Board;

/// Largest board `START` accepts unless configured otherwise
pub const MAX_BOARD_SIZE: usize = 100;

/// Hard ceiling on any board size, whatever the configured limit
pub const SIZE_CEILING: usize = 1000;

/// Number of aligned stones that wins the game
pub const WIN_LENGTH: usize = 5;

/// Content of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Player1,
    Player2,
}

/// Side to move, identified on the wire as `1` (the engine) or `2` (the opponent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Parse a wire player id
    #[inline]
    pub fn from_id(id: i64) -> Option<Player> {
        match id {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    #[inline]
    pub fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Get opponent
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Mark left on the grid by this player
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::Player1,
            Player::Two => Cell::Player2,
        }
    }
}

/// Position on the board.
///
/// Ordering is row-major, which is the tie-break order for every scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: idx / size,
            col: idx % size,
        }
    }

    /// Whether signed coordinates fall on a `size`x`size` board
    #[inline]
    pub fn is_valid(row: i64, col: i64, size: usize) -> bool {
        let size = size as i64;
        row >= 0 && row < size && col >= 0 && col < size
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// A stone placed on the board, as recorded in the move history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub pos: Pos,
    pub player: Player,
}
