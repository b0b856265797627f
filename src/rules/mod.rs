//! Game rules for standard Gomoku
//!
//! Freestyle rules: five or more in a row wins, no captures, no forbidden moves.

pub mod win;

// Re-exports for convenient access
pub use win::{check_winner, find_immediate_win, first_empty_cell, has_five_at_pos, is_winning_move};
