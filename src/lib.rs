//! Gomoku brain for the Gomocup (piskvork) protocol
//!
//! The engine plays freestyle Gomoku: five or more in a row wins. It does not
//! search; on its turn it completes its own five if it can, otherwise blocks
//! the opponent's five, otherwise plays the first empty cell.
//!
//! # Architecture
//!
//! - [`board`]: Grid, moves and move history
//! - [`rules`]: Five-in-a-row detection
//! - [`engine`]: Move selection policy
//! - [`protocol`]: Command parsing and the protocol state machine
//! - [`error`]: Board and protocol errors
//!
//! # Quick Start
//!
//! ```
//! use std::collections::VecDeque;
//! use gomoku::{Outcome, Protocol};
//!
//! let mut input: VecDeque<String> =
//!     ["START 20", "BEGIN", "END"].iter().map(|s| s.to_string()).collect();
//! let mut output: Vec<String> = Vec::new();
//!
//! let mut protocol = Protocol::default();
//! let outcome = protocol.run(&mut input, &mut output).unwrap();
//!
//! assert_eq!(output, ["OK", "10,10"]);
//! assert_eq!(outcome, Outcome::Ended);
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod protocol;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Move, Player, Pos, MAX_BOARD_SIZE, SIZE_CEILING, WIN_LENGTH};
pub use engine::{MoveResult, SearchType};
pub use error::{BoardError, ProtocolError};
pub use protocol::{Outcome, Protocol, ProtocolConfig, State};
