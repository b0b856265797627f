//! Reply lines sent back to the manager

use std::fmt;

use crate::board::Pos;

/// Identity reported to `ABOUT`
pub const ABOUT: &str = concat!(
    "name=\"pbrain-gomoku-ai\", version=\"",
    env!("CARGO_PKG_VERSION"),
    "\""
);

/// A single reply line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Ok,
    Error,
    Unknown,
    /// The engine's stone, as `row,col`
    Move(Pos),
    About,
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Ok => f.write_str("OK"),
            Response::Error => f.write_str("ERROR"),
            Response::Unknown => f.write_str("UNKNOWN"),
            Response::Move(pos) => write!(f, "{}", pos),
            Response::About => f.write_str(ABOUT),
        }
    }
}
