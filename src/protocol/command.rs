//! Command tokenizing and parsing
//!
//! A line is split on whitespace and dispatched on the first known keyword
//! found *anywhere* among its tokens, checked in the fixed order
//! `START`/`RECSTART`, `TURN`, `BEGIN`, `BOARD`, `INFO`, `END`, `ABOUT`.
//! Managers in the wild rely on this, so an argument that happens to spell a
//! keyword dispatches as that keyword.
//!
//! Arguments are positional: the argument is always the second token.

use crate::error::ProtocolError;

/// Terminator of the `BOARD` sub-stream
pub const BOARD_DONE: &str = "DONE";

/// Known command keywords, in dispatch priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Start,
    Turn,
    Begin,
    Board,
    Info,
    End,
    About,
    Unknown,
}

impl CommandKind {
    /// Detect the command kind from the tokens of a line
    pub fn detect(tokens: &[&str]) -> CommandKind {
        let has = |keyword: &str| tokens.iter().any(|t| *t == keyword);

        if has("START") || has("RECSTART") {
            CommandKind::Start
        } else if has("TURN") {
            CommandKind::Turn
        } else if has("BEGIN") {
            CommandKind::Begin
        } else if has("BOARD") {
            CommandKind::Board
        } else if has("INFO") {
            CommandKind::Info
        } else if has("END") {
            CommandKind::End
        } else if has("ABOUT") {
            CommandKind::About
        } else {
            CommandKind::Unknown
        }
    }
}

/// A fully parsed manager command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `START n` or `RECSTART n`; the size is checked by the board
    Start(i64),
    /// `TURN x,y`: the opponent's stone
    Turn { row: i64, col: i64 },
    Begin,
    /// `BOARD`, followed by `x,y,player` lines and `DONE`
    Board,
    Info,
    End,
    About,
    Unknown,
}

impl Command {
    /// Parse a command line.
    ///
    /// Unknown lines parse to [`Command::Unknown`]; only a known keyword
    /// with unusable arguments is an error.
    pub fn parse(line: &str) -> Result<Command, ProtocolError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let command = match CommandKind::detect(&tokens) {
            CommandKind::Start => {
                let arg = tokens.get(1).ok_or_else(|| malformed(line))?;
                Command::Start(parse_int(arg, line)?)
            }
            CommandKind::Turn => {
                if tokens.len() != 2 {
                    return Err(malformed(line));
                }
                match split_fields(tokens[1], line)?.as_slice() {
                    &[row, col] => Command::Turn { row, col },
                    _ => return Err(malformed(line)),
                }
            }
            CommandKind::Begin => Command::Begin,
            CommandKind::Board => {
                if tokens.len() != 1 {
                    return Err(malformed(line));
                }
                Command::Board
            }
            CommandKind::Info => Command::Info,
            CommandKind::End => Command::End,
            CommandKind::About => Command::About,
            CommandKind::Unknown => Command::Unknown,
        };
        Ok(command)
    }
}

/// One `x,y,player` line of the `BOARD` sub-stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLine {
    pub row: i64,
    pub col: i64,
    pub player: i64,
}

impl BoardLine {
    pub fn parse(line: &str) -> Result<BoardLine, ProtocolError> {
        match split_fields(line.trim(), line)?.as_slice() {
            &[row, col, player] => Ok(BoardLine { row, col, player }),
            _ => Err(malformed(line)),
        }
    }
}

/// Split a comma-separated list of integers
fn split_fields(arg: &str, line: &str) -> Result<Vec<i64>, ProtocolError> {
    arg.split(',').map(|field| parse_int(field, line)).collect()
}

fn parse_int(field: &str, line: &str) -> Result<i64, ProtocolError> {
    field.trim().parse().map_err(|_| malformed(line))
}

fn malformed(line: &str) -> ProtocolError {
    ProtocolError::Malformed(line.trim().to_string())
}
