//! Gomocup (piskvork) text protocol
//!
//! - [`command`]: line tokenizing and command parsing
//! - [`response`]: reply lines
//! - [`io`]: line source and sink abstractions
//! - [`session`]: the state machine tying commands to the board

pub mod command;
pub mod io;
pub mod response;
pub mod session;

pub use command::{BoardLine, Command, CommandKind, BOARD_DONE};
pub use io::{LineSink, LineSource, Reader, Writer};
pub use response::{Response, ABOUT};
pub use session::{Outcome, Protocol, ProtocolConfig, State};
