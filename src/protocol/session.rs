//! Protocol state machine
//!
//! [`Protocol`] owns the board for the whole process. Each manager line is
//! parsed into a [`Command`], handled against the board, and answered with
//! exactly one reply line, except `END` (no reply) and `BOARD` (one `ERROR`
//! per rejected sub-stream line before the final move).
//!
//! Error policy: malformed lines and illegal moves are answered with `ERROR`
//! and the session carries on unchanged. A full board when the engine must
//! move is answered with `ERROR` and aborts the session. I/O failures are
//! returned to the caller.

use tracing::{debug, error, info, trace, warn};

use super::command::{BoardLine, Command, BOARD_DONE};
use super::io::{LineSink, LineSource};
use super::response::Response;
use crate::board::{Board, Player, MAX_BOARD_SIZE};
use crate::engine;
use crate::error::ProtocolError;
use crate::rules::{check_winner, has_five_at_pos};

/// Runtime knobs of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolConfig {
    /// Largest size `START` accepts
    pub max_board_size: usize,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            max_board_size: MAX_BOARD_SIZE,
        }
    }
}

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// No successful `START` yet
    Uninitialized,
    InGame,
    /// `END` received or session aborted; no further input is handled
    Ended,
}

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The manager sent `END`
    Ended,
    /// Input closed
    EndOfInput,
    /// Fatal condition, already answered with `ERROR`
    Aborted,
}

/// Result of a successfully handled command
enum Reply {
    Line(Response),
    Stop(Outcome),
}

/// Protocol engine bound to a single board
#[derive(Debug, Clone)]
pub struct Protocol {
    board: Board,
    state: State,
    config: ProtocolConfig,
}

impl Protocol {
    pub fn new(config: ProtocolConfig) -> Self {
        Self {
            board: Board::new(),
            state: State::Uninitialized,
            config,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    /// Drive the session until `END`, end of input, or a fatal error
    pub fn run<S, K>(&mut self, source: &mut S, sink: &mut K) -> Result<Outcome, ProtocolError>
    where
        S: LineSource,
        K: LineSink,
    {
        while let Some(line) = source.next_line()? {
            if let Some(outcome) = self.execute(&line, source, sink)? {
                return Ok(outcome);
            }
        }
        debug!("input closed");
        Ok(Outcome::EndOfInput)
    }

    /// Handle one command line.
    ///
    /// `source` is only read by `BOARD`. Returns `Some` once the session is
    /// over; only I/O failures are returned as errors.
    pub fn execute<S, K>(
        &mut self,
        line: &str,
        source: &mut S,
        sink: &mut K,
    ) -> Result<Option<Outcome>, ProtocolError>
    where
        S: LineSource,
        K: LineSink,
    {
        if self.state == State::Ended {
            return Ok(Some(Outcome::Ended));
        }

        let reply = Command::parse(line).and_then(|command| {
            debug!(?command, "dispatch");
            self.dispatch(command, source, sink)
        });

        match reply {
            Ok(Reply::Line(response)) => {
                sink.send(&response.to_string())?;
                Ok(None)
            }
            Ok(Reply::Stop(outcome)) => {
                self.state = State::Ended;
                Ok(Some(outcome))
            }
            Err(err @ ProtocolError::Io(_)) => Err(err),
            Err(err) if err.is_fatal() => {
                error!(%err, line, "fatal protocol error");
                sink.send(&Response::Error.to_string())?;
                self.state = State::Ended;
                Ok(Some(Outcome::Aborted))
            }
            Err(err) => {
                warn!(%err, line, "command rejected");
                sink.send(&Response::Error.to_string())?;
                Ok(None)
            }
        }
    }

    fn dispatch<S, K>(
        &mut self,
        command: Command,
        source: &mut S,
        sink: &mut K,
    ) -> Result<Reply, ProtocolError>
    where
        S: LineSource,
        K: LineSink,
    {
        let response = match command {
            Command::Start(size) => {
                self.board.set_size(size, self.config.max_board_size)?;
                self.state = State::InGame;
                debug!(size, "new game");
                Response::Ok
            }
            Command::Turn { row, col } => {
                let mv = self.board.apply_move(row, col, Player::Two.id().into())?;
                if has_five_at_pos(&self.board, mv.pos) {
                    info!(row, col, "opponent completed five");
                }
                self.respond_move()?
            }
            Command::Begin => {
                let center = (self.board.size() / 2) as i64;
                let mv = self.board.apply_move(center, center, Player::One.id().into())?;
                Response::Move(mv.pos)
            }
            Command::Board => return self.load_board(source, sink),
            Command::Info | Command::Unknown => Response::Unknown,
            Command::End => return Ok(Reply::Stop(Outcome::Ended)),
            Command::About => Response::About,
        };
        Ok(Reply::Line(response))
    }

    /// Read `x,y,player` lines until `DONE`, then answer with the engine's move
    fn load_board<S, K>(&mut self, source: &mut S, sink: &mut K) -> Result<Reply, ProtocolError>
    where
        S: LineSource,
        K: LineSink,
    {
        loop {
            let Some(line) = source.next_line()? else {
                warn!("input closed inside BOARD");
                return Ok(Reply::Stop(Outcome::EndOfInput));
            };
            if line.trim() == BOARD_DONE {
                break;
            }

            let applied = BoardLine::parse(&line).and_then(|stone| {
                self.board
                    .apply_move(stone.row, stone.col, stone.player)
                    .map_err(ProtocolError::from)
            });
            if let Err(err) = applied {
                warn!(%err, line = line.as_str(), "board line rejected");
                sink.send(&Response::Error.to_string())?;
            }
        }

        if let Some(winner) = check_winner(&self.board) {
            info!(player = winner.id(), "loaded position already has a five");
        }
        Ok(Reply::Line(self.respond_move()?))
    }

    /// Place the engine's stone and format it as a reply
    fn respond_move(&mut self) -> Result<Response, ProtocolError> {
        let result = engine::play_move(&mut self.board, Player::One)?;
        if has_five_at_pos(&self.board, result.best_move) {
            info!(row = result.best_move.row, col = result.best_move.col, "engine completed five");
        }
        trace!("board after move:\n{}", self.board);
        Ok(Response::Move(result.best_move))
    }
}

impl Default for Protocol {
    fn default() -> Self {
        Self::new(ProtocolConfig::default())
    }
}
