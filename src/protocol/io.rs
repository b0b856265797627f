//! Line-oriented transport between the manager and the protocol engine

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Blocking source of command lines
pub trait LineSource {
    /// Next line without its terminator, or `None` at end of input
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Sink for reply lines; each line is flushed before `send` returns
pub trait LineSink {
    fn send(&mut self, line: &str) -> io::Result<()>;
}

/// Reads lines from any buffered reader, typically locked stdin
pub struct Reader<R> {
    inner: R,
}

impl<R: BufRead> Reader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: BufRead> LineSource for Reader<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.inner.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Writes lines to any writer, flushing after each one
pub struct Writer<W> {
    inner: W,
}

impl<W: Write> Writer<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> LineSink for Writer<W> {
    fn send(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.inner, "{}", line)?;
        self.inner.flush()
    }
}

/// Scripted input
impl LineSource for VecDeque<String> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.pop_front())
    }
}

/// Captured output
impl LineSink for Vec<String> {
    fn send(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}
