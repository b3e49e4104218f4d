//! Line-based coordinate entry for the human player.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::core::Coordinate;
use crate::player::CoordinateSource;

/// Why a line typed by the player is not a usable coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Enter 2 coordinates!")]
    WrongCount,
    #[error("X must be a number!")]
    RowNotNumber,
    #[error("Y must be a number!")]
    ColNotNumber,
    #[error("Coordinates must be between 1 and {0}!")]
    OutOfRange(usize),
}

/// Parse "x y", both one-based, into a zero-based coordinate on a
/// `size`×`size` board.
pub fn parse_coordinate(line: &str, size: usize) -> Result<Coordinate, InputError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [x, y] = parts.as_slice() else {
        return Err(InputError::WrongCount);
    };
    let row: usize = x.parse().map_err(|_| InputError::RowNotNumber)?;
    let col: usize = y.parse().map_err(|_| InputError::ColNotNumber)?;
    if !(1..=size).contains(&row) || !(1..=size).contains(&col) {
        return Err(InputError::OutOfRange(size));
    }
    Ok(Coordinate::new(row - 1, col - 1))
}

/// Prompts on `output` and reads answers from `input` until one parses.
pub struct LineInput<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl LineInput<io::StdinLock<'static>, io::Stdout> {
    /// Read from the process's standard input, write to its standard output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CoordinateSource for LineInput<R, W> {
    fn collect_coordinate(&mut self, size: usize) -> io::Result<Coordinate> {
        loop {
            write!(self.output, "You moving: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before a coordinate was entered",
                ));
            }
            match parse_coordinate(&line, size) {
                Ok(c) => return Ok(c),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn report(&mut self, message: &str) {
        let _ = writeln!(self.output, "{}", message);
    }
}
