//! Common types for the engine: shot outcomes, sides and error kinds.

use serde::Serialize;
use thiserror::Error;

use super::coord::Coordinate;

/// Result of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShotOutcome {
    /// Shot landed on water.
    Miss,
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot took the last remaining segment of a ship.
    Destroyed,
}

impl ShotOutcome {
    /// `Hit` and `Destroyed` let the shooter fire again.
    pub fn grants_extra_move(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Destroyed)
    }
}

/// The two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Human,
    Ai,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Human => Side::Ai,
            Side::Ai => Side::Human,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Side::Human => 0,
            Side::Ai => 1,
        }
    }
}

/// Shot rejected by the board. Recoverable: the shooter picks again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShotError {
    #[error("Shooting out of range!")]
    OutOfBounds(Coordinate),
    #[error("You have already shot at these coordinates!")]
    AlreadyTargeted(Coordinate),
}

/// Errors raised while laying out a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// Ship leaves the grid, overlaps another ship or touches its contour.
    #[error("ship placement is out of bounds or touches another ship")]
    WrongShipPlacement,
    /// Random placement ran out of attempts for the current board.
    #[error("fleet placement gave up after {attempts} attempts")]
    PlacementExhausted { attempts: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size {size} is too small, the fleet needs at least {min}")]
    BoardTooSmall { size: usize, min: usize },
    #[error("board size {size} is too large, at most {max} is supported")]
    BoardTooLarge { size: usize, max: usize },
}

/// Errors surfaced by the game loop.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// `step` was called before setup or after the game finished.
    #[error("game is not in progress")]
    NotPlaying,
    /// The human's input stream failed or closed.
    #[error("failed to read player input")]
    Input(#[from] std::io::Error),
}

impl std::fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShotOutcome::Miss => write!(f, "Miss!"),
            ShotOutcome::Hit => write!(f, "Hit!"),
            ShotOutcome::Destroyed => write!(f, "Ship destroyed!"),
        }
    }
}
