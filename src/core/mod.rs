//! Core sea battle engine
//!
//! Pure game logic with no terminal I/O: coordinates, ships, boards with
//! contour exclusion, random fleet generation and the turn state machine.

pub mod board;
pub mod common;
pub mod config;
pub mod coord;
pub mod fleet;
pub mod game;
pub mod ship;

// Re-export commonly used types
pub use board::{Board, Cell};
pub use common::{ConfigError, GameError, PlacementError, ShotError, ShotOutcome, Side};
pub use config::*;
pub use coord::Coordinate;
pub use game::{Game, GamePhase};
pub use ship::{Orientation, Ship};
