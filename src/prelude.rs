//! Commonly used types and utilities for ease of import.

pub use crate::core::{Board, Coordinate, Game, GameConfig, GamePhase, ShotOutcome, Side};
pub use crate::player::{AiPlayer, CoordinateSource, HumanPlayer, Player};
pub use crate::cli::{render_board, LineInput};
