//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AiPlayer: fires at uniformly random coordinates
//! - HumanPlayer: takes its coordinates from a [`CoordinateSource`]

use std::io;

use log::debug;
use rand::rngs::SmallRng;

use crate::core::{Board, Coordinate, ShotError, ShotOutcome, Side};

/// Interface implemented by different player types.
///
/// A player never owns a board. The game lends it the opponent's board for
/// the length of a turn and keeps its own board out of reach.
pub trait Player {
    /// Seat this player occupies.
    fn side(&self) -> Side;

    /// Choose the next coordinate to fire at on `enemy`.
    ///
    /// Only fails when the player's input stream does.
    fn select_target(&mut self, rng: &mut SmallRng, enemy: &Board) -> io::Result<Coordinate>;

    /// Inform the player that `target` was rejected by the board.
    fn shot_rejected(&mut self, _target: Coordinate, _err: ShotError) {}

    /// Inform the player of the result of a shot the board accepted.
    fn shot_resolved(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}

    /// Fire until the board accepts a shot. Returns `true` when the shooter
    /// moves again.
    fn take_turn(&mut self, rng: &mut SmallRng, enemy: &mut Board) -> io::Result<bool> {
        loop {
            let target = self.select_target(rng, enemy)?;
            match enemy.resolve_shot(target) {
                Ok(outcome) => {
                    self.shot_resolved(target, outcome);
                    return Ok(outcome.grants_extra_move());
                }
                Err(err) => {
                    debug!("{:?} shot at ({}) rejected: {:?}", self.side(), target, err);
                    self.shot_rejected(target, err);
                }
            }
        }
    }
}

/// Blocking supplier of human-chosen coordinates.
pub trait CoordinateSource {
    /// Return one coordinate with both axes in `0..size`.
    fn collect_coordinate(&mut self, size: usize) -> io::Result<Coordinate>;

    /// Show a line of feedback to whoever is typing.
    fn report(&mut self, _message: &str) {}
}

pub mod ai;
pub use ai::AiPlayer;

pub mod human;
pub use human::HumanPlayer;
