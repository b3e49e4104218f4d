use std::io::{self, Write};

use rand::rngs::SmallRng;
use rand::Rng;

use crate::core::{Board, Coordinate, ShotError, ShotOutcome, Side};

use super::Player;

/// Opponent that fires at uniformly random coordinates. Repeats are left to
/// the board to reject.
pub struct AiPlayer {
    side: Side,
    out: Option<Box<dyn Write>>,
}

impl AiPlayer {
    /// Silent player for the AI seat.
    pub fn new() -> Self {
        Self::seated(Side::Ai)
    }

    /// Silent player for an arbitrary seat, used for AI-vs-AI matches.
    pub fn seated(side: Side) -> Self {
        Self { side, out: None }
    }

    /// Announce every move and its result on `out`.
    pub fn announcing(mut self, out: Box<dyn Write>) -> Self {
        self.out = Some(out);
        self
    }

    fn say(&mut self, message: std::fmt::Arguments<'_>) {
        if let Some(out) = self.out.as_mut() {
            // the game goes on even if the terminal is gone
            let _ = writeln!(out, "{}", message);
        }
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn side(&self) -> Side {
        self.side
    }

    fn select_target(&mut self, rng: &mut SmallRng, enemy: &Board) -> io::Result<Coordinate> {
        let size = enemy.size();
        let target = Coordinate::new(rng.random_range(0..size), rng.random_range(0..size));
        self.say(format_args!("AI moving: {}", target));
        Ok(target)
    }

    fn shot_rejected(&mut self, _target: Coordinate, err: ShotError) {
        self.say(format_args!("{}", err));
    }

    fn shot_resolved(&mut self, _target: Coordinate, outcome: ShotOutcome) {
        self.say(format_args!("{}", outcome));
    }
}
