use std::io;

use rand::rngs::SmallRng;

use crate::core::{Board, Coordinate, ShotError, ShotOutcome, Side};

use super::{CoordinateSource, Player};

/// Player whose targets come from outside the engine, usually a terminal.
pub struct HumanPlayer<S> {
    source: S,
}

impl<S: CoordinateSource> HumanPlayer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: CoordinateSource> Player for HumanPlayer<S> {
    fn side(&self) -> Side {
        Side::Human
    }

    fn select_target(&mut self, _rng: &mut SmallRng, enemy: &Board) -> io::Result<Coordinate> {
        self.source.collect_coordinate(enemy.size())
    }

    fn shot_rejected(&mut self, _target: Coordinate, err: ShotError) {
        self.source.report(&err.to_string());
    }

    fn shot_resolved(&mut self, _target: Coordinate, outcome: ShotOutcome) {
        self.source.report(&outcome.to_string());
    }
}
