//! Ships: a bow, a length and an orientation.

use std::fmt;

use rand::Rng;
use serde::Serialize;

use super::coord::Coordinate;

/// Direction a ship extends from its bow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    /// Along the row: column index grows.
    Horizontal,
    /// Along the column: row index grows.
    Vertical,
}

impl Orientation {
    /// Pick either orientation with equal probability.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A fleet member. Hit tracking is only changed by the owning board.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    bow: Coordinate,
    length: usize,
    orientation: Orientation,
    remaining_hits: usize,
}

impl Ship {
    pub fn new(bow: Coordinate, length: usize, orientation: Orientation) -> Self {
        Self {
            bow,
            length,
            orientation,
            remaining_hits: length,
        }
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Segments not yet hit.
    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }

    pub fn is_sunk(&self) -> bool {
        self.remaining_hits == 0
    }

    /// Cells covered by the ship, starting at the bow.
    pub fn occupied_cells(&self) -> Vec<Coordinate> {
        (0..self.length)
            .map(|i| match self.orientation {
                Orientation::Horizontal => Coordinate::new(self.bow.row(), self.bow.col() + i),
                Orientation::Vertical => Coordinate::new(self.bow.row() + i, self.bow.col()),
            })
            .collect()
    }

    pub fn is_hit_by(&self, shot: Coordinate) -> bool {
        self.occupied_cells().contains(&shot)
    }

    /// Take one segment off. Returns `true` when this sank the ship.
    pub(crate) fn register_hit(&mut self) -> bool {
        if self.remaining_hits == 0 {
            return false;
        }
        self.remaining_hits -= 1;
        self.remaining_hits == 0
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ bow: ({}, {}), length: {}, orientation: {:?}, remaining: {} }}",
            self.bow.row(),
            self.bow.col(),
            self.length,
            self.orientation,
            self.remaining_hits,
        )
    }
}
