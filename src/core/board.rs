//! One side's grid: ship placement, contour exclusion and shot resolution.

use std::collections::HashSet;
use std::fmt;

use log::{debug, info};
use serde::Serialize;

use super::common::{PlacementError, ShotError, ShotOutcome};
use super::coord::Coordinate;
use super::ship::Ship;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cell {
    Empty,
    Occupied,
    Hit,
    Miss,
}

pub struct Board {
    size: usize,
    hidden: bool,
    cells: Vec<Cell>,
    ships: Vec<Ship>,
    excluded: HashSet<Coordinate>,
    destroyed: usize,
}

impl Board {
    /// Create an empty, visible `size`×`size` board in the setup phase.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            hidden: false,
            cells: vec![Cell::Empty; size * size],
            ships: Vec::new(),
            excluded: HashSet::new(),
            destroyed: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether occupied cells are kept from the opponent's view.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships sunk so far.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    /// Returns `true` once every placed ship is sunk.
    pub fn all_destroyed(&self) -> bool {
        !self.ships.is_empty() && self.destroyed == self.ships.len()
    }

    pub fn is_out_of_bounds(&self, c: Coordinate) -> bool {
        c.row() >= self.size || c.col() >= self.size
    }

    /// Cells that can no longer be occupied (setup) or targeted (play).
    pub fn is_excluded(&self, c: Coordinate) -> bool {
        self.excluded.contains(&c)
    }

    /// Raw cell state, ships included regardless of `hidden`.
    pub fn cell(&self, c: Coordinate) -> Option<Cell> {
        if self.is_out_of_bounds(c) {
            return None;
        }
        Some(self.cells[self.index(c)])
    }

    /// Cell state as the opponent may see it.
    pub fn visible_cell(&self, c: Coordinate) -> Option<Cell> {
        match self.cell(c)? {
            Cell::Occupied if self.hidden => Some(Cell::Empty),
            cell => Some(cell),
        }
    }

    /// Put `ship` on the board and reserve its contour.
    ///
    /// Fails without touching the board if any cell of the ship is off the
    /// grid or already excluded.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), PlacementError> {
        let cells = ship.occupied_cells();
        if cells.is_empty() {
            return Err(PlacementError::WrongShipPlacement);
        }
        if cells
            .iter()
            .any(|&c| self.is_out_of_bounds(c) || self.excluded.contains(&c))
        {
            return Err(PlacementError::WrongShipPlacement);
        }
        for &c in &cells {
            let idx = self.index(c);
            self.cells[idx] = Cell::Occupied;
            self.excluded.insert(c);
        }
        debug!("placed {:?}", ship);
        self.contour(&cells, false);
        self.ships.push(ship);
        Ok(())
    }

    /// Leave the setup phase: placement reservations no longer apply.
    pub fn begin_play(&mut self) {
        self.excluded.clear();
    }

    /// Fire at `target`.
    pub fn resolve_shot(&mut self, target: Coordinate) -> Result<ShotOutcome, ShotError> {
        if self.is_out_of_bounds(target) {
            return Err(ShotError::OutOfBounds(target));
        }
        if !self.excluded.insert(target) {
            return Err(ShotError::AlreadyTargeted(target));
        }

        let idx = self.index(target);
        let Some(ship) = self.ships.iter_mut().find(|s| s.is_hit_by(target)) else {
            self.cells[idx] = Cell::Miss;
            info!("shot at ({}) missed", target);
            return Ok(ShotOutcome::Miss);
        };

        self.cells[idx] = Cell::Hit;
        if !ship.register_hit() {
            info!("shot at ({}) hit", target);
            return Ok(ShotOutcome::Hit);
        }

        let cells = ship.occupied_cells();
        self.destroyed += 1;
        self.contour(&cells, true);
        info!(
            "shot at ({}) destroyed a ship, {}/{} down",
            target,
            self.destroyed,
            self.ships.len()
        );
        Ok(ShotOutcome::Destroyed)
    }

    /// Exclude every free in-bounds neighbour of `cells`; with `reveal` the
    /// excluded cells are also shown as misses.
    fn contour(&mut self, cells: &[Coordinate], reveal: bool) {
        for c in cells {
            for n in c.neighbors() {
                if self.is_out_of_bounds(n) || self.excluded.contains(&n) {
                    continue;
                }
                if reveal {
                    let idx = self.index(n);
                    self.cells[idx] = Cell::Miss;
                }
                self.excluded.insert(n);
            }
        }
    }

    fn index(&self, c: Coordinate) -> usize {
        c.row() * self.size + c.col()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{ size: {}, hidden: {}, ships: {:?}, destroyed: {}, excluded: {} }}",
            self.size,
            self.hidden,
            self.ships,
            self.destroyed,
            self.excluded.len()
        )
    }
}
