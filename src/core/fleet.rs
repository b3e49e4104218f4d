//! Random fleet generation by rejection sampling.

use log::debug;
use rand::Rng;

use super::board::Board;
use super::common::PlacementError;
use super::config::{FLEET, PLACEMENT_ATTEMPTS};
use super::coord::Coordinate;
use super::ship::{Orientation, Ship};

/// Try to lay out `lengths` on a fresh board, spending at most `attempts`
/// random draws across the whole fleet.
///
/// Bows are drawn from `0..=size`, one past the last valid index; the bounds
/// check in [`Board::place_ship`] rejects those draws like any other bad
/// placement.
pub fn try_generate<R: Rng + ?Sized>(
    size: usize,
    lengths: &[usize],
    attempts: usize,
    rng: &mut R,
) -> Result<Board, PlacementError> {
    let mut board = Board::new(size);
    let mut used = 0;
    for &length in lengths {
        loop {
            used += 1;
            if used > attempts {
                return Err(PlacementError::PlacementExhausted { attempts });
            }
            let bow = Coordinate::new(rng.random_range(0..=size), rng.random_range(0..=size));
            let ship = Ship::new(bow, length, Orientation::random(rng));
            match board.place_ship(ship) {
                Ok(()) => break,
                Err(PlacementError::WrongShipPlacement) => continue,
                Err(e) => return Err(e),
            }
        }
    }
    board.begin_play();
    Ok(board)
}

/// Generate a board carrying the standard [`FLEET`], starting over from an
/// empty grid whenever an attempt runs out of draws.
pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Board {
    let mut rounds = 0usize;
    loop {
        rounds += 1;
        match try_generate(size, &FLEET, PLACEMENT_ATTEMPTS, rng) {
            Ok(board) => {
                debug!("fleet placed on {}x{} board after {} round(s)", size, size, rounds);
                return board;
            }
            Err(e) => debug!("discarding board: {}", e),
        }
    }
}
