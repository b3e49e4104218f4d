//! Headless AI-vs-AI matches.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::core::{Game, GameConfig, GameError, Side};
use crate::player::AiPlayer;

/// Sunk ship count on each side's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DestroyedCounts {
    pub human: usize,
    pub ai: usize,
}

/// Outcome of one simulated game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimSummary {
    pub seed: u64,
    pub board_size: usize,
    pub winner: Side,
    pub moves: usize,
    pub turns: usize,
    pub destroyed: DestroyedCounts,
}

/// Play a full game with random shooters in both seats. The same `seed`
/// always replays the same game.
pub fn simulate(config: GameConfig, seed: u64) -> Result<SimSummary, GameError> {
    let mut game = Game::new(
        config,
        Box::new(AiPlayer::seated(Side::Human)),
        Box::new(AiPlayer::seated(Side::Ai)),
        SmallRng::seed_from_u64(seed),
    )?;
    let winner = game.run()?;
    Ok(SimSummary {
        seed,
        board_size: config.board_size,
        winner,
        moves: game.moves(),
        turns: game.turn(),
        destroyed: DestroyedCounts {
            human: game.board(Side::Human).destroyed_count(),
            ai: game.board(Side::Ai).destroyed_count(),
        },
    })
}
