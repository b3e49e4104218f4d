//! Turn state machine: fleet setup, alternating moves and the win check.

use log::info;
use rand::rngs::SmallRng;

use super::{
    board::Board,
    common::{GameError, Side},
    config::GameConfig,
    fleet,
};
use crate::player::Player;

/// Where the game currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Boards are still empty.
    Setup,
    Playing,
    /// Carries the winning side.
    Finished(Side),
}

/// Owns both boards and both players; lends each player the opposing
/// board for one move at a time.
pub struct Game {
    config: GameConfig,
    rng: SmallRng,
    boards: [Board; 2],
    players: [Box<dyn Player>; 2],
    phase: GamePhase,
    active: Side,
    turn: usize,
    moves: usize,
}

impl Game {
    /// Seat the two players. Boards stay empty until [`Game::setup`].
    pub fn new(
        config: GameConfig,
        human: Box<dyn Player>,
        ai: Box<dyn Player>,
        rng: SmallRng,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let size = config.board_size;
        Ok(Self {
            config,
            rng,
            boards: [Board::new(size), Board::new(size)],
            players: [human, ai],
            phase: GamePhase::Setup,
            active: Side::Human,
            turn: 0,
            moves: 0,
        })
    }

    /// Start from boards laid out by the caller, already in their play phase.
    /// The AI board is hidden.
    pub fn with_boards(
        human: Box<dyn Player>,
        ai: Box<dyn Player>,
        human_board: Board,
        mut ai_board: Board,
        rng: SmallRng,
    ) -> Result<Self, GameError> {
        let config = GameConfig::new(human_board.size())?;
        ai_board.set_hidden(true);
        Ok(Self {
            config,
            rng,
            boards: [human_board, ai_board],
            players: [human, ai],
            phase: GamePhase::Playing,
            active: Side::Human,
            turn: 0,
            moves: 0,
        })
    }

    /// Generate both fleets and start play with the human to move.
    pub fn setup(&mut self) -> Result<(), GameError> {
        if self.phase != GamePhase::Setup {
            return Err(GameError::NotPlaying);
        }
        let size = self.config.board_size;
        let human_board = fleet::generate(size, &mut self.rng);
        let mut ai_board = fleet::generate(size, &mut self.rng);
        ai_board.set_hidden(true);
        self.boards = [human_board, ai_board];
        self.phase = GamePhase::Playing;
        info!("fleets placed on {}x{} boards, game started", size, size);
        Ok(())
    }

    /// Play one move of the active side and report the resulting phase.
    ///
    /// A hit or a kill keeps the same side active; a miss hands the turn over.
    pub fn step(&mut self) -> Result<GamePhase, GameError> {
        if self.phase != GamePhase::Playing {
            return Err(GameError::NotPlaying);
        }
        let side = self.active;
        let repeat = self.players[side.index()]
            .take_turn(&mut self.rng, &mut self.boards[side.other().index()])?;
        self.moves += 1;

        if self.board(Side::Ai).all_destroyed() {
            self.phase = GamePhase::Finished(Side::Human);
        } else if self.board(Side::Human).all_destroyed() {
            self.phase = GamePhase::Finished(Side::Ai);
        } else if !repeat {
            self.active = side.other();
            self.turn += 1;
        }

        if let GamePhase::Finished(winner) = self.phase {
            info!("{:?} wins after {} moves", winner, self.moves);
        }
        Ok(self.phase)
    }

    /// Set up if needed, then play until one fleet is gone.
    pub fn run(&mut self) -> Result<Side, GameError> {
        if self.phase == GamePhase::Setup {
            self.setup()?;
        }
        loop {
            match self.phase {
                GamePhase::Finished(winner) => return Ok(winner),
                _ => {
                    self.step()?;
                }
            }
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Side whose move comes next.
    pub fn active(&self) -> Side {
        self.active
    }

    /// Number of times the move passed from one side to the other.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Accepted shots so far, both sides together.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// The board belonging to `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }
}
