use super::common::ConfigError;

pub const DEFAULT_BOARD_SIZE: usize = 6;

/// Smallest grid on which random placement of [`FLEET`] settles quickly.
pub const MIN_BOARD_SIZE: usize = 6;

/// Largest grid the text renderer lays out.
pub const MAX_BOARD_SIZE: usize = 26;

/// Ship lengths every side places, in placement order.
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Total number of ships in [`FLEET`].
pub const NUM_SHIPS: usize = FLEET.len();

/// Random placement draws allowed for a whole fleet before the board is
/// thrown away and generated again.
pub const PLACEMENT_ATTEMPTS: usize = 2000;

/// Parameters fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
}

impl GameConfig {
    pub fn new(board_size: usize) -> Result<Self, ConfigError> {
        let config = Self { board_size };
        config.validate()?;
        Ok(config)
    }

    /// Reject sizes the engine cannot play on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall {
                size: self.board_size,
                min: MIN_BOARD_SIZE,
            });
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge {
                size: self.board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}
