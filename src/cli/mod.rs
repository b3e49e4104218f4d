//! Terminal glue around the engine
//!
//! - `interface`: board rendering and the opening banner
//! - `input`: line-based coordinate entry for the human player

pub mod input;
pub mod interface;

pub use input::{parse_coordinate, InputError, LineInput};
pub use interface::*;
