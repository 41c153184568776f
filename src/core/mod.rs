//! Core engine types: players, RNG, dice, rule configuration, errors.
//!
//! These are the leaf building blocks; the board and the engine facade are
//! built on top of them.

pub mod player;
pub mod rng;
pub mod dice;
pub mod config;
pub mod error;

pub use player::{Holdings, Player, PlayerId};
pub use rng::GameRng;
pub use dice::{roll_one, roll_two, DiceRoll};
pub use config::Rules;
pub use error::{BoardError, RulesError, SetupError};
