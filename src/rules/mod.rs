//! The game engine facade and the views it hands out.
//!
//! `Game` is the sole mutator of player and property state. Front ends call
//! its operations in turn order and render the owned snapshots it returns.

pub mod engine;
pub mod view;

pub use engine::{Game, GameBuilder, GamePhase, GameResult};
pub use view::{Landing, MovementResult, PlayerView, PropertyView};
