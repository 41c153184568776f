//! # realty-engine
//!
//! Rule engine for a turn-based property-trading board game for 2-6 players
//! on a fixed 40-space circular board.
//!
//! ## Design Principles
//!
//! 1. **Facade as sole mutator**: `Game` owns every player and property and
//!    is the only code that changes them. Callers receive owned snapshots.
//!
//! 2. **Failures are values**: buying, building, selling and jail release
//!    return `bool`. Only an out-of-range board index panics.
//!
//! 3. **Injected randomness**: dice draw from the game's own seeded
//!    `GameRng`, so a seed replays a whole game.
//!
//! 4. **Configuration is data**: `Rules` and the board table are plain
//!    values, optionally loaded from JSON, owned per game.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, dice, rule configuration, errors
//! - `board`: Space variants, property economics, the standard board
//! - `rules`: The `Game` facade, snapshots, game result
//!
//! ## Example
//!
//! ```
//! use realty_engine::{GameBuilder, Landing};
//!
//! let mut game = GameBuilder::new().player("Ana").player("Bia").build(7).unwrap();
//!
//! for _ in 0..500 {
//!     if game.is_game_over() {
//!         break;
//!     }
//!     let me = game.current_player_snapshot().unwrap();
//!     if me.in_jail {
//!         let roll = game.roll_dice();
//!         game.attempt_jail_release(roll);
//!         game.advance_turn();
//!         continue;
//!     }
//!
//!     let roll = game.roll_dice();
//!     game.move_player(roll.total());
//!     if game.resolve_current_space() == Landing::SentToJail {
//!         game.advance_turn();
//!         continue;
//!     }
//!     if !game.attempt_purchase() {
//!         game.attempt_build();
//!     }
//!     game.advance_turn();
//! }
//! ```

pub mod core;
pub mod board;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    BoardError, DiceRoll, GameRng, Player, PlayerId, Rules, RulesError, SetupError,
};

pub use crate::board::{Board, Property, RentSchedule, Space, SpaceKind, BOARD_SIZE};

pub use crate::rules::{
    Game, GameBuilder, GamePhase, GameResult, Landing, MovementResult, PlayerView, PropertyView,
};
