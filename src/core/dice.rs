//! Six-sided dice.
//!
//! Pure functions of an injected random source. Callers pass the engine's
//! `GameRng` in play and any fixed `Rng` in tests.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of faces on a die.
pub const FACES: u8 = 6;

/// Roll a single die, uniform in `1..=6`.
pub fn roll_one<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(1..=FACES)
}

/// Roll two independent dice.
pub fn roll_two<R: Rng + ?Sized>(rng: &mut R) -> DiceRoll {
    let first = roll_one(rng);
    let second = roll_one(rng);
    DiceRoll::new(first, second)
}

/// The faces shown by a two-dice roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll {
    pub first: u8,
    pub second: u8,
}

impl DiceRoll {
    /// Build a roll from explicit faces.
    #[must_use]
    pub const fn new(first: u8, second: u8) -> Self {
        Self { first, second }
    }

    /// Sum of both faces (2-12 for real dice).
    #[must_use]
    pub const fn total(self) -> usize {
        self.first as usize + self.second as usize
    }

    /// Both faces equal.
    #[must_use]
    pub const fn is_doubles(self) -> bool {
        self.first == self.second
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} + {} = {}", self.first, self.second, self.total())
    }
}
