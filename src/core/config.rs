//! Rule configuration.
//!
//! Every monetary and turn threshold the engine consults lives in `Rules`.
//! A game owns its own `Rules` value, so independent games (for example in
//! tests) never share configuration.
//!
//! The tax, fortune and misfortune amounts are carried for front ends and
//! future card effects; the engine does not apply them on landing.

use serde::{Deserialize, Serialize};

use super::error::RulesError;

/// Complete rule configuration.
///
/// `Rules::default()` holds the standard values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Balance each player starts with.
    pub starting_balance: u32,

    /// Credit for moving onto or past the start space.
    pub pass_start_bonus: u32,

    /// Failed doubles attempts before a jailed player is force-released.
    pub jail_turn_limit: u32,

    /// Fine charged on the forced release.
    pub jail_fine: u32,

    /// Consecutive doubles a player may roll in one turn.
    pub max_consecutive_doubles: u32,

    /// Fewest players a game is meant for.
    pub min_players: usize,

    /// Most players `add_player` accepts.
    pub max_players: usize,

    /// Amount charged on tax spaces.
    pub tax_amount: u32,

    /// Prize paid by a fortune card.
    pub fortune_prize: u32,

    /// Fine charged by a misfortune card.
    pub misfortune_fine: u32,

    /// Money held by the bank at game start.
    pub bank_reserve: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            starting_balance: 4000,
            pass_start_bonus: 200,
            jail_turn_limit: 3,
            jail_fine: 50,
            max_consecutive_doubles: 3,
            min_players: 2,
            max_players: 6,
            tax_amount: 200,
            fortune_prize: 200,
            misfortune_fine: 150,
            bank_reserve: 200_000,
        }
    }
}

impl Rules {
    /// Standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse rules from JSON. Missing fields take their standard value.
    pub fn from_json(json: &str) -> Result<Self, RulesError> {
        let rules: Self = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.min_players > self.max_players {
            return Err(RulesError::PlayerBounds {
                min: self.min_players,
                max: self.max_players,
            });
        }
        if self.jail_turn_limit == 0 {
            return Err(RulesError::ZeroJailTurns);
        }
        Ok(())
    }

    #[must_use]
    pub fn with_starting_balance(mut self, amount: u32) -> Self {
        self.starting_balance = amount;
        self
    }

    #[must_use]
    pub fn with_pass_start_bonus(mut self, amount: u32) -> Self {
        self.pass_start_bonus = amount;
        self
    }

    /// Set the forced-release threshold and its fine.
    #[must_use]
    pub fn with_jail(mut self, turn_limit: u32, fine: u32) -> Self {
        self.jail_turn_limit = turn_limit;
        self.jail_fine = fine;
        self
    }

    /// Set the accepted player-count range.
    #[must_use]
    pub fn with_player_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_values() {
        let rules = Rules::default();
        assert_eq!(rules.starting_balance, 4000);
        assert_eq!(rules.pass_start_bonus, 200);
        assert_eq!(rules.jail_turn_limit, 3);
        assert_eq!(rules.jail_fine, 50);
        assert_eq!(rules.max_consecutive_doubles, 3);
        assert_eq!((rules.min_players, rules.max_players), (2, 6));
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let rules = Rules::new()
            .with_starting_balance(1500)
            .with_pass_start_bonus(100)
            .with_jail(2, 75)
            .with_player_bounds(2, 4);

        assert_eq!(rules.starting_balance, 1500);
        assert_eq!(rules.pass_start_bonus, 100);
        assert_eq!(rules.jail_turn_limit, 2);
        assert_eq!(rules.jail_fine, 75);
        assert_eq!(rules.max_players, 4);
    }

    #[test]
    fn test_from_json_partial() {
        let rules = Rules::from_json(r#"{ "starting_balance": 2500, "jail_fine": 80 }"#).unwrap();
        assert_eq!(rules.starting_balance, 2500);
        assert_eq!(rules.jail_fine, 80);
        assert_eq!(rules.pass_start_bonus, 200);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        let err = Rules::from_json(r#"{ "min_players": 5, "max_players": 3 }"#).unwrap_err();
        assert!(matches!(err, RulesError::PlayerBounds { min: 5, max: 3 }));

        let err = Rules::from_json(r#"{ "jail_turn_limit": 0 }"#).unwrap_err();
        assert!(matches!(err, RulesError::ZeroJailTurns));

        let err = Rules::from_json("42").unwrap_err();
        assert!(matches!(err, RulesError::Parse(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let rules = Rules::new().with_jail(4, 120);
        let json = serde_json::to_string(&rules).unwrap();
        assert_eq!(Rules::from_json(&json).unwrap(), rules);
    }
}
