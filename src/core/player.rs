//! Player identification and per-player game state.
//!
//! ## PlayerId
//!
//! Type-safe index into the engine's turn order.
//!
//! ## Player
//!
//! Balance, board position, holdings and jail status. Mutators are
//! crate-private: only the engine writes player state, everything outside
//! the crate reads snapshots.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Player identifier.
///
/// Player indices are 0-based and follow join order: the first player to
/// join is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use realty_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Board indices of owned properties, in acquisition order.
pub type Holdings = SmallVec<[usize; 8]>;

/// One participant's state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    balance: u32,
    position: usize,
    properties: Holdings,
    in_jail: bool,
    turns_in_jail: u32,
    jail_cards: u32,
}

impl Player {
    /// Create a player at the start space with the given balance.
    pub(crate) fn new(id: PlayerId, name: impl Into<String>, balance: u32) -> Self {
        Self {
            id,
            name: name.into(),
            balance,
            position: 0,
            properties: Holdings::new(),
            in_jail: false,
            turns_in_jail: 0,
            jail_cards: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn balance(&self) -> u32 {
        self.balance
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Board indices of the properties this player owns.
    #[must_use]
    pub fn properties(&self) -> &[usize] {
        &self.properties
    }

    #[must_use]
    pub fn in_jail(&self) -> bool {
        self.in_jail
    }

    #[must_use]
    pub fn turns_in_jail(&self) -> u32 {
        self.turns_in_jail
    }

    #[must_use]
    pub fn jail_cards(&self) -> u32 {
        self.jail_cards
    }

    /// Still counted towards the game: balance above zero.
    ///
    /// A player at zero keeps taking turns; this only feeds the
    /// end-of-game check.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.balance > 0
    }

    // === Money ===

    /// Remove money, clamping at zero.
    pub(crate) fn debit(&mut self, amount: u32) {
        self.balance = self.balance.saturating_sub(amount);
    }

    pub(crate) fn credit(&mut self, amount: u32) {
        self.balance = self.balance.saturating_add(amount);
    }

    // === Movement ===

    pub(crate) fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    // === Jail ===

    pub(crate) fn send_to_jail(&mut self, jail_index: usize) {
        self.in_jail = true;
        self.position = jail_index;
        self.turns_in_jail = 0;
    }

    pub(crate) fn release_from_jail(&mut self) {
        self.in_jail = false;
        self.turns_in_jail = 0;
    }

    pub(crate) fn increment_jail_turns(&mut self) {
        self.turns_in_jail += 1;
    }

    /// Spend a "get out of jail" card if one is held.
    pub(crate) fn consume_jail_card(&mut self) -> bool {
        if self.jail_cards > 0 {
            self.jail_cards -= 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn add_jail_card(&mut self) {
        self.jail_cards += 1;
    }

    // === Holdings ===

    /// Record ownership of the property at `index`. Duplicates are ignored.
    pub(crate) fn add_property(&mut self, index: usize) {
        if !self.properties.contains(&index) {
            self.properties.push(index);
        }
    }

    pub(crate) fn remove_property(&mut self, index: usize) {
        self.properties.retain(|&mut owned| owned != index);
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - Balance: ${}", self.name, self.balance)?;
        if self.in_jail {
            write!(f, " (In jail)")?;
        }
        Ok(())
    }
}
