//! The game engine facade.
//!
//! `Game` owns the board, the players in turn order, the turn cursor and the
//! dice RNG. It is the only writer of player and property state; callers get
//! owned snapshots back.
//!
//! ## Turn protocol
//!
//! An orchestration layer drives each turn in this order:
//!
//! 1. `current_player_snapshot()`
//! 2. If jailed: `use_jail_card()`, or `roll_dice()` + `attempt_jail_release()`,
//!    or pass. Any jail outcome ends the turn without movement.
//! 3. `roll_dice()` + `move_player(roll.total())`
//! 4. `resolve_current_space()`; stop if the player is now jailed
//! 5. Optional `attempt_purchase()`
//! 6. Optional `attempt_build()` (skipped after a purchase this turn)
//! 7. Optional `list_owned_properties()` + `sell_by_name()`
//! 8. `advance_turn()`
//!
//! Invalid attempts return `false`; nothing here is fatal except an
//! out-of-range board index, which indicates an engine bug.

use serde::{Deserialize, Serialize};

use super::view::{Landing, MovementResult, PlayerView, PropertyView};
use crate::board::{Board, Space};
use crate::core::{dice, DiceRoll, GameRng, Player, PlayerId, Rules, SetupError};

/// Hard cap from the width of `PlayerId`.
const PLAYER_ID_LIMIT: usize = u8::MAX as usize + 1;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The last player with money left.
    Winner(PlayerId),
    /// Everyone reached zero together.
    NoWinner,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Lifecycle of one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Accepting players.
    Setup,
    /// Turns are being played.
    InProgress,
    /// At most one active player remains.
    Finished,
}

/// Per-turn bookkeeping, cleared on `advance_turn`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct TurnState {
    doubles_streak: u32,
    purchased: bool,
}

/// A single game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    rules: Rules,
    board: Board,
    players: Vec<Player>,
    current: usize,
    rng: GameRng,
    turn: TurnState,
    started: bool,
}

impl Game {
    /// Create a game with no players.
    #[must_use]
    pub fn new(rules: Rules, board: Board, rng: GameRng) -> Self {
        Self {
            rules,
            board,
            players: Vec::new(),
            current: 0,
            rng,
            turn: TurnState::default(),
            started: false,
        }
    }

    /// Standard board and rules with a seeded RNG.
    #[must_use]
    pub fn standard(seed: u64) -> Self {
        Self::new(Rules::default(), Board::standard(), GameRng::new(seed))
    }

    // === Setup ===

    /// Join a player at the start space with the starting balance.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<PlayerId, SetupError> {
        let name = name.into();
        if self.started {
            return Err(SetupError::AlreadyStarted);
        }
        if name.trim().is_empty() {
            return Err(SetupError::EmptyName);
        }
        let max = self.rules.max_players.min(PLAYER_ID_LIMIT);
        if self.players.len() >= max {
            return Err(SetupError::TooManyPlayers { max });
        }

        let id = PlayerId::new(self.players.len() as u8);
        log::debug!("{} joined as {}", name, id);
        self.players
            .push(Player::new(id, name, self.rules.starting_balance));
        Ok(id)
    }

    /// Drop all players and return every property to the bank.
    pub fn reset(&mut self) {
        self.players.clear();
        self.current = 0;
        self.turn = TurnState::default();
        self.started = false;
        self.board.reset_ownership();
        log::debug!("game reset");
    }

    /// Give a player one "get out of jail" card.
    ///
    /// Returns `false` for an unknown player.
    pub fn grant_jail_card(&mut self, player: PlayerId) -> bool {
        match self.players.get_mut(player.index()) {
            Some(p) => {
                p.add_jail_card();
                true
            }
            None => false,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Enough players have joined to meet `Rules::min_players`.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.players.len() >= self.rules.min_players
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if !self.started {
            GamePhase::Setup
        } else if self.is_game_over() {
            GamePhase::Finished
        } else {
            GamePhase::InProgress
        }
    }

    /// Whose turn it is, if anyone has joined.
    #[must_use]
    pub fn current_player_id(&self) -> Option<PlayerId> {
        self.players.get(self.current).map(Player::id)
    }

    #[must_use]
    pub fn current_player_snapshot(&self) -> Option<PlayerView> {
        self.players.get(self.current).map(PlayerView::of)
    }

    #[must_use]
    pub fn player_snapshot(&self, player: PlayerId) -> Option<PlayerView> {
        self.players.get(player.index()).map(PlayerView::of)
    }

    /// Every player in turn order.
    #[must_use]
    pub fn players_snapshot(&self) -> Vec<PlayerView> {
        self.players.iter().map(PlayerView::of).collect()
    }

    /// View of the property at a board index.
    #[must_use]
    pub fn property_snapshot(&self, index: usize) -> Option<PropertyView> {
        self.board
            .property_at(index)
            .map(|property| PropertyView::of(index, property))
    }

    /// Doubles rolled in a row by the current player this turn.
    #[must_use]
    pub fn doubles_streak(&self) -> u32 {
        self.turn.doubles_streak
    }

    /// The doubles streak reached `Rules::max_consecutive_doubles`.
    ///
    /// The engine reports this; acting on it is left to the caller.
    #[must_use]
    pub fn exceeded_doubles_limit(&self) -> bool {
        self.turn.doubles_streak >= self.rules.max_consecutive_doubles
    }

    /// A purchase already happened this turn.
    #[must_use]
    pub fn purchased_this_turn(&self) -> bool {
        self.turn.purchased
    }

    // === Dice and movement ===

    /// Roll two dice from the game's RNG.
    pub fn roll_dice(&mut self) -> DiceRoll {
        self.begin();
        let roll = dice::roll_two(&mut self.rng);
        if roll.is_doubles() {
            self.turn.doubles_streak += 1;
        } else {
            self.turn.doubles_streak = 0;
        }
        log::debug!("rolled {}", roll);
        roll
    }

    /// Move the current player `steps` spaces forward.
    ///
    /// Reaching or passing the start space credits the passing-start bonus.
    /// Returns `None` when there are no players.
    pub fn move_player(&mut self, steps: usize) -> Option<MovementResult> {
        self.begin();
        let size = self.board.size();
        let player = self.players.get_mut(self.current)?;

        let old = player.position();
        let passed_start = old + steps >= size;
        if passed_start {
            player.credit(self.rules.pass_start_bonus);
        }
        let position = (old + steps) % size;
        player.set_position(position);

        let space = self.board.space_at(position);
        log::debug!("{} moved {} -> {} ({})", player.name(), old, position, space.name());

        Some(MovementResult {
            position,
            space_name: space.name().to_string(),
            kind: space.kind(),
            passed_start,
        })
    }

    // === Jail ===

    /// Spend a "get out of jail" card, releasing the current player.
    ///
    /// Returns whether a card was available.
    pub fn use_jail_card(&mut self) -> bool {
        self.begin();
        let Some(player) = self.players.get_mut(self.current) else {
            return false;
        };
        if !player.consume_jail_card() {
            return false;
        }
        player.release_from_jail();
        log::info!("{} used a jail card", player.name());
        true
    }

    /// Try to leave jail with a roll.
    ///
    /// Doubles release immediately. Otherwise the jail counter goes up; once
    /// it reaches the jail turn limit the player is released by paying the
    /// fine, provided they can afford it. A player who is not jailed is
    /// trivially free.
    pub fn attempt_jail_release(&mut self, roll: DiceRoll) -> bool {
        self.begin();
        let Some(player) = self.players.get_mut(self.current) else {
            return false;
        };
        if !player.in_jail() {
            return true;
        }

        if roll.is_doubles() {
            player.release_from_jail();
            log::info!("{} rolled doubles and left jail", player.name());
            return true;
        }

        player.increment_jail_turns();
        if player.turns_in_jail() >= self.rules.jail_turn_limit
            && player.balance() >= self.rules.jail_fine
        {
            player.debit(self.rules.jail_fine);
            player.release_from_jail();
            log::info!("{} paid the jail fine of {}", player.name(), self.rules.jail_fine);
            return true;
        }

        log::debug!("{} stays in jail ({} turns)", player.name(), player.turns_in_jail());
        false
    }

    // === Landing ===

    /// Apply the automatic effect of the current player's space.
    ///
    /// Go-to-jail jails the player. A developed property owned by someone
    /// else charges rent. Everything else, including undeveloped property,
    /// has no automatic effect.
    pub fn resolve_current_space(&mut self) -> Landing {
        self.begin();
        let Some(player) = self.players.get(self.current) else {
            return Landing::Nothing;
        };
        let payer = player.id();

        match self.board.space_at(player.position()) {
            Space::GoToJail { .. } => {
                let jail = self.board.jail_index();
                let player = &mut self.players[self.current];
                player.send_to_jail(jail);
                log::info!("{} was sent to jail", player.name());
                Landing::SentToJail
            }
            Space::Property(property) => match property.owner() {
                Some(owner) if owner != payer && property.is_developed() => {
                    let amount = property.calculate_rent();
                    self.players[self.current].debit(amount);
                    self.players[owner.index()].credit(amount);
                    log::debug!("{} paid {} rent on {} to {}", payer, amount, property.name, owner);
                    Landing::RentPaid { owner, amount }
                }
                _ => Landing::Nothing,
            },
            _ => Landing::Nothing,
        }
    }

    // === Purchase, construction, sale ===

    /// Buy the property under the current player.
    ///
    /// Fails on a non-property space, an owned property, or insufficient
    /// balance.
    pub fn attempt_purchase(&mut self) -> bool {
        self.begin();
        let Some(player) = self.players.get_mut(self.current) else {
            return false;
        };
        let position = player.position();
        let Some(property) = self.board.property_at_mut(position) else {
            return false;
        };
        if property.owner().is_some() || player.balance() < property.price {
            return false;
        }

        player.debit(property.price);
        property.set_owner(player.id());
        player.add_property(position);
        self.turn.purchased = true;
        log::info!("{} bought {} for {}", player.name(), property.name, property.price);
        true
    }

    /// Build one level on the property under the current player.
    ///
    /// Fails on a non-property space, a property the player does not own,
    /// one that already has a hotel, or insufficient balance.
    pub fn attempt_build(&mut self) -> bool {
        self.begin();
        let Some(player) = self.players.get_mut(self.current) else {
            return false;
        };
        let Some(property) = self.board.property_at_mut(player.position()) else {
            return false;
        };
        if property.owner() != Some(player.id())
            || property.has_hotel()
            || player.balance() < property.build_cost
        {
            return false;
        }

        player.debit(property.build_cost);
        property.build();
        log::info!(
            "{} built on {} (houses: {}, hotel: {})",
            player.name(),
            property.name,
            property.houses(),
            property.has_hotel()
        );
        true
    }

    /// The current player's holdings, in acquisition order.
    #[must_use]
    pub fn list_owned_properties(&self) -> Vec<PropertyView> {
        let Some(player) = self.players.get(self.current) else {
            return Vec::new();
        };
        player
            .properties()
            .iter()
            .filter_map(|&index| self.property_snapshot(index))
            .collect()
    }

    /// Sell one of the current player's properties to the bank, matched by
    /// name ignoring case.
    pub fn sell_by_name(&mut self, name: &str) -> bool {
        self.begin();
        let Some(seller) = self.players.get_mut(self.current) else {
            return false;
        };
        let wanted = name.to_lowercase();
        let board = &self.board;
        let Some(index) = seller.properties().iter().copied().find(|&index| {
            board
                .property_at(index)
                .is_some_and(|p| p.name.to_lowercase() == wanted)
        }) else {
            return false;
        };

        let Some(property) = self.board.property_at_mut(index) else {
            return false;
        };
        let value = property.sale_value();
        if !property.sell_to_bank(seller) {
            return false;
        }
        seller.remove_property(index);
        log::info!("{} sold {} to the bank for {}", seller.name(), property.name, value);
        true
    }

    // === Turn order and termination ===

    /// Pass the turn to the next player. Zero-balance players keep their turn.
    pub fn advance_turn(&mut self) {
        self.begin();
        if self.players.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.players.len();
        self.turn = TurnState::default();
    }

    /// At most one player still has money.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.players.iter().filter(|p| p.is_active()).count() <= 1
    }

    /// Winner, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_game_over() {
            return None;
        }
        match self.players.iter().find(|p| p.is_active()) {
            Some(winner) => Some(GameResult::Winner(winner.id())),
            None => Some(GameResult::NoWinner),
        }
    }

    /// Leave `Setup` on the first turn action once someone has joined.
    fn begin(&mut self) {
        if !self.started && !self.players.is_empty() {
            self.started = true;
            log::debug!("game started with {} players", self.players.len());
        }
    }
}

/// Builder for a game with its players already seated.
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    rules: Rules,
    board: Option<Board>,
    players: Vec<String>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.players.push(name.into());
        self
    }

    /// Build the game with a seeded RNG.
    pub fn build(self, seed: u64) -> Result<Game, SetupError> {
        self.build_with_rng(GameRng::new(seed))
    }

    pub fn build_with_rng(self, rng: GameRng) -> Result<Game, SetupError> {
        let board = self.board.unwrap_or_default();
        let mut game = Game::new(self.rules, board, rng);
        for name in self.players {
            game.add_player(name)?;
        }
        Ok(game)
    }
}
