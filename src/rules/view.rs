//! Read-only snapshots handed to front ends.
//!
//! Every view is an owned copy. Holding one never aliases engine state, so
//! a display layer cannot break engine invariants through it.

use serde::{Deserialize, Serialize};

use crate::board::{Property, RentSchedule, SpaceKind};
use crate::core::{Player, PlayerId};

/// A player's public state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub balance: u32,
    pub position: usize,
    pub in_jail: bool,
    pub turns_in_jail: u32,
    pub jail_cards: u32,
    pub property_count: usize,
}

impl PlayerView {
    pub(crate) fn of(player: &Player) -> Self {
        Self {
            id: player.id(),
            name: player.name().to_string(),
            balance: player.balance(),
            position: player.position(),
            in_jail: player.in_jail(),
            turns_in_jail: player.turns_in_jail(),
            jail_cards: player.jail_cards(),
            property_count: player.properties().len(),
        }
    }

    /// Balance above zero.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.balance > 0
    }
}

/// A property's economics and current development.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyView {
    /// Board index.
    pub index: usize,
    pub name: String,
    pub owner: Option<PlayerId>,
    pub houses: u8,
    pub has_hotel: bool,
    pub price: u32,
    pub build_cost: u32,
    pub rent: RentSchedule,
    /// Rent at the current construction level.
    pub current_rent: u32,
    /// What the bank would pay right now.
    pub sale_value: u32,
}

impl PropertyView {
    pub(crate) fn of(index: usize, property: &Property) -> Self {
        Self {
            index,
            name: property.name.clone(),
            owner: property.owner(),
            houses: property.houses(),
            has_hotel: property.has_hotel(),
            price: property.price,
            build_cost: property.build_cost,
            rent: property.rent,
            current_rent: property.calculate_rent(),
            sale_value: property.sale_value(),
        }
    }
}

/// Where a move ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementResult {
    pub position: usize,
    pub space_name: String,
    pub kind: SpaceKind,
    /// The passing-start bonus was credited.
    pub passed_start: bool,
}

/// Automatic effect of the space a player landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Landing {
    /// No automatic effect.
    Nothing,
    /// The player was moved to jail.
    SentToJail,
    /// Rent changed hands.
    RentPaid { owner: PlayerId, amount: u32 },
}
