//! Board spaces and property economics.
//!
//! `Space` is a sum type: every use site matches on the variant instead of
//! asking for a kind and then downcasting. Only `Space::Property` carries
//! economic data and mutable ownership state.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId};

/// Houses a property holds before the next build becomes a hotel.
pub const MAX_HOUSES: u8 = 4;

/// Share of the invested amount refunded on sale to the bank, in percent.
pub const SALE_REFUND_PERCENT: u32 = 90;

/// Discriminant of a `Space`, for views that must not carry property state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpaceKind {
    Start,
    Property,
    Fortune,
    Misfortune,
    Jail,
    GoToJail,
    Neutral,
    Tax,
}

impl std::fmt::Display for SpaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SpaceKind::Start => "Start",
            SpaceKind::Property => "Property",
            SpaceKind::Fortune => "Fortune",
            SpaceKind::Misfortune => "Misfortune",
            SpaceKind::Jail => "Jail",
            SpaceKind::GoToJail => "Go to jail",
            SpaceKind::Neutral => "Neutral",
            SpaceKind::Tax => "Tax",
        };
        f.write_str(label)
    }
}

/// One of the board's fixed positions.
///
/// Serialized with an internal `kind` tag, so a board table row reads
/// `{ "kind": "Jail", "name": "Jail" }` or
/// `{ "kind": "Property", "name": ..., "price": ..., "rent": {...}, "build_cost": ... }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Space {
    Start { name: String },
    Property(Property),
    Fortune { name: String },
    Misfortune { name: String },
    Jail { name: String },
    GoToJail { name: String },
    Neutral { name: String },
    Tax { name: String },
}

impl Space {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Space::Property(property) => &property.name,
            Space::Start { name }
            | Space::Fortune { name }
            | Space::Misfortune { name }
            | Space::Jail { name }
            | Space::GoToJail { name }
            | Space::Neutral { name }
            | Space::Tax { name } => name,
        }
    }

    #[must_use]
    pub fn kind(&self) -> SpaceKind {
        match self {
            Space::Start { .. } => SpaceKind::Start,
            Space::Property(_) => SpaceKind::Property,
            Space::Fortune { .. } => SpaceKind::Fortune,
            Space::Misfortune { .. } => SpaceKind::Misfortune,
            Space::Jail { .. } => SpaceKind::Jail,
            Space::GoToJail { .. } => SpaceKind::GoToJail,
            Space::Neutral { .. } => SpaceKind::Neutral,
            Space::Tax { .. } => SpaceKind::Tax,
        }
    }

    #[must_use]
    pub fn as_property(&self) -> Option<&Property> {
        match self {
            Space::Property(property) => Some(property),
            _ => None,
        }
    }

    pub(crate) fn as_property_mut(&mut self) -> Option<&mut Property> {
        match self {
            Space::Property(property) => Some(property),
            _ => None,
        }
    }
}

/// Rent owed at each construction level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentSchedule {
    /// No construction.
    pub base: u32,
    /// One to four houses, in order.
    pub houses: [u32; MAX_HOUSES as usize],
    /// Hotel.
    pub hotel: u32,
}

impl RentSchedule {
    #[must_use]
    pub const fn new(base: u32, houses: [u32; MAX_HOUSES as usize], hotel: u32) -> Self {
        Self { base, houses, hotel }
    }
}

/// A purchasable, buildable space.
///
/// Price, rent schedule and build cost are fixed. Owner and construction
/// level change during play and are not part of the serialized table.
/// `has_hotel` implies `houses == MAX_HOUSES`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub price: u32,
    pub rent: RentSchedule,
    pub build_cost: u32,

    #[serde(skip)]
    owner: Option<PlayerId>,
    #[serde(skip)]
    houses: u8,
    #[serde(skip)]
    has_hotel: bool,
}

impl Property {
    /// Create an unowned, undeveloped property.
    pub fn new(name: impl Into<String>, price: u32, rent: RentSchedule, build_cost: u32) -> Self {
        Self {
            name: name.into(),
            price,
            rent,
            build_cost,
            owner: None,
            houses: 0,
            has_hotel: false,
        }
    }

    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    #[must_use]
    pub fn houses(&self) -> u8 {
        self.houses
    }

    #[must_use]
    pub fn has_hotel(&self) -> bool {
        self.has_hotel
    }

    /// Any house or hotel present.
    #[must_use]
    pub fn is_developed(&self) -> bool {
        self.houses > 0 || self.has_hotel
    }

    /// Rent for the current construction level.
    #[must_use]
    pub fn calculate_rent(&self) -> u32 {
        if self.has_hotel {
            return self.rent.hotel;
        }
        match self.houses {
            0 => self.rent.base,
            n => self.rent.houses[usize::from(n.min(MAX_HOUSES)) - 1],
        }
    }

    /// Add one level of construction: a house, or a hotel once four houses
    /// stand. No-op when a hotel is already present.
    ///
    /// Funds and ownership are the caller's concern.
    pub fn build(&mut self) {
        if self.has_hotel {
            return;
        }
        if self.houses < MAX_HOUSES {
            self.houses += 1;
        } else {
            self.has_hotel = true;
        }
    }

    /// Everything spent on this property: price plus each construction level.
    #[must_use]
    pub fn total_invested(&self) -> u32 {
        let levels = u32::from(self.houses) + u32::from(self.has_hotel);
        self.price + levels * self.build_cost
    }

    /// What the bank pays for this property right now.
    #[must_use]
    pub fn sale_value(&self) -> u32 {
        self.total_invested() * SALE_REFUND_PERCENT / 100
    }

    /// Sell back to the bank.
    ///
    /// Fails unless `seller` owns the property. On success the seller is
    /// credited `sale_value()` and the property returns to the bank with no
    /// construction. Removing it from the seller's holdings is left to the
    /// engine, which owns the holdings bookkeeping.
    pub fn sell_to_bank(&mut self, seller: &mut Player) -> bool {
        if self.owner != Some(seller.id()) {
            return false;
        }

        seller.credit(self.sale_value());
        self.reset_to_bank();
        true
    }

    pub(crate) fn set_owner(&mut self, owner: PlayerId) {
        self.owner = Some(owner);
    }

    /// Clear owner and construction.
    pub(crate) fn reset_to_bank(&mut self) {
        self.owner = None;
        self.houses = 0;
        self.has_hotel = false;
    }
}
