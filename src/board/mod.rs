//! The board: space variants, property economics and the standard table.
//!
//! - `Space`: tagged variant for each board position
//! - `Property`: price, rent schedule, construction and sale to the bank
//! - `Board`: the fixed 40-space ring with jail lookup

mod ring;
pub mod space;
pub mod table;

pub use ring::{Board, BOARD_SIZE};
pub use space::{Property, RentSchedule, Space, SpaceKind, MAX_HOUSES, SALE_REFUND_PERCENT};
pub use table::standard_spaces;
