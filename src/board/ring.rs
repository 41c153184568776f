//! The fixed circular board.
//!
//! Space order and count never change after construction. Property spaces
//! still carry their own ownership/construction state, which only the
//! engine mutates.

use rustc_hash::FxHashMap;

use super::space::{Property, Space, SpaceKind};
use super::table::standard_spaces;
use crate::core::BoardError;

/// Number of spaces on every board.
pub const BOARD_SIZE: usize = 40;

/// Ordered ring of spaces.
#[derive(Clone, Debug)]
pub struct Board {
    spaces: Vec<Space>,
    jail_index: usize,
    /// Lowercased property name -> board index.
    property_index: FxHashMap<String, usize>,
}

impl Board {
    /// The standard board table.
    #[must_use]
    pub fn standard() -> Self {
        match Self::from_spaces(standard_spaces()) {
            Ok(board) => board,
            Err(err) => unreachable!("standard table is invalid: {err}"),
        }
    }

    /// Build a board from an explicit space list.
    ///
    /// The list must hold exactly `BOARD_SIZE` spaces, one of them a jail.
    pub fn from_spaces(spaces: Vec<Space>) -> Result<Self, BoardError> {
        if spaces.len() != BOARD_SIZE {
            return Err(BoardError::WrongSize {
                expected: BOARD_SIZE,
                actual: spaces.len(),
            });
        }

        let jails: Vec<usize> = spaces
            .iter()
            .enumerate()
            .filter(|(_, space)| space.kind() == SpaceKind::Jail)
            .map(|(i, _)| i)
            .collect();
        let jail_index = match jails.as_slice() {
            [index] => *index,
            _ => return Err(BoardError::JailCount { found: jails.len() }),
        };

        let property_index = spaces
            .iter()
            .enumerate()
            .filter_map(|(i, space)| space.as_property().map(|p| (p.name.to_lowercase(), i)))
            .collect();

        Ok(Self {
            spaces,
            jail_index,
            property_index,
        })
    }

    /// Load a board table from a JSON array of spaces.
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        let spaces: Vec<Space> = serde_json::from_str(json)?;
        Self::from_spaces(spaces)
    }

    /// Always `BOARD_SIZE`.
    #[must_use]
    pub fn size(&self) -> usize {
        self.spaces.len()
    }

    #[must_use]
    pub fn jail_index(&self) -> usize {
        self.jail_index
    }

    /// Space at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the board. Indices come from modulo
    /// arithmetic, so this only fires on an internal bug.
    #[must_use]
    pub fn space_at(&self, index: usize) -> &Space {
        match self.try_space_at(index) {
            Ok(space) => space,
            Err(err) => panic!("{err}"),
        }
    }

    /// Space at `index`, or `OutOfRange`.
    pub fn try_space_at(&self, index: usize) -> Result<&Space, BoardError> {
        self.spaces.get(index).ok_or(BoardError::OutOfRange {
            index,
            size: self.spaces.len(),
        })
    }

    /// Property at `index`, if that space is one.
    #[must_use]
    pub fn property_at(&self, index: usize) -> Option<&Property> {
        self.space_at(index).as_property()
    }

    pub(crate) fn property_at_mut(&mut self, index: usize) -> Option<&mut Property> {
        let size = self.spaces.len();
        match self.spaces.get_mut(index) {
            Some(space) => space.as_property_mut(),
            None => panic!("{}", BoardError::OutOfRange { index, size }),
        }
    }

    /// Board index of the property called `name`, ignoring case.
    #[must_use]
    pub fn find_property(&self, name: &str) -> Option<usize> {
        self.property_index.get(&name.to_lowercase()).copied()
    }

    /// Iterate over spaces in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Space> {
        self.spaces.iter()
    }

    /// Return every property to the bank.
    pub(crate) fn reset_ownership(&mut self) {
        for property in self.spaces.iter_mut().filter_map(Space::as_property_mut) {
            property.reset_to_bank();
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_standard_board() {
        let board = Board::standard();
        assert_eq!(board.size(), BOARD_SIZE);
        assert_eq!(board.jail_index(), 10);
        assert_eq!(board.space_at(0).kind(), SpaceKind::Start);
        assert_eq!(board.space_at(39).name(), "Ibirapuera");
    }

    #[test]
    fn test_try_space_at_out_of_range() {
        let board = Board::standard();
        assert!(board.try_space_at(39).is_ok());
        let err = board.try_space_at(40).unwrap_err();
        assert!(matches!(err, BoardError::OutOfRange { index: 40, size: 40 }));
    }

    #[test]
    #[should_panic(expected = "outside the board")]
    fn test_space_at_out_of_range_panics() {
        let board = Board::standard();
        let _ = board.space_at(41);
    }

    #[test]
    fn test_find_property_ignores_case() {
        let board = Board::standard();
        assert_eq!(board.find_property("leblon"), Some(1));
        assert_eq!(board.find_property("IBIRAPUERA"), Some(39));
        assert_eq!(board.find_property("Jail"), None);
    }

    #[test]
    fn test_property_at() {
        let board = Board::standard();
        assert_eq!(board.property_at(1).map(|p| p.price), Some(100));
        assert!(board.property_at(10).is_none());
    }

    #[test]
    fn test_rejects_wrong_size() {
        let mut spaces = standard_spaces();
        spaces.pop();
        let err = Board::from_spaces(spaces).unwrap_err();
        assert!(matches!(err, BoardError::WrongSize { expected: 40, actual: 39 }));
    }

    #[test]
    fn test_rejects_missing_or_duplicate_jail() {
        let mut spaces = standard_spaces();
        spaces[10] = Space::Neutral { name: "Visit".into() };
        let err = Board::from_spaces(spaces).unwrap_err();
        assert!(matches!(err, BoardError::JailCount { found: 0 }));

        let mut spaces = standard_spaces();
        spaces[20] = Space::Jail { name: "Second jail".into() };
        let err = Board::from_spaces(spaces).unwrap_err();
        assert!(matches!(err, BoardError::JailCount { found: 2 }));
    }

    #[test]
    fn test_json_roundtrip() {
        let json = serde_json::to_string(&standard_spaces()).unwrap();
        let board = Board::from_json(&json).unwrap();
        assert_eq!(board.size(), 40);
        assert_eq!(board.jail_index(), 10);
        assert_eq!(board.space_at(5).name(), "Railway Company");
    }

    #[test]
    fn test_from_json_parse_error() {
        let err = Board::from_json("{ not a board").unwrap_err();
        assert!(matches!(err, BoardError::Parse(_)));
    }

    #[test]
    fn test_reset_ownership() {
        let mut board = Board::standard();
        if let Some(p) = board.property_at_mut(1) {
            p.set_owner(PlayerId::new(0));
            p.build();
        }
        board.reset_ownership();
        let p = board.property_at(1).unwrap();
        assert_eq!(p.owner(), None);
        assert_eq!(p.houses(), 0);
    }
}
