//! The board: an ordered, fixed-length sequence of fields.
//!
//! Topology is immutable; ownership and race counts are the only mutable
//! state. A session clones the board it is given, so no ownership ever
//! leaks between games.

pub mod field;
pub mod layout;

pub use field::{Field, Horse, StableId, Trainer};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// An ordered sequence of fields with ownership queries.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    fields: Vec<Field>,
}

impl Board {
    /// Build a board from an ordered field list.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    #[must_use]
    pub fn new(fields: Vec<Field>) -> Self {
        assert!(!fields.is_empty(), "a board needs at least one field");
        Self { fields }
    }

    /// The standard 31-field racing board.
    #[must_use]
    pub fn standard() -> Self {
        layout::standard_board()
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the board has no fields. Never true for a constructed board.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The field at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn field(&self, index: usize) -> &Field {
        &self.fields[index]
    }

    pub(crate) fn field_mut(&mut self, index: usize) -> &mut Field {
        &mut self.fields[index]
    }

    /// Iterate over all fields in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Index of the suspension field, if the board has one.
    #[must_use]
    pub fn suspension_index(&self) -> Option<usize> {
        self.fields
            .iter()
            .position(|field| matches!(field, Field::Suspension))
    }

    /// Indices of every horse belonging to `stable`.
    #[must_use]
    pub fn stable_members(&self, stable: StableId) -> SmallVec<[usize; 4]> {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, field)| field.as_horse().is_some_and(|h| h.stable == stable))
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of horses in `stable`.
    #[must_use]
    pub fn horses_in_stable(&self, stable: StableId) -> usize {
        self.stable_members(stable).len()
    }

    /// Number of horses in `stable` owned by the named player.
    #[must_use]
    pub fn horses_in_stable_owned_by(&self, stable: StableId, name: &str) -> usize {
        self.stable_members(stable)
            .iter()
            .filter(|&&index| self.fields[index].owner() == Some(name))
            .count()
    }

    /// Number of trainers owned by the named player.
    #[must_use]
    pub fn trainers_owned_by(&self, name: &str) -> usize {
        self.fields
            .iter()
            .filter(|field| field.as_trainer().is_some() && field.owner() == Some(name))
            .count()
    }

    /// Release everything the named player owns: ownership is cleared and
    /// any of their horses lose all bought races, so upgrade progress is
    /// demolished for the next owner.
    pub(crate) fn release_holdings(&mut self, name: &str) {
        for field in &mut self.fields {
            if field.owner() == Some(name) {
                field.set_owner(None);
                if let Field::Horse(horse) = field {
                    horse.reset_races();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_stable_board() -> Board {
        let ladder = [40, 200, 600, 1_800, 3_200, 5_000];
        Board::new(vec![
            Field::Start,
            Field::Horse(Horse::new("A", 1_200, StableId(0), ladder, 1_000)),
            Field::Horse(Horse::new("B", 1_200, StableId(0), ladder, 1_000)),
            Field::Horse(Horse::new("C", 2_000, StableId(1), ladder, 1_000)),
            Field::Trainer(Trainer::new(1)),
            Field::Suspension,
        ])
    }

    #[test]
    fn test_suspension_index() {
        assert_eq!(two_stable_board().suspension_index(), Some(5));
        assert_eq!(Board::new(vec![Field::Start]).suspension_index(), None);
    }

    #[test]
    fn test_stable_queries() {
        let mut board = two_stable_board();
        assert_eq!(board.horses_in_stable(StableId(0)), 2);
        assert_eq!(board.horses_in_stable(StableId(1)), 1);
        assert_eq!(board.stable_members(StableId(0)).as_slice(), &[1, 2]);

        board.field_mut(1).set_owner(Some("Ada".to_owned()));
        assert_eq!(board.horses_in_stable_owned_by(StableId(0), "Ada"), 1);
        assert_eq!(board.horses_in_stable_owned_by(StableId(0), "Bruno"), 0);

        board.field_mut(2).set_owner(Some("Ada".to_owned()));
        assert_eq!(board.horses_in_stable_owned_by(StableId(0), "Ada"), 2);
    }

    #[test]
    fn test_trainer_count() {
        let mut board = two_stable_board();
        assert_eq!(board.trainers_owned_by("Ada"), 0);
        board.field_mut(4).set_owner(Some("Ada".to_owned()));
        assert_eq!(board.trainers_owned_by("Ada"), 1);
    }

    #[test]
    fn test_release_holdings_clears_owner_and_races() {
        let mut board = two_stable_board();
        board.field_mut(1).set_owner(Some("Ada".to_owned()));
        board.field_mut(4).set_owner(Some("Ada".to_owned()));
        if let Field::Horse(horse) = board.field_mut(1) {
            horse.add_race();
            horse.add_race();
        }

        board.release_holdings("Ada");

        assert_eq!(board.field(1).owner(), None);
        assert_eq!(board.field(4).owner(), None);
        assert_eq!(board.field(1).as_horse().unwrap().races(), 0);
    }

    #[test]
    fn test_release_holdings_leaves_rivals_alone() {
        let mut board = two_stable_board();
        board.field_mut(1).set_owner(Some("Ada".to_owned()));
        board.field_mut(2).set_owner(Some("Bruno".to_owned()));

        board.release_holdings("Ada");

        assert_eq!(board.field(2).owner(), Some("Bruno"));
    }

    #[test]
    #[should_panic(expected = "at least one field")]
    fn test_empty_board_rejected() {
        let _ = Board::new(Vec::new());
    }
}
