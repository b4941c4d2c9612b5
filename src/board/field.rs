//! Board fields and the visit protocol.
//!
//! Fields form a closed set of variants with exhaustive handling, so every
//! behavior stays enumerable and testable in isolation. A visit never
//! mutates the board or a player directly; all effects go through the
//! [`Controller`], the sole mutation gateway.

use crate::game::Controller;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a stable, the group of horses that unlocks race upgrades
/// when fully owned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StableId(pub u8);

impl fmt::Display for StableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stable {}", self.0)
    }
}

/// One cell of the board.
///
/// `visit` returns whether the visit was handled, i.e. whether any action
/// was taken or offered. A declined purchase still counts as handled: the
/// player's visit ends there with no further effect.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Field {
    /// Crossing this field pays the pass-start bonus (handled by movement,
    /// not by the visit).
    Start,
    /// Does nothing.
    ParkingLot,
    /// Charges an unconditional fee to the bank.
    VeterinaryCheckup {
        /// Fee paid by every visitor.
        fee: i64,
    },
    /// Suspends whoever lands here until they throw a 6.
    Suspension,
    /// A purchasable horse; see [`Horse`].
    Horse(Horse),
    /// A purchasable trainer; see [`Trainer`].
    Trainer(Trainer),
}

impl Field {
    /// Field name for identification and narration.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Field::Start => "Start",
            Field::ParkingLot => "Parking Lot",
            Field::VeterinaryCheckup { .. } => "Veterinary Checkup",
            Field::Suspension => "Suspension",
            Field::Horse(horse) => &horse.name,
            Field::Trainer(trainer) => &trainer.name,
        }
    }

    /// Current owner, for the two property variants.
    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        match self {
            Field::Horse(horse) => horse.owner.as_deref(),
            Field::Trainer(trainer) => trainer.owner.as_deref(),
            _ => None,
        }
    }

    /// Purchase price, for the two property variants.
    #[must_use]
    pub fn price(&self) -> Option<i64> {
        match self {
            Field::Horse(horse) => Some(horse.price),
            Field::Trainer(_) => Some(Trainer::PRICE),
            _ => None,
        }
    }

    /// The horse on this field, if any.
    #[must_use]
    pub fn as_horse(&self) -> Option<&Horse> {
        match self {
            Field::Horse(horse) => Some(horse),
            _ => None,
        }
    }

    /// The trainer on this field, if any.
    #[must_use]
    pub fn as_trainer(&self) -> Option<&Trainer> {
        match self {
            Field::Trainer(trainer) => Some(trainer),
            _ => None,
        }
    }

    pub(crate) fn set_owner(&mut self, owner: Option<String>) {
        match self {
            Field::Horse(horse) => horse.owner = owner,
            Field::Trainer(trainer) => trainer.owner = owner,
            _ => {}
        }
    }

    /// Visit this field as the acting player.
    ///
    /// `self` is the field as it looked when the player landed; ownership
    /// checks and every mutation go through the controller against live
    /// state.
    pub(crate) fn visit(&self, ctrl: &mut Controller<'_>) -> bool {
        match self {
            Field::Start | Field::ParkingLot => false,
            Field::VeterinaryCheckup { fee } => {
                ctrl.pay_fee_to_bank(*fee, "a veterinary checkup");
                true
            }
            Field::Suspension => {
                ctrl.suspend_player();
                true
            }
            Field::Horse(horse) => horse.visit(ctrl),
            Field::Trainer(trainer) => trainer.visit(ctrl),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Shared purchase step for unowned properties.
///
/// Handled whenever the field is unowned and the acting player can afford
/// it, whether or not the strategy accepts the offer.
fn visit_as_property(ctrl: &mut Controller<'_>, price: i64) -> bool {
    if ctrl.current_field_owner().is_none() && ctrl.has_enough_money(price) {
        if ctrl.offer_property() {
            ctrl.buy_property();
        }
        true
    } else {
        false
    }
}

/// A horse field.
///
/// Any horse can be bought. Once a player owns the whole stable, landing on
/// one of their own horses offers a race upgrade; each race raises the
/// admission tier rivals pay when visiting. A suspended owner only collects
/// the base tier.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Horse {
    /// Horse name.
    pub name: String,
    /// Purchase price.
    pub price: i64,
    /// Stable this horse belongs to.
    pub stable: StableId,
    /// Admission ladder, indexed by the number of races bought.
    pub admissions: [i64; 6],
    /// Price of one race upgrade.
    pub race_price: i64,
    races: u8,
    owner: Option<String>,
}

impl Horse {
    /// Number of races a horse can accumulate.
    pub const MAX_RACES: u8 = 5;

    /// Create an unowned horse with no races.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        price: i64,
        stable: StableId,
        admissions: [i64; 6],
        race_price: i64,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            stable,
            admissions,
            race_price,
            races: 0,
            owner: None,
        }
    }

    /// Races bought so far, in `0..=5`.
    #[must_use]
    pub fn races(&self) -> u8 {
        self.races
    }

    pub(crate) fn add_race(&mut self) {
        debug_assert!(self.races < Self::MAX_RACES);
        self.races += 1;
    }

    pub(crate) fn reset_races(&mut self) {
        self.races = 0;
    }

    fn visit(&self, ctrl: &mut Controller<'_>) -> bool {
        if visit_as_property(ctrl, self.price) {
            return true;
        }
        if let Some(owner) = ctrl.rival_owner() {
            // A suspended owner's horses fall back to the base tier.
            let admission = if ctrl.is_player_suspended(&owner) {
                self.admissions[0]
            } else {
                self.admissions[self.races as usize]
            };
            ctrl.pay_admission(&owner, admission, &format!("visiting {}", self.name));
            return true;
        }
        if ctrl.is_owned_by_player() && self.races < Self::MAX_RACES {
            let owner = ctrl.player_name().to_owned();
            if ctrl.is_whole_stable_owned_by(self.stable, &owner)
                && ctrl.has_enough_money(self.race_price)
            {
                if ctrl.offer_race() {
                    ctrl.buy_new_race();
                }
                return true;
            }
        }
        false
    }
}

/// A trainer field.
///
/// Any trainer can be bought; the admission a rival pays scales with how
/// many trainers the owner has collected.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Trainer {
    /// Display name, `Trainer <number>`.
    pub name: String,
    /// Sequence number on the board, starting at 1.
    pub number: u8,
    owner: Option<String>,
}

impl Trainer {
    /// Purchase price of every trainer.
    pub const PRICE: i64 = 4_000;
    /// Admission ladder, indexed by the owner's trainer count minus one.
    pub const ADMISSIONS: [i64; 4] = [1_000, 2_000, 3_000, 4_000];

    /// Create an unowned trainer.
    #[must_use]
    pub fn new(number: u8) -> Self {
        Self {
            name: format!("Trainer {number}"),
            number,
            owner: None,
        }
    }

    fn visit(&self, ctrl: &mut Controller<'_>) -> bool {
        if visit_as_property(ctrl, Self::PRICE) {
            return true;
        }
        if let Some(owner) = ctrl.rival_owner() {
            let owned = ctrl.trainers_owned_by(&owner);
            let admission = Self::ADMISSIONS[owned - 1];
            ctrl.pay_admission(&owner, admission, "a training");
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horse(name: &str, price: i64, stable: u8) -> Field {
        Field::Horse(Horse::new(
            name,
            price,
            StableId(stable),
            [40, 200, 600, 1_800, 3_200, 5_000],
            1_000,
        ))
    }

    #[test]
    fn test_names() {
        assert_eq!(Field::Start.name(), "Start");
        assert_eq!(Field::ParkingLot.name(), "Parking Lot");
        assert_eq!(Field::VeterinaryCheckup { fee: 500 }.name(), "Veterinary Checkup");
        assert_eq!(Field::Suspension.name(), "Suspension");
        assert_eq!(horse("Fantome", 1_200, 0).name(), "Fantome");
        assert_eq!(Field::Trainer(Trainer::new(2)).name(), "Trainer 2");
    }

    #[test]
    fn test_prices() {
        assert_eq!(horse("Fantome", 1_200, 0).price(), Some(1_200));
        assert_eq!(Field::Trainer(Trainer::new(1)).price(), Some(Trainer::PRICE));
        assert_eq!(Field::Start.price(), None);
        assert_eq!(Field::Suspension.price(), None);
    }

    #[test]
    fn test_ownership_accessors() {
        let mut field = horse("Gavora", 1_200, 0);
        assert_eq!(field.owner(), None);

        field.set_owner(Some("Ada".to_owned()));
        assert_eq!(field.owner(), Some("Ada"));

        field.set_owner(None);
        assert_eq!(field.owner(), None);
    }

    #[test]
    fn test_non_properties_ignore_set_owner() {
        let mut field = Field::ParkingLot;
        field.set_owner(Some("Ada".to_owned()));
        assert_eq!(field.owner(), None);
    }

    #[test]
    fn test_race_counter_bounds() {
        let mut horse = Horse::new("Koran", 2_400, StableId(1), [160, 800, 2_000, 6_000, 9_000, 12_000], 1_000);
        assert_eq!(horse.races(), 0);

        for expected in 1..=Horse::MAX_RACES {
            horse.add_race();
            assert_eq!(horse.races(), expected);
        }
        horse.reset_races();
        assert_eq!(horse.races(), 0);
    }

    #[test]
    fn test_serde_round_trip() {
        let field = horse("Napoli", 8_000, 7);
        let json = serde_json::to_string(&field).unwrap();
        let back: Field = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name(), "Napoli");
        assert_eq!(back.price(), Some(8_000));
    }
}
