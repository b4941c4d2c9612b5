//! Built-in strategies used by the demo game and the tournament field.

use super::Strategy;
use crate::board::{Field, Horse};
use crate::game::Controller;

/// Buys everything it is offered.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuyAll;

impl Strategy for BuyAll {
    fn wants_to_buy(&self, _ctrl: &Controller<'_>, _property: &Field) -> bool {
        true
    }

    fn wants_new_race(&self, _ctrl: &Controller<'_>, _horse: &Horse) -> bool {
        true
    }
}

/// Buys literally nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuyNothing;

impl Strategy for BuyNothing {
    fn wants_to_buy(&self, _ctrl: &Controller<'_>, _property: &Field) -> bool {
        false
    }

    fn wants_new_race(&self, _ctrl: &Controller<'_>, _horse: &Horse) -> bool {
        false
    }
}

/// Buys only while the purchase leaves the balance strictly above a
/// reserve threshold.
#[derive(Clone, Copy, Debug)]
pub struct Cautious {
    /// Minimum balance to keep after any purchase.
    pub threshold: i64,
}

impl Cautious {
    /// Create a cautious strategy with the given reserve.
    #[must_use]
    pub fn new(threshold: i64) -> Self {
        Self { threshold }
    }
}

impl Strategy for Cautious {
    fn wants_to_buy(&self, ctrl: &Controller<'_>, property: &Field) -> bool {
        match property.price() {
            Some(price) => ctrl.player_money() - price > self.threshold,
            None => false,
        }
    }

    fn wants_new_race(&self, ctrl: &Controller<'_>, horse: &Horse) -> bool {
        ctrl.player_money() - horse.race_price > self.threshold
    }
}

/// Skips cheap horses whose admission ladders never earn much, buys
/// everything else and every race upgrade.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCheapHorses;

impl NoCheapHorses {
    /// Horses below this price are never bought.
    pub const MIN_HORSE_PRICE: i64 = 4_000;
}

impl Strategy for NoCheapHorses {
    fn wants_to_buy(&self, _ctrl: &Controller<'_>, property: &Field) -> bool {
        match property {
            Field::Horse(horse) => horse.price >= Self::MIN_HORSE_PRICE,
            _ => true,
        }
    }

    fn wants_new_race(&self, _ctrl: &Controller<'_>, _horse: &Horse) -> bool {
        true
    }
}
