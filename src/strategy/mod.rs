//! Strategy interface: the pluggable decision-makers.
//!
//! A strategy answers the two purchase questions the engine ever asks. It
//! gets read-only query access to session state through the controller and
//! never mutates anything itself.

mod builtin;

pub use builtin::{BuyAll, BuyNothing, Cautious, NoCheapHorses};

use crate::board::{Field, Horse};
use crate::game::Controller;

/// Decision-making interface consulted by the controller.
///
/// Implementations are shared across players and parallel games, so they
/// must be `Send + Sync` and keep any state immutable.
pub trait Strategy: Send + Sync {
    /// Whether to buy the offered unowned property. Affordability has
    /// already been checked.
    fn wants_to_buy(&self, ctrl: &Controller<'_>, property: &Field) -> bool;

    /// Whether to buy a race upgrade for the offered horse. Full-stable
    /// ownership and affordability have already been checked.
    fn wants_new_race(&self, ctrl: &Controller<'_>, horse: &Horse) -> bool;
}
