//! Core engine types: players, dice, randomness.
//!
//! These are the building blocks the board and session modules are assembled
//! from; nothing in here knows about fields or turn rules.

pub mod player;
pub mod rng;

pub use player::{Player, PlayerColor, PlayerSpec};
pub use rng::{DiceSource, GameRng, ScriptedDice};
