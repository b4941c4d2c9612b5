//! Player state and roster construction.
//!
//! Players are identified by their unique name; board ownership is tracked
//! by that name rather than by reference, which keeps field state copyable
//! independent of player identity. Name uniqueness is enforced when a
//! session is built.

use crate::strategy::Strategy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Cosmetic color for a player's narration lines. Has no effect on play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    Yellow,
    Blue,
    Green,
    Magenta,
    Cyan,
    White,
}

/// Roster entry: everything needed to seat one player in a session.
#[derive(Clone)]
pub struct PlayerSpec {
    /// Unique player name, used as the ownership key on the board.
    pub name: String,
    /// Decision-maker consulted for purchase offers.
    pub strategy: Arc<dyn Strategy>,
    /// Optional narration color.
    pub color: Option<PlayerColor>,
}

impl PlayerSpec {
    /// Create a roster entry with no color.
    pub fn new(name: impl Into<String>, strategy: Arc<dyn Strategy>) -> Self {
        Self {
            name: name.into(),
            strategy,
            color: None,
        }
    }

    /// Set the narration color.
    #[must_use]
    pub fn with_color(mut self, color: PlayerColor) -> Self {
        self.color = Some(color);
        self
    }
}

impl fmt::Debug for PlayerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerSpec")
            .field("name", &self.name)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

/// A seated player inside a running session.
///
/// Mutated only by the session and its controller; fields and strategies
/// never touch a `Player` directly.
#[derive(Clone)]
pub struct Player {
    /// Unique name, the ownership key.
    pub name: String,
    /// Current balance. May go negative transiently; a negative balance at
    /// the end of a turn bankrupts the player.
    pub money: i64,
    /// Board position, always less than the board length.
    pub position: usize,
    /// Whether the player sits on the suspension field waiting for a 6.
    pub suspended: bool,
    /// Narration color.
    pub color: Option<PlayerColor>,
    pub(crate) strategy: Arc<dyn Strategy>,
}

impl Player {
    pub(crate) fn seat(spec: PlayerSpec, starting_money: i64) -> Self {
        Self {
            name: spec.name,
            money: starting_money,
            position: 0,
            suspended: false,
            color: spec.color,
            strategy: spec.strategy,
        }
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("money", &self.money)
            .field("position", &self.position)
            .field("suspended", &self.suspended)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
