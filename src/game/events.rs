//! Game events and narration sinks.
//!
//! The engine narrates everything that happens through an [`EventSink`]
//! handed in at session construction. Sinks are purely observational; they
//! never feed back into engine state. The default is [`NullSink`].

use crate::core::PlayerColor;
use colored::{Color, Colorize};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Everything the engine reports while a game runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A player's movement throw (compound throws already summed).
    Rolled { player: String, total: u8 },
    /// A player moved and landed on a field.
    Moved {
        player: String,
        field: String,
        position: usize,
    },
    /// The pass-start bonus was paid out.
    BonusReceived { player: String, amount: i64 },
    /// An unowned property was bought.
    PropertyBought {
        player: String,
        property: String,
        price: i64,
    },
    /// A race upgrade was bought.
    RaceBought {
        player: String,
        horse: String,
        price: i64,
    },
    /// An admission went from the visitor to the owner.
    AdmissionPaid {
        player: String,
        owner: String,
        amount: i64,
        purpose: String,
    },
    /// A fee went to the bank.
    FeePaid {
        player: String,
        amount: i64,
        purpose: String,
    },
    /// The player was suspended.
    Suspended { player: String },
    /// A suspended player threw a 6 and is free again.
    Released { player: String },
    /// A suspended player threw something else and stays put.
    StillSuspended { player: String, roll: u8 },
    /// The player's balance went negative and they left the game.
    Bankrupted { player: String },
    /// One player remains; the game is over.
    Won { player: String },
    /// End-of-round balances for all surviving players.
    RoundFinished {
        round: u32,
        standings: Vec<(String, i64)>,
    },
}

/// Receiver for game events.
pub trait EventSink {
    /// Called once per event, in order.
    fn record(&mut self, event: &GameEvent);
}

/// Discards everything. The default sink.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&mut self, _event: &GameEvent) {}
}

/// Buffers every event, for tests and post-game analysis.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    /// All recorded events, in order.
    pub events: Vec<GameEvent>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for RecordingSink {
    fn record(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

/// Render an event as one human-readable sentence.
#[must_use]
pub fn narrate(event: &GameEvent) -> String {
    match event {
        GameEvent::Rolled { player, total } => format!("{player} threw {total}"),
        GameEvent::Moved {
            player,
            field,
            position,
        } => format!("{player} moved to {field} ({position})"),
        GameEvent::BonusReceived { player, amount } => {
            format!("{player} received a bonus of {amount} for crossing the start field")
        }
        GameEvent::PropertyBought {
            player,
            property,
            price,
        } => format!("{player} bought {property} for {price}"),
        GameEvent::RaceBought {
            player,
            horse,
            price,
        } => format!("{player} bought a new race for {horse} for {price}"),
        GameEvent::AdmissionPaid {
            player,
            owner,
            amount,
            purpose,
        } => format!("{player} paid {owner} an admission of {amount} for {purpose}"),
        GameEvent::FeePaid {
            player,
            amount,
            purpose,
        } => format!("{player} paid {amount} for {purpose}"),
        GameEvent::Suspended { player } => format!("{player} is suspended"),
        GameEvent::Released { player } => format!("{player} threw a 6 and is free again"),
        GameEvent::StillSuspended { player, roll } => {
            format!("{player} threw {roll} and is still suspended")
        }
        GameEvent::Bankrupted { player } => format!("{player} went bankrupt"),
        GameEvent::Won { player } => format!("{player} won, congrats!"),
        GameEvent::RoundFinished { round, standings } => {
            let balances = standings
                .iter()
                .map(|(name, money)| format!("{name}: {money}"))
                .collect::<Vec<_>>()
                .join(", ");
            format!("state after round {round} -- {balances}")
        }
    }
}

/// Narrates events through the `log` facade, coloring lines by player.
#[derive(Clone, Debug, Default)]
pub struct NarratedSink {
    colors: FxHashMap<String, PlayerColor>,
}

impl NarratedSink {
    /// Narrate without player colors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Narrate with the given player-name-to-color assignment.
    #[must_use]
    pub fn with_colors(colors: impl IntoIterator<Item = (String, PlayerColor)>) -> Self {
        Self {
            colors: colors.into_iter().collect(),
        }
    }

    fn color_of(&self, event: &GameEvent) -> Option<Color> {
        let player = match event {
            GameEvent::Rolled { player, .. }
            | GameEvent::Moved { player, .. }
            | GameEvent::BonusReceived { player, .. }
            | GameEvent::PropertyBought { player, .. }
            | GameEvent::RaceBought { player, .. }
            | GameEvent::AdmissionPaid { player, .. }
            | GameEvent::FeePaid { player, .. }
            | GameEvent::Suspended { player }
            | GameEvent::Released { player }
            | GameEvent::StillSuspended { player, .. }
            | GameEvent::Bankrupted { player }
            | GameEvent::Won { player } => player,
            GameEvent::RoundFinished { .. } => return None,
        };
        self.colors.get(player).map(|&c| terminal_color(c))
    }
}

fn terminal_color(color: PlayerColor) -> Color {
    match color {
        PlayerColor::Red => Color::Red,
        PlayerColor::Yellow => Color::Yellow,
        PlayerColor::Blue => Color::Blue,
        PlayerColor::Green => Color::Green,
        PlayerColor::Magenta => Color::Magenta,
        PlayerColor::Cyan => Color::Cyan,
        PlayerColor::White => Color::White,
    }
}

impl EventSink for NarratedSink {
    fn record(&mut self, event: &GameEvent) {
        let line = narrate(event);
        match self.color_of(event) {
            Some(color) => log::info!("{}", line.color(color)),
            None => log::info!("{line}"),
        }
    }
}
