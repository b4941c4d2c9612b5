//! # paddock
//!
//! A horse-racing property game engine for automated strategy tournaments.
//!
//! ## Design Principles
//!
//! 1. **Narrow mutation gateway**: fields and strategies never touch a
//!    player or the board; every query and mutation goes through the
//!    [`Controller`].
//!
//! 2. **Closed field set**: board behavior is a tagged enum with
//!    exhaustive handling, so every field stays enumerable and testable
//!    in isolation.
//!
//! 3. **Deterministic by construction**: every random decision flows
//!    through a seedable, substitutable [`DiceSource`]; the same seed
//!    replays the same game.
//!
//! 4. **Observation is injected**: the engine narrates through an
//!    [`EventSink`] handed in at construction, defaulting to a no-op.
//!
//! ## Modules
//!
//! - `core`: players, dice, randomness
//! - `board`: fields, properties, the standard layout
//! - `game`: controller, session turn loop, events
//! - `strategy`: the decision-maker interface and built-ins
//! - `tournament`: batch execution over strategy match-ups

pub mod board;
pub mod core;
pub mod game;
pub mod strategy;
pub mod tournament;

// Re-export commonly used types
pub use crate::core::{DiceSource, GameRng, Player, PlayerColor, PlayerSpec, ScriptedDice};

pub use crate::board::{Board, Field, Horse, StableId, Trainer};

pub use crate::game::{
    narrate, Controller, EventSink, GameEvent, GameOutcome, GameSession, NarratedSink, NullSink,
    RecordingSink, SessionBuilder, BANK_FUND, MAX_ROUNDS, PASS_START_BONUS, STARTING_MONEY,
};

pub use crate::strategy::{BuyAll, BuyNothing, Cautious, NoCheapHorses, Strategy};

pub use crate::tournament::{Standings, Tournament, TournamentConfig};
