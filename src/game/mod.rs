//! Game engine: session turn loop, controller gateway, event narration.

pub mod controller;
pub mod events;
pub mod session;

pub use controller::Controller;
pub use events::{narrate, EventSink, GameEvent, NarratedSink, NullSink, RecordingSink};
pub use session::{
    GameOutcome, GameSession, SessionBuilder, BANK_FUND, MAX_ROUNDS, PASS_START_BONUS,
    STARTING_MONEY,
};
