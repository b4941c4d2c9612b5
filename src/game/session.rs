//! The game session: turn loop, movement, bankruptcy and ranking.
//!
//! A session owns its board copy, its players and the bank, runs rounds
//! until one player survives or the round cap is hit, and produces a
//! ranking. All field and strategy interaction goes through the
//! [`Controller`](super::Controller); the session itself only implements
//! dice resolution, movement and the suspension state machine.

use crate::board::Board;
use crate::core::{DiceSource, GameRng, Player, PlayerSpec};
use crate::game::controller::Controller;
use crate::game::events::{EventSink, GameEvent, NullSink};
use serde::{Deserialize, Serialize};

/// Stake every player starts with.
pub const STARTING_MONEY: i64 = 30_000;
/// Total money in the system; the bank starts with the fund minus the
/// players' stakes, so player money plus bank is always exactly this.
pub const BANK_FUND: i64 = 200_000;
/// Bonus for passing or landing on the start field.
pub const PASS_START_BONUS: i64 = 4_000;
/// Rounds before a game is called a tie.
pub const MAX_ROUNDS: u32 = 500;

/// How a session ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Winner first, then survivors-by-elimination-order: the earliest
    /// bankrupted player ranks last.
    Ranking(Vec<String>),
    /// No single winner within the round cap; no ranking is produced.
    Tie,
}

impl GameOutcome {
    /// The winning player, if the game produced one.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        match self {
            GameOutcome::Ranking(rank) => rank.first().map(String::as_str),
            GameOutcome::Tie => None,
        }
    }

    /// Whether the game hit the round cap.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        matches!(self, GameOutcome::Tie)
    }
}

/// Configures and builds a [`GameSession`].
pub struct SessionBuilder {
    roster: Vec<PlayerSpec>,
    board: Board,
    bank: Option<i64>,
    dice: Option<Box<dyn DiceSource>>,
    sink: Box<dyn EventSink>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionBuilder {
    /// Start a builder with the standard board, default bank funding and a
    /// no-op event sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            roster: Vec::new(),
            board: Board::standard(),
            bank: None,
            dice: None,
            sink: Box::new(NullSink),
        }
    }

    /// Add a player to the roster.
    #[must_use]
    pub fn player(mut self, spec: PlayerSpec) -> Self {
        self.roster.push(spec);
        self
    }

    /// Play on a custom board instead of the standard one.
    #[must_use]
    pub fn board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Override the bank's starting balance.
    #[must_use]
    pub fn bank(mut self, amount: i64) -> Self {
        self.bank = Some(amount);
        self
    }

    /// Substitute the dice source. When set, `build`'s seed is unused.
    #[must_use]
    pub fn dice(mut self, dice: Box<dyn DiceSource>) -> Self {
        self.dice = Some(dice);
        self
    }

    /// Receive event narration in the given sink.
    #[must_use]
    pub fn sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Build the session, seeding money and shuffling turn order once.
    ///
    /// # Panics
    ///
    /// Panics if the roster has fewer than 2 or more than 6 players, if two
    /// players share a name, or if the board has no suspension field.
    #[must_use]
    pub fn build(self, seed: u64) -> GameSession {
        let count = self.roster.len();
        assert!((2..=6).contains(&count), "a game needs 2-6 players");
        for (i, a) in self.roster.iter().enumerate() {
            for b in &self.roster[i + 1..] {
                assert!(a.name != b.name, "duplicate player name {:?}", a.name);
            }
        }
        assert!(
            self.board.suspension_index().is_some(),
            "the board needs a suspension field"
        );

        let mut dice = self
            .dice
            .unwrap_or_else(|| Box::new(GameRng::new(seed)));

        let mut roster = self.roster;
        let order = dice.turn_order(count);
        let mut seats: Vec<Option<PlayerSpec>> = roster.drain(..).map(Some).collect();
        let players: Vec<Player> = order
            .into_iter()
            .map(|i| {
                let spec = seats[i].take().unwrap_or_else(|| {
                    panic!("turn_order produced a repeated or out-of-range index {i}")
                });
                Player::seat(spec, STARTING_MONEY)
            })
            .collect();

        let bank = self
            .bank
            .unwrap_or(BANK_FUND - STARTING_MONEY * count as i64);

        GameSession {
            board: self.board,
            players,
            bank,
            round: 0,
            rank: Vec::new(),
            current: 0,
            dice,
            sink: self.sink,
        }
    }
}

/// A single game in progress.
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) players: Vec<Player>,
    pub(crate) bank: i64,
    pub(crate) round: u32,
    pub(crate) rank: Vec<String>,
    pub(crate) current: usize,
    pub(crate) dice: Box<dyn DiceSource>,
    pub(crate) sink: Box<dyn EventSink>,
}

impl GameSession {
    /// Players still in the game, in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a surviving player by name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    /// The session's board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current bank balance.
    #[must_use]
    pub fn bank_money(&self) -> i64 {
        self.bank
    }

    /// Rounds played so far.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Run the session to completion.
    ///
    /// Loops [`play_round`](Self::play_round) until a winner emerges or the
    /// round cap is hit. Call once per session.
    pub fn play(&mut self) -> GameOutcome {
        while self.round < MAX_ROUNDS {
            if let Some(outcome) = self.play_round() {
                return outcome;
            }
        }
        GameOutcome::Tie
    }

    /// Play one full round, giving every surviving player a turn.
    ///
    /// Returns the outcome as soon as only one player remains; `None` while
    /// the game continues.
    pub fn play_round(&mut self) -> Option<GameOutcome> {
        self.round += 1;
        let mut index = 0;
        while index < self.players.len() {
            self.current = index;
            self.play_turn();
            if self.players[index].money < 0 {
                if let Some(outcome) = self.handle_bankruptcy(index) {
                    return Some(outcome);
                }
                // the next player shifted into this slot; do not advance
            } else {
                index += 1;
            }
        }

        let standings = self
            .players
            .iter()
            .map(|p| (p.name.clone(), p.money))
            .collect();
        self.emit(GameEvent::RoundFinished {
            round: self.round,
            standings,
        });
        None
    }

    /// One turn of the per-player state machine.
    ///
    /// A suspended player only throws for release; a 6 frees them and they
    /// immediately take one normal turn in the same round.
    fn play_turn(&mut self) {
        let index = self.current;
        if self.players[index].suspended {
            let roll = self.dice.roll();
            let player = self.players[index].name.clone();
            if roll == 6 {
                self.players[index].suspended = false;
                self.emit(GameEvent::Released { player });
            } else {
                self.emit(GameEvent::StillSuspended { player, roll });
                return;
            }
        }
        self.normal_turn();
    }

    fn normal_turn(&mut self) {
        let first = self.dice.roll();
        let total = if first == 6 {
            first + self.dice.roll()
        } else {
            first
        };
        let player = self.players[self.current].name.clone();
        self.emit(GameEvent::Rolled { player, total });

        if total == 12 {
            // Straight to suspension, with no bonus even across Start.
            Controller::new(self).move_player_to_suspension_field(false);
        } else {
            self.move_player(total as usize, true);
        }
    }

    /// Advance the acting player and visit the field they land on.
    ///
    /// Wrapping past the last field pays the pass-start bonus from the
    /// bank, unless suppressed or the bank holds no more than the bonus.
    pub(crate) fn move_player(&mut self, steps: usize, receives_bonus: bool) {
        let index = self.current;
        let mut position = self.players[index].position + steps;
        while position >= self.board.len() {
            position -= self.board.len();
            if receives_bonus && self.bank > PASS_START_BONUS {
                self.bank -= PASS_START_BONUS;
                self.players[index].money += PASS_START_BONUS;
                let player = self.players[index].name.clone();
                self.emit(GameEvent::BonusReceived {
                    player,
                    amount: PASS_START_BONUS,
                });
            }
        }
        self.players[index].position = position;
        self.emit(GameEvent::Moved {
            player: self.players[index].name.clone(),
            field: self.board.field(position).name().to_owned(),
            position,
        });

        let field = self.board.field(position).clone();
        field.visit(&mut Controller::new(self));
    }

    fn handle_bankruptcy(&mut self, index: usize) -> Option<GameOutcome> {
        let loser = self.players.remove(index);
        self.emit(GameEvent::Bankrupted {
            player: loser.name.clone(),
        });
        // The residual negative balance is folded into the bank, keeping
        // player money plus bank invariant.
        self.bank += loser.money;
        self.board.release_holdings(&loser.name);
        self.rank.insert(0, loser.name);

        if self.players.len() == 1 {
            let winner = self.players[0].name.clone();
            self.rank.insert(0, winner.clone());
            self.emit(GameEvent::Won { player: winner });
            return Some(GameOutcome::Ranking(self.rank.clone()));
        }
        None
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.sink.record(&event);
    }
}
