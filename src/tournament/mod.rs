//! Tournament batch driver.
//!
//! Runs every k-player combination of an entered strategy field for a
//! fixed number of games per match-up and tallies wins. Sessions share no
//! mutable state, so the batch is embarrassingly parallel; per-game seeds
//! are derived from the base seed, which keeps a tournament reproducible
//! regardless of scheduling.

pub mod report;

pub use report::{write_report, write_report_to_path};

use crate::core::PlayerSpec;
use crate::game::{GameOutcome, SessionBuilder};
use crate::strategy::Strategy;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::sync::Arc;

/// Configuration for a tournament run.
#[derive(Clone, Copy, Debug)]
pub struct TournamentConfig {
    /// Players seated per game.
    pub players_per_game: usize,

    /// Games played for every strategy combination.
    pub games_per_matchup: usize,

    /// Base seed; per-game seeds are derived from it.
    pub seed: u64,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            players_per_game: 3,
            games_per_matchup: 10,
            seed: 0,
        }
    }
}

impl TournamentConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of players per game.
    #[must_use]
    pub fn with_players_per_game(mut self, count: usize) -> Self {
        self.players_per_game = count;
        self
    }

    /// Set the number of games per match-up.
    #[must_use]
    pub fn with_games_per_matchup(mut self, count: usize) -> Self {
        self.games_per_matchup = count;
        self
    }

    /// Set the base seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// A field of named strategies and the schedule to run them through.
///
/// Entry names double as player names inside sessions and as the keys of
/// the stats report, so they should be single tokens (`Cautious5000`).
pub struct Tournament {
    entries: Vec<(String, Arc<dyn Strategy>)>,
    config: TournamentConfig,
}

impl Tournament {
    /// Create an empty tournament.
    #[must_use]
    pub fn new(config: TournamentConfig) -> Self {
        Self {
            entries: Vec::new(),
            config,
        }
    }

    /// Enter a named strategy.
    ///
    /// # Panics
    ///
    /// Panics if the name is already entered.
    #[must_use]
    pub fn entry(mut self, name: impl Into<String>, strategy: Arc<dyn Strategy>) -> Self {
        let name = name.into();
        assert!(
            self.entries.iter().all(|(n, _)| *n != name),
            "duplicate tournament entry {name:?}"
        );
        self.entries.push((name, strategy));
        self
    }

    /// Number of entered strategies.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Run the whole schedule and tally the results.
    ///
    /// # Panics
    ///
    /// Panics if fewer strategies are entered than seats per game.
    #[must_use]
    pub fn run(&self) -> Standings {
        let seats = self.config.players_per_game;
        assert!(
            self.entries.len() >= seats,
            "need at least {seats} strategies for {seats}-player games"
        );

        let matchups = combinations(self.entries.len(), seats);
        let set_length = self.config.games_per_matchup;

        let jobs: Vec<(usize, usize)> = (0..matchups.len())
            .flat_map(|m| (0..set_length).map(move |g| (m, g)))
            .collect();

        let winners: Vec<Option<String>> = jobs
            .par_iter()
            .map(|&(m, g)| self.run_game(&matchups[m], m * set_length + g))
            .collect();

        let mut wins: FxHashMap<String, u64> = self
            .entries
            .iter()
            .map(|(name, _)| (name.clone(), 0))
            .collect();
        let mut games: FxHashMap<String, u64> = wins.clone();
        let mut ties = 0;

        for matchup in &matchups {
            for &entry in matchup {
                *games.get_mut(&self.entries[entry].0).expect("entry name") +=
                    set_length as u64;
            }
        }
        for winner in winners {
            match winner {
                Some(name) => *wins.get_mut(&name).expect("winner is an entry") += 1,
                None => ties += 1,
            }
        }

        Standings {
            wins,
            games,
            ties,
            matchups: matchups.len() as u64,
            games_per_matchup: set_length as u64,
        }
    }

    fn run_game(&self, matchup: &[usize], game_index: usize) -> Option<String> {
        let seed = self
            .config
            .seed
            .wrapping_add((game_index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15));

        let mut builder = SessionBuilder::new();
        for &entry in matchup {
            let (name, strategy) = &self.entries[entry];
            builder = builder.player(PlayerSpec::new(name.clone(), Arc::clone(strategy)));
        }

        match builder.build(seed).play() {
            GameOutcome::Ranking(rank) => rank.into_iter().next(),
            GameOutcome::Tie => None,
        }
    }
}

/// Aggregated tournament results.
#[derive(Clone, Debug, Serialize)]
pub struct Standings {
    wins: FxHashMap<String, u64>,
    games: FxHashMap<String, u64>,
    /// Games that hit the round cap with no winner.
    pub ties: u64,
    /// Number of distinct match-ups played.
    pub matchups: u64,
    /// Games per match-up.
    pub games_per_matchup: u64,
}

impl Standings {
    /// Wins of the named strategy.
    #[must_use]
    pub fn wins_of(&self, name: &str) -> u64 {
        self.wins.get(name).copied().unwrap_or(0)
    }

    /// Games the named strategy played.
    #[must_use]
    pub fn games_of(&self, name: &str) -> u64 {
        self.games.get(name).copied().unwrap_or(0)
    }

    /// Total games played.
    #[must_use]
    pub fn total_games(&self) -> u64 {
        self.matchups * self.games_per_matchup
    }

    /// Games every single strategy played. Uniform by construction.
    #[must_use]
    pub fn games_per_player(&self) -> u64 {
        self.games.values().next().copied().unwrap_or(0)
    }

    /// `(name, wins, games)` rows, most wins first; name breaks ties so
    /// the order is stable.
    #[must_use]
    pub fn sorted(&self) -> Vec<(String, u64, u64)> {
        let mut rows: Vec<(String, u64, u64)> = self
            .wins
            .iter()
            .map(|(name, &wins)| (name.clone(), wins, self.games_of(name)))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        rows
    }
}

/// All k-element index combinations of `0..n`, in lexicographic order.
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    fn extend(start: usize, n: usize, k: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in start..n {
            current.push(i);
            extend(i + 1, n, k, current, out);
            current.pop();
        }
    }

    let mut out = Vec::new();
    if k <= n {
        extend(0, n, k, &mut Vec::new(), &mut out);
    }
    out
}
