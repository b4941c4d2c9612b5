//! Deterministic random number generation for dice and turn order.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Forkable**: Derive independent streams for batches of games
//! - **Substitutable**: Sessions roll through the [`DiceSource`] trait, so
//!   tests can script an exact sequence of throws

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Source of die throws and the one-time turn-order shuffle.
///
/// A session draws every random decision through this trait. The production
/// implementation is [`GameRng`]; [`ScriptedDice`] replays a fixed sequence
/// for deterministic scenario tests.
pub trait DiceSource: Send {
    /// Throw one die, uniform in `1..=6`.
    fn roll(&mut self) -> u8;

    /// Produce the seating order for `player_count` players as a permutation
    /// of `0..player_count`. Called once, at session construction.
    fn turn_order(&mut self, player_count: usize) -> Vec<usize>;
}

/// Deterministic RNG backing real games.
///
/// Uses ChaCha8 for speed while keeping high-quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence; a batch
    /// driver forks once per game so every game stays individually
    /// reproducible.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DiceSource for GameRng {
    fn roll(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }

    fn turn_order(&mut self, player_count: usize) -> Vec<usize> {
        use rand::seq::SliceRandom;
        let mut order: Vec<usize> = (0..player_count).collect();
        order.shuffle(&mut self.inner);
        order
    }
}

/// Replays a fixed sequence of throws; turn order is left unshuffled.
///
/// Test double. Panics when the script runs dry, so a scenario that consumes
/// more throws than it budgeted fails loudly instead of drifting.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    rolls: VecDeque<u8>,
}

impl ScriptedDice {
    /// Build a script from the given throws, in order.
    ///
    /// # Panics
    ///
    /// Panics if any value is outside `1..=6`.
    #[must_use]
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        let rolls: VecDeque<u8> = rolls.into_iter().collect();
        for &r in &rolls {
            assert!((1..=6).contains(&r), "scripted die value {r} out of range");
        }
        Self { rolls }
    }

    /// Throws remaining in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> u8 {
        self.rolls
            .pop_front()
            .unwrap_or_else(|| panic!("scripted dice ran out of throws"))
    }

    fn turn_order(&mut self, player_count: usize) -> Vec<usize> {
        (0..player_count).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll(), rng2.roll());
        }
    }

    #[test]
    fn test_rolls_in_range() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let d = rng.roll();
            assert!((1..=6).contains(&d));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.roll()).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.roll()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..20).map(|_| rng.roll()).collect();
        let seq2: Vec<_> = (0..20).map(|_| forked.roll()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        assert_eq!(rng1.fork().seed(), rng2.fork().seed());
    }

    #[test]
    fn test_turn_order_is_permutation() {
        let mut rng = GameRng::new(9);
        let mut order = rng.turn_order(6);
        order.sort_unstable();
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_scripted_dice_replays_in_order() {
        let mut dice = ScriptedDice::new([3, 6, 1]);
        assert_eq!(dice.roll(), 3);
        assert_eq!(dice.roll(), 6);
        assert_eq!(dice.roll(), 1);
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn test_scripted_dice_identity_order() {
        let mut dice = ScriptedDice::new([1]);
        assert_eq!(dice.turn_order(4), vec![0, 1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_scripted_dice_rejects_bad_values() {
        let _ = ScriptedDice::new([7]);
    }

    #[test]
    #[should_panic(expected = "ran out of throws")]
    fn test_scripted_dice_panics_when_dry() {
        let mut dice = ScriptedDice::new([]);
        let _ = dice.roll();
    }
}
