//! Injectable random choice.
//!
//! The generator picks keywords and templates through a [`Chooser`] so that
//! callers decide where randomness comes from. Production code uses
//! [`RandomChooser`]; tests use [`ScriptedChooser`] to pin every pick.
//!
//! # Example
//!
//! ```
//! use memorize::chooser::{Chooser, RandomChooser, ScriptedChooser};
//!
//! let mut random = RandomChooser::seeded(42);
//! assert!(random.choose(5) < 5);
//!
//! let mut scripted = ScriptedChooser::new([3, 7]);
//! assert_eq!(scripted.choose(5), 3);
//! assert_eq!(scripted.choose(5), 2); // 7 wraps around
//! assert_eq!(scripted.choose(5), 0); // script exhausted
//! ```

use std::collections::VecDeque;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Picks one of `len` alternatives.
pub trait Chooser {
    /// Return an index in `0..len`. Callers never pass zero.
    fn choose(&mut self, len: usize) -> usize;
}

impl<C: Chooser + ?Sized> Chooser for &mut C {
    fn choose(&mut self, len: usize) -> usize {
        (**self).choose(len)
    }
}

/// Uniform choice backed by a random number generator.
#[derive(Debug, Clone)]
pub struct RandomChooser<R = ThreadRng> {
    rng: R,
}

impl RandomChooser<ThreadRng> {
    /// Choose with the thread-local generator.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomChooser<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomChooser<StdRng> {
    /// Choose with a generator seeded for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomChooser<R> {
    /// Choose with the given generator.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Chooser for RandomChooser<R> {
    fn choose(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}

/// Deterministic choice from a fixed script.
///
/// Each call consumes the next scripted pick, reduced modulo `len`. Once the
/// script is exhausted every call returns the fallback pick (zero unless set
/// with [`ScriptedChooser::always`]). The `len` of every call is recorded.
#[derive(Debug, Clone, Default)]
pub struct ScriptedChooser {
    picks: VecDeque<usize>,
    fallback: usize,
    requests: Vec<usize>,
}

impl ScriptedChooser {
    /// Script the given picks, then fall back to zero.
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Always make the same pick.
    pub fn always(pick: usize) -> Self {
        Self {
            fallback: pick,
            ..Self::default()
        }
    }

    /// The `len` passed to each call so far, in call order.
    pub fn requests(&self) -> &[usize] {
        &self.requests
    }
}

impl Chooser for ScriptedChooser {
    fn choose(&mut self, len: usize) -> usize {
        self.requests.push(len);
        let pick = self.picks.pop_front().unwrap_or(self.fallback);
        if len == 0 { 0 } else { pick % len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_chooser_stays_in_range() {
        let mut chooser = RandomChooser::seeded(7);
        for len in 1..20 {
            for _ in 0..50 {
                assert!(chooser.choose(len) < len);
            }
        }
    }

    #[test]
    fn test_seeded_chooser_is_reproducible() {
        let mut a = RandomChooser::seeded(99);
        let mut b = RandomChooser::seeded(99);
        let picks_a: Vec<usize> = (0..32).map(|_| a.choose(5)).collect();
        let picks_b: Vec<usize> = (0..32).map(|_| b.choose(5)).collect();
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn test_thread_chooser_single_option() {
        let mut chooser = RandomChooser::new();
        assert_eq!(chooser.choose(1), 0);
    }

    #[test]
    fn test_scripted_chooser_records_requests() {
        let mut chooser = ScriptedChooser::new([1, 4]);
        assert_eq!(chooser.choose(3), 1);
        assert_eq!(chooser.choose(3), 1);
        assert_eq!(chooser.choose(2), 0);
        assert_eq!(chooser.requests(), &[3, 3, 2]);
    }

    #[test]
    fn test_scripted_chooser_always() {
        let mut chooser = ScriptedChooser::always(4);
        assert_eq!(chooser.choose(5), 4);
        assert_eq!(chooser.choose(3), 1);
        assert_eq!(chooser.choose(10), 4);
    }

    #[test]
    fn test_chooser_through_mutable_reference() {
        fn pick_twice(mut chooser: impl Chooser) -> (usize, usize) {
            (chooser.choose(10), chooser.choose(10))
        }

        let mut scripted = ScriptedChooser::new([2, 5]);
        assert_eq!(pick_twice(&mut scripted), (2, 5));
        assert_eq!(scripted.requests().len(), 2);
    }
}
