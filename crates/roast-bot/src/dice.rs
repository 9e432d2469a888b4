//! Injectable randomness for roast decisions

use rand::Rng;

/// One roast per this many ambient messages, on average.
pub const ROAST_ODDS: u32 = 50;

/// Random source. Production uses the thread RNG; tests seed or stub it.
pub trait Dice: Send + Sync {
    /// Uniform integer in `1..=sides`.
    fn roll(&self, sides: u32) -> u32;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick(&self, len: usize) -> usize;
}

/// Draws from `rand::rng()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDice;

impl Dice for ThreadDice {
    fn roll(&self, sides: u32) -> u32 {
        rand::rng().random_range(1..=sides.max(1))
    }

    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len.max(1))
    }
}

/// 1-in-[`ROAST_ODDS`] chance.
pub fn roast_probability(dice: &dyn Dice) -> bool {
    dice.roll(ROAST_ODDS) == 1
}

#[cfg(test)]
pub mod testing {
    use std::sync::Mutex;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::Dice;

    /// Always rolls and picks the same values.
    pub struct FixedDice {
        pub roll: u32,
        pub pick: usize,
    }

    impl FixedDice {
        pub fn always_roast() -> Self {
            Self { roll: 1, pick: 0 }
        }

        pub fn never_roast() -> Self {
            Self { roll: 50, pick: 0 }
        }
    }

    impl Dice for FixedDice {
        fn roll(&self, _sides: u32) -> u32 {
            self.roll
        }

        fn pick(&self, _len: usize) -> usize {
            self.pick
        }
    }

    /// Deterministic RNG for statistical tests.
    pub struct SeededDice(Mutex<StdRng>);

    impl SeededDice {
        pub fn new(seed: u64) -> Self {
            Self(Mutex::new(StdRng::seed_from_u64(seed)))
        }
    }

    impl Dice for SeededDice {
        fn roll(&self, sides: u32) -> u32 {
            self.0.lock().unwrap().random_range(1..=sides)
        }

        fn pick(&self, len: usize) -> usize {
            self.0.lock().unwrap().random_range(0..len)
        }
    }
}
