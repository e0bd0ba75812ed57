use std::collections::VecDeque;

/// A source of the random draws used by the pipeline.
///
/// Every sampling site in the crate goes through this trait, so the decisions of an
/// augmentation can be reproduced with a seeded generator or scripted outright.
/// Any [`rand::Rng`] is a `RandomSource`.
pub trait RandomSource {
    /// Draw a value uniformly between `low` and `high`.
    ///
    /// The bounds may be given in either order. When they are equal `low` is
    /// returned.
    fn uniform(&mut self, low: f32, high: f32) -> f32;

    /// Draw a fair boolean.
    fn coin(&mut self) -> bool;
}

impl<R: rand::Rng> RandomSource for R {
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        if low == high {
            return low;
        }
        let (lo, hi) = if low < high { (low, high) } else { (high, low) };
        self.random_range(lo..hi)
    }

    fn coin(&mut self) -> bool {
        self.random_bool(0.5)
    }
}

/// A [`RandomSource`] replaying fixed values.
///
/// Each uniform draw consumes one fraction `t` from the script and returns
/// `low + t * (high - low)`, so `t = 0` yields `low` and `t = 1` yields `high`.
/// Coin flips consume a separate queue. Once a queue is exhausted, uniform draws
/// return the midpoint of their range and coins come up `false`.
///
/// # Examples
///
/// ```
/// use detaug::random::{RandomSource, ScriptedSource};
///
/// let mut rng = ScriptedSource::new([0.0, 1.0], [true]);
///
/// assert_eq!(rng.uniform(2.0, 4.0), 2.0);
/// assert_eq!(rng.uniform(2.0, 4.0), 4.0);
/// assert_eq!(rng.uniform(2.0, 4.0), 3.0);
/// assert!(rng.coin());
/// assert!(!rng.coin());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    fractions: VecDeque<f32>,
    coins: VecDeque<bool>,
}

impl ScriptedSource {
    /// Create a source from the uniform fractions and coin outcomes to replay.
    pub fn new(
        fractions: impl IntoIterator<Item = f32>,
        coins: impl IntoIterator<Item = bool>,
    ) -> Self {
        Self {
            fractions: fractions.into_iter().collect(),
            coins: coins.into_iter().collect(),
        }
    }

    /// Number of uniform draws left in the script.
    pub fn remaining_fractions(&self) -> usize {
        self.fractions.len()
    }

    /// Number of coin flips left in the script.
    pub fn remaining_coins(&self) -> usize {
        self.coins.len()
    }
}

impl RandomSource for ScriptedSource {
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        let t = self.fractions.pop_front().unwrap_or(0.5);
        low + t * (high - low)
    }

    fn coin(&mut self) -> bool {
        self.coins.pop_front().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{RandomSource, ScriptedSource};

    #[test]
    fn uniform_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let v = rng.uniform(-3.0, 5.0);
            assert!((-3.0..=5.0).contains(&v));
        }
    }

    #[test]
    fn uniform_accepts_reversed_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = rng.uniform(0.0, -10.0);
            assert!((-10.0..=0.0).contains(&v));
        }
    }

    #[test]
    fn uniform_empty_range() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(rng.uniform(1.5, 1.5), 1.5);
        assert_eq!(rng.uniform(-0.0, 0.0), -0.0);
    }

    #[test]
    fn seeded_sources_agree() {
        let mut a = StdRng::seed_from_u64(123);
        let mut b = StdRng::seed_from_u64(123);
        for _ in 0..100 {
            assert_eq!(a.uniform(0.0, 1.0), b.uniform(0.0, 1.0));
            assert_eq!(a.coin(), b.coin());
        }
    }

    #[test]
    fn scripted_replays_in_order() {
        let mut rng = ScriptedSource::new([0.25, 0.5], [true, false]);
        assert_eq!(rng.remaining_fractions(), 2);
        assert_eq!(rng.uniform(0.0, 8.0), 2.0);
        assert_eq!(rng.uniform(0.0, -8.0), -4.0);
        assert!(rng.coin());
        assert!(!rng.coin());
        assert_eq!(rng.remaining_coins(), 0);
        assert_eq!(rng.uniform(10.0, 20.0), 15.0);
    }
}
