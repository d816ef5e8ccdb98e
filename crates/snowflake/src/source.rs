//! Injectable randomness for snowflake construction.

use rand::Rng;

/// A source of integers in an inclusive range.
///
/// Every [`rand::Rng`] is a `RangeSource`, so a seeded `StdRng` gives
/// reproducible snowflakes and `rand::rng()` gives fresh ones.
pub trait RangeSource {
    /// Return an integer in `lo..=hi`. Callers guarantee `lo <= hi`.
    fn int_in_range(&mut self, lo: i64, hi: i64) -> i64;
}

impl<R: Rng> RangeSource for R {
    fn int_in_range(&mut self, lo: i64, hi: i64) -> i64 {
        self.random_range(lo..=hi)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Each value is clamped into the requested range, so `Sequence::new(vec![i64::MAX])`
/// always yields the upper bound.
#[derive(Debug, Clone)]
pub struct Sequence {
    values: Vec<i64>,
    next: usize,
}

impl Sequence {
    /// Create a sequence. An empty list always yields the lower bound.
    pub fn new(values: Vec<i64>) -> Self {
        Self { values, next: 0 }
    }
}

impl RangeSource for Sequence {
    fn int_in_range(&mut self, lo: i64, hi: i64) -> i64 {
        if self.values.is_empty() {
            return lo;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value.clamp(lo, hi)
    }
}
