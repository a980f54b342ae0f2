//! Closed intervals of ray parameters.

/// Closed interval `[lo, hi]`, empty when `lo > hi`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    /// The forward half-line `[0, +inf]` of a ray.
    pub const FORWARD: Interval = Interval {
        lo: 0.0,
        hi: f64::INFINITY,
    };

    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn is_empty(&self) -> bool {
        self.lo > self.hi
    }

    /// `f64::max`/`min` drop a NaN operand, so a NaN bound never widens
    /// or poisons the result.
    pub fn intersect(self, other: Self) -> Self {
        Self {
            lo: self.lo.max(other.lo),
            hi: self.hi.min(other.hi),
        }
    }

    /// Tightens `self` to its intersection with `[lo, hi]`.
    pub fn reduce(&mut self, lo: f64, hi: f64) {
        *self = self.intersect(Interval::new(lo, hi));
    }

    pub fn contains(&self, t: f64) -> bool {
        self.lo <= t && t <= self.hi
    }
}
