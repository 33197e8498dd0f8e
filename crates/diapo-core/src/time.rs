//! Time representation for slideshow playback
//!
//! Uses rational numbers so that summing many item and transition durations
//! never drifts. All time values are seconds stored as numerator/denominator.

use num_rational::Rational64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

/// A rational time value representing a point in time or a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RationalTime {
    /// Time value as a rational number (seconds)
    value: Rational64,
}

impl RationalTime {
    /// Create a new RationalTime from numerator and denominator.
    /// The time is `numerator / denominator` seconds.
    #[inline]
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            value: Rational64::new(numerator, denominator),
        }
    }

    /// Create a RationalTime from whole seconds.
    #[inline]
    pub fn from_secs(seconds: i64) -> Self {
        Self::new(seconds, 1)
    }

    /// Create a RationalTime from milliseconds.
    #[inline]
    pub fn from_millis(millis: i64) -> Self {
        Self::new(millis, 1000)
    }

    /// Convert to seconds as f64.
    #[inline]
    pub fn to_seconds_f64(self) -> f64 {
        *self.value.numer() as f64 / *self.value.denom() as f64
    }

    /// Convert to whole milliseconds (floored).
    #[inline]
    pub fn to_millis(self) -> i64 {
        let ms = self.value * Rational64::from_integer(1000);
        ms.floor().to_integer()
    }

    /// Zero time constant.
    pub const ZERO: Self = Self {
        value: Rational64::new_raw(0, 1),
    };

    /// Check if this time is strictly greater than zero.
    #[inline]
    pub fn is_positive(self) -> bool {
        *self.value.numer() > 0
    }

    /// Ratio `self / other` as f64. Caller guarantees `other` is non-zero.
    #[inline]
    fn ratio_f64(self, other: Self) -> f64 {
        let r = self.value / other.value;
        *r.numer() as f64 / *r.denom() as f64
    }
}

impl Default for RationalTime {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for RationalTime {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            value: self.value + rhs.value,
        }
    }
}

impl Sub for RationalTime {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            value: self.value - rhs.value,
        }
    }
}

impl Sum for RationalTime {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, t| acc + t)
    }
}

impl fmt::Display for RationalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.to_seconds_f64())
    }
}

/// Map `x` to a progress fraction within `[a, b)`, clamped to `[0, 1]`.
///
/// Returns 0 for `x <= a`, then 1 for `x >= b`. The lower bound wins, so a
/// degenerate range (`b <= a`) reads 0 up to and including `a` and 1 after
/// it, and never divides.
pub fn step(a: RationalTime, b: RationalTime, x: RationalTime) -> f64 {
    if x <= a {
        return 0.0;
    }
    if x >= b {
        return 1.0;
    }
    (x - a).ratio_f64(b - a).clamp(0.0, 1.0)
}

/// A playback interval with inclusive start and exclusive end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeInterval {
    /// Start time (inclusive)
    pub start: RationalTime,
    /// End time (exclusive)
    pub end: RationalTime,
}

impl TimeInterval {
    /// Create an interval from start and end times.
    #[inline]
    pub fn new(start: RationalTime, end: RationalTime) -> Self {
        Self { start, end }
    }

    /// Create an interval from a start time and a duration.
    #[inline]
    pub fn from_start_duration(start: RationalTime, duration: RationalTime) -> Self {
        Self {
            start,
            end: start + duration,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(self) -> RationalTime {
        self.end - self.start
    }

    /// Check if a time is within this interval.
    #[inline]
    pub fn contains(self, time: RationalTime) -> bool {
        time >= self.start && time < self.end
    }

    /// Clamped progress of `time` through this interval.
    #[inline]
    pub fn progress(self, time: RationalTime) -> f64 {
        step(self.start, self.end, time)
    }

    /// Empty interval at zero.
    pub const EMPTY: Self = Self {
        start: RationalTime::ZERO,
        end: RationalTime::ZERO,
    };
}

impl Default for TimeInterval {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
