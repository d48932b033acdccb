//! Limits for field numbers and lengths
//!
//! The catalog compares a projected `f64` (numeric rules) or `usize` (length
//! rules) against limits fixed when the schema is built. A one-sided limit is
//! a [`Limit`] tagged with its [`Bound`]; a two-sided one is [`Between`].
//! Values that do not order against the limit, such as NaN, never pass.

use std::cmp::Ordering;
use std::ops::RangeInclusive;

use super::Predicate;

/// Which side of a [`Limit`] a value must fall on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    /// Strictly below (`lt`).
    Below,
    /// Below or equal (`le`).
    AtMost,
    /// Strictly above (`gt`).
    Above,
    /// Above or equal (`ge`).
    AtLeast,
}

impl Bound {
    fn admits(self, ordering: Ordering) -> bool {
        match self {
            Bound::Below => ordering.is_lt(),
            Bound::AtMost => ordering.is_le(),
            Bound::Above => ordering.is_gt(),
            Bound::AtLeast => ordering.is_ge(),
        }
    }
}

/// A one-sided limit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Limit<T> {
    bound: Bound,
    limit: T,
}

impl<T> Limit<T> {
    /// The side a passing value falls on.
    pub fn bound(&self) -> Bound {
        self.bound
    }

    /// The limit itself.
    pub fn limit(&self) -> &T {
        &self.limit
    }
}

impl<T: PartialOrd + Send + Sync> Predicate<T> for Limit<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        value
            .partial_cmp(&self.limit)
            .is_some_and(|ordering| self.bound.admits(ordering))
    }
}

/// Passes when the value is strictly less than `limit`.
///
/// ```rust
/// use fieldguard::predicate::*;
///
/// assert!(lt(100.0).check(&99.0));
/// assert!(!lt(100.0).check(&100.0));
/// assert!(!lt(100.0).check(&f64::NAN));
/// ```
pub fn lt<T>(limit: T) -> Limit<T> {
    Limit {
        bound: Bound::Below,
        limit,
    }
}

/// Passes when the value is at most `limit`.
pub fn le<T>(limit: T) -> Limit<T> {
    Limit {
        bound: Bound::AtMost,
        limit,
    }
}

/// Passes when the value is strictly greater than `limit`.
pub fn gt<T>(limit: T) -> Limit<T> {
    Limit {
        bound: Bound::Above,
        limit,
    }
}

/// Passes when the value is at least `limit`.
pub fn ge<T>(limit: T) -> Limit<T> {
    Limit {
        bound: Bound::AtLeast,
        limit,
    }
}

/// An inclusive range; both ends pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Between<T> {
    range: RangeInclusive<T>,
}

impl<T> Between<T> {
    /// Lowest passing value.
    pub fn min(&self) -> &T {
        self.range.start()
    }

    /// Highest passing value.
    pub fn max(&self) -> &T {
        self.range.end()
    }
}

impl<T: PartialOrd + Send + Sync> Predicate<T> for Between<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.range.contains(value)
    }
}

/// Passes when `min <= value <= max`.
///
/// ```rust
/// use fieldguard::predicate::*;
///
/// let p = between(10.0, 100.0);
/// assert!(p.check(&10.0));
/// assert!(p.check(&100.0));
/// assert!(!p.check(&101.0));
/// ```
pub fn between<T>(min: T, max: T) -> Between<T> {
    Between { range: min..=max }
}
