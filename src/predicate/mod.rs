//! Comparison predicates the rule catalog is built on
//!
//! A [`Predicate`] answers a yes/no question about a value. The catalog rules
//! project a field [`Value`](crate::Value) to a number or a length and then ask
//! one of these predicates; [`rules::number`](crate::rules::number) and
//! [`rules::length`](crate::rules::length) accept any predicate, so custom
//! constraints can be composed with `and`, `or` and `not`.
//!
//! # Example
//!
//! ```rust
//! use fieldguard::predicate::*;
//!
//! let percentage = ge(0.0).and(le(100.0));
//! assert!(percentage.check(&0.0));
//! assert!(!percentage.check(&100.5));
//!
//! let outside = between(10.0, 20.0).not();
//! assert!(outside.check(&9.0));
//! ```

mod number;

pub use number::{between, ge, gt, le, lt, Between, Bound, Limit};

/// A composable predicate over values of type T.
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Method-chaining combinators for predicates.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// True only when both predicates are true.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// True when either predicate is true.
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Inverts the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}
