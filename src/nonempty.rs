//! Non-empty message list for per-field errors
//!
//! A field that failed validation always carries at least one message, and a
//! field that passed is absent from the error map altogether. `NonEmptyVec`
//! makes the third state, a field present with zero messages, impossible to
//! construct.
//!
//! # Examples
//!
//! ```
//! use fieldguard::NonEmptyVec;
//!
//! let mut messages = NonEmptyVec::singleton("Required field");
//! messages.push("too short");
//! assert_eq!(messages.head(), &"Required field");
//! assert_eq!(messages.as_slice(), &["Required field", "too short"]);
//! ```

use std::ops::Deref;

/// A vector guaranteed to contain at least one element.
///
/// Insertion order is preserved, so for error lists the order of elements is
/// the order in which rules reported them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyVec<T> {
    items: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Create a non-empty vector from a head element and the rest.
    ///
    /// # Example
    ///
    /// ```
    /// use fieldguard::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::new(1, vec![2, 3]);
    /// assert_eq!(nev.len(), 3);
    /// ```
    pub fn new(head: T, tail: Vec<T>) -> Self {
        let mut items = Vec::with_capacity(tail.len() + 1);
        items.push(head);
        items.extend(tail);
        Self { items }
    }

    /// Create a non-empty vector holding a single element.
    pub fn singleton(value: T) -> Self {
        Self { items: vec![value] }
    }

    /// Convert a `Vec` into a non-empty vector.
    ///
    /// Returns `None` if the vector is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use fieldguard::NonEmptyVec;
    ///
    /// assert!(NonEmptyVec::from_vec(vec!["a"]).is_some());
    /// assert!(NonEmptyVec::<&str>::from_vec(vec![]).is_none());
    /// ```
    pub fn from_vec(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    /// The first element.
    pub fn head(&self) -> &T {
        &self.items[0]
    }

    /// Everything after the first element.
    pub fn tail(&self) -> &[T] {
        &self.items[1..]
    }

    /// The last element.
    pub fn last(&self) -> &T {
        &self.items[self.items.len() - 1]
    }

    /// Number of elements, always at least one.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Append an element at the end.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Borrow the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate over the elements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Unwrap into a plain `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Deref for NonEmptyVec<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> From<NonEmptyVec<T>> for Vec<T> {
    fn from(nev: NonEmptyVec<T>) -> Self {
        nev.items
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::NonEmptyVec;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<T: Serialize> Serialize for NonEmptyVec<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.items.serialize(serializer)
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for NonEmptyVec<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let items = Vec::<T>::deserialize(deserializer)?;
            NonEmptyVec::from_vec(items)
                .ok_or_else(|| serde::de::Error::custom("expected at least one element"))
        }
    }
}
