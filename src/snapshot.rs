//! Validation results
//!
//! A [`Snapshot`] is the immutable `{ valid, errors }` pair a validator hands
//! back. Validity is not stored separately from the errors: a snapshot is valid
//! exactly when its [`Errors`] map is empty, so the two can never disagree.
//!
//! # Merging
//!
//! Interactive forms re-validate one field at a time. [`Snapshot::merge`]
//! folds the outcome of such a single-field run into a previously computed
//! whole-schema snapshot:
//!
//! ```
//! use fieldguard::{Errors, Snapshot};
//!
//! let previous = Snapshot::from_errors(
//!     Errors::new().with("a", "x").with("b", "y"),
//! );
//! // Field `a` now passes.
//! let current = Snapshot::default();
//!
//! let merged = previous.merge("a", &current);
//! assert!(!merged.valid());
//! assert_eq!(merged.field_errors("a"), None);
//! assert_eq!(merged.field_errors("b"), Some(&["y".to_string()][..]));
//! ```

use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::NonEmptyVec;

/// Field name to the ordered messages reported against it.
///
/// A field with no messages is absent; it is never present with an empty
/// list.
///
/// Messages keep the order they were reported in, but fields iterate (and
/// serialize to JSON) sorted by name, not in schema or report order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Errors {
    fields: BTreeMap<String, NonEmptyVec<String>>,
}

impl Errors {
    /// Create an empty error map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.push(field, message);
        self
    }

    /// Append a message to a field, creating its list if needed.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let message = message.into();
        match self.fields.entry(field.into()) {
            btree_map::Entry::Occupied(mut entry) => entry.get_mut().push(message),
            btree_map::Entry::Vacant(entry) => {
                entry.insert(NonEmptyVec::singleton(message));
            }
        }
    }

    /// Messages for a field, in report order.
    pub fn get(&self, field: &str) -> Option<&NonEmptyVec<String>> {
        self.fields.get(field)
    }

    /// Whether the field has at least one message.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field failed.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Failing field names in key order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterate over failing fields and their messages.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NonEmptyVec<String>)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn insert_list(&mut self, field: String, messages: NonEmptyVec<String>) {
        self.fields.insert(field, messages);
    }
}

impl IntoIterator for Errors {
    type Item = (String, NonEmptyVec<String>);
    type IntoIter = btree_map::IntoIter<String, NonEmptyVec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// Immutable result of one validation call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "repr::SnapshotRepr", from = "repr::SnapshotRepr")
)]
pub struct Snapshot {
    errors: Errors,
}

impl Snapshot {
    /// Wrap an error map. The snapshot is valid iff the map is empty.
    pub fn from_errors(errors: Errors) -> Self {
        Self { errors }
    }

    /// Whether no field failed.
    #[inline]
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// All reported errors.
    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    /// Messages for one field as a slice, if it failed.
    pub fn field_errors(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(|messages| messages.as_slice())
    }

    /// Take the error map out of the snapshot.
    pub fn into_errors(self) -> Errors {
        self.errors
    }

    /// Fold a fresh single-field result into this snapshot.
    ///
    /// `current` is the outcome of re-validating only `field`. When its
    /// messages for `field` equal the ones recorded here (same messages, same
    /// order, or both absent), `self` is returned as is. Otherwise a new
    /// snapshot is built: every other field keeps the messages recorded in
    /// `self`, and `field` takes the messages from `current`, disappearing if
    /// it now passes.
    ///
    /// Fields other than `field` are assumed unaffected by the change.
    pub fn merge(self, field: &str, current: &Snapshot) -> Snapshot {
        let fresh = current.errors.get(field);
        if self.errors.get(field) == fresh {
            #[cfg(feature = "tracing")]
            tracing::trace!(field, "merge left previous result unchanged");
            return self;
        }

        let mut merged = Errors::new();
        for (key, messages) in self.errors {
            if key != field {
                merged.insert_list(key, messages);
            }
        }
        if let Some(messages) = fresh {
            merged.insert_list(field.to_string(), messages.clone());
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            field,
            failing_fields = merged.len(),
            "merge replaced field errors"
        );

        Snapshot::from_errors(merged)
    }
}

impl From<Errors> for Snapshot {
    fn from(errors: Errors) -> Self {
        Snapshot::from_errors(errors)
    }
}

#[cfg(feature = "serde")]
mod repr {
    use super::{Errors, Snapshot};

    /// Wire shape: `{"valid": bool, "errors": {...}}`. `valid` is written for
    /// consumers but recomputed from `errors` on the way in.
    #[derive(serde::Serialize, serde::Deserialize)]
    pub(super) struct SnapshotRepr {
        #[serde(default)]
        valid: bool,
        #[serde(default)]
        errors: Errors,
    }

    impl From<Snapshot> for SnapshotRepr {
        fn from(snapshot: Snapshot) -> Self {
            SnapshotRepr {
                valid: snapshot.valid(),
                errors: snapshot.errors,
            }
        }
    }

    impl From<SnapshotRepr> for Snapshot {
        fn from(repr: SnapshotRepr) -> Self {
            Snapshot::from_errors(repr.errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_validity_tracks_errors() {
        assert!(Snapshot::default().valid());
        assert!(!Snapshot::from_errors(Errors::new().with("a", "x")).valid());
    }

    #[test]
    fn test_push_preserves_order() {
        let errors = Errors::new()
            .with("a", "first")
            .with("b", "other")
            .with("a", "second");
        assert_eq!(
            errors.get("a").map(|m| m.as_slice()),
            Some(&strings(&["first", "second"])[..])
        );
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_fields_iterate_by_name_not_report_order() {
        let errors = Errors::new().with("zeta", "z").with("alpha", "a");
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["alpha", "zeta"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_fields_sorted_by_name() {
        let errors = Errors::new().with("zeta", "z").with("alpha", "a");
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"alpha":["a"],"zeta":["z"]}"#);
    }

    #[test]
    fn test_merge_identical_returns_previous() {
        let previous = Snapshot::from_errors(Errors::new().with("a", "x").with("b", "y"));
        let current = Snapshot::from_errors(Errors::new().with("a", "x"));

        let merged = previous.clone().merge("a", &current);
        assert_eq!(merged, previous);
    }

    #[test]
    fn test_merge_both_absent_is_unchanged() {
        let previous = Snapshot::from_errors(Errors::new().with("b", "y"));
        let merged = previous.clone().merge("a", &Snapshot::default());
        assert_eq!(merged, previous);
    }

    #[test]
    fn test_merge_clears_passing_field() {
        let previous = Snapshot::from_errors(Errors::new().with("a", "x").with("b", "y"));
        let merged = previous.merge("a", &Snapshot::default());

        assert!(!merged.valid());
        assert_eq!(merged.field_errors("a"), None);
        assert_eq!(merged.field_errors("b"), Some(&strings(&["y"])[..]));
    }

    #[test]
    fn test_merge_clearing_last_field_becomes_valid() {
        let previous = Snapshot::from_errors(Errors::new().with("a", "x"));
        let merged = previous.merge("a", &Snapshot::default());
        assert!(merged.valid());
        assert!(merged.errors().is_empty());
    }

    #[test]
    fn test_merge_replaces_changed_messages() {
        let previous = Snapshot::from_errors(Errors::new().with("a", "x").with("a", "z"));
        let current = Snapshot::from_errors(Errors::new().with("a", "z"));

        let merged = previous.merge("a", &current);
        assert_eq!(merged.field_errors("a"), Some(&strings(&["z"])[..]));
    }

    #[test]
    fn test_merge_order_difference_counts_as_change() {
        let previous = Snapshot::from_errors(Errors::new().with("a", "x").with("a", "y"));
        let current = Snapshot::from_errors(Errors::new().with("a", "y").with("a", "x"));

        let merged = previous.merge("a", &current);
        assert_eq!(merged.field_errors("a"), Some(&strings(&["y", "x"])[..]));
    }

    #[test]
    fn test_merge_adds_newly_failing_field() {
        let previous = Snapshot::from_errors(Errors::new().with("b", "y"));
        let current = Snapshot::from_errors(Errors::new().with("a", "x"));

        let merged = previous.merge("a", &current);
        assert_eq!(merged.field_errors("a"), Some(&strings(&["x"])[..]));
        assert_eq!(merged.field_errors("b"), Some(&strings(&["y"])[..]));
    }

    #[test]
    fn test_merge_ignores_other_fields_in_current() {
        let previous = Snapshot::default();
        let current = Snapshot::from_errors(Errors::new().with("a", "x").with("c", "stray"));

        let merged = previous.merge("a", &current);
        assert!(!merged.errors().contains("c"));
        assert_eq!(merged.errors().len(), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_shape() {
        let snapshot = Snapshot::from_errors(Errors::new().with("a", "x").with("a", "y"));
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"valid": false, "errors": {"a": ["x", "y"]}})
        );

        let valid = serde_json::to_value(Snapshot::default()).unwrap();
        assert_eq!(valid, serde_json::json!({"valid": true, "errors": {}}));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_recomputes_valid() {
        let snapshot: Snapshot =
            serde_json::from_str(r#"{"valid": true, "errors": {"a": ["x"]}}"#).unwrap();
        assert!(!snapshot.valid());
    }
}
