//! Testing utilities for code that validates with fieldguard
//!
//! Assertion macros for [`Snapshot`](crate::Snapshot)s and, with the
//! `proptest` feature, an [`Arbitrary`](proptest::arbitrary::Arbitrary)
//! implementation for [`Value`](crate::Value).
//!
//! # Examples
//!
//! ```rust
//! use fieldguard::rules::required;
//! use fieldguard::{assert_field_errors, assert_invalid, assert_valid};
//! use fieldguard::{Schema, Validator, ValueSet};
//!
//! let validator = Validator::new(Schema::new().rule("name", required("Required field")));
//!
//! assert_valid!(validator.validate(&ValueSet::new().with("name", "Ada")));
//!
//! let result = validator.validate(&ValueSet::new());
//! assert_invalid!(result);
//! assert_field_errors!(result, "name", ["Required field"]);
//! ```

/// Assert that a snapshot is valid.
///
/// Panics with the snapshot's errors if it is not.
#[macro_export]
macro_rules! assert_valid {
    ($snapshot:expr) => {{
        let snapshot: &$crate::Snapshot = &$snapshot;
        if !snapshot.valid() {
            panic!("Expected valid result, got errors: {:?}", snapshot.errors());
        }
    }};
}

/// Assert that a snapshot is invalid.
#[macro_export]
macro_rules! assert_invalid {
    ($snapshot:expr) => {{
        let snapshot: &$crate::Snapshot = &$snapshot;
        if snapshot.valid() {
            panic!("Expected invalid result, got a valid one");
        }
    }};
}

/// Assert the exact, ordered messages reported for one field.
///
/// ```rust
/// use fieldguard::{assert_field_errors, Errors, Snapshot};
///
/// let snapshot = Snapshot::from_errors(Errors::new().with("a", "x").with("a", "y"));
/// assert_field_errors!(snapshot, "a", ["x", "y"]);
/// ```
#[macro_export]
macro_rules! assert_field_errors {
    ($snapshot:expr, $field:expr, [$($message:expr),* $(,)?]) => {{
        let snapshot: &$crate::Snapshot = &$snapshot;
        let expected: ::std::vec::Vec<::std::string::String> =
            ::std::vec![$(::std::string::String::from($message)),*];
        match snapshot.field_errors($field) {
            Some(actual) => assert_eq!(actual, expected.as_slice(), "errors for field {:?}", $field),
            None => panic!(
                "Expected errors {:?} for field {:?}, got none",
                expected, $field
            ),
        }
    }};
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for crate::Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        use crate::Value;

        let scalar = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Int),
            any::<f64>().prop_map(Value::Float),
            ".{0,12}".prop_map(Value::Str),
        ]
        .boxed();
        prop_oneof![
            4 => scalar.clone(),
            1 => prop::collection::vec(scalar, 0..4).prop_map(Value::List),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Errors, Snapshot};

    fn failing() -> Snapshot {
        Snapshot::from_errors(Errors::new().with("a", "x").with("a", "y"))
    }

    #[test]
    fn assert_valid_macro() {
        assert_valid!(Snapshot::default());
    }

    #[test]
    fn assert_invalid_macro() {
        assert_invalid!(failing());
    }

    #[test]
    fn assert_field_errors_macro() {
        assert_field_errors!(failing(), "a", ["x", "y"]);
    }

    #[test]
    #[should_panic(expected = "Expected valid result")]
    fn assert_valid_panics_on_errors() {
        assert_valid!(failing());
    }

    #[test]
    #[should_panic(expected = "Expected invalid result")]
    fn assert_invalid_panics_on_valid() {
        assert_invalid!(Snapshot::default());
    }

    #[test]
    #[should_panic(expected = "got none")]
    fn assert_field_errors_panics_on_missing_field() {
        assert_field_errors!(failing(), "b", ["x"]);
    }

    #[test]
    #[should_panic(expected = "errors for field")]
    fn assert_field_errors_panics_on_order() {
        assert_field_errors!(failing(), "a", ["y", "x"]);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::Value;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn value_arbitrary_never_yields_nested_lists(value in any::<Value>()) {
                if let Value::List(items) = value {
                    prop_assert!(items.iter().all(|item| !matches!(item, Value::List(_))));
                }
            }
        }
    }
}
