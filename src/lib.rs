//! # Fieldguard
//!
//! Declarative field validation for forms and other keyed input.
//!
//! A [`Validator`] owns a [`Schema`] mapping field names to [`Rule`]s. Running
//! it against a [`ValueSet`] yields a [`Snapshot`]: overall validity plus the
//! messages reported for each failing field, in rule order. Validation failures
//! are data, never errors.
//!
//! ## Quick Example
//!
//! ```rust
//! use fieldguard::rules::{between, not_longer, not_shorter, pattern, required};
//! use fieldguard::{Rule, Schema, Validator, ValueSet};
//!
//! # fn main() -> Result<(), fieldguard::SchemaError> {
//! let validator = Validator::new(
//!     Schema::new()
//!         .rules(
//!             "stringField",
//!             vec![
//!                 required("Required field").boxed(),
//!                 pattern("^[a-zA-Z]+$", "Should use literals")?.boxed(),
//!                 not_longer(6, "Max of 6 symbols is allowed").boxed(),
//!                 not_shorter(3, "Min of 3 symbols is allowed").boxed(),
//!             ],
//!         )
//!         .rule("numberField", between(10, 100, "Should be between 10 and 100")),
//! );
//!
//! let result = validator.validate(
//!     &ValueSet::new()
//!         .with("stringField", "alltherest5")
//!         .with("numberField", 41),
//! );
//!
//! assert!(!result.valid());
//! assert_eq!(
//!     result.field_errors("stringField"),
//!     Some(&[
//!         "Should use literals".to_string(),
//!         "Max of 6 symbols is allowed".to_string(),
//!     ][..])
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Incremental re-validation
//!
//! When a single field changes, re-run only that field and merge the outcome
//! into the previous result with [`Validator::revalidate`] (or
//! [`ValidateOptions::compare`]). See [`Snapshot::merge`] for the exact rules.
//!
//! ## Features
//!
//! - `serde`: JSON-friendly (de)serialization of values and snapshots, plus
//!   declarative schemas in [`definition`].
//! - `tracing`: debug/trace events for validation calls, reports and merges.
//! - `proptest`: `Arbitrary` for [`Value`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

#[cfg(feature = "serde")]
pub mod definition;
pub mod error;
pub mod nonempty;
pub mod predicate;
pub mod rule;
pub mod rules;
pub mod schema;
pub mod session;
pub mod snapshot;
pub mod testing;
pub mod validator;
pub mod value;

// Re-exports
pub use error::SchemaError;
pub use nonempty::NonEmptyVec;
pub use rule::{BoxedRule, Rule, RuleContext};
pub use schema::{RuleSet, Schema};
pub use session::Session;
pub use snapshot::{Errors, Snapshot};
pub use validator::{ValidateOptions, Validator};
pub use value::{Value, ValueSet};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::rule::{BoxedRule, Rule, RuleContext};
    pub use crate::rules::*;
    pub use crate::schema::{RuleSet, Schema};
    pub use crate::snapshot::{Errors, Snapshot};
    pub use crate::validator::{ValidateOptions, Validator};
    pub use crate::value::{Value, ValueSet};
    pub use crate::SchemaError;
}
