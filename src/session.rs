//! Per-call validation state
//!
//! A [`Session`] lives for exactly one validation call. It borrows the value
//! set, the parameter bag and the schema, and owns the errors accumulated so
//! far. Validators create one per call and turn it into a
//! [`Snapshot`] when the rules have run; it can also be driven by hand:
//!
//! ```
//! use fieldguard::rules::{not_shorter, required};
//! use fieldguard::{Rule, Schema, Session, ValueSet};
//!
//! let schema = Schema::new().rules(
//!     "name",
//!     vec![required("Required field").boxed(), not_shorter(3, "too short").boxed()],
//! );
//! let values = ValueSet::new().with("name", "");
//!
//! let mut session = Session::new(&values, None, &schema);
//! session.run_rules_for("name");
//! let snapshot = session.snapshot();
//!
//! assert!(!snapshot.valid());
//! assert_eq!(snapshot.errors().get("name").map(|m| m.len()), Some(2));
//! ```

use std::fmt;

use crate::rule::RuleContext;
use crate::{Errors, Schema, Snapshot, ValueSet};

/// Mutable, single-use validation state.
pub struct Session<'a, P = ()> {
    values: &'a ValueSet,
    params: Option<&'a P>,
    schema: &'a Schema<P>,
    valid: bool,
    errors: Errors,
}

impl<'a, P> Session<'a, P> {
    /// Start a session. Initially valid with no errors.
    pub fn new(values: &'a ValueSet, params: Option<&'a P>, schema: &'a Schema<P>) -> Self {
        Self {
            values,
            params,
            schema,
            valid: true,
            errors: Errors::new(),
        }
    }

    /// Record a failure: marks the session invalid and appends `message` to
    /// the field's list.
    pub fn report(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        #[cfg(feature = "tracing")]
        tracing::trace!(field, message = %message, "rule reported");
        self.valid = false;
        self.errors.push(field, message);
    }

    /// The parameter bag, if the caller supplied one.
    pub fn params(&self) -> Option<&'a P> {
        self.params
    }

    /// Run every rule declared for `field`, in declaration order.
    ///
    /// All rules run even after one has failed. A field without a schema
    /// entry, or declared without rules, is a no-op.
    pub fn run_rules_for(&mut self, field: &str) -> &mut Self {
        let schema = self.schema;
        let values = self.values;
        let value = values.get(field);

        if let Some(rules) = schema.get(field) {
            let mut ctx = RuleContext::new(self);
            for rule in rules.iter() {
                rule.apply(&mut ctx, value, field);
            }
        }

        self
    }

    /// Whether nothing has been reported so far.
    pub fn valid(&self) -> bool {
        self.valid
    }

    /// Result reflecting the current state. Does not reset anything.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_errors(self.errors.clone())
    }

    /// Consume the session into its result.
    pub fn into_snapshot(self) -> Snapshot {
        Snapshot::from_errors(self.errors)
    }
}

impl<P> fmt::Debug for Session<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("values", &self.values)
            .field("has_params", &self.params.is_some())
            .field("schema", &self.schema)
            .field("valid", &self.valid)
            .field("errors", &self.errors)
            .finish()
    }
}
