//! The reusable validator
//!
//! A [`Validator`] owns a [`Schema`] and runs it against value sets. Each call
//! gets its own [`Session`], so a validator holds no per-call state and can be
//! shared freely, including across threads.
//!
//! Three modes are selected through [`ValidateOptions`]:
//!
//! - **whole schema** (no field): every declared field, in declaration order;
//! - **single field**: only the named field, nothing else appears in the
//!   result;
//! - **single field with merge**: the named field is re-run and folded into a
//!   previous result with [`Snapshot::merge`].
//!
//! # Example
//!
//! ```
//! use fieldguard::rules::{not_shorter, required};
//! use fieldguard::{Schema, ValidateOptions, Validator, ValueSet};
//!
//! let validator = Validator::new(
//!     Schema::new()
//!         .rule("name", required("Required field"))
//!         .rule("city", not_shorter(2, "too short")),
//! );
//!
//! let mut values = ValueSet::new().with("name", "").with("city", "X");
//! let full = validator.validate(&values);
//! assert_eq!(full.errors().len(), 2);
//!
//! // The user fixes `name`; only that field is re-run.
//! values.insert("name", "Ada");
//! let updated = validator.validate_with(
//!     &values,
//!     ValidateOptions::new().field("name").compare(full),
//! );
//! assert!(!updated.errors().contains("name"));
//! assert!(updated.errors().contains("city"));
//! ```

use crate::rule::RuleContext;
use crate::{Schema, Session, Snapshot, Value, ValueSet};

/// Per-call options for [`Validator::validate_with`].
#[derive(Debug)]
pub struct ValidateOptions<'a, P = ()> {
    field: Option<&'a str>,
    params: Option<&'a P>,
    compare: Option<Snapshot>,
}

impl<'a, P> ValidateOptions<'a, P> {
    /// No field, no parameters, nothing to compare: whole-schema mode.
    pub fn new() -> Self {
        Self {
            field: None,
            params: None,
            compare: None,
        }
    }

    /// Restrict validation to one field. An empty name selects whole-schema
    /// mode.
    pub fn field(mut self, field: &'a str) -> Self {
        self.field = Some(field);
        self
    }

    /// Pass a parameter bag through to every rule.
    pub fn params(mut self, params: &'a P) -> Self {
        self.params = Some(params);
        self
    }

    /// Merge the single-field outcome into this previous result. Ignored in
    /// whole-schema mode.
    pub fn compare(mut self, previous: Snapshot) -> Self {
        self.compare = Some(previous);
        self
    }
}

impl<P> Default for ValidateOptions<'_, P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns a schema and validates value sets against it.
#[derive(Debug)]
pub struct Validator<P = ()> {
    schema: Schema<P>,
}

impl<P> Validator<P> {
    /// Create a validator for `schema`.
    pub fn new(schema: Schema<P>) -> Self {
        Self { schema }
    }

    /// The schema this validator runs.
    pub fn schema(&self) -> &Schema<P> {
        &self.schema
    }

    /// Validate every declared field.
    pub fn validate(&self, values: &ValueSet) -> Snapshot {
        self.validate_with(values, ValidateOptions::new())
    }

    /// Validate according to `options`.
    pub fn validate_with(&self, values: &ValueSet, options: ValidateOptions<'_, P>) -> Snapshot {
        let ValidateOptions {
            field,
            params,
            compare,
        } = options;
        let mut session = Session::new(values, params, &self.schema);

        match field.filter(|f| !f.is_empty()) {
            Some(field) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    field,
                    merge = compare.is_some(),
                    "validating single field"
                );

                session.run_rules_for(field);
                let current = session.into_snapshot();
                match compare {
                    Some(previous) => previous.merge(field, &current),
                    None => current,
                }
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(fields = self.schema.len(), "validating whole schema");

                for field in self.schema.fields() {
                    session.run_rules_for(field);
                }
                session.into_snapshot()
            }
        }
    }

    /// Re-run one field and merge the outcome into `previous`.
    ///
    /// Shorthand for `validate_with` with `field` and `compare` set.
    pub fn revalidate(&self, values: &ValueSet, field: &str, previous: Snapshot) -> Snapshot {
        self.validate_with(values, ValidateOptions::new().field(field).compare(previous))
    }

    /// Identity helper that pins a closure to the rule signature.
    ///
    /// Returns `rule` unchanged; it only exists so the closure's argument types
    /// are inferred.
    pub fn create_rule<F>(rule: F) -> F
    where
        F: Fn(&mut RuleContext<'_, '_, P>, Option<&Value>, &str) + Send + Sync,
    {
        rule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{more_then, not_shorter, required};
    use crate::{Errors, Rule};

    fn validator() -> Validator {
        Validator::new(
            Schema::new()
                .rules(
                    "a",
                    vec![required("a required").boxed(), not_shorter(3, "a short").boxed()],
                )
                .rule("b", more_then(0, "b positive")),
        )
    }

    #[test]
    fn test_whole_schema_runs_every_field() {
        let result = validator().validate(&ValueSet::new());
        assert_eq!(result.errors().fields().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(result.field_errors("a").map(<[String]>::len), Some(2));
    }

    #[test]
    fn test_single_field_mode_only_reports_that_field() {
        let result = validator()
            .validate_with(&ValueSet::new(), ValidateOptions::new().field("b"));
        assert_eq!(result.errors().fields().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn test_empty_field_name_selects_whole_schema() {
        let result =
            validator().validate_with(&ValueSet::new(), ValidateOptions::new().field(""));
        assert_eq!(result.errors().len(), 2);
    }

    #[test]
    fn test_compare_without_field_is_ignored() {
        let previous = Snapshot::from_errors(Errors::new().with("zzz", "stale"));
        let result = validator().validate_with(
            &ValueSet::new().with("a", "abc").with("b", 1),
            ValidateOptions::new().compare(previous),
        );
        assert!(result.valid());
    }

    #[test]
    fn test_unknown_field_yields_valid_result() {
        let result = validator()
            .validate_with(&ValueSet::new(), ValidateOptions::new().field("nope"));
        assert!(result.valid());
    }

    #[test]
    fn test_revalidate_merges() {
        let v = validator();
        let mut values = ValueSet::new().with("a", "").with("b", 0);
        let full = v.validate(&values);
        assert_eq!(full.errors().len(), 2);

        values.insert("a", "abcd");
        let merged = v.revalidate(&values, "a", full);
        assert_eq!(merged.errors().fields().collect::<Vec<_>>(), vec!["b"]);
        assert!(!merged.valid());
    }

    #[test]
    fn test_revalidate_unchanged_returns_previous() {
        let v = validator();
        let values = ValueSet::new().with("a", "ab").with("b", 0);
        let full = v.validate(&values);
        let again = v.revalidate(&values, "a", full.clone());
        assert_eq!(again, full);
    }

    #[test]
    fn test_params_reach_rules() {
        let v = Validator::new(Schema::parameterized().rule(
            "age",
            Validator::<u32>::create_rule(|ctx, value, field| {
                let min = ctx.params().copied().unwrap_or(0);
                if value.and_then(Value::as_number).unwrap_or(0.0) < f64::from(min) {
                    ctx.report(field, "too young");
                }
            }),
        ));
        let values = ValueSet::new().with("age", 16);

        assert!(v.validate(&values).valid());
        assert!(!v
            .validate_with(&values, ValidateOptions::new().params(&18))
            .valid());
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[test]
        #[traced_test]
        fn test_logs_mode_reports_and_merge_outcome() {
            let v = validator();
            let values = ValueSet::new().with("a", "ab").with("b", 0);

            let full = v.validate(&values);
            assert!(logs_contain("validating whole schema"));
            assert!(logs_contain("rule reported"));

            let _ = v.revalidate(&values, "a", full);
            assert!(logs_contain("validating single field"));
            assert!(logs_contain("merge left previous result unchanged"));
        }
    }
}
