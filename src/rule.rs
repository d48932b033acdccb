//! The rule interface
//!
//! A [`Rule`] is handed the current value of the field it is declared for
//! (`None` when the field is absent from the value set), the field name, and a
//! [`RuleContext`]. The context is the rule's only way to affect a validation
//! run: it can report messages and read the caller's parameter bag. Rules
//! cannot see the schema or the messages of sibling rules.
//!
//! Closures with the right signature are rules:
//!
//! ```
//! use fieldguard::{RuleContext, Schema, Validator, Value, ValueSet};
//!
//! let even = Validator::<()>::create_rule(
//!     |ctx: &mut RuleContext<'_, '_, ()>, value: Option<&Value>, field: &str| {
//!         if value.and_then(Value::as_number).map_or(true, |n| n % 2.0 != 0.0) {
//!             ctx.report(field, "must be even");
//!         }
//!     },
//! );
//!
//! let validator = Validator::new(Schema::new().rule("count", even));
//! let result = validator.validate(&ValueSet::new().with("count", 3));
//! assert_eq!(result.field_errors("count"), Some(&["must be even".to_string()][..]));
//! ```

use std::fmt;

use crate::session::Session;
use crate::Value;

/// A unit of validation logic bound to one field.
///
/// `P` is the type of the optional parameter bag passed through
/// [`ValidateOptions::params`](crate::ValidateOptions::params).
pub trait Rule<P = ()>: Send + Sync {
    /// Run the rule. Report zero or more messages through `ctx`.
    fn apply(&self, ctx: &mut RuleContext<'_, '_, P>, value: Option<&Value>, field: &str);

    /// Box the rule for storage in a multi-rule schema entry.
    fn boxed(self) -> BoxedRule<P>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<P, F> Rule<P> for F
where
    F: Fn(&mut RuleContext<'_, '_, P>, Option<&Value>, &str) + Send + Sync,
{
    #[inline]
    fn apply(&self, ctx: &mut RuleContext<'_, '_, P>, value: Option<&Value>, field: &str) {
        self(ctx, value, field)
    }
}

/// A type-erased rule.
pub type BoxedRule<P = ()> = Box<dyn Rule<P>>;

/// The handle a rule receives while it runs.
///
/// Exposes reporting, read-only access to the parameter bag, and
/// [`use_rules`](Self::use_rules) for rules that delegate to other rules.
pub struct RuleContext<'s, 'a, P> {
    session: &'s mut Session<'a, P>,
}

impl<'s, 'a, P> RuleContext<'s, 'a, P> {
    pub(crate) fn new(session: &'s mut Session<'a, P>) -> Self {
        Self { session }
    }

    /// Record a failure message against `field`.
    pub fn report(&mut self, field: &str, message: impl Into<String>) {
        self.session.report(field, message);
    }

    /// The parameter bag for this validation call, if one was supplied.
    pub fn params(&self) -> Option<&'a P> {
        self.session.params()
    }

    /// Apply `rules` in order to `value` as if they were declared for `field`.
    ///
    /// Every rule runs, and messages land in the same session as the calling
    /// rule's own reports. This is how conditional or composed rules are
    /// written:
    ///
    /// ```
    /// use fieldguard::rules::{not_shorter, required};
    /// use fieldguard::{BoxedRule, Rule, Schema, ValidateOptions, Validator, ValueSet};
    ///
    /// struct Signup {
    ///     has_company: bool,
    /// }
    ///
    /// let company_rules: Vec<BoxedRule<Signup>> =
    ///     vec![required("Required field").boxed(), not_shorter(2, "too short").boxed()];
    /// let company = Validator::<Signup>::create_rule(move |ctx, value, field| {
    ///     if ctx.params().is_some_and(|p| p.has_company) {
    ///         ctx.use_rules(value, field, &company_rules);
    ///     }
    /// });
    ///
    /// let validator = Validator::new(Schema::parameterized().rule("company", company));
    /// let values = ValueSet::new();
    /// let freelancer = Signup { has_company: false };
    /// let employee = Signup { has_company: true };
    ///
    /// assert!(validator
    ///     .validate_with(&values, ValidateOptions::new().params(&freelancer))
    ///     .valid());
    /// assert!(!validator
    ///     .validate_with(&values, ValidateOptions::new().params(&employee))
    ///     .valid());
    /// ```
    pub fn use_rules(&mut self, value: Option<&Value>, field: &str, rules: &[BoxedRule<P>]) {
        for rule in rules {
            rule.apply(self, value, field);
        }
    }
}

impl<P> fmt::Debug for RuleContext<'_, '_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleContext")
            .field("session", &self.session)
            .finish()
    }
}
