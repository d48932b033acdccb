//! Numeric limit rules
//!
//! All of these project the value through [`Value::as_number`] and then ask a
//! [`Predicate<f64>`]. A value with no numeric view fails.

use crate::predicate::{self, Limit, Predicate};
use crate::rule::{Rule, RuleContext};
use crate::Value;

/// A rule that reports `message` unless the value's number satisfies the
/// predicate.
#[derive(Debug, Clone)]
pub struct NumberRule<Pr> {
    predicate: Pr,
    message: String,
}

impl<P, Pr> Rule<P> for NumberRule<Pr>
where
    Pr: Predicate<f64>,
{
    fn apply(&self, ctx: &mut RuleContext<'_, '_, P>, value: Option<&Value>, field: &str) {
        let passes = value
            .and_then(Value::as_number)
            .is_some_and(|n| self.predicate.check(&n));
        if !passes {
            ctx.report(field, self.message.as_str());
        }
    }
}

/// Must be strictly less than the limit.
pub type LessThen = NumberRule<Limit<f64>>;
/// Must be at least the limit.
pub type NotLessThen = NumberRule<Limit<f64>>;
/// Must be strictly greater than the limit.
pub type MoreThen = NumberRule<Limit<f64>>;
/// Must be at most the limit.
pub type NotMoreThen = NumberRule<Limit<f64>>;
/// Must lie within an inclusive range.
pub type Between = NumberRule<predicate::Between<f64>>;

/// Build a numeric rule from any predicate.
///
/// ```
/// use fieldguard::predicate::{ge, PredicateExt};
/// use fieldguard::rules::number;
/// use fieldguard::{Schema, Validator, ValueSet};
///
/// let whole = |n: &f64| n.fract() == 0.0;
/// let validator = Validator::new(
///     Schema::new().rule("count", number(whole.and(ge(0.0)), "whole number expected")),
/// );
/// assert!(validator.validate(&ValueSet::new().with("count", 3)).valid());
/// assert!(!validator.validate(&ValueSet::new().with("count", 2.5)).valid());
/// ```
pub fn number<Pr>(predicate: Pr, message: impl Into<String>) -> NumberRule<Pr>
where
    Pr: Predicate<f64>,
{
    NumberRule {
        predicate,
        message: message.into(),
    }
}

/// Fails when value ≥ `limit`.
pub fn less_then(limit: impl Into<f64>, message: impl Into<String>) -> LessThen {
    number(predicate::lt(limit.into()), message)
}

/// Fails when value < `limit`.
pub fn not_less_then(limit: impl Into<f64>, message: impl Into<String>) -> NotLessThen {
    number(predicate::ge(limit.into()), message)
}

/// Fails when value ≤ `limit`.
pub fn more_then(limit: impl Into<f64>, message: impl Into<String>) -> MoreThen {
    number(predicate::gt(limit.into()), message)
}

/// Fails when value > `limit`.
pub fn not_more_then(limit: impl Into<f64>, message: impl Into<String>) -> NotMoreThen {
    number(predicate::le(limit.into()), message)
}

/// Fails when value < `min` or value > `max`. Both ends pass.
pub fn between(
    min: impl Into<f64>,
    max: impl Into<f64>,
    message: impl Into<String>,
) -> Between {
    number(predicate::between(min.into(), max.into()), message)
}
