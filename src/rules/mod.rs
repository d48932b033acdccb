//! The rule catalog
//!
//! Ready-made rules for presence, numeric limits, lengths and patterns. Every
//! constructor takes its configuration plus the message to report, and the
//! resulting rule reports that message against its field if and only if its
//! check fails.
//!
//! | Constructor | Reports when |
//! |---|---|
//! | [`required`] | value is absent, null, or the empty string |
//! | [`less_then`] | value ≥ limit |
//! | [`not_less_then`] | value < limit |
//! | [`more_then`] | value ≤ limit |
//! | [`not_more_then`] | value > limit |
//! | [`between`] | value < min or value > max |
//! | [`matches`] / [`pattern`] | value does not match the regex |
//! | [`not_longer`] | length > limit |
//! | [`not_shorter`] | length < limit |
//!
//! Numeric, length and pattern rules cannot compare a value that has no
//! numeric, length or text view (absent, null, a list where a number was
//! expected, an unparsable string). Such a value fails the rule and the
//! message is reported. Only [`required`] is about presence; the other rules
//! do not skip missing values.
//!
//! # Example
//!
//! ```
//! use fieldguard::rules::{between, not_shorter, required};
//! use fieldguard::{Rule, Schema, Validator, ValueSet};
//!
//! let validator = Validator::new(
//!     Schema::new()
//!         .rules(
//!             "stringField",
//!             vec![required("Required field").boxed(), not_shorter(3, "too short").boxed()],
//!         )
//!         .rule("numberField", between(10, 100, "Should be between 10 and 100")),
//! );
//!
//! let result = validator.validate(
//!     &ValueSet::new().with("stringField", "").with("numberField", 100),
//! );
//! assert_eq!(
//!     result.field_errors("stringField"),
//!     Some(&["Required field".to_string(), "too short".to_string()][..])
//! );
//! assert!(!result.errors().contains("numberField"));
//! ```

mod numeric;
mod text;

pub use numeric::{
    between, less_then, more_then, not_less_then, not_more_then, number, Between, LessThen,
    MoreThen, NotLessThen, NotMoreThen, NumberRule,
};
pub use text::{
    length, matches, not_longer, not_shorter, pattern, LengthRule, Match, NotLonger, NotShorter,
};

use crate::rule::{Rule, RuleContext};
use crate::Value;

/// Presence check. See [`required`].
#[derive(Debug, Clone)]
pub struct Required {
    message: String,
}

impl<P> Rule<P> for Required {
    fn apply(&self, ctx: &mut RuleContext<'_, '_, P>, value: Option<&Value>, field: &str) {
        let missing = match value {
            None | Some(Value::Null) => true,
            Some(Value::Str(s)) => s.is_empty(),
            Some(_) => false,
        };
        if missing {
            ctx.report(field, self.message.as_str());
        }
    }
}

/// Fails when the value is absent, null, or the empty string.
///
/// Whitespace, zero, `false` and empty lists all count as present.
pub fn required(message: impl Into<String>) -> Required {
    Required {
        message: message.into(),
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{fails, run};
    use super::*;

    #[test]
    fn test_required_flags_absent_null_and_empty() {
        assert!(!run(required("req"), None).valid());
        assert!(fails(required("req"), Value::Null));
        assert!(fails(required("req"), ""));
    }

    #[test]
    fn test_required_accepts_falsy_but_present_values() {
        assert!(!fails(required("req"), " "));
        assert!(!fails(required("req"), 0));
        assert!(!fails(required("req"), false));
        assert!(!fails(required("req"), Vec::<i32>::new()));
    }

    #[test]
    fn test_required_reports_its_message() {
        let result = run(required("Required field"), None);
        assert_eq!(
            result.field_errors("f"),
            Some(&["Required field".to_string()][..])
        );
    }
}
