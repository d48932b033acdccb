//! Length and pattern rules

use regex::Regex;

use crate::predicate::{self, Limit, Predicate};
use crate::rule::{Rule, RuleContext};
use crate::{SchemaError, Value};

/// A rule that reports `message` unless the value's length satisfies the
/// predicate. Lengths are chars for strings and elements for lists.
#[derive(Debug, Clone)]
pub struct LengthRule<Pr> {
    predicate: Pr,
    message: String,
}

impl<P, Pr> Rule<P> for LengthRule<Pr>
where
    Pr: Predicate<usize>,
{
    fn apply(&self, ctx: &mut RuleContext<'_, '_, P>, value: Option<&Value>, field: &str) {
        let passes = value
            .and_then(Value::length)
            .is_some_and(|len| self.predicate.check(&len));
        if !passes {
            ctx.report(field, self.message.as_str());
        }
    }
}

/// Length must not exceed the limit.
pub type NotLonger = LengthRule<Limit<usize>>;
/// Length must reach the limit.
pub type NotShorter = LengthRule<Limit<usize>>;

/// Build a length rule from any predicate over `usize`.
pub fn length<Pr>(predicate: Pr, message: impl Into<String>) -> LengthRule<Pr>
where
    Pr: Predicate<usize>,
{
    LengthRule {
        predicate,
        message: message.into(),
    }
}

/// Fails when the length is greater than `limit`.
pub fn not_longer(limit: usize, message: impl Into<String>) -> NotLonger {
    length(predicate::le(limit), message)
}

/// Fails when the length is less than `limit`.
pub fn not_shorter(limit: usize, message: impl Into<String>) -> NotShorter {
    length(predicate::ge(limit), message)
}

/// Pattern check. See [`matches`].
#[derive(Debug, Clone)]
pub struct Match {
    regex: Regex,
    message: String,
}

impl Match {
    /// The compiled pattern.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl<P> Rule<P> for Match {
    fn apply(&self, ctx: &mut RuleContext<'_, '_, P>, value: Option<&Value>, field: &str) {
        let passes = value
            .and_then(Value::as_text)
            .is_some_and(|text| self.regex.is_match(&text));
        if !passes {
            ctx.report(field, self.message.as_str());
        }
    }
}

/// Fails when the value's text does not match `regex`.
///
/// The regex is searched, not anchored: use `^...$` to match the whole value.
/// Numbers and booleans are matched against their rendered text.
pub fn matches(regex: Regex, message: impl Into<String>) -> Match {
    Match {
        regex,
        message: message.into(),
    }
}

/// Compile `pattern` and build a [`Match`] rule from it.
///
/// ```
/// use fieldguard::rules::pattern;
///
/// assert!(pattern("^[a-zA-Z]+$", "Should use literals").is_ok());
/// assert!(pattern("(", "broken").is_err());
/// ```
pub fn pattern(pattern: &str, message: impl Into<String>) -> Result<Match, SchemaError> {
    let regex = Regex::new(pattern).map_err(|source| SchemaError::InvalidPattern {
        field: None,
        pattern: pattern.to_string(),
        source,
    })?;
    Ok(matches(regex, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::between;
    use crate::rules::test_support::{fails, run};

    #[test]
    fn test_not_longer_is_inclusive() {
        assert!(!fails(not_longer(6, "m"), "string"));
        assert!(fails(not_longer(6, "m"), "strings"));
    }

    #[test]
    fn test_not_shorter_is_inclusive() {
        assert!(!fails(not_shorter(3, "m"), "abc"));
        assert!(fails(not_shorter(3, "m"), "st"));
        assert!(fails(not_shorter(3, "m"), ""));
    }

    #[test]
    fn test_length_counts_chars() {
        assert!(!fails(not_longer(3, "m"), "äöü"));
    }

    #[test]
    fn test_length_of_lists() {
        assert!(fails(not_shorter(2, "m"), vec!["a"]));
        assert!(!fails(length(between(1, 3), "m"), vec![1, 2, 3]));
    }

    #[test]
    fn test_length_without_length_view_fails() {
        assert!(!run(not_longer(6, "m"), None).valid());
        assert!(fails(not_longer(6, "m"), Value::Null));
        assert!(fails(not_shorter(1, "m"), 12345));
    }

    #[test]
    fn test_pattern_matching() -> Result<(), SchemaError> {
        let literals = || pattern("^[a-zA-Z]+$", "Should use literals");
        assert!(!fails(literals()?, "string"));
        assert!(fails(literals()?, "alltherest5"));
        assert!(fails(literals()?, Value::Null));
        assert!(!run(literals()?, None).valid());
        Ok(())
    }

    #[test]
    fn test_pattern_matches_rendered_numbers() -> Result<(), SchemaError> {
        let digits = pattern(r"^\d+$", "digits only")?;
        assert!(!fails(digits, 41));
        Ok(())
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        let err = pattern("[unclosed", "m").unwrap_err();
        assert!(matches!(
            err,
            SchemaError::InvalidPattern { ref pattern, field: None, .. } if pattern == "[unclosed"
        ));
    }
}
