//! Schemas: which rules apply to which field
//!
//! A [`Schema`] is an ordered list of field declarations. Each field carries a
//! [`RuleSet`]: no rule, a single rule, or an ordered list of rules. The
//! distinction is made once, when the schema is built, so running a field never
//! has to inspect what kind of entry it holds.
//!
//! # Example
//!
//! ```
//! use fieldguard::rules::{between, not_longer, required};
//! use fieldguard::{Rule, Schema};
//!
//! let schema = Schema::new()
//!     .rules(
//!         "username",
//!         vec![required("Required field").boxed(), not_longer(6, "too long").boxed()],
//!     )
//!     .rule("age", between(18, 120, "out of range"))
//!     .unchecked("nickname");
//!
//! assert_eq!(schema.fields().collect::<Vec<_>>(), vec!["username", "age", "nickname"]);
//! assert_eq!(schema.get("username").map(|r| r.len()), Some(2));
//! assert!(schema.get("nickname").is_some_and(|r| r.is_empty()));
//! ```

use std::collections::HashMap;
use std::fmt;

use crate::rule::{BoxedRule, Rule};

/// The rules declared for one field.
pub enum RuleSet<P = ()> {
    /// Declared without any rule; running it is a no-op.
    None,
    /// Exactly one rule.
    Single(BoxedRule<P>),
    /// Rules run in order, all of them, regardless of earlier failures.
    Many(Vec<BoxedRule<P>>),
}

impl<P> RuleSet<P> {
    /// Borrow the rules as a slice in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, BoxedRule<P>> {
        match self {
            RuleSet::None => Default::default(),
            RuleSet::Single(rule) => std::slice::from_ref(rule).iter(),
            RuleSet::Many(rules) => rules.iter(),
        }
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        match self {
            RuleSet::None => 0,
            RuleSet::Single(_) => 1,
            RuleSet::Many(rules) => rules.len(),
        }
    }

    /// Whether the field has no rule.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<P> From<Vec<BoxedRule<P>>> for RuleSet<P> {
    fn from(rules: Vec<BoxedRule<P>>) -> Self {
        RuleSet::Many(rules)
    }
}

impl<P> fmt::Debug for RuleSet<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleSet::None => write!(f, "None"),
            RuleSet::Single(_) => write!(f, "Single(<rule>)"),
            RuleSet::Many(rules) => write!(f, "Many(<{} rules>)", rules.len()),
        }
    }
}

/// Field name to rules, in declaration order.
///
/// Re-declaring a field replaces its rules and keeps its original position.
pub struct Schema<P = ()> {
    entries: Vec<(String, RuleSet<P>)>,
    index: HashMap<String, usize>,
}

impl Schema<()> {
    /// Create an empty schema for rules that take no parameters.
    pub fn new() -> Self {
        Self::parameterized()
    }
}

impl<P> Schema<P> {
    /// Create an empty schema whose rules read a parameter bag of type `P`.
    pub fn parameterized() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Declare a field with one rule.
    pub fn rule<R>(mut self, field: impl Into<String>, rule: R) -> Self
    where
        R: Rule<P> + 'static,
    {
        self.declare(field, RuleSet::Single(Box::new(rule)));
        self
    }

    /// Declare a field with an ordered list of rules.
    pub fn rules(mut self, field: impl Into<String>, rules: Vec<BoxedRule<P>>) -> Self {
        self.declare(field, RuleSet::Many(rules));
        self
    }

    /// Declare a field that carries no rule.
    pub fn unchecked(mut self, field: impl Into<String>) -> Self {
        self.declare(field, RuleSet::None);
        self
    }

    /// Declare or replace a field's rule set.
    pub fn declare(&mut self, field: impl Into<String>, rules: RuleSet<P>) {
        let field = field.into();
        match self.index.get(&field) {
            Some(&idx) => self.entries[idx].1 = rules,
            None => {
                self.index.insert(field.clone(), self.entries.len());
                self.entries.push((field, rules));
            }
        }
    }

    /// The rule set for a field, if the field is declared.
    pub fn get(&self, field: &str) -> Option<&RuleSet<P>> {
        self.index.get(field).map(|&idx| &self.entries[idx].1)
    }

    /// Declared field names in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Declared fields with their rule sets, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleSet<P>)> {
        self.entries.iter().map(|(name, rules)| (name.as_str(), rules))
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no field is declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Schema<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for Schema<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(name, rules)| (name, rules)))
            .finish()
    }
}
