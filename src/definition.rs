//! Declarative schemas (requires the `serde` feature)
//!
//! A [`SchemaDefinition`] describes a schema built only from catalog rules, so
//! it can live in a JSON or YAML file next to the form it validates.
//!
//! ```
//! use fieldguard::definition::SchemaDefinition;
//! use fieldguard::{Validator, ValueSet};
//!
//! let definition: SchemaDefinition = serde_json::from_str(r#"{
//!     "fields": [
//!         { "name": "stringField", "rules": [
//!             { "rule": "required", "message": "Required field" },
//!             { "rule": "match", "pattern": "^[a-zA-Z]+$", "message": "Should use literals" }
//!         ]},
//!         { "name": "numberField", "rules": [
//!             { "rule": "between", "min": 10, "max": 100, "message": "Should be between 10 and 100" }
//!         ]}
//!     ]
//! }"#).unwrap();
//!
//! let validator: Validator = Validator::from_definition(&definition).unwrap();
//! let result = validator.validate(&ValueSet::new().with("stringField", "abc").with("numberField", 5));
//! assert_eq!(result.errors().fields().collect::<Vec<_>>(), vec!["numberField"]);
//! ```

use serde::{Deserialize, Serialize};

use crate::rule::{BoxedRule, Rule};
use crate::rules;
use crate::schema::RuleSet;
use crate::{Schema, SchemaError, Validator};

/// A whole schema: fields in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDefinition {
    /// Field declarations, in the order they are validated.
    pub fields: Vec<FieldDefinition>,
}

/// One field and its rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name as it appears in the value set.
    pub name: String,
    /// Rules in evaluation order. May be empty.
    #[serde(default)]
    pub rules: Vec<RuleDefinition>,
}

/// A catalog rule with its configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum RuleDefinition {
    /// See [`rules::required`].
    Required { message: String },
    /// See [`rules::less_then`].
    LessThen { limit: f64, message: String },
    /// See [`rules::not_less_then`].
    NotLessThen { limit: f64, message: String },
    /// See [`rules::more_then`].
    MoreThen { limit: f64, message: String },
    /// See [`rules::not_more_then`].
    NotMoreThen { limit: f64, message: String },
    /// See [`rules::between`].
    Between { min: f64, max: f64, message: String },
    /// See [`rules::pattern`].
    Match { pattern: String, message: String },
    /// See [`rules::not_longer`].
    NotLonger { limit: usize, message: String },
    /// See [`rules::not_shorter`].
    NotShorter { limit: usize, message: String },
}

impl RuleDefinition {
    /// Build the described rule.
    pub fn build<P>(&self) -> Result<BoxedRule<P>, SchemaError> {
        let rule: BoxedRule<P> = match self {
            RuleDefinition::Required { message } => rules::required(message.as_str()).boxed(),
            RuleDefinition::LessThen { limit, message } => {
                rules::less_then(*limit, message.as_str()).boxed()
            }
            RuleDefinition::NotLessThen { limit, message } => {
                rules::not_less_then(*limit, message.as_str()).boxed()
            }
            RuleDefinition::MoreThen { limit, message } => {
                rules::more_then(*limit, message.as_str()).boxed()
            }
            RuleDefinition::NotMoreThen { limit, message } => {
                rules::not_more_then(*limit, message.as_str()).boxed()
            }
            RuleDefinition::Between { min, max, message } => {
                rules::between(*min, *max, message.as_str()).boxed()
            }
            RuleDefinition::Match { pattern, message } => {
                rules::pattern(pattern, message.as_str())?.boxed()
            }
            RuleDefinition::NotLonger { limit, message } => {
                rules::not_longer(*limit, message.as_str()).boxed()
            }
            RuleDefinition::NotShorter { limit, message } => {
                rules::not_shorter(*limit, message.as_str()).boxed()
            }
        };
        Ok(rule)
    }
}

impl SchemaDefinition {
    /// Build a schema. Fails on the first rule that cannot be constructed.
    pub fn build<P>(&self) -> Result<Schema<P>, SchemaError> {
        let mut schema = Schema::parameterized();
        for field in &self.fields {
            let mut built = field
                .rules
                .iter()
                .map(RuleDefinition::build)
                .collect::<Result<Vec<BoxedRule<P>>, _>>()
                .map_err(|err| err.for_field(field.name.as_str()))?;

            let rules = match built.len() {
                0 => RuleSet::None,
                1 => built.pop().map_or(RuleSet::None, RuleSet::Single),
                _ => RuleSet::Many(built),
            };
            schema.declare(field.name.as_str(), rules);
        }
        Ok(schema)
    }
}

impl<P> Validator<P> {
    /// Build a validator from a declarative schema.
    pub fn from_definition(definition: &SchemaDefinition) -> Result<Self, SchemaError> {
        definition.build().map(Validator::new)
    }
}
