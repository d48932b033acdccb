//! Errors raised while building a schema
//!
//! Validation failures are never errors: they are data inside a
//! [`Snapshot`](crate::Snapshot). The only faults are construction-time ones,
//! such as a pattern rule whose regular expression does not compile.

use thiserror::Error;

/// A schema or rule could not be constructed.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A `Match` rule was given a pattern that is not a valid regex.
    #[error("invalid pattern `{pattern}`{}: {source}", field_clause(.field))]
    InvalidPattern {
        /// Field the rule was declared for, `None` when built outside a schema.
        field: Option<String>,
        /// The offending pattern.
        pattern: String,
        /// Underlying regex compile error.
        #[source]
        source: regex::Error,
    },
}

impl SchemaError {
    /// Attach the field name to an error raised before the field was known.
    pub fn for_field(self, name: impl Into<String>) -> Self {
        match self {
            SchemaError::InvalidPattern {
                pattern, source, ..
            } => SchemaError::InvalidPattern {
                field: Some(name.into()),
                pattern,
                source,
            },
        }
    }
}

fn field_clause(field: &Option<String>) -> String {
    match field {
        Some(name) => format!(" for field `{name}`"),
        None => String::new(),
    }
}
