//! Field values and the value set handed to a validator
//!
//! A [`ValueSet`] maps field names to [`Value`]s. It may be partial: a field
//! missing from the set is *absent*, which rules observe as `None` and which is
//! distinct from an explicit [`Value::Null`].
//!
//! # Example
//!
//! ```
//! use fieldguard::{Value, ValueSet};
//!
//! let values = ValueSet::new()
//!     .with("name", "alice")
//!     .with("age", 41)
//!     .with("nickname", Option::<String>::None);
//!
//! assert_eq!(values.get("age"), Some(&Value::Int(41)));
//! assert_eq!(values.get("nickname"), Some(&Value::Null));
//! assert_eq!(values.get("email"), None);
//! ```

use std::collections::HashMap;
use std::fmt;

/// A single field value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// Explicit null.
    Null,
    /// Boolean.
    Bool(bool),
    /// Integer number.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Text.
    Str(String),
    /// Ordered list of values.
    List(Vec<Value>),
}

impl Value {
    /// Numeric view of the value.
    ///
    /// Numbers convert directly and strings are parsed after trimming. Null,
    /// booleans, lists and NaN have no numeric view, and neither do strings
    /// that are empty, unparsable or spell a non-finite number (`"inf"`).
    ///
    /// ```
    /// use fieldguard::Value;
    ///
    /// assert_eq!(Value::Int(3).as_number(), Some(3.0));
    /// assert_eq!(Value::from(" 2.5 ").as_number(), Some(2.5));
    /// assert_eq!(Value::from("").as_number(), None);
    /// assert_eq!(Value::from("inf").as_number(), None);
    /// assert_eq!(Value::Null.as_number(), None);
    /// ```
    pub fn as_number(&self) -> Option<f64> {
        let number = match self {
            Value::Int(n) => *n as f64,
            Value::Float(n) => *n,
            Value::Str(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite())?,
            Value::Null | Value::Bool(_) | Value::List(_) => return None,
        };
        (!number.is_nan()).then_some(number)
    }

    /// Length of a string (in chars) or a list (in elements).
    pub fn length(&self) -> Option<usize> {
        match self {
            Value::Str(s) => Some(s.chars().count()),
            Value::List(items) => Some(items.len()),
            _ => None,
        }
    }

    /// Textual view used for pattern matching.
    ///
    /// Scalars render through `Display`; null and lists have no text.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Value::Str(s) => Some(s.clone()),
            Value::Int(_) | Value::Float(_) | Value::Bool(_) => Some(self.to_string()),
            Value::Null | Value::List(_) => None,
        }
    }

    /// Borrow the inner string, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Whether this is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Int(i64::from(n))
                }
            }
        )+
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// The record being validated: field name to value.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ValueSet {
    values: HashMap<String, Value>,
}

impl ValueSet {
    /// Create an empty value set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Set a field, returning the previous value if there was one.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(field.into(), value.into())
    }

    /// Remove a field, making it absent.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.values.remove(field)
    }

    /// Look up a field. `None` means the field is absent.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Number of fields present.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no field is present.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over present fields in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for ValueSet
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, Value>> for ValueSet {
    fn from(values: HashMap<String, Value>) -> Self {
        Self { values }
    }
}
