//! Value model: raw truth values from heterogeneous inputs
//!
//! Upstream analysis routines report facts as booleans, numbers or loose
//! strings. `RawValue` keeps the original form and [`RawValue::coerce`] turns
//! it into a boolean with a total rule set:
//!
//! | Input | Result |
//! |-------|--------|
//! | `Bool(b)` | `b` |
//! | `Number(n)`, finite | `n > 0` |
//! | `Number(n)`, NaN or infinite | error |
//! | `Text(s)` in [`TRUTHY`] | `true` |
//! | `Text(s)` in [`FALSY`] | `false` |
//! | any other `Text` | error |
//!
//! Text is trimmed and compared case-insensitively.

use std::fmt;

use crate::InputError;

/// Strings read as `true`
pub const TRUTHY: &[&str] = &[
    "true", "yes", "y", "high", "on", "1", "present", "positive", "confirmed",
];

/// Strings read as `false`
pub const FALSY: &[&str] = &[
    "false", "no", "n", "low", "off", "0", "absent", "negative", "none",
];

/// A truth value as supplied by the caller, before coercion
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Already a boolean
    Bool(bool),
    /// A numeric reading; positive means true
    Number(f64),
    /// A word from the allow-lists
    Text(String),
}

impl RawValue {
    /// Coerce to a boolean
    ///
    /// `statement` is only used to label the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use prism_domain::RawValue;
    ///
    /// assert_eq!(RawValue::Number(1.5).coerce("DSCR < 1.2"), Ok(true));
    /// assert_eq!(RawValue::Text("High".into()).coerce("TenantRisk"), Ok(true));
    /// assert!(RawValue::Text("maybe".into()).coerce("TenantRisk").is_err());
    /// ```
    pub fn coerce(&self, statement: &str) -> Result<bool, InputError> {
        match self {
            RawValue::Bool(b) => Ok(*b),
            RawValue::Number(n) if n.is_finite() => Ok(*n > 0.0),
            RawValue::Text(s) => {
                let s = s.trim().to_lowercase();
                if TRUTHY.contains(&s.as_str()) {
                    Ok(true)
                } else if FALSY.contains(&s.as_str()) {
                    Ok(false)
                } else {
                    Err(self.uncoercible(statement))
                }
            }
            RawValue::Number(_) => Err(self.uncoercible(statement)),
        }
    }

    fn uncoercible(&self, statement: &str) -> InputError {
        InputError::UncoercibleValue {
            statement: statement.to_string(),
            value: self.to_string(),
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Bool(b) => write!(f, "{}", b),
            RawValue::Number(n) => write!(f, "{}", n),
            RawValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}
