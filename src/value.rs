//! Value model for predicate rendering.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A literal value that can appear in a rendered predicate.
///
/// Values arrive from filter descriptors (often JSON), so the
/// representation mirrors the JSON scalar types plus a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SqlValue {
    /// Null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// String value.
    String(String),
    /// List of values.
    List(Vec<SqlValue>),
}

/// Inline-allocated list of values, sized for typical filter lists.
pub type ValueList = SmallVec<[SqlValue; 8]>;

impl SqlValue {
    /// Whether this value contributes a predicate at all.
    ///
    /// Absence is decided per type, not by a generic truthiness test:
    /// null, the empty string, and `false` are absent; numeric zero is
    /// present; a NaN float is absent; a list is present when non-empty.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Int(_) => true,
            Self::Float(f) => !f.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::List(v) => !v.is_empty(),
        }
    }

    /// Render as a scalar SQL literal: strings are single-quoted,
    /// everything else is inserted bare.
    ///
    /// Embedded single quotes are not escaped; see the crate docs for
    /// the injection caveat.
    pub fn render(&self) -> String {
        match self {
            Self::String(s) => format!("'{s}'"),
            other => other.raw(),
        }
    }

    /// Render without any quoting. Used for `BETWEEN` bounds and for
    /// list elements before the list-level quote wrap.
    pub fn raw(&self) -> String {
        match self {
            Self::Null => "NULL".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::String(s) => s.clone(),
            Self::List(v) => {
                let parts: Vec<String> = v.iter().map(SqlValue::raw).collect();
                parts.join(",")
            }
        }
    }

    /// Borrow the string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Check if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl<T: Into<SqlValue>> From<Vec<T>> for SqlValue {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_value_from() {
        assert_eq!(SqlValue::from(42i32), SqlValue::Int(42));
        assert_eq!(SqlValue::from("hello"), SqlValue::String("hello".to_string()));
        assert_eq!(SqlValue::from(true), SqlValue::Bool(true));
        assert_eq!(SqlValue::from(None::<i64>), SqlValue::Null);
    }

    #[test]
    fn test_presence_zero_is_present() {
        assert!(SqlValue::Int(0).is_present());
        assert!(SqlValue::Float(0.0).is_present());
    }

    #[test]
    fn test_presence_absent_shapes() {
        assert!(!SqlValue::Null.is_present());
        assert!(!SqlValue::Bool(false).is_present());
        assert!(!SqlValue::String(String::new()).is_present());
        assert!(!SqlValue::Float(f64::NAN).is_present());
        assert!(!SqlValue::List(vec![]).is_present());
        assert!(SqlValue::Bool(true).is_present());
    }

    #[test]
    fn test_render_quotes_strings_only() {
        assert_eq!(SqlValue::from("active").render(), "'active'");
        assert_eq!(SqlValue::Int(7).render(), "7");
        assert_eq!(SqlValue::Float(1.5).render(), "1.5");
        assert_eq!(SqlValue::Bool(true).render(), "true");
        assert_eq!(SqlValue::Null.render(), "NULL");
    }

    #[test]
    fn test_raw_never_quotes() {
        assert_eq!(SqlValue::from("active").raw(), "active");
        assert_eq!(SqlValue::Int(7).raw(), "7");
    }

    #[test]
    fn test_json_untagged_shapes() {
        let v: SqlValue = serde_json::from_str("0").unwrap();
        assert_eq!(v, SqlValue::Int(0));
        let v: SqlValue = serde_json::from_str("\"a\"").unwrap();
        assert_eq!(v, SqlValue::String("a".to_string()));
        let v: SqlValue = serde_json::from_str("null").unwrap();
        assert_eq!(v, SqlValue::Null);
        let v: SqlValue = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(v, SqlValue::List(vec![SqlValue::Int(1), SqlValue::Int(2)]));
    }
}
