//! Conditional predicate rules for WHERE-clause fragments.
//!
//! Each [`Condition`] variant is one operator kind; [`Condition::render`]
//! is the single dispatch point mapping an operator and its value shape to
//! SQL text. A `None` result means "this filter contributes no predicate"
//! and is never an error: empty lists, empty strings, wrong arity, and
//! out-of-contract value shapes all degrade to `None` so callers can
//! filter them out before joining.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::error::ClauseResult;
use crate::value::{SqlValue, ValueList};

/// A single typed filter descriptor.
///
/// Serde representation is tagged by `"op"` with camelCase operator names,
/// so descriptors deserialize straight from JSON request payloads:
///
/// ```rust
/// use wherehouse::Condition;
///
/// let cond = Condition::from_json(
///     r#"{"op": "in", "column": "status", "values": ["open", "stale"]}"#,
/// ).unwrap();
/// assert_eq!(cond.render().unwrap(), "status IN ('open', 'stale')");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Condition {
    /// Equality (`=`), or inequality (`!=`) when negated.
    Equal {
        /// Column name, inserted verbatim.
        column: SmolStr,
        /// Value to compare against.
        value: SqlValue,
        /// Negate the operator (`!=` instead of `=`).
        #[serde(default)]
        not: bool,
    },
    /// Caller-supplied comparison operator, inserted verbatim (`>`, `<=`, ...).
    Op {
        /// Column name, inserted verbatim.
        column: SmolStr,
        /// SQL comparison operator, inserted verbatim.
        operator: SmolStr,
        /// Value to compare against.
        value: SqlValue,
    },
    /// Membership in a list (`IN` / `NOT IN`). Elements are always quoted.
    In {
        /// Column name, inserted verbatim.
        column: SmolStr,
        /// Candidate values; each element is quoted.
        values: ValueList,
        /// Negate the operator (`NOT IN` instead of `IN`).
        #[serde(default)]
        not: bool,
    },
    /// Closed range (`BETWEEN lo AND hi`). Requires exactly two bounds,
    /// inserted unquoted.
    Between {
        /// Column name, inserted verbatim.
        column: SmolStr,
        /// Exactly two bounds: low then high, inserted unquoted.
        bounds: ValueList,
        /// Negate the operator (`NOT BETWEEN` instead of `BETWEEN`).
        #[serde(default)]
        not: bool,
    },
    /// Fuzzy substring match: whitespace becomes `%`, the whole pattern is
    /// wrapped in `%...%`. String values only.
    Like {
        /// Column name, inserted verbatim.
        column: SmolStr,
        /// Pattern source; must be a non-empty string.
        value: SqlValue,
    },
    /// Case-insensitive substring search via `positionCaseInsensitive`.
    /// String values only.
    CaseInsensitive {
        /// Column name, inserted verbatim.
        column: SmolStr,
        /// Needle to search for; must be a non-empty string.
        value: SqlValue,
    },
    /// `IS NOT` check against a sentinel (`NULL`, booleans). Unconditional:
    /// the only rule with no presence guard.
    IsNot {
        /// Column name, inserted verbatim.
        column: SmolStr,
        /// Sentinel to compare against.
        value: SqlValue,
    },
    /// At least one element of an array column is in the list:
    /// `arrayExists(x -> in(x, (...)), col)`.
    InArrayExists {
        /// Column name, inserted verbatim.
        column: SmolStr,
        /// Candidate values; each element is quoted.
        values: ValueList,
        /// Negate the check (compare against `0` instead of `1`).
        #[serde(default)]
        not: bool,
    },
    /// Array column intersects the list: `hasAny(col, [...])`.
    HasAny {
        /// Column name, inserted verbatim.
        column: SmolStr,
        /// Candidate values; each element is quoted.
        values: ValueList,
        /// Negate the check (compare against `0` instead of `1`).
        #[serde(default)]
        not: bool,
    },
    /// Array column is a superset of the list: `hasAll(col, [...])`.
    HasAll {
        /// Column name, inserted verbatim.
        column: SmolStr,
        /// Candidate values; each element is quoted.
        values: ValueList,
        /// Negate the check (compare against `0` instead of `1`).
        #[serde(default)]
        not: bool,
    },
    /// Every array element is in the list: `arrayAll(col, [...])`.
    /// Same textual shape as `hasAll` but a distinct dialect function.
    ArrayAll {
        /// Column name, inserted verbatim.
        column: SmolStr,
        /// Candidate values; each element is quoted.
        values: ValueList,
        /// Negate the check (compare against `0` instead of `1`).
        #[serde(default)]
        not: bool,
    },
}

impl Condition {
    /// Render this condition to a SQL predicate fragment.
    ///
    /// Returns `None` when the value shape yields no predicate (absent
    /// scalar, empty list, wrong `BETWEEN` arity, non-string input to a
    /// string-only rule).
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Equal { column, value, not } => {
                if !value.is_present() {
                    return None;
                }
                let op = if *not { "!=" } else { "=" };
                Some(format!("{column} {op} {}", value.render()))
            }
            Self::Op {
                column,
                operator,
                value,
            } => {
                if !value.is_present() {
                    return None;
                }
                Some(format!("{column} {operator} {}", value.render()))
            }
            Self::In { column, values, not } => {
                let list = quoted_list(values)?;
                let kw = if *not { "NOT IN" } else { "IN" };
                Some(format!("{column} {kw} ({list})"))
            }
            Self::Between { column, bounds, not } => match bounds.as_slice() {
                [lo, hi] => {
                    let kw = if *not { "NOT BETWEEN" } else { "BETWEEN" };
                    Some(format!("{column} {kw} {} AND {}", lo.raw(), hi.raw()))
                }
                _ => None,
            },
            Self::Like { column, value } => {
                let text = value.as_str().filter(|s| !s.is_empty())?;
                let pattern: String = text
                    .chars()
                    .map(|c| if c.is_whitespace() { '%' } else { c })
                    .collect();
                Some(format!("{column} LIKE '%{pattern}%'"))
            }
            Self::CaseInsensitive { column, value } => {
                let text = value.as_str().filter(|s| !s.is_empty())?;
                Some(format!("positionCaseInsensitive({column}, '{text}') > 0"))
            }
            Self::IsNot { column, value } => {
                Some(format!("{column} IS NOT {}", value.render()))
            }
            Self::InArrayExists { column, values, not } => {
                let list = quoted_list(values)?;
                Some(format!(
                    "arrayExists(x -> in(x, ({list})), {column}) = {}",
                    truth(*not)
                ))
            }
            Self::HasAny { column, values, not } => {
                let list = quoted_list(values)?;
                Some(format!("hasAny({column}, [{list}]) = {}", truth(*not)))
            }
            Self::HasAll { column, values, not } => {
                let list = quoted_list(values)?;
                Some(format!("hasAll({column}, [{list}]) = {}", truth(*not)))
            }
            Self::ArrayAll { column, values, not } => {
                let list = quoted_list(values)?;
                Some(format!("arrayAll({column}, [{list}]) = {}", truth(*not)))
            }
        }
    }

    /// Parse one condition from a JSON descriptor.
    pub fn from_json(json: &str) -> ClauseResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Parse an ordered list of conditions from a JSON array of descriptors.
pub fn conditions_from_json(json: &str) -> ClauseResult<Vec<Condition>> {
    Ok(serde_json::from_str(json)?)
}

/// Join list elements as single-quoted strings: `'a', 'b'`.
///
/// Every element is quoted, numbers included; scalar rules quote strings
/// only, but list rules quote uniformly.
fn quoted_list(values: &[SqlValue]) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    let parts: Vec<String> = values.iter().map(|v| format!("'{}'", v.raw())).collect();
    Some(parts.join(", "))
}

fn truth(not: bool) -> &'static str {
    if not { "0" } else { "1" }
}

/// Equality condition (`=` / `!=`).
pub fn equal(column: impl Into<SmolStr>, value: impl Into<SqlValue>, not: bool) -> Condition {
    Condition::Equal {
        column: column.into(),
        value: value.into(),
        not,
    }
}

/// Comparison with a caller-supplied operator.
pub fn op(
    column: impl Into<SmolStr>,
    operator: impl Into<SmolStr>,
    value: impl Into<SqlValue>,
) -> Condition {
    Condition::Op {
        column: column.into(),
        operator: operator.into(),
        value: value.into(),
    }
}

/// List membership (`IN` / `NOT IN`).
pub fn in_list<T: Into<SqlValue>>(
    column: impl Into<SmolStr>,
    values: impl IntoIterator<Item = T>,
    not: bool,
) -> Condition {
    Condition::In {
        column: column.into(),
        values: values.into_iter().map(Into::into).collect(),
        not,
    }
}

/// Closed range (`BETWEEN` / `NOT BETWEEN`).
pub fn between<T: Into<SqlValue>>(
    column: impl Into<SmolStr>,
    bounds: impl IntoIterator<Item = T>,
    not: bool,
) -> Condition {
    Condition::Between {
        column: column.into(),
        bounds: bounds.into_iter().map(Into::into).collect(),
        not,
    }
}

/// Fuzzy `LIKE` match.
pub fn like(column: impl Into<SmolStr>, value: impl Into<SqlValue>) -> Condition {
    Condition::Like {
        column: column.into(),
        value: value.into(),
    }
}

/// Case-insensitive substring search.
pub fn case_insensitive(column: impl Into<SmolStr>, value: impl Into<SqlValue>) -> Condition {
    Condition::CaseInsensitive {
        column: column.into(),
        value: value.into(),
    }
}

/// `IS NOT` sentinel check.
pub fn is_not(column: impl Into<SmolStr>, value: impl Into<SqlValue>) -> Condition {
    Condition::IsNot {
        column: column.into(),
        value: value.into(),
    }
}

/// Array-element membership via `arrayExists`.
pub fn in_array_exists<T: Into<SqlValue>>(
    column: impl Into<SmolStr>,
    values: impl IntoIterator<Item = T>,
    not: bool,
) -> Condition {
    Condition::InArrayExists {
        column: column.into(),
        values: values.into_iter().map(Into::into).collect(),
        not,
    }
}

/// Array intersection via `hasAny`.
pub fn has_any<T: Into<SqlValue>>(
    column: impl Into<SmolStr>,
    values: impl IntoIterator<Item = T>,
    not: bool,
) -> Condition {
    Condition::HasAny {
        column: column.into(),
        values: values.into_iter().map(Into::into).collect(),
        not,
    }
}

/// Array superset via `hasAll`.
pub fn has_all<T: Into<SqlValue>>(
    column: impl Into<SmolStr>,
    values: impl IntoIterator<Item = T>,
    not: bool,
) -> Condition {
    Condition::HasAll {
        column: column.into(),
        values: values.into_iter().map(Into::into).collect(),
        not,
    }
}

/// Array-wide membership via `arrayAll`.
pub fn array_all<T: Into<SqlValue>>(
    column: impl Into<SmolStr>,
    values: impl IntoIterator<Item = T>,
    not: bool,
) -> Condition {
    Condition::ArrayAll {
        column: column.into(),
        values: values.into_iter().map(Into::into).collect(),
        not,
    }
}
