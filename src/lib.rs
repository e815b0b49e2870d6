//! # wherehouse
//!
//! Conditional `WHERE`-clause fragment builder for ClickHouse-flavored
//! analytical SQL.
//!
//! The crate is a pure, stateless text-generation layer: each
//! [`Condition`] maps a column, an operator kind, and a value to one SQL
//! predicate string, or to `None` when the value contributes nothing
//! (empty string, empty list, wrong `BETWEEN` arity). A second layer
//! joins the surviving predicates into a single `WHERE ... AND ...`
//! clause. No database connectivity, no SQL parsing.
//!
//! ## Building predicates
//!
//! ```rust
//! use wherehouse::condition::{equal, in_list, like};
//!
//! assert_eq!(equal("age", 30, false).render().unwrap(), "age = 30");
//! assert_eq!(equal("age", 30, true).render().unwrap(), "age != 30");
//!
//! // empty values yield no predicate, not an error
//! assert_eq!(equal("name", "", false).render(), None);
//!
//! // but numeric zero is a real value
//! assert_eq!(equal("age", 0, false).render().unwrap(), "age = 0");
//!
//! assert_eq!(
//!     in_list("status", ["open", "stale"], false).render().unwrap(),
//!     "status IN ('open', 'stale')",
//! );
//! assert_eq!(
//!     like("name", "john doe").render().unwrap(),
//!     "name LIKE '%john%doe%'",
//! );
//! ```
//!
//! ## Array-column predicates
//!
//! ClickHouse array built-ins are emitted verbatim:
//!
//! ```rust
//! use wherehouse::condition::{has_any, has_all, in_array_exists};
//!
//! assert_eq!(
//!     has_any("tags", ["rust", "sql"], false).render().unwrap(),
//!     "hasAny(tags, ['rust', 'sql']) = 1",
//! );
//! assert_eq!(
//!     in_array_exists("tags", ["rust"], true).render().unwrap(),
//!     "arrayExists(x -> in(x, ('rust')), tags) = 0",
//! );
//! ```
//!
//! ## Joining into a clause
//!
//! ```rust
//! use wherehouse::clause::{join_where, render_where};
//! use wherehouse::condition::{equal, in_list};
//!
//! assert_eq!(join_where(&["a = 1", "b = 2"]), "WHERE a = 1 AND b = 2");
//! assert_eq!(join_where(&[] as &[&str]), "");
//!
//! // render + drop absents + join, in one step
//! let clause = render_where(&[
//!     equal("age", 0, false),
//!     equal("name", "", false),
//!     in_list("status", ["a", "b"], false),
//! ]);
//! assert_eq!(clause, "WHERE age = 0 AND status IN ('a', 'b')");
//! ```
//!
//! ## JSON descriptors
//!
//! Conditions deserialize from tagged JSON descriptors, the shape a query
//! endpoint receives:
//!
//! ```rust
//! use wherehouse::{conditions_from_json, render_where};
//!
//! let conds = conditions_from_json(r#"[
//!     {"op": "equal", "column": "env", "value": "prod"},
//!     {"op": "between", "column": "ts", "bounds": [10, 20]}
//! ]"#).unwrap();
//! assert_eq!(render_where(&conds), "WHERE env = 'prod' AND ts BETWEEN 10 AND 20");
//! ```
//!
//! ## Known limitation
//!
//! String values are interpolated with a single-quote wrap and no escaping
//! of embedded quotes. A value containing `'` produces broken SQL. This is
//! the compatibility contract with the downstream dialect layer, kept
//! deliberately; do not feed untrusted input to this crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod clause;
pub mod condition;
pub mod error;
pub mod logging;
pub mod value;

pub use clause::{join_and, join_where, render_where, transform_filter};
pub use condition::{Condition, conditions_from_json};
pub use error::{ClauseError, ClauseResult};
pub use value::{SqlValue, ValueList};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::clause::{join_and, join_where, render_where, transform_filter};
    pub use crate::condition::{
        Condition, array_all, between, case_insensitive, conditions_from_json, equal, has_all,
        has_any, in_array_exists, in_list, is_not, like, op,
    };
    pub use crate::error::{ClauseError, ClauseResult};
    pub use crate::value::{SqlValue, ValueList};
}
