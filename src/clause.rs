//! Joining predicate fragments into a WHERE clause.

use crate::condition::Condition;
use crate::value::SqlValue;

/// Join predicates into a full clause: `WHERE a = 1 AND b = 2`.
///
/// The first predicate gets the `WHERE ` prefix, each subsequent one is
/// appended with ` AND `. An empty slice yields the empty string.
/// Insertion order is preserved.
pub fn join_where<S: AsRef<str>>(predicates: &[S]) -> String {
    predicates
        .iter()
        .enumerate()
        .fold(String::new(), |clause, (index, predicate)| {
            if index == 0 {
                format!("WHERE {}", predicate.as_ref())
            } else {
                format!("{clause} AND {}", predicate.as_ref())
            }
        })
}

/// Join predicates without the `WHERE` prefix: ` AND a = 1 AND b = 2`.
///
/// The fold starts from the empty string, so the first predicate carries a
/// leading ` AND `. This variant appends to an already-started clause; it
/// is not meant to start one.
pub fn join_and<S: AsRef<str>>(predicates: &[S]) -> String {
    predicates
        .iter()
        .fold(String::new(), |clause, predicate| {
            format!("{clause} AND {}", predicate.as_ref())
        })
}

/// Direct filter shorthand with no quoting and no presence filtering:
/// a list value becomes `col IN (a,b)`, any scalar becomes `col = v`.
///
/// Values are inserted raw (strings unquoted), unlike the conditional
/// rules in [`crate::condition`].
pub fn transform_filter(column: impl AsRef<str>, value: &SqlValue) -> String {
    let column = column.as_ref();
    match value {
        SqlValue::List(_) => format!("{column} IN ({})", value.raw()),
        scalar => format!("{column} = {}", scalar.raw()),
    }
}

/// Render a sequence of conditions, drop the absent ones, and join the
/// survivors into a `WHERE` clause.
pub fn render_where(conditions: &[Condition]) -> String {
    let predicates: Vec<String> = conditions.iter().filter_map(Condition::render).collect();
    let clause = join_where(&predicates);
    tracing::debug!(
        conditions = conditions.len(),
        predicates = predicates.len(),
        clause = %clause,
        "rendered WHERE clause"
    );
    clause
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::{equal, has_any, in_list, like};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_join_where() {
        assert_eq!(join_where(&["a = 1", "b = 2"]), "WHERE a = 1 AND b = 2");
        assert_eq!(join_where(&["a = 1"]), "WHERE a = 1");
        assert_eq!(join_where(&[] as &[&str]), "");
    }

    #[test]
    fn test_join_and_leads_with_and() {
        assert_eq!(join_and(&["a = 1"]), " AND a = 1");
        assert_eq!(join_and(&["a = 1", "b = 2"]), " AND a = 1 AND b = 2");
        assert_eq!(join_and(&[] as &[&str]), "");
    }

    #[test]
    fn test_transform_filter_applies_no_quoting() {
        assert_eq!(
            transform_filter("id", &SqlValue::from(vec![1, 2])),
            "id IN (1,2)"
        );
        assert_eq!(transform_filter("id", &SqlValue::Int(7)), "id = 7");
        assert_eq!(
            transform_filter("name", &SqlValue::from("joe")),
            "name = joe"
        );
    }

    #[test]
    fn test_render_where_drops_absent_conditions() {
        let conditions = vec![
            equal("age", 0, false),
            equal("name", "", false),
            in_list("status", ["a", "b"], false),
            like("bio", ""),
        ];
        assert_eq!(
            render_where(&conditions),
            "WHERE age = 0 AND status IN ('a', 'b')"
        );
    }

    #[test]
    fn test_render_where_all_absent() {
        let conditions = vec![
            equal("name", "", false),
            has_any("tags", Vec::<String>::new(), false),
        ];
        assert_eq!(render_where(&conditions), "");
    }

    #[test]
    fn test_render_where_preserves_order() {
        let conditions = vec![
            in_list("b", ["2"], false),
            equal("a", 1, false),
        ];
        assert_eq!(render_where(&conditions), "WHERE b IN ('2') AND a = 1");
    }
}
