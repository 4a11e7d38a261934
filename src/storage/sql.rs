//! Renders predicates, orderings and assignments into SQLite statements.

use crate::query::predicate::{
    Assignment, CompareOp, Direction, Predicate, Selection, SqlValue, TextMatch, Values,
};
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::{QueryBuilder, Sqlite};

/// Fixed-width RFC 3339 so that stored timestamps compare lexicographically.
pub fn timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn push_value(qb: &mut QueryBuilder<'_, Sqlite>, value: &SqlValue) {
    match value {
        SqlValue::Text(v) => {
            qb.push_bind(v.clone());
        }
        SqlValue::Integer(v) => {
            qb.push_bind(*v);
        }
        SqlValue::Real(v) => {
            qb.push_bind(*v);
        }
        SqlValue::Timestamp(v) => {
            qb.push_bind(timestamp(v));
        }
        SqlValue::Null => {
            qb.push("NULL");
        }
    }
}

pub fn push_predicate(qb: &mut QueryBuilder<'_, Sqlite>, predicate: &Predicate) {
    match predicate {
        Predicate::Compare {
            column,
            op,
            value: SqlValue::Null,
        } => {
            let test = if *op == CompareOp::Ne {
                "IS NOT NULL"
            } else {
                "IS NULL"
            };
            qb.push(format!("{} {}", column, test));
        }
        Predicate::Compare { column, op, value } => {
            qb.push(format!("{} {} ", column, op.as_sql()));
            push_value(qb, value);
        }
        Predicate::In {
            column: _,
            values,
            negated,
        } if values.is_empty() => {
            qb.push(if *negated { "1 = 1" } else { "1 = 0" });
        }
        Predicate::In {
            column,
            values,
            negated,
        } => {
            let keyword = if *negated { "NOT IN" } else { "IN" };
            qb.push(format!("{} {} (", column, keyword));
            for (i, value) in values.iter().enumerate() {
                if i > 0 {
                    qb.push(", ");
                }
                push_value(qb, value);
            }
            qb.push(")");
        }
        Predicate::Text {
            column,
            kind,
            pattern,
        } => match kind {
            TextMatch::Contains => {
                qb.push(format!("instr({}, ", column));
                qb.push_bind(pattern.clone());
                qb.push(") > 0");
            }
            TextMatch::StartsWith => {
                qb.push(format!("instr({}, ", column));
                qb.push_bind(pattern.clone());
                qb.push(") = 1");
            }
            TextMatch::EndsWith if pattern.is_empty() => {
                qb.push(format!("{} IS NOT NULL", column));
            }
            TextMatch::EndsWith => {
                qb.push(format!("substr({}, ", column));
                qb.push_bind(-(pattern.chars().count() as i64));
                qb.push(") = ");
                qb.push_bind(pattern.clone());
            }
        },
        Predicate::All(predicates) => push_group(qb, predicates, " AND ", "1 = 1"),
        Predicate::Any(predicates) => push_group(qb, predicates, " OR ", "1 = 0"),
        Predicate::Not(inner) => {
            qb.push("NOT (");
            push_predicate(qb, inner);
            qb.push(")");
        }
    }
}

fn push_group(
    qb: &mut QueryBuilder<'_, Sqlite>,
    predicates: &[Predicate],
    separator: &str,
    empty: &str,
) {
    if predicates.is_empty() {
        qb.push(empty);
        return;
    }
    qb.push("(");
    for (i, predicate) in predicates.iter().enumerate() {
        if i > 0 {
            qb.push(separator);
        }
        push_predicate(qb, predicate);
    }
    qb.push(")");
}

pub fn select(table: &str, selection: &Selection) -> QueryBuilder<'static, Sqlite> {
    let mut qb = QueryBuilder::new(format!("SELECT * FROM {} WHERE ", table));
    push_predicate(&mut qb, &selection.filter);

    qb.push(" ORDER BY ");
    for ordering in &selection.order {
        let direction = match ordering.direction {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        };
        qb.push(format!("{} {}, ", ordering.column, direction));
    }
    qb.push("rowid ASC");

    // SQLite only accepts OFFSET after a LIMIT; -1 means unbounded
    if selection.take.is_some() || selection.skip.is_some() {
        qb.push(" LIMIT ");
        qb.push_bind(selection.take.unwrap_or(-1));
        qb.push(" OFFSET ");
        qb.push_bind(selection.skip.unwrap_or(0));
    }
    qb
}

pub fn insert(table: &str, values: &Values, skip_duplicates: bool) -> QueryBuilder<'static, Sqlite> {
    let columns: Vec<&str> = values.iter().map(|(column, _)| *column).collect();
    let mut qb = QueryBuilder::new(format!(
        "INSERT INTO {} ({}) VALUES (",
        table,
        columns.join(", ")
    ));
    for (i, (_, value)) in values.iter().enumerate() {
        if i > 0 {
            qb.push(", ");
        }
        push_value(&mut qb, value);
    }
    qb.push(")");
    if skip_duplicates {
        qb.push(" ON CONFLICT DO NOTHING");
    }
    qb.push(" RETURNING *");
    qb
}

pub fn update(
    table: &str,
    filter: &Predicate,
    assignments: &[Assignment],
    now: &DateTime<Utc>,
) -> QueryBuilder<'static, Sqlite> {
    let mut qb = QueryBuilder::new(format!("UPDATE {} SET ", table));
    for assignment in assignments {
        let column = assignment.column();
        match assignment {
            Assignment::Set(_, value) => {
                qb.push(format!("{} = ", column));
                push_value(&mut qb, value);
            }
            Assignment::Increment(_, value) => push_arithmetic(&mut qb, column, "+", value),
            Assignment::Decrement(_, value) => push_arithmetic(&mut qb, column, "-", value),
            Assignment::Multiply(_, value) => push_arithmetic(&mut qb, column, "*", value),
            Assignment::Divide(_, value) => push_arithmetic(&mut qb, column, "/", value),
        }
        qb.push(", ");
    }
    qb.push("updated_at = ");
    qb.push_bind(timestamp(now));
    qb.push(" WHERE ");
    push_predicate(&mut qb, filter);
    qb.push(" RETURNING *");
    qb
}

fn push_arithmetic(qb: &mut QueryBuilder<'_, Sqlite>, column: &str, op: &str, value: &SqlValue) {
    qb.push(format!("{} = {} {} ", column, column, op));
    push_value(qb, value);
}

pub fn delete(table: &str, filter: &Predicate, returning: bool) -> QueryBuilder<'static, Sqlite> {
    let mut qb = QueryBuilder::new(format!("DELETE FROM {} WHERE ", table));
    push_predicate(&mut qb, filter);
    if returning {
        qb.push(" RETURNING *");
    }
    qb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::predicate::Ordering;
    use chrono::TimeZone;

    fn render(predicate: &Predicate) -> String {
        let mut qb: QueryBuilder<'_, Sqlite> = QueryBuilder::new("");
        push_predicate(&mut qb, predicate);
        qb.sql().to_string()
    }

    #[test]
    fn test_compare_binds_value() {
        assert_eq!(render(&Predicate::eq("name", "A")), "name = ?");
        assert_eq!(
            render(&Predicate::Compare {
                column: "model",
                op: CompareOp::Eq,
                value: SqlValue::Null,
            }),
            "model IS NULL"
        );
    }

    #[test]
    fn test_groups_and_empty_groups() {
        let any = Predicate::Any(vec![Predicate::eq("name", "s0"), Predicate::eq("name", "s1")]);
        assert_eq!(render(&any), "(name = ? OR name = ?)");
        assert_eq!(render(&Predicate::Any(vec![])), "1 = 0");
        assert_eq!(render(&Predicate::always()), "1 = 1");
        assert_eq!(
            render(&Predicate::Not(Box::new(Predicate::eq("id", "x")))),
            "NOT (id = ?)"
        );
    }

    #[test]
    fn test_in_lists() {
        let within = Predicate::In {
            column: "crew_members",
            values: vec![SqlValue::Integer(1), SqlValue::Integer(2)],
            negated: true,
        };
        assert_eq!(render(&within), "crew_members NOT IN (?, ?)");

        let empty = Predicate::In {
            column: "crew_members",
            values: vec![],
            negated: false,
        };
        assert_eq!(render(&empty), "1 = 0");
    }

    #[test]
    fn test_text_matches() {
        let ends = Predicate::Text {
            column: "name",
            kind: TextMatch::EndsWith,
            pattern: "Wing".to_string(),
        };
        assert_eq!(render(&ends), "substr(name, ?) = ?");

        let contains = Predicate::Text {
            column: "name",
            kind: TextMatch::Contains,
            pattern: "ing".to_string(),
        };
        assert_eq!(render(&contains), "instr(name, ?) > 0");
    }

    #[test]
    fn test_select_with_order_and_page() {
        let selection = Selection {
            filter: Predicate::always(),
            order: vec![Ordering {
                column: "mass",
                direction: Direction::Desc,
            }],
            take: None,
            skip: Some(2),
        };
        let qb = select("people", &selection);
        assert_eq!(
            qb.sql(),
            "SELECT * FROM people WHERE 1 = 1 ORDER BY mass DESC, rowid ASC LIMIT ? OFFSET ?"
        );
    }

    #[test]
    fn test_insert_and_update_statements() {
        let values: Values = vec![("id", "abc".into()), ("name", "A".into())];
        assert_eq!(
            insert("people", &values, true).sql(),
            "INSERT INTO people (id, name) VALUES (?, ?) ON CONFLICT DO NOTHING RETURNING *"
        );

        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let qb = update(
            "starships",
            &Predicate::eq("id", "abc"),
            &[
                Assignment::Set("model", SqlValue::Null),
                Assignment::Increment("crew_members", SqlValue::Integer(1)),
            ],
            &now,
        );
        assert_eq!(
            qb.sql(),
            "UPDATE starships SET model = NULL, crew_members = crew_members + ?, updated_at = ? WHERE id = ? RETURNING *"
        );
    }

    #[test]
    fn test_timestamp_is_fixed_width() {
        let at = Utc.with_ymd_and_hms(2024, 5, 4, 12, 0, 0).unwrap();
        assert_eq!(timestamp(&at), "2024-05-04T12:00:00.000000Z");
    }
}
