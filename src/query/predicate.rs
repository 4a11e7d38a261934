//! Backend-neutral representation of filters, orderings and assignments.
//!
//! Input types compile into these values; the storage layer renders them
//! into SQL. Column names are always `'static` identifiers from this crate,
//! never user input.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    Integer(i64),
    Real(f64),
    Timestamp(DateTime<Utc>),
    Null,
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Integer(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::Real(v)
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(v: DateTime<Utc>) -> Self {
        SqlValue::Timestamp(v)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(SqlValue::Null)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl CompareOp {
    pub fn as_sql(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "<>",
            CompareOp::Lt => "<",
            CompareOp::Lte => "<=",
            CompareOp::Gt => ">",
            CompareOp::Gte => ">=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMatch {
    Contains,
    StartsWith,
    EndsWith,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Compare {
        column: &'static str,
        op: CompareOp,
        value: SqlValue,
    },
    In {
        column: &'static str,
        values: Vec<SqlValue>,
        negated: bool,
    },
    Text {
        column: &'static str,
        kind: TextMatch,
        pattern: String,
    },
    /// Conjunction; empty matches every row.
    All(Vec<Predicate>),
    /// Disjunction; empty matches no row.
    Any(Vec<Predicate>),
    Not(Box<Predicate>),
}

impl Predicate {
    pub fn always() -> Self {
        Predicate::All(Vec::new())
    }

    pub fn eq(column: &'static str, value: impl Into<SqlValue>) -> Self {
        Predicate::Compare {
            column,
            op: CompareOp::Eq,
            value: value.into(),
        }
    }

    /// `All` that collapses to its only member.
    pub fn all(mut predicates: Vec<Predicate>) -> Self {
        if predicates.len() == 1 {
            predicates.remove(0)
        } else {
            Predicate::All(predicates)
        }
    }
}

/// Accumulates the predicates of one scalar filter against one column.
pub struct Conditions {
    column: &'static str,
    predicates: Vec<Predicate>,
}

impl Conditions {
    pub fn new(column: &'static str) -> Self {
        Self {
            column,
            predicates: Vec::new(),
        }
    }

    pub fn compare<T>(mut self, op: CompareOp, value: &Option<T>) -> Self
    where
        T: Clone + Into<SqlValue>,
    {
        if let Some(v) = value {
            self.predicates.push(Predicate::Compare {
                column: self.column,
                op,
                value: v.clone().into(),
            });
        }
        self
    }

    pub fn within<T>(mut self, values: &Option<Vec<T>>, negated: bool) -> Self
    where
        T: Clone + Into<SqlValue>,
    {
        if let Some(vs) = values {
            self.predicates.push(Predicate::In {
                column: self.column,
                values: vs.iter().cloned().map(Into::into).collect(),
                negated,
            });
        }
        self
    }

    pub fn text(mut self, kind: TextMatch, pattern: &Option<String>) -> Self {
        if let Some(p) = pattern {
            self.predicates.push(Predicate::Text {
                column: self.column,
                kind,
                pattern: p.clone(),
            });
        }
        self
    }

    pub fn finish(self) -> Vec<Predicate> {
        self.predicates
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ordering {
    pub column: &'static str,
    pub direction: Direction,
}

/// Everything a `find_many` needs, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub filter: Predicate,
    pub order: Vec<Ordering>,
    pub take: Option<i64>,
    pub skip: Option<i64>,
}

impl Selection {
    pub fn all() -> Self {
        Self::filtered(Predicate::always())
    }

    pub fn filtered(filter: Predicate) -> Self {
        Self {
            filter,
            order: Vec::new(),
            take: None,
            skip: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Assignment {
    Set(&'static str, SqlValue),
    Increment(&'static str, SqlValue),
    Decrement(&'static str, SqlValue),
    Multiply(&'static str, SqlValue),
    Divide(&'static str, SqlValue),
}

impl Assignment {
    pub fn column(&self) -> &'static str {
        match self {
            Assignment::Set(c, _)
            | Assignment::Increment(c, _)
            | Assignment::Decrement(c, _)
            | Assignment::Multiply(c, _)
            | Assignment::Divide(c, _) => c,
        }
    }
}

/// Column/value pairs of a row to insert.
pub type Values = Vec<(&'static str, SqlValue)>;
