//! Scalar filters, update operations and sort order shared by both entities.

use super::predicate::{
    Assignment, CompareOp, Conditions, Direction, Predicate, SqlValue, TextMatch,
};
use crate::error::{HolocronError, Result};
use async_graphql::{Enum, InputObject, MaybeUndefined};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(InputObject, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringFilter {
    #[serde(default, skip_serializing_if = "MaybeUndefined::is_undefined")]
    pub equals: MaybeUndefined<String>,
    #[serde(default, skip_serializing_if = "MaybeUndefined::is_undefined")]
    pub not: MaybeUndefined<String>,
    #[graphql(name = "in")]
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub in_: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_in: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_with: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_with: Option<String>,
}

impl StringFilter {
    pub fn equals(value: impl Into<String>) -> Self {
        Self {
            equals: MaybeUndefined::Value(value.into()),
            ..Default::default()
        }
    }

    pub fn predicates(&self, column: &'static str) -> Vec<Predicate> {
        Conditions::new(column)
            .compare(CompareOp::Eq, &nullable_value(&self.equals))
            .compare(CompareOp::Ne, &nullable_value(&self.not))
            .within(&self.in_, false)
            .within(&self.not_in, true)
            .compare(CompareOp::Lt, &self.lt)
            .compare(CompareOp::Lte, &self.lte)
            .compare(CompareOp::Gt, &self.gt)
            .compare(CompareOp::Gte, &self.gte)
            .text(TextMatch::Contains, &self.contains)
            .text(TextMatch::StartsWith, &self.starts_with)
            .text(TextMatch::EndsWith, &self.ends_with)
            .finish()
    }
}

#[derive(InputObject, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntFilter {
    #[serde(default, skip_serializing_if = "MaybeUndefined::is_undefined")]
    pub equals: MaybeUndefined<i64>,
    #[serde(default, skip_serializing_if = "MaybeUndefined::is_undefined")]
    pub not: MaybeUndefined<i64>,
    #[graphql(name = "in")]
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub in_: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_in: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gt: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<i64>,
}

impl IntFilter {
    pub fn equals(value: i64) -> Self {
        Self {
            equals: MaybeUndefined::Value(value),
            ..Default::default()
        }
    }

    pub fn predicates(&self, column: &'static str) -> Vec<Predicate> {
        Conditions::new(column)
            .compare(CompareOp::Eq, &nullable_value(&self.equals))
            .compare(CompareOp::Ne, &nullable_value(&self.not))
            .within(&self.in_, false)
            .within(&self.not_in, true)
            .compare(CompareOp::Lt, &self.lt)
            .compare(CompareOp::Lte, &self.lte)
            .compare(CompareOp::Gt, &self.gt)
            .compare(CompareOp::Gte, &self.gte)
            .finish()
    }
}

#[derive(InputObject, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloatFilter {
    #[serde(default, skip_serializing_if = "MaybeUndefined::is_undefined")]
    pub equals: MaybeUndefined<f64>,
    #[serde(default, skip_serializing_if = "MaybeUndefined::is_undefined")]
    pub not: MaybeUndefined<f64>,
    #[graphql(name = "in")]
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub in_: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_in: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gt: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<f64>,
}

impl FloatFilter {
    pub fn predicates(&self, column: &'static str) -> Vec<Predicate> {
        Conditions::new(column)
            .compare(CompareOp::Eq, &nullable_value(&self.equals))
            .compare(CompareOp::Ne, &nullable_value(&self.not))
            .within(&self.in_, false)
            .within(&self.not_in, true)
            .compare(CompareOp::Lt, &self.lt)
            .compare(CompareOp::Lte, &self.lte)
            .compare(CompareOp::Gt, &self.gt)
            .compare(CompareOp::Gte, &self.gte)
            .finish()
    }
}

#[derive(InputObject, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeFilter {
    #[serde(default, skip_serializing_if = "MaybeUndefined::is_undefined")]
    pub equals: MaybeUndefined<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "MaybeUndefined::is_undefined")]
    pub not: MaybeUndefined<DateTime<Utc>>,
    #[graphql(name = "in")]
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub in_: Option<Vec<DateTime<Utc>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_in: Option<Vec<DateTime<Utc>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gt: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<DateTime<Utc>>,
}

impl DateTimeFilter {
    pub fn predicates(&self, column: &'static str) -> Vec<Predicate> {
        Conditions::new(column)
            .compare(CompareOp::Eq, &nullable_value(&self.equals))
            .compare(CompareOp::Ne, &nullable_value(&self.not))
            .within(&self.in_, false)
            .within(&self.not_in, true)
            .compare(CompareOp::Lt, &self.lt)
            .compare(CompareOp::Lte, &self.lte)
            .compare(CompareOp::Gt, &self.gt)
            .compare(CompareOp::Gte, &self.gte)
            .finish()
    }
}

#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl From<SortOrder> for Direction {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => Direction::Asc,
            SortOrder::Desc => Direction::Desc,
        }
    }
}

/// `{ set }` wrapper for required string columns.
#[derive(InputObject, Debug, Clone, Default)]
pub struct StringFieldUpdateOperationsInput {
    pub set: Option<String>,
}

impl StringFieldUpdateOperationsInput {
    pub fn assignments(&self, column: &'static str) -> Vec<Assignment> {
        self.set
            .iter()
            .map(|v| Assignment::Set(column, v.clone().into()))
            .collect()
    }
}

/// `{ set }` wrapper for nullable string columns; `set: null` clears.
#[derive(InputObject, Debug, Clone, Default)]
pub struct NullableStringFieldUpdateOperationsInput {
    pub set: MaybeUndefined<String>,
}

impl NullableStringFieldUpdateOperationsInput {
    pub fn assignments(&self, column: &'static str) -> Vec<Assignment> {
        match &self.set {
            MaybeUndefined::Undefined => Vec::new(),
            MaybeUndefined::Null => vec![Assignment::Set(column, None::<String>.into())],
            MaybeUndefined::Value(v) => vec![Assignment::Set(column, v.clone().into())],
        }
    }
}

#[derive(InputObject, Debug, Clone, Default)]
pub struct IntFieldUpdateOperationsInput {
    pub set: Option<i64>,
    pub increment: Option<i64>,
    pub decrement: Option<i64>,
    pub multiply: Option<i64>,
    pub divide: Option<i64>,
}

impl IntFieldUpdateOperationsInput {
    pub fn assignments(&self, column: &'static str) -> Result<Vec<Assignment>> {
        arithmetic(
            column,
            self.set.map(Into::into),
            [
                self.increment.map(|v| Assignment::Increment(column, v.into())),
                self.decrement.map(|v| Assignment::Decrement(column, v.into())),
                self.multiply.map(|v| Assignment::Multiply(column, v.into())),
            ],
            self.divide.map(|v| (v == 0, Assignment::Divide(column, v.into()))),
        )
    }
}

#[derive(InputObject, Debug, Clone, Default)]
pub struct NullableIntFieldUpdateOperationsInput {
    pub set: MaybeUndefined<i64>,
    pub increment: Option<i64>,
    pub decrement: Option<i64>,
    pub multiply: Option<i64>,
    pub divide: Option<i64>,
}

impl NullableIntFieldUpdateOperationsInput {
    pub fn assignments(&self, column: &'static str) -> Result<Vec<Assignment>> {
        arithmetic(
            column,
            nullable_value(&self.set),
            [
                self.increment.map(|v| Assignment::Increment(column, v.into())),
                self.decrement.map(|v| Assignment::Decrement(column, v.into())),
                self.multiply.map(|v| Assignment::Multiply(column, v.into())),
            ],
            self.divide.map(|v| (v == 0, Assignment::Divide(column, v.into()))),
        )
    }
}

#[derive(InputObject, Debug, Clone, Default)]
pub struct NullableFloatFieldUpdateOperationsInput {
    pub set: MaybeUndefined<f64>,
    pub increment: Option<f64>,
    pub decrement: Option<f64>,
    pub multiply: Option<f64>,
    pub divide: Option<f64>,
}

impl NullableFloatFieldUpdateOperationsInput {
    pub fn set(value: f64) -> Self {
        Self {
            set: MaybeUndefined::Value(value),
            ..Default::default()
        }
    }

    pub fn assignments(&self, column: &'static str) -> Result<Vec<Assignment>> {
        arithmetic(
            column,
            nullable_value(&self.set),
            [
                self.increment.map(|v| Assignment::Increment(column, v.into())),
                self.decrement.map(|v| Assignment::Decrement(column, v.into())),
                self.multiply.map(|v| Assignment::Multiply(column, v.into())),
            ],
            self.divide.map(|v| (v == 0.0, Assignment::Divide(column, v.into()))),
        )
    }
}

/// An explicit `null` is a value of its own: `IS NULL` in filters and
/// clearing the column in updates.
pub(crate) fn nullable_value<T>(value: &MaybeUndefined<T>) -> Option<SqlValue>
where
    T: Clone + Into<SqlValue>,
{
    match value {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(SqlValue::Null),
        MaybeUndefined::Value(v) => Some(v.clone().into()),
    }
}

/// Numeric operations are exclusive: one of set, increment, decrement,
/// multiply or divide per field.
fn arithmetic(
    column: &'static str,
    set: Option<SqlValue>,
    others: [Option<Assignment>; 3],
    divide: Option<(bool, Assignment)>,
) -> Result<Vec<Assignment>> {
    let mut ops: Vec<Assignment> = set
        .map(|v| Assignment::Set(column, v))
        .into_iter()
        .chain(others.into_iter().flatten())
        .collect();

    if let Some((by_zero, op)) = divide {
        if by_zero {
            return Err(HolocronError::Validation(format!(
                "Cannot divide {} by zero",
                column
            )));
        }
        ops.push(op);
    }

    if ops.len() > 1 {
        return Err(HolocronError::Validation(format!(
            "Only one update operation is allowed for {}",
            column
        )));
    }
    Ok(ops)
}

/// `{ set }` wrapper for the nullable starship class column.
#[derive(InputObject, Debug, Clone, Default)]
pub struct NullableStarshipClassFieldUpdateOperationsInput {
    pub set: MaybeUndefined<crate::model::StarshipClass>,
}

impl NullableStarshipClassFieldUpdateOperationsInput {
    pub fn assignments(&self, column: &'static str) -> Vec<Assignment> {
        match &self.set {
            MaybeUndefined::Undefined => Vec::new(),
            MaybeUndefined::Null => vec![Assignment::Set(column, None::<String>.into())],
            MaybeUndefined::Value(class) => vec![Assignment::Set(column, class.as_str().into())],
        }
    }
}
