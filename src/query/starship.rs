//! Arguments accepted by starship operations.

use super::filter::{
    DateTimeFilter, FloatFilter, IntFieldUpdateOperationsInput, IntFilter,
    NullableFloatFieldUpdateOperationsInput, NullableIntFieldUpdateOperationsInput,
    NullableStarshipClassFieldUpdateOperationsInput, NullableStringFieldUpdateOperationsInput,
    SortOrder, StringFieldUpdateOperationsInput, StringFilter, nullable_value,
};
use super::predicate::{
    Assignment, CompareOp, Conditions, Ordering, Predicate, Selection, SqlValue, Values,
};
use crate::error::{HolocronError, Result};
use crate::model::StarshipClass;
use crate::validation;
use async_graphql::{InputObject, MaybeUndefined};
use serde::{Deserialize, Serialize};

impl From<StarshipClass> for SqlValue {
    fn from(class: StarshipClass) -> Self {
        SqlValue::Text(class.as_str().to_string())
    }
}

#[derive(InputObject, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarshipClassFilter {
    #[serde(default, skip_serializing_if = "MaybeUndefined::is_undefined")]
    pub equals: MaybeUndefined<StarshipClass>,
    #[serde(default, skip_serializing_if = "MaybeUndefined::is_undefined")]
    pub not: MaybeUndefined<StarshipClass>,
    #[graphql(name = "in")]
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub in_: Option<Vec<StarshipClass>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_in: Option<Vec<StarshipClass>>,
}

impl StarshipClassFilter {
    pub fn predicates(&self, column: &'static str) -> Vec<Predicate> {
        Conditions::new(column)
            .compare(CompareOp::Eq, &nullable_value(&self.equals))
            .compare(CompareOp::Ne, &nullable_value(&self.not))
            .within(&self.in_, false)
            .within(&self.not_in, true)
            .finish()
    }
}

#[derive(InputObject, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarshipWhereInput {
    #[graphql(name = "AND")]
    #[serde(rename = "AND", skip_serializing_if = "Option::is_none")]
    pub and: Option<Vec<StarshipWhereInput>>,
    #[graphql(name = "OR")]
    #[serde(rename = "OR", skip_serializing_if = "Option::is_none")]
    pub or: Option<Vec<StarshipWhereInput>>,
    #[graphql(name = "NOT")]
    #[serde(rename = "NOT", skip_serializing_if = "Option::is_none")]
    pub not: Option<Vec<StarshipWhereInput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<StringFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<StringFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<StringFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<FloatFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cargo_capacity: Option<IntFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_speed: Option<IntFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyperdrive_rating: Option<FloatFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starship_class: Option<StarshipClassFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crew_members: Option<IntFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTimeFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTimeFilter>,
}

impl StarshipWhereInput {
    pub fn predicate(&self) -> Predicate {
        let mut preds = Vec::new();

        for (column, filter) in [
            ("id", &self.id),
            ("name", &self.name),
            ("model", &self.model),
        ] {
            if let Some(f) = filter {
                preds.extend(f.predicates(column));
            }
        }
        for (column, filter) in [
            ("length", &self.length),
            ("hyperdrive_rating", &self.hyperdrive_rating),
        ] {
            if let Some(f) = filter {
                preds.extend(f.predicates(column));
            }
        }
        for (column, filter) in [
            ("cargo_capacity", &self.cargo_capacity),
            ("max_speed", &self.max_speed),
            ("crew_members", &self.crew_members),
        ] {
            if let Some(f) = filter {
                preds.extend(f.predicates(column));
            }
        }
        if let Some(f) = &self.starship_class {
            preds.extend(f.predicates("starship_class"));
        }
        for (column, filter) in [
            ("created_at", &self.created_at),
            ("updated_at", &self.updated_at),
        ] {
            if let Some(f) = filter {
                preds.extend(f.predicates(column));
            }
        }

        if let Some(and) = &self.and {
            preds.push(Predicate::All(and.iter().map(Self::predicate).collect()));
        }
        if let Some(or) = &self.or {
            preds.push(Predicate::Any(or.iter().map(Self::predicate).collect()));
        }
        if let Some(not) = &self.not {
            for p in not {
                preds.push(Predicate::Not(Box::new(p.predicate())));
            }
        }

        Predicate::all(preds)
    }
}

/// Selects at most one starship through a unique column.
#[derive(InputObject, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarshipWhereUniqueInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl StarshipWhereUniqueInput {
    pub fn id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn predicate(&self) -> Result<Predicate> {
        let preds: Vec<Predicate> = [
            ("id", &self.id),
            ("name", &self.name),
            ("model", &self.model),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.as_deref().map(|v| Predicate::eq(column, v)))
        .collect();

        if preds.is_empty() {
            return Err(HolocronError::Validation(
                "Argument `where` of type StarshipWhereUniqueInput needs at least one of `id`, `name` or `model` arguments".to_string(),
            ));
        }
        Ok(Predicate::all(preds))
    }
}

#[derive(InputObject, Debug, Clone, Default)]
pub struct StarshipOrderByInput {
    pub id: Option<SortOrder>,
    pub name: Option<SortOrder>,
    pub model: Option<SortOrder>,
    pub length: Option<SortOrder>,
    pub cargo_capacity: Option<SortOrder>,
    pub max_speed: Option<SortOrder>,
    pub hyperdrive_rating: Option<SortOrder>,
    pub starship_class: Option<SortOrder>,
    pub crew_members: Option<SortOrder>,
    pub created_at: Option<SortOrder>,
    pub updated_at: Option<SortOrder>,
}

impl StarshipOrderByInput {
    pub fn orderings(&self) -> Vec<Ordering> {
        [
            ("id", self.id),
            ("name", self.name),
            ("model", self.model),
            ("length", self.length),
            ("cargo_capacity", self.cargo_capacity),
            ("max_speed", self.max_speed),
            ("hyperdrive_rating", self.hyperdrive_rating),
            ("starship_class", self.starship_class),
            ("crew_members", self.crew_members),
            ("created_at", self.created_at),
            ("updated_at", self.updated_at),
        ]
        .into_iter()
        .filter_map(|(column, order)| {
            order.map(|o| Ordering {
                column,
                direction: o.into(),
            })
        })
        .collect()
    }
}

#[derive(InputObject, Debug, Clone, Default)]
pub struct StarshipCreateInput {
    pub id: Option<String>,
    pub name: String,
    pub model: Option<String>,
    pub length: Option<f64>,
    pub cargo_capacity: Option<i64>,
    pub max_speed: Option<i64>,
    pub hyperdrive_rating: Option<f64>,
    pub starship_class: Option<StarshipClass>,
    pub crew_members: i64,
}

impl StarshipCreateInput {
    pub fn new(name: impl Into<String>, crew_members: i64) -> Self {
        Self {
            name: name.into(),
            crew_members,
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Column values for insertion; `id` and timestamps are added by storage.
    pub fn values(&self) -> Result<Values> {
        validation::validate_name(&self.name)?;
        if let Some(model) = &self.model {
            validation::validate_name(model)?;
        }
        if let Some(id) = &self.id {
            validation::validate_id(id)?;
        }
        Ok(vec![
            ("name", self.name.clone().into()),
            ("model", self.model.clone().into()),
            ("length", self.length.into()),
            ("cargo_capacity", self.cargo_capacity.into()),
            ("max_speed", self.max_speed.into()),
            ("hyperdrive_rating", self.hyperdrive_rating.into()),
            ("starship_class", self.starship_class.into()),
            ("crew_members", self.crew_members.into()),
        ])
    }
}

#[derive(InputObject, Debug, Clone, Default)]
pub struct StarshipUpdateInput {
    pub name: Option<StringFieldUpdateOperationsInput>,
    pub model: Option<NullableStringFieldUpdateOperationsInput>,
    pub length: Option<NullableFloatFieldUpdateOperationsInput>,
    pub cargo_capacity: Option<NullableIntFieldUpdateOperationsInput>,
    pub max_speed: Option<NullableIntFieldUpdateOperationsInput>,
    pub hyperdrive_rating: Option<NullableFloatFieldUpdateOperationsInput>,
    pub starship_class: Option<NullableStarshipClassFieldUpdateOperationsInput>,
    pub crew_members: Option<IntFieldUpdateOperationsInput>,
}

impl StarshipUpdateInput {
    pub fn assignments(&self) -> Result<Vec<Assignment>> {
        let mut ops = Vec::new();
        if let Some(name) = &self.name {
            if let Some(value) = &name.set {
                validation::validate_name(value)?;
            }
            ops.extend(name.assignments("name"));
        }
        if let Some(model) = &self.model {
            if let Some(value) = model.set.value() {
                validation::validate_name(value)?;
            }
            ops.extend(model.assignments("model"));
        }
        for (column, op) in [
            ("length", &self.length),
            ("hyperdrive_rating", &self.hyperdrive_rating),
        ] {
            if let Some(op) = op {
                ops.extend(op.assignments(column)?);
            }
        }
        for (column, op) in [
            ("cargo_capacity", &self.cargo_capacity),
            ("max_speed", &self.max_speed),
        ] {
            if let Some(op) = op {
                ops.extend(op.assignments(column)?);
            }
        }
        if let Some(class) = &self.starship_class {
            ops.extend(class.assignments("starship_class"));
        }
        if let Some(crew) = &self.crew_members {
            ops.extend(crew.assignments("crew_members")?);
        }
        Ok(ops)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FindUniqueStarshipArgs {
    pub filter: StarshipWhereUniqueInput,
}

#[derive(Debug, Clone, Default)]
pub struct FindManyStarshipArgs {
    pub filter: Option<StarshipWhereInput>,
    pub order_by: Option<Vec<StarshipOrderByInput>>,
    pub take: Option<i64>,
    pub skip: Option<i64>,
}

impl FindManyStarshipArgs {
    pub fn filtered(filter: StarshipWhereInput) -> Self {
        Self {
            filter: Some(filter),
            ..Default::default()
        }
    }

    pub fn selection(&self) -> Result<Selection> {
        validation::validate_page(self.take, self.skip)?;
        Ok(Selection {
            filter: self
                .filter
                .as_ref()
                .map(StarshipWhereInput::predicate)
                .unwrap_or_else(Predicate::always),
            order: self
                .order_by
                .iter()
                .flatten()
                .flat_map(StarshipOrderByInput::orderings)
                .collect(),
            take: self.take,
            skip: self.skip,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateOneStarshipArgs {
    pub data: StarshipCreateInput,
}

#[derive(Debug, Clone, Default)]
pub struct CreateManyStarshipArgs {
    pub data: Vec<StarshipCreateInput>,
    pub skip_duplicates: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateOneStarshipArgs {
    pub filter: StarshipWhereUniqueInput,
    pub data: StarshipUpdateInput,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateManyStarshipArgs {
    pub filter: Option<StarshipWhereInput>,
    pub data: StarshipUpdateInput,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteOneStarshipArgs {
    pub filter: StarshipWhereUniqueInput,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteManyStarshipArgs {
    pub filter: Option<StarshipWhereInput>,
}
