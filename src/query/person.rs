//! Arguments accepted by person operations.

use super::filter::{
    DateTimeFilter, FloatFilter, NullableFloatFieldUpdateOperationsInput,
    NullableStringFieldUpdateOperationsInput, SortOrder, StringFieldUpdateOperationsInput,
    StringFilter,
};
use super::predicate::{Assignment, Ordering, Predicate, Selection, Values};
use crate::error::{HolocronError, Result};
use crate::validation;
use async_graphql::InputObject;
use serde::{Deserialize, Serialize};

#[derive(InputObject, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonWhereInput {
    #[graphql(name = "AND")]
    #[serde(rename = "AND", skip_serializing_if = "Option::is_none")]
    pub and: Option<Vec<PersonWhereInput>>,
    #[graphql(name = "OR")]
    #[serde(rename = "OR", skip_serializing_if = "Option::is_none")]
    pub or: Option<Vec<PersonWhereInput>>,
    #[graphql(name = "NOT")]
    #[serde(rename = "NOT", skip_serializing_if = "Option::is_none")]
    pub not: Option<Vec<PersonWhereInput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<StringFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<StringFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass: Option<FloatFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<StringFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eye_color: Option<StringFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hair_color: Option<StringFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<FloatFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homeworld: Option<StringFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skin_color: Option<StringFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTimeFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTimeFilter>,
}

impl PersonWhereInput {
    pub fn predicate(&self) -> Predicate {
        let mut preds = Vec::new();

        let strings = [
            ("id", &self.id),
            ("name", &self.name),
            ("birth_year", &self.birth_year),
            ("eye_color", &self.eye_color),
            ("hair_color", &self.hair_color),
            ("homeworld", &self.homeworld),
            ("skin_color", &self.skin_color),
        ];
        for (column, filter) in strings {
            if let Some(f) = filter {
                preds.extend(f.predicates(column));
            }
        }
        for (column, filter) in [("mass", &self.mass), ("height", &self.height)] {
            if let Some(f) = filter {
                preds.extend(f.predicates(column));
            }
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

/// Selects at most one person through a unique column.
#[derive(InputObject, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonWhereUniqueInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl PersonWhereUniqueInput {
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
        let mut preds = Vec::new();
        if let Some(id) = &self.id {
            preds.push(Predicate::eq("id", id.as_str()));
        }
        if let Some(name) = &self.name {
            preds.push(Predicate::eq("name", name.as_str()));
        }
        if preds.is_empty() {
            return Err(HolocronError::Validation(
                "Argument `where` of type PersonWhereUniqueInput needs at least one of `id` or `name` arguments".to_string(),
            ));
        }
        Ok(Predicate::all(preds))
    }
}

#[derive(InputObject, Debug, Clone, Default)]
pub struct PersonOrderByInput {
    pub id: Option<SortOrder>,
    pub name: Option<SortOrder>,
    pub mass: Option<SortOrder>,
    pub birth_year: Option<SortOrder>,
    pub eye_color: Option<SortOrder>,
    pub hair_color: Option<SortOrder>,
    pub height: Option<SortOrder>,
    pub homeworld: Option<SortOrder>,
    pub skin_color: Option<SortOrder>,
    pub created_at: Option<SortOrder>,
    pub updated_at: Option<SortOrder>,
}

impl PersonOrderByInput {
    pub fn orderings(&self) -> Vec<Ordering> {
        [
            ("id", self.id),
            ("name", self.name),
            ("mass", self.mass),
            ("birth_year", self.birth_year),
            ("eye_color", self.eye_color),
            ("hair_color", self.hair_color),
            ("height", self.height),
            ("homeworld", self.homeworld),
            ("skin_color", self.skin_color),
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
pub struct PersonCreateInput {
    pub id: Option<String>,
    pub name: String,
    pub mass: Option<f64>,
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<f64>,
    pub homeworld: Option<String>,
    pub skin_color: Option<String>,
}

impl PersonCreateInput {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self
    }

    /// Column values for insertion; `id` and timestamps are added by storage.
    pub fn values(&self) -> Result<Values> {
        validation::validate_name(&self.name)?;
        if let Some(id) = &self.id {
            validation::validate_id(id)?;
        }
        Ok(vec![
            ("name", self.name.clone().into()),
            ("mass", self.mass.into()),
            ("birth_year", self.birth_year.clone().into()),
            ("eye_color", self.eye_color.clone().into()),
            ("hair_color", self.hair_color.clone().into()),
            ("height", self.height.into()),
            ("homeworld", self.homeworld.clone().into()),
            ("skin_color", self.skin_color.clone().into()),
        ])
    }
}

#[derive(InputObject, Debug, Clone, Default)]
pub struct PersonUpdateInput {
    pub name: Option<StringFieldUpdateOperationsInput>,
    pub mass: Option<NullableFloatFieldUpdateOperationsInput>,
    pub birth_year: Option<NullableStringFieldUpdateOperationsInput>,
    pub eye_color: Option<NullableStringFieldUpdateOperationsInput>,
    pub hair_color: Option<NullableStringFieldUpdateOperationsInput>,
    pub height: Option<NullableFloatFieldUpdateOperationsInput>,
    pub homeworld: Option<NullableStringFieldUpdateOperationsInput>,
    pub skin_color: Option<NullableStringFieldUpdateOperationsInput>,
}

impl PersonUpdateInput {
    pub fn assignments(&self) -> Result<Vec<Assignment>> {
        let mut ops = Vec::new();
        if let Some(name) = &self.name {
            if let Some(value) = &name.set {
                validation::validate_name(value)?;
            }
            ops.extend(name.assignments("name"));
        }
        for (column, op) in [("mass", &self.mass), ("height", &self.height)] {
            if let Some(op) = op {
                ops.extend(op.assignments(column)?);
            }
        }
        let strings = [
            ("birth_year", &self.birth_year),
            ("eye_color", &self.eye_color),
            ("hair_color", &self.hair_color),
            ("homeworld", &self.homeworld),
            ("skin_color", &self.skin_color),
        ];
        for (column, op) in strings {
            if let Some(op) = op {
                ops.extend(op.assignments(column));
            }
        }
        Ok(ops)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FindUniquePersonArgs {
    pub filter: PersonWhereUniqueInput,
}

#[derive(Debug, Clone, Default)]
pub struct FindManyPersonArgs {
    pub filter: Option<PersonWhereInput>,
    pub order_by: Option<Vec<PersonOrderByInput>>,
    pub take: Option<i64>,
    pub skip: Option<i64>,
}

impl FindManyPersonArgs {
    pub fn filtered(filter: PersonWhereInput) -> Self {
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
                .map(PersonWhereInput::predicate)
                .unwrap_or_else(Predicate::always),
            order: self
                .order_by
                .iter()
                .flatten()
                .flat_map(PersonOrderByInput::orderings)
                .collect(),
            take: self.take,
            skip: self.skip,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateOnePersonArgs {
    pub data: PersonCreateInput,
}

#[derive(Debug, Clone, Default)]
pub struct CreateManyPersonArgs {
    pub data: Vec<PersonCreateInput>,
    pub skip_duplicates: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateOnePersonArgs {
    pub filter: PersonWhereUniqueInput,
    pub data: PersonUpdateInput,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateManyPersonArgs {
    pub filter: Option<PersonWhereInput>,
    pub data: PersonUpdateInput,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteOnePersonArgs {
    pub filter: PersonWhereUniqueInput,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteManyPersonArgs {
    pub filter: Option<PersonWhereInput>,
}
