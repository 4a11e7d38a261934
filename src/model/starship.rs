use super::types::StarshipClass;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Starship {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo_capacity: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_speed: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyperdrive_rating: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starship_class: Option<StarshipClass>,

    pub crew_members: i64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Starship {
    pub fn new(id: String, name: String, crew_members: i64) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            model: None,
            length: None,
            cargo_capacity: None,
            max_speed: None,
            hyperdrive_rating: None,
            starship_class: None,
            crew_members,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_class(mut self, class: StarshipClass) -> Self {
        self.starship_class = Some(class);
        self
    }

    pub fn was_updated(&self) -> bool {
        self.updated_at != self.created_at
    }
}
