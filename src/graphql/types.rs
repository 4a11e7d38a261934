use crate::model::{self, StarshipClass};
use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};

#[derive(SimpleObject, Debug, Clone)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub mass: Option<f64>,
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<f64>,
    pub homeworld: Option<String>,
    pub skin_color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<model::Person> for Person {
    fn from(p: model::Person) -> Self {
        Self {
            id: p.id,
            name: p.name,
            mass: p.mass,
            birth_year: p.birth_year,
            eye_color: p.eye_color,
            hair_color: p.hair_color,
            height: p.height,
            homeworld: p.homeworld,
            skin_color: p.skin_color,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(SimpleObject, Debug, Clone)]
pub struct Starship {
    pub id: String,
    pub name: String,
    pub model: Option<String>,
    pub length: Option<f64>,
    pub cargo_capacity: Option<i64>,
    pub max_speed: Option<i64>,
    pub hyperdrive_rating: Option<f64>,
    pub starship_class: Option<StarshipClass>,
    pub crew_members: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<model::Starship> for Starship {
    fn from(s: model::Starship) -> Self {
        Self {
            id: s.id,
            name: s.name,
            model: s.model,
            length: s.length,
            cargo_capacity: s.cargo_capacity,
            max_speed: s.max_speed,
            hyperdrive_rating: s.hyperdrive_rating,
            starship_class: s.starship_class,
            crew_members: s.crew_members,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}
