use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eye_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hair_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homeworld: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_color: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Person {
    pub fn new(id: String, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            mass: None,
            birth_year: None,
            eye_color: None,
            hair_color: None,
            height: None,
            homeworld: None,
            skin_color: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self
    }

    pub fn with_homeworld(mut self, homeworld: String) -> Self {
        self.homeworld = Some(homeworld);
        self
    }

    /// Whether the record was modified after it was inserted.
    pub fn was_updated(&self) -> bool {
        self.updated_at != self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_person_is_not_updated() {
        let person = Person::new("abc".to_string(), "Luke".to_string());
        assert!(!person.was_updated());
        assert_eq!(person.mass, None);
    }

    #[test]
    fn test_serializes_camel_case_without_empty_fields() {
        let person = Person::new("abc".to_string(), "Luke".to_string())
            .with_mass(77.0)
            .with_homeworld("Tatooine".to_string());

        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(json["homeworld"], "Tatooine");
        assert_eq!(json["mass"], 77.0);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("eyeColor").is_none());
    }
}
