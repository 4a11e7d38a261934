use crate::error::{HolocronError, Result};
use async_graphql::Enum;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StarshipClass {
    Fighter,
    Transporter,
    Speeder,
}

impl StarshipClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            StarshipClass::Fighter => "FIGHTER",
            StarshipClass::Transporter => "TRANSPORTER",
            StarshipClass::Speeder => "SPEEDER",
        }
    }
}

impl fmt::Display for StarshipClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StarshipClass {
    type Err = HolocronError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "FIGHTER" => Ok(StarshipClass::Fighter),
            "TRANSPORTER" => Ok(StarshipClass::Transporter),
            "SPEEDER" => Ok(StarshipClass::Speeder),
            _ => Err(HolocronError::Parse(format!("Invalid starship class: {}", s))),
        }
    }
}
