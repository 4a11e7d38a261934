//! Data models for holocron.
//!
//! This module defines the two stored aggregates:
//!
//! - [`Person`]: a character record, unique by name
//! - [`Starship`]: a ship record, unique by name and by model
//! - [`StarshipClass`]: ship classification (fighter, transporter, speeder)

mod person;
mod starship;
mod types;

pub use person::Person;
pub use starship::Starship;
pub use types::StarshipClass;
