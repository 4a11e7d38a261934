//! SQLite-backed storage layer.
//!
//! People and starships live in two independent tables, each with unique
//! indexes on their natural keys (`people.name`, `starships.name`,
//! `starships.model`). The schema is created idempotently on connect.
//!
//! ## Components
//!
//! - [`Database`]: connection pool and schema setup
//! - [`Repository`]: generic CRUD over one table
//! - [`Record`]: binds a model to its table
//!
//! Unique-index collisions surface as
//! [`HolocronError::ConstraintViolation`] tagged with the column name.
//! Integer arithmetic that overflows makes SQLite fall back to REAL; the
//! `*_range` checks reject that write as [`HolocronError::Validation`]. And
//! single-row updates/deletes that match nothing surface as
//! [`HolocronError::NotFoundForUpdate`] / [`HolocronError::NotFoundForDelete`].

mod repository;
mod rows;
pub mod sql;

pub use repository::{ID_LENGTH, Repository};
pub use rows::Record;

use crate::config::DatabaseSettings;
use crate::error::{HolocronError, Result};
use crate::model::{Person, Starship};
use sqlx::SqlitePool;
use sqlx::error::ErrorKind;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

const SCHEMA: [&str; 2] = [
    r#"
    CREATE TABLE IF NOT EXISTS people (
        id          TEXT PRIMARY KEY NOT NULL,
        name        TEXT NOT NULL UNIQUE,
        mass        REAL,
        birth_year  TEXT,
        eye_color   TEXT,
        hair_color  TEXT,
        height      REAL,
        homeworld   TEXT,
        skin_color  TEXT,
        created_at  TEXT NOT NULL,
        updated_at  TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS starships (
        id                 TEXT PRIMARY KEY NOT NULL,
        name               TEXT NOT NULL UNIQUE,
        model              TEXT UNIQUE,
        length             REAL,
        cargo_capacity     INTEGER,
        max_speed          INTEGER,
        hyperdrive_rating  REAL,
        starship_class     TEXT CHECK (starship_class IN ('FIGHTER', 'TRANSPORTER', 'SPEEDER')),
        crew_members       INTEGER NOT NULL,
        created_at         TEXT NOT NULL,
        updated_at         TEXT NOT NULL,
        CONSTRAINT cargo_capacity_range CHECK (typeof(cargo_capacity) IN ('integer', 'null')),
        CONSTRAINT max_speed_range CHECK (typeof(max_speed) IN ('integer', 'null')),
        CONSTRAINT crew_members_range CHECK (typeof(crew_members) = 'integer')
    )
    "#,
];

#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&settings.url)?.create_if_missing(true);

        let mut pool_options = SqlitePoolOptions::new().max_connections(settings.max_connections.max(1));
        if settings.is_in_memory() {
            // Each connection to an in-memory database sees its own empty copy
            pool_options = pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options.connect_with(options).await?;
        tracing::debug!(url = %settings.url, "Connected to database");

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    pub async fn in_memory() -> Result<Self> {
        Self::connect(&DatabaseSettings::in_memory()).await
    }

    async fn migrate(&self) -> Result<()> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn people(&self) -> Repository<Person> {
        Repository::new(self.pool.clone())
    }

    pub fn starships(&self) -> Repository<Starship> {
        Repository::new(self.pool.clone())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Map SQLx errors to HolocronError, tagging unique-index collisions.
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> HolocronError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.kind() == ErrorKind::UniqueViolation {
            if let Some(field) = unique_violation_field(db_err.message()) {
                return HolocronError::ConstraintViolation { field };
            }
        }
        if db_err.kind() == ErrorKind::CheckViolation {
            if let Some(field) = range_violation_field(db_err.message()) {
                return HolocronError::Validation(format!("Value out of range for {}", field));
            }
        }
    }
    HolocronError::Database(err)
}

/// Extracts the column from a failed `<column>_range` check.
fn range_violation_field(message: &str) -> Option<&str> {
    let constraint = message.split_once("constraint failed:")?.1.trim();
    constraint.strip_suffix("_range").filter(|c| !c.is_empty())
}

/// Extracts the first column from SQLite's
/// `UNIQUE constraint failed: <table>.<column>[, ...]` message.
fn unique_violation_field(message: &str) -> Option<String> {
    let columns = message.split_once("constraint failed:")?.1;
    let first = columns.split(',').next()?.trim();
    let column = first.rsplit('.').next()?;
    (!column.is_empty()).then(|| column.to_string())
}
