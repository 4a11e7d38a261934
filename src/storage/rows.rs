use crate::model::{Person, Starship, StarshipClass};
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

/// A table-backed aggregate.
pub trait Record: for<'r> FromRow<'r, SqliteRow> + Send + Unpin + 'static {
    const TABLE: &'static str;

    fn id(&self) -> &str;
}

impl Record for Person {
    const TABLE: &'static str = "people";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Starship {
    const TABLE: &'static str = "starships";

    fn id(&self) -> &str {
        &self.id
    }
}

fn timestamp_column(row: &SqliteRow, column: &str) -> Result<DateTime<Utc>, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: column.to_string(),
            source: Box::new(e),
        })
}

impl<'r> FromRow<'r, SqliteRow> for Person {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Person {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            mass: row.try_get("mass")?,
            birth_year: row.try_get("birth_year")?,
            eye_color: row.try_get("eye_color")?,
            hair_color: row.try_get("hair_color")?,
            height: row.try_get("height")?,
            homeworld: row.try_get("homeworld")?,
            skin_color: row.try_get("skin_color")?,
            created_at: timestamp_column(row, "created_at")?,
            updated_at: timestamp_column(row, "updated_at")?,
        })
    }
}

impl<'r> FromRow<'r, SqliteRow> for Starship {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let class: Option<String> = row.try_get("starship_class")?;
        let starship_class = class
            .map(|c| c.parse::<StarshipClass>())
            .transpose()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "starship_class".to_string(),
                source: Box::new(e),
            })?;

        Ok(Starship {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            model: row.try_get("model")?,
            length: row.try_get("length")?,
            cargo_capacity: row.try_get("cargo_capacity")?,
            max_speed: row.try_get("max_speed")?,
            hyperdrive_rating: row.try_get("hyperdrive_rating")?,
            starship_class,
            crew_members: row.try_get("crew_members")?,
            created_at: timestamp_column(row, "created_at")?,
            updated_at: timestamp_column(row, "updated_at")?,
        })
    }
}
