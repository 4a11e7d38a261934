use super::rows::Record;
use super::{map_sqlx_error, sql};
use crate::error::{HolocronError, Result};
use crate::query::predicate::{Assignment, Predicate, Selection, SqlValue, Values};
use chrono::Utc;
use sqlx::SqlitePool;
use std::marker::PhantomData;

/// Length of generated record ids.
pub const ID_LENGTH: usize = 21;

/// Data access for one table. Every call is a single statement or a single
/// transaction, so each operation is atomic on its own.
pub struct Repository<R> {
    pool: SqlitePool,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for Repository<R> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: Record> Repository<R> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }

    pub fn generate_id(&self) -> String {
        nanoid::nanoid!(ID_LENGTH)
    }

    /// Completes caller values with id and timestamps.
    fn row_values(&self, mut values: Values, id: Option<String>) -> Values {
        let now = Utc::now();
        let id = id.unwrap_or_else(|| self.generate_id());
        values.insert(0, ("id", SqlValue::Text(id)));
        values.push(("created_at", SqlValue::Timestamp(now)));
        values.push(("updated_at", SqlValue::Timestamp(now)));
        values
    }

    pub async fn find_unique(&self, filter: &Predicate) -> Result<Option<R>> {
        let selection = Selection {
            take: Some(1),
            ..Selection::filtered(filter.clone())
        };
        let mut found = self.find_many(&selection).await?;
        Ok(found.pop())
    }

    pub async fn find_many(&self, selection: &Selection) -> Result<Vec<R>> {
        let mut qb = sql::select(R::TABLE, selection);
        let records = qb
            .build_query_as::<R>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        tracing::debug!(table = R::TABLE, count = records.len(), "Fetched records");
        Ok(records)
    }

    pub async fn create(&self, values: Values, id: Option<String>) -> Result<R> {
        let values = self.row_values(values, id);
        let mut qb = sql::insert(R::TABLE, &values, false);
        let record = qb
            .build_query_as::<R>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        tracing::info!(table = R::TABLE, id = %record.id(), "Created record");
        Ok(record)
    }

    /// Inserts all rows in one transaction. With `skip_duplicates`, rows that
    /// collide with a unique column are left out of the result instead of
    /// failing the batch.
    pub async fn create_many(
        &self,
        rows: Vec<(Values, Option<String>)>,
        skip_duplicates: bool,
    ) -> Result<Vec<R>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        let mut created = Vec::with_capacity(rows.len());

        for (values, id) in rows {
            let values = self.row_values(values, id);
            let mut qb = sql::insert(R::TABLE, &values, skip_duplicates);
            let record = qb
                .build_query_as::<R>()
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_sqlx_error)?;
            created.extend(record);
        }

        tx.commit().await.map_err(map_sqlx_error)?;
        tracing::info!(table = R::TABLE, count = created.len(), "Created records");
        Ok(created)
    }

    pub async fn update(&self, filter: &Predicate, assignments: &[Assignment]) -> Result<R> {
        let mut qb = sql::update(R::TABLE, filter, assignments, &Utc::now());
        let record = qb
            .build_query_as::<R>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(HolocronError::NotFoundForUpdate)?;
        tracing::info!(table = R::TABLE, id = %record.id(), "Updated record");
        Ok(record)
    }

    /// Returns the updated rows; matching nothing is not an error.
    pub async fn update_many(
        &self,
        filter: &Predicate,
        assignments: &[Assignment],
    ) -> Result<Vec<R>> {
        let mut qb = sql::update(R::TABLE, filter, assignments, &Utc::now());
        let records = qb
            .build_query_as::<R>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        tracing::info!(table = R::TABLE, count = records.len(), "Updated records");
        Ok(records)
    }

    pub async fn delete(&self, filter: &Predicate) -> Result<R> {
        let mut qb = sql::delete(R::TABLE, filter, true);
        let record = qb
            .build_query_as::<R>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(HolocronError::NotFoundForDelete)?;
        tracing::info!(table = R::TABLE, id = %record.id(), "Deleted record");
        Ok(record)
    }

    /// Returns the number of deleted rows; matching nothing is not an error.
    pub async fn delete_many(&self, filter: &Predicate) -> Result<u64> {
        let mut qb = sql::delete(R::TABLE, filter, false);
        let deleted = qb
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .rows_affected();
        tracing::info!(table = R::TABLE, count = deleted, "Deleted records");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Person, Starship};
    use crate::query::{PersonCreateInput, PersonWhereInput, StarshipCreateInput, StringFilter};
    use crate::storage::Database;

    async fn setup() -> (Repository<Person>, Repository<Starship>) {
        let db = Database::in_memory().await.unwrap();
        (db.people(), db.starships())
    }

    async fn create_person(repo: &Repository<Person>, name: &str) -> Person {
        let values = PersonCreateInput::named(name).values().unwrap();
        repo.create(values, None).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamps() {
        let (people, _) = setup().await;
        let person = create_person(&people, "Luke").await;

        assert_eq!(person.id.len(), ID_LENGTH);
        assert_eq!(person.created_at, person.updated_at);
        assert!(!person.was_updated());
    }

    #[tokio::test]
    async fn test_create_keeps_supplied_id() {
        let (people, _) = setup().await;
        let values = PersonCreateInput::named("Leia").values().unwrap();
        let person = people
            .create(values, Some("leia-organa".to_string()))
            .await
            .unwrap();
        assert_eq!(person.id, "leia-organa");
    }

    #[tokio::test]
    async fn test_find_unique_absent_is_none() {
        let (people, _) = setup().await;
        let found = people
            .find_unique(&Predicate::eq("name", "nobody"))
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_name_is_tagged_constraint_violation() {
        let (people, _) = setup().await;
        create_person(&people, "Han").await;

        let values = PersonCreateInput::named("Han").values().unwrap();
        let err = people.create(values, None).await.unwrap_err();

        assert_eq!(err.violated_field(), Some("name"));
        assert!(
            err.to_string()
                .contains("Unique constraint failed on the fields: (`name`)")
        );
    }

    #[tokio::test]
    async fn test_duplicate_model_is_tagged_constraint_violation() {
        let (_, starships) = setup().await;
        let first = StarshipCreateInput::new("Falcon", 4).with_model("YT-1300");
        starships.create(first.values().unwrap(), None).await.unwrap();

        let second = StarshipCreateInput::new("Outrider", 2).with_model("YT-1300");
        let err = starships
            .create(second.values().unwrap(), None)
            .await
            .unwrap_err();
        assert_eq!(err.violated_field(), Some("model"));
        assert!(err.to_string().contains("(`model`"));
    }

    #[tokio::test]
    async fn test_create_many_is_all_or_nothing() {
        let (people, _) = setup().await;
        let rows = ["A", "B", "A"]
            .into_iter()
            .map(|n| (PersonCreateInput::named(n).values().unwrap(), None))
            .collect();

        let err = people.create_many(rows, false).await.unwrap_err();
        assert_eq!(err.violated_field(), Some("name"));

        let all = people.find_many(&Selection::all()).await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_create_many_skip_duplicates_returns_inserted_rows() {
        let (people, _) = setup().await;
        create_person(&people, "A").await;

        let rows = ["A", "B"]
            .into_iter()
            .map(|n| (PersonCreateInput::named(n).values().unwrap(), None))
            .collect();
        let created = people.create_many(rows, true).await.unwrap();

        assert_eq!(created.len(), 1);
        assert_eq!(created[0].name, "B");
        assert_eq!(people.find_many(&Selection::all()).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_without_match_fails() {
        let (people, _) = setup().await;
        let err = people
            .update(
                &Predicate::eq("id", "missing"),
                &[Assignment::Set("mass", SqlValue::Real(1.0))],
            )
            .await
            .unwrap_err();
        assert!(matches!(err, HolocronError::NotFoundForUpdate));
    }

    #[tokio::test]
    async fn test_update_many_without_match_is_empty() {
        let (people, _) = setup().await;
        create_person(&people, "A").await;

        let updated = people
            .update_many(
                &Predicate::eq("name", "missing"),
                &[Assignment::Set("mass", SqlValue::Real(1.0))],
            )
            .await
            .unwrap();
        assert!(updated.is_empty());
    }

    #[tokio::test]
    async fn test_update_refreshes_updated_at() {
        let (people, _) = setup().await;
        let person = create_person(&people, "A").await;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        let updated = people
            .update(
                &Predicate::eq("id", person.id.as_str()),
                &[Assignment::Set("mass", SqlValue::Real(20.0))],
            )
            .await
            .unwrap();
        assert_eq!(updated.mass, Some(20.0));
        assert_eq!(updated.created_at, person.created_at);
        assert!(updated.was_updated());
    }

    #[tokio::test]
    async fn test_delete_without_match_fails_but_delete_many_does_not() {
        let (people, _) = setup().await;
        create_person(&people, "A").await;

        let err = people
            .delete(&Predicate::eq("id", "missing"))
            .await
            .unwrap_err();
        assert!(matches!(err, HolocronError::NotFoundForDelete));

        let deleted = people
            .delete_many(&Predicate::eq("name", "missing"))
            .await
            .unwrap();
        assert_eq!(deleted, 0);
        assert_eq!(people.find_many(&Selection::all()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_many_filters_and_pages() {
        let (people, _) = setup().await;
        for name in ["s0", "s1", "s2", "s3"] {
            create_person(&people, name).await;
        }

        let filter = PersonWhereInput {
            name: Some(StringFilter {
                in_: Some(vec!["s1".to_string(), "s2".to_string(), "s3".to_string()]),
                ..Default::default()
            }),
            ..Default::default()
        };
        let selection = Selection {
            take: Some(2),
            skip: Some(1),
            ..Selection::filtered(filter.predicate())
        };
        let page = people.find_many(&selection).await.unwrap();
        let names: Vec<_> = page.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["s2", "s3"]);
    }
}
