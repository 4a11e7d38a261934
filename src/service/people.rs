use crate::error::Result;
use crate::model::Person;
use crate::query::{
    CreateManyPersonArgs, CreateOnePersonArgs, DeleteManyPersonArgs, DeleteOnePersonArgs,
    FindManyPersonArgs, FindUniquePersonArgs, Predicate, PersonWhereInput, Selection,
    UpdateManyPersonArgs, UpdateOnePersonArgs,
};
use crate::storage::Repository;

#[derive(Clone)]
pub struct PeopleService {
    repo: Repository<Person>,
}

fn many_filter(filter: Option<&PersonWhereInput>) -> Predicate {
    filter
        .map(PersonWhereInput::predicate)
        .unwrap_or_else(Predicate::always)
}

impl PeopleService {
    pub fn new(repo: Repository<Person>) -> Self {
        Self { repo }
    }

    pub async fn find(&self, args: &FindUniquePersonArgs) -> Result<Option<Person>> {
        self.repo.find_unique(&args.filter.predicate()?).await
    }

    pub async fn find_all(&self) -> Result<Vec<Person>> {
        self.repo.find_many(&Selection::all()).await
    }

    pub async fn find_many(&self, args: &FindManyPersonArgs) -> Result<Vec<Person>> {
        self.repo.find_many(&args.selection()?).await
    }

    pub async fn create(&self, args: &CreateOnePersonArgs) -> Result<Person> {
        let values = args.data.values()?;
        self.repo.create(values, args.data.id.clone()).await
    }

    pub async fn create_many(&self, args: &CreateManyPersonArgs) -> Result<Vec<Person>> {
        let rows = args
            .data
            .iter()
            .map(|data| Ok((data.values()?, data.id.clone())))
            .collect::<Result<Vec<_>>>()?;
        self.repo.create_many(rows, args.skip_duplicates).await
    }

    pub async fn update(&self, args: &UpdateOnePersonArgs) -> Result<Person> {
        let filter = args.filter.predicate()?;
        self.repo.update(&filter, &args.data.assignments()?).await
    }

    pub async fn update_many(&self, args: &UpdateManyPersonArgs) -> Result<Vec<Person>> {
        let filter = many_filter(args.filter.as_ref());
        self.repo
            .update_many(&filter, &args.data.assignments()?)
            .await
    }

    pub async fn delete(&self, args: &DeleteOnePersonArgs) -> Result<()> {
        self.repo.delete(&args.filter.predicate()?).await?;
        Ok(())
    }

    pub async fn delete_many(&self, args: &DeleteManyPersonArgs) -> Result<()> {
        self.repo
            .delete_many(&many_filter(args.filter.as_ref()))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HolocronError;
    use crate::query::{
        NullableFloatFieldUpdateOperationsInput, PersonCreateInput, PersonOrderByInput,
        PersonUpdateInput, PersonWhereUniqueInput, SortOrder, StringFilter,
    };
    use crate::storage::Database;

    async fn service() -> PeopleService {
        let db = Database::in_memory().await.unwrap();
        PeopleService::new(db.people())
    }

    fn test_people(count: usize) -> CreateManyPersonArgs {
        CreateManyPersonArgs {
            data: (0..count)
                .map(|i| PersonCreateInput {
                    birth_year: Some(format!("{}BBY", 19 + i)),
                    eye_color: Some("blue".to_string()),
                    homeworld: Some("Tatooine".to_string()),
                    ..PersonCreateInput::named(format!("test-person-{i}")).with_mass(80.0 + i as f64)
                })
                .collect(),
            skip_duplicates: false,
        }
    }

    #[tokio::test]
    async fn test_find_by_name_and_id() {
        let service = service().await;
        let created = service.create_many(&test_people(3)).await.unwrap();

        let by_name = service
            .find(&FindUniquePersonArgs {
                filter: PersonWhereUniqueInput::name("test-person-1"),
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_name.eye_color.as_deref(), Some("blue"));

        let by_id = service
            .find(&FindUniquePersonArgs {
                filter: PersonWhereUniqueInput::id(created[2].id.clone()),
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_id.name, "test-person-2");
    }

    #[tokio::test]
    async fn test_find_missing_is_none() {
        let service = service().await;
        let found = service
            .find(&FindUniquePersonArgs {
                filter: PersonWhereUniqueInput::name("not-a-person"),
            })
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_with_empty_selector_is_validation_error() {
        let service = service().await;
        let err = service
            .find(&FindUniquePersonArgs::default())
            .await
            .unwrap_err();
        assert!(matches!(err, HolocronError::Validation(_)));
    }

    #[tokio::test]
    async fn test_find_all_and_empty_table() {
        let service = service().await;
        assert!(service.find_all().await.unwrap().is_empty());

        service.create_many(&test_people(5)).await.unwrap();
        assert_eq!(service.find_all().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_find_many_orders_and_pages() {
        let service = service().await;
        service.create_many(&test_people(5)).await.unwrap();

        let args = FindManyPersonArgs {
            filter: None,
            order_by: Some(vec![PersonOrderByInput {
                mass: Some(SortOrder::Desc),
                ..Default::default()
            }]),
            take: Some(2),
            skip: Some(1),
        };
        let page = service.find_many(&args).await.unwrap();
        let names: Vec<_> = page.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["test-person-3", "test-person-2"]);
    }

    #[tokio::test]
    async fn test_find_many_rejects_negative_take() {
        let service = service().await;
        let args = FindManyPersonArgs {
            take: Some(-1),
            ..Default::default()
        };
        let err = service.find_many(&args).await.unwrap_err();
        assert!(matches!(err, HolocronError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_duplicate_name_fails() {
        let service = service().await;
        let args = CreateOnePersonArgs {
            data: PersonCreateInput::named("Luke"),
        };
        service.create(&args).await.unwrap();

        let err = service.create(&args).await.unwrap_err();
        assert_eq!(err.violated_field(), Some("name"));
    }

    #[tokio::test]
    async fn test_update_then_update_many() {
        let service = service().await;
        let created = service.create_many(&test_people(3)).await.unwrap();

        let updated = service
            .update(&UpdateOnePersonArgs {
                filter: PersonWhereUniqueInput::id(created[0].id.clone()),
                data: PersonUpdateInput {
                    mass: Some(NullableFloatFieldUpdateOperationsInput::set(20.0)),
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        assert_eq!(updated.mass, Some(20.0));

        let all = service
            .update_many(&UpdateManyPersonArgs {
                filter: Some(PersonWhereInput {
                    homeworld: Some(StringFilter::equals("Tatooine")),
                    ..Default::default()
                }),
                data: PersonUpdateInput {
                    mass: Some(NullableFloatFieldUpdateOperationsInput {
                        increment: Some(1.0),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        let masses: Vec<_> = all.iter().filter_map(|p| p.mass).collect();
        assert_eq!(masses, vec![21.0, 82.0, 83.0]);
    }

    #[tokio::test]
    async fn test_update_missing_fails_with_not_found_for_update() {
        let service = service().await;
        let err = service
            .update(&UpdateOnePersonArgs {
                filter: PersonWhereUniqueInput::id("test-uuid"),
                data: PersonUpdateInput::default(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, HolocronError::NotFoundForUpdate));
    }

    #[tokio::test]
    async fn test_delete_and_delete_many() {
        let service = service().await;
        service.create_many(&test_people(3)).await.unwrap();

        service
            .delete(&DeleteOnePersonArgs {
                filter: PersonWhereUniqueInput::name("test-person-0"),
            })
            .await
            .unwrap();
        let err = service
            .delete(&DeleteOnePersonArgs {
                filter: PersonWhereUniqueInput::name("test-person-0"),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, HolocronError::NotFoundForDelete));

        service
            .delete_many(&DeleteManyPersonArgs {
                filter: Some(PersonWhereInput {
                    name: Some(StringFilter::equals("missing")),
                    ..Default::default()
                }),
            })
            .await
            .unwrap();
        assert_eq!(service.find_all().await.unwrap().len(), 2);

        service
            .delete_many(&DeleteManyPersonArgs::default())
            .await
            .unwrap();
        assert!(service.find_all().await.unwrap().is_empty());
    }
}
