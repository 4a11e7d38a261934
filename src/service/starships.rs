use crate::error::Result;
use crate::model::Starship;
use crate::query::{
    CreateManyStarshipArgs, CreateOneStarshipArgs, DeleteManyStarshipArgs, DeleteOneStarshipArgs,
    FindManyStarshipArgs, FindUniqueStarshipArgs, Predicate, Selection, StarshipWhereInput,
    UpdateManyStarshipArgs, UpdateOneStarshipArgs,
};
use crate::storage::Repository;

#[derive(Clone)]
pub struct StarshipsService {
    repo: Repository<Starship>,
}

fn many_filter(filter: Option<&StarshipWhereInput>) -> Predicate {
    filter
        .map(StarshipWhereInput::predicate)
        .unwrap_or_else(Predicate::always)
}

impl StarshipsService {
    pub fn new(repo: Repository<Starship>) -> Self {
        Self { repo }
    }

    pub async fn find(&self, args: &FindUniqueStarshipArgs) -> Result<Option<Starship>> {
        self.repo.find_unique(&args.filter.predicate()?).await
    }

    pub async fn find_all(&self) -> Result<Vec<Starship>> {
        self.repo.find_many(&Selection::all()).await
    }

    pub async fn find_many(&self, args: &FindManyStarshipArgs) -> Result<Vec<Starship>> {
        self.repo.find_many(&args.selection()?).await
    }

    pub async fn create(&self, args: &CreateOneStarshipArgs) -> Result<Starship> {
        let values = args.data.values()?;
        self.repo.create(values, args.data.id.clone()).await
    }

    pub async fn create_many(&self, args: &CreateManyStarshipArgs) -> Result<Vec<Starship>> {
        let rows = args
            .data
            .iter()
            .map(|data| Ok((data.values()?, data.id.clone())))
            .collect::<Result<Vec<_>>>()?;
        self.repo.create_many(rows, args.skip_duplicates).await
    }

    pub async fn update(&self, args: &UpdateOneStarshipArgs) -> Result<Starship> {
        let filter = args.filter.predicate()?;
        self.repo.update(&filter, &args.data.assignments()?).await
    }

    pub async fn update_many(&self, args: &UpdateManyStarshipArgs) -> Result<Vec<Starship>> {
        let filter = many_filter(args.filter.as_ref());
        self.repo
            .update_many(&filter, &args.data.assignments()?)
            .await
    }

    pub async fn delete(&self, args: &DeleteOneStarshipArgs) -> Result<()> {
        self.repo.delete(&args.filter.predicate()?).await?;
        Ok(())
    }

    pub async fn delete_many(&self, args: &DeleteManyStarshipArgs) -> Result<()> {
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
    use crate::model::StarshipClass;
    use crate::query::{
        IntFieldUpdateOperationsInput, IntFilter, NullableStarshipClassFieldUpdateOperationsInput,
        StarshipClassFilter, StarshipCreateInput, StarshipUpdateInput, StarshipWhereUniqueInput,
        StringFieldUpdateOperationsInput, StringFilter,
    };
    use crate::storage::Database;
    use async_graphql::MaybeUndefined;

    async fn service() -> StarshipsService {
        let db = Database::in_memory().await.unwrap();
        StarshipsService::new(db.starships())
    }

    fn test_starships(count: usize) -> CreateManyStarshipArgs {
        CreateManyStarshipArgs {
            data: (0..count)
                .map(|i| StarshipCreateInput {
                    starship_class: Some(if i % 2 == 0 {
                        StarshipClass::Fighter
                    } else {
                        StarshipClass::Transporter
                    }),
                    max_speed: Some(1000 + i as i64),
                    ..StarshipCreateInput::new(format!("s{i}"), i as i64 + 1)
                        .with_model(format!("model-{i}"))
                })
                .collect(),
            skip_duplicates: false,
        }
    }

    #[tokio::test]
    async fn test_find_by_model() {
        let service = service().await;
        service.create_many(&test_starships(3)).await.unwrap();

        let found = service
            .find(&FindUniqueStarshipArgs {
                filter: StarshipWhereUniqueInput {
                    model: Some("model-1".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.name, "s1");
        assert_eq!(found.starship_class, Some(StarshipClass::Transporter));
    }

    #[tokio::test]
    async fn test_find_many_or_filter_matches_exactly_two() {
        let service = service().await;
        service.create_many(&test_starships(5)).await.unwrap();

        let args = FindManyStarshipArgs::filtered(StarshipWhereInput {
            or: Some(vec![
                StarshipWhereInput {
                    name: Some(StringFilter::equals("s0")),
                    ..Default::default()
                },
                StarshipWhereInput {
                    name: Some(StringFilter::equals("s1")),
                    ..Default::default()
                },
            ]),
            ..Default::default()
        });
        assert_eq!(service.find_many(&args).await.unwrap().len(), 2);

        let none = FindManyStarshipArgs::filtered(StarshipWhereInput {
            name: Some(StringFilter::equals("no-such-ship")),
            ..Default::default()
        });
        assert!(service.find_many(&none).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_many_by_class_and_crew() {
        let service = service().await;
        service.create_many(&test_starships(5)).await.unwrap();

        let args = FindManyStarshipArgs::filtered(StarshipWhereInput {
            starship_class: Some(StarshipClassFilter {
                equals: MaybeUndefined::Value(StarshipClass::Fighter),
                ..Default::default()
            }),
            crew_members: Some(IntFilter {
                gte: Some(3),
                ..Default::default()
            }),
            ..Default::default()
        });
        let names: Vec<_> = service
            .find_many(&args)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["s2", "s4"]);
    }

    #[tokio::test]
    async fn test_create_duplicate_model_fails() {
        let service = service().await;
        service
            .create(&CreateOneStarshipArgs {
                data: StarshipCreateInput::new("Falcon", 4).with_model("YT-1300"),
            })
            .await
            .unwrap();

        let err = service
            .create(&CreateOneStarshipArgs {
                data: StarshipCreateInput::new("Outrider", 2).with_model("YT-1300"),
            })
            .await
            .unwrap_err();
        assert_eq!(err.violated_field(), Some("model"));
    }

    #[tokio::test]
    async fn test_create_many_skip_duplicates() {
        let service = service().await;
        service.create_many(&test_starships(2)).await.unwrap();

        let args = CreateManyStarshipArgs {
            skip_duplicates: true,
            ..test_starships(4)
        };
        let created = service.create_many(&args).await.unwrap();
        let names: Vec<_> = created.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["s2", "s3"]);
    }

    #[tokio::test]
    async fn test_update_clears_class_and_increments_crew() {
        let service = service().await;
        service.create_many(&test_starships(1)).await.unwrap();

        let updated = service
            .update(&UpdateOneStarshipArgs {
                filter: StarshipWhereUniqueInput::name("s0"),
                data: StarshipUpdateInput {
                    starship_class: Some(NullableStarshipClassFieldUpdateOperationsInput {
                        set: MaybeUndefined::Null,
                    }),
                    crew_members: Some(IntFieldUpdateOperationsInput {
                        increment: Some(2),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        assert_eq!(updated.starship_class, None);
        assert_eq!(updated.crew_members, 3);
    }

    #[tokio::test]
    async fn test_update_into_taken_name_fails() {
        let service = service().await;
        service.create_many(&test_starships(2)).await.unwrap();

        let err = service
            .update(&UpdateOneStarshipArgs {
                filter: StarshipWhereUniqueInput::name("s0"),
                data: StarshipUpdateInput {
                    name: Some(StringFieldUpdateOperationsInput {
                        set: Some("s1".to_string()),
                    }),
                    ..Default::default()
                },
            })
            .await
            .unwrap_err();
        assert_eq!(err.violated_field(), Some("name"));
    }

    #[tokio::test]
    async fn test_update_many_without_match_is_empty() {
        let service = service().await;
        service.create_many(&test_starships(2)).await.unwrap();

        let updated = service
            .update_many(&UpdateManyStarshipArgs {
                filter: Some(StarshipWhereInput {
                    name: Some(StringFilter::equals("missing")),
                    ..Default::default()
                }),
                data: StarshipUpdateInput {
                    crew_members: Some(IntFieldUpdateOperationsInput {
                        set: Some(10),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        assert!(updated.is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_fails() {
        let service = service().await;
        let err = service
            .delete(&DeleteOneStarshipArgs {
                filter: StarshipWhereUniqueInput::id("test-uuid"),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, HolocronError::NotFoundForDelete));
    }
}
