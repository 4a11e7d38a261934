use std::sync::Arc;

use async_graphql::{Context, ErrorExtensions, Object};

use super::error::{ApiError, ApiResult};
use super::types::Person;
use crate::error::HolocronError;
use crate::model;
use crate::query::{
    CreateManyPersonArgs, CreateOnePersonArgs, DeleteManyPersonArgs, DeleteOnePersonArgs,
    FindManyPersonArgs, FindUniquePersonArgs, PersonCreateInput, PersonOrderByInput,
    PersonUpdateInput, PersonWhereInput, PersonWhereUniqueInput, UpdateManyPersonArgs,
    UpdateOnePersonArgs,
};
use crate::service::PeopleService;

/// Applies the API policy on top of [`PeopleService`]: emptiness becomes
/// NotFound and write failures are classified for the client.
pub struct PeopleResolver {
    service: PeopleService,
}

impl PeopleResolver {
    pub fn new(service: PeopleService) -> Self {
        Self { service }
    }

    pub async fn find_person(&self, args: FindUniquePersonArgs) -> ApiResult<model::Person> {
        self.service
            .find(&args)
            .await?
            .ok_or_else(|| ApiError::missing("Person", &args.filter))
    }

    pub async fn find_all_people(&self) -> ApiResult<Vec<model::Person>> {
        Ok(self.service.find_all().await?)
    }

    pub async fn find_many_people(&self, args: FindManyPersonArgs) -> ApiResult<Vec<model::Person>> {
        let people = self.service.find_many(&args).await?;
        if people.is_empty() {
            return Err(ApiError::none_match("People", args.filter.as_ref()));
        }
        Ok(people)
    }

    pub async fn create_person(&self, args: CreateOnePersonArgs) -> ApiResult<model::Person> {
        self.service
            .create(&args)
            .await
            .map_err(|e| ApiError::from_write(e, false))
    }

    pub async fn create_many_people(
        &self,
        args: CreateManyPersonArgs,
    ) -> ApiResult<Vec<model::Person>> {
        self.service
            .create_many(&args)
            .await
            .map_err(|e| ApiError::from_write(e, true))
    }

    pub async fn update_person(&self, args: UpdateOnePersonArgs) -> ApiResult<model::Person> {
        self.service
            .update(&args)
            .await
            .map_err(|e| ApiError::from_write(e, false))
    }

    pub async fn update_many_people(
        &self,
        args: UpdateManyPersonArgs,
    ) -> ApiResult<Vec<model::Person>> {
        let matching = FindManyPersonArgs {
            filter: args.filter.clone(),
            ..Default::default()
        };
        if self.service.find_many(&matching).await?.is_empty() {
            return Err(ApiError::NotFound(
                "No records were found for an update.".to_string(),
            ));
        }
        self.service
            .update_many(&args)
            .await
            .map_err(|e| ApiError::from_write(e, true))
    }

    pub async fn delete_person(&self, args: DeleteOnePersonArgs) -> ApiResult<()> {
        let not_found = || ApiError::missing("Person", &args.filter);
        let lookup = FindUniquePersonArgs {
            filter: args.filter.clone(),
        };
        if self.service.find(&lookup).await?.is_none() {
            return Err(not_found());
        }
        match self.service.delete(&args).await {
            Err(HolocronError::NotFoundForDelete) => Err(not_found()),
            result => Ok(result?),
        }
    }

    pub async fn delete_many_people(&self, args: DeleteManyPersonArgs) -> ApiResult<()> {
        let matching = FindManyPersonArgs {
            filter: args.filter.clone(),
            ..Default::default()
        };
        if self.service.find_many(&matching).await?.is_empty() {
            return Err(ApiError::none_match("People", args.filter.as_ref()));
        }
        Ok(self.service.delete_many(&args).await?)
    }
}

pub struct PeopleQuery {
    resolver: Arc<PeopleResolver>,
}

impl PeopleQuery {
    pub fn new(resolver: Arc<PeopleResolver>) -> Self {
        Self { resolver }
    }
}

#[Object]
impl PeopleQuery {
    /// Get a single person by id or name
    async fn find_person(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "where")] filter: PersonWhereUniqueInput,
    ) -> async_graphql::Result<Person> {
        let args = FindUniquePersonArgs { filter };
        self.resolver
            .find_person(args)
            .await
            .map(Person::from)
            .map_err(|e| e.with_request_where(ctx).extend())
    }

    /// List every person
    async fn find_all_people(&self) -> async_graphql::Result<Vec<Person>> {
        self.resolver
            .find_all_people()
            .await
            .map(|people| people.into_iter().map(Person::from).collect())
            .map_err(|e| e.extend())
    }

    /// List people matching a filter; fails when nothing matches
    async fn find_many_people(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "where")] filter: Option<PersonWhereInput>,
        order_by: Option<Vec<PersonOrderByInput>>,
        take: Option<i64>,
        skip: Option<i64>,
    ) -> async_graphql::Result<Vec<Person>> {
        let args = FindManyPersonArgs {
            filter,
            order_by,
            take,
            skip,
        };
        self.resolver
            .find_many_people(args)
            .await
            .map(|people| people.into_iter().map(Person::from).collect())
            .map_err(|e| e.with_request_where(ctx).extend())
    }
}

pub struct PeopleMutation {
    resolver: Arc<PeopleResolver>,
}

impl PeopleMutation {
    pub fn new(resolver: Arc<PeopleResolver>) -> Self {
        Self { resolver }
    }
}

#[Object]
impl PeopleMutation {
    async fn create_person(&self, data: PersonCreateInput) -> async_graphql::Result<Person> {
        self.resolver
            .create_person(CreateOnePersonArgs { data })
            .await
            .map(Person::from)
            .map_err(|e| e.extend())
    }

    /// Create several people at once; all or nothing unless `skipDuplicates`
    async fn create_many_people(
        &self,
        data: Vec<PersonCreateInput>,
        #[graphql(default)] skip_duplicates: bool,
    ) -> async_graphql::Result<Vec<Person>> {
        let args = CreateManyPersonArgs {
            data,
            skip_duplicates,
        };
        self.resolver
            .create_many_people(args)
            .await
            .map(|people| people.into_iter().map(Person::from).collect())
            .map_err(|e| e.extend())
    }

    async fn update_person(
        &self,
        #[graphql(name = "where")] filter: PersonWhereUniqueInput,
        data: PersonUpdateInput,
    ) -> async_graphql::Result<Person> {
        self.resolver
            .update_person(UpdateOnePersonArgs { filter, data })
            .await
            .map(Person::from)
            .map_err(|e| e.extend())
    }

    async fn update_many_people(
        &self,
        #[graphql(name = "where")] filter: Option<PersonWhereInput>,
        data: PersonUpdateInput,
    ) -> async_graphql::Result<Vec<Person>> {
        self.resolver
            .update_many_people(UpdateManyPersonArgs { filter, data })
            .await
            .map(|people| people.into_iter().map(Person::from).collect())
            .map_err(|e| e.extend())
    }

    async fn delete_person(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "where")] filter: PersonWhereUniqueInput,
    ) -> async_graphql::Result<bool> {
        self.resolver
            .delete_person(DeleteOnePersonArgs { filter })
            .await
            .map(|()| true)
            .map_err(|e| e.with_request_where(ctx).extend())
    }

    async fn delete_many_people(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "where")] filter: Option<PersonWhereInput>,
    ) -> async_graphql::Result<bool> {
        self.resolver
            .delete_many_people(DeleteManyPersonArgs { filter })
            .await
            .map(|()| true)
            .map_err(|e| e.with_request_where(ctx).extend())
    }
}
