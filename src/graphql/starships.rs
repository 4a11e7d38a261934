use std::sync::Arc;

use async_graphql::{Context, ErrorExtensions, Object};

use super::error::{ApiError, ApiResult};
use super::types::Starship;
use crate::error::HolocronError;
use crate::model;
use crate::query::{
    CreateManyStarshipArgs, CreateOneStarshipArgs, DeleteManyStarshipArgs, DeleteOneStarshipArgs,
    FindManyStarshipArgs, FindUniqueStarshipArgs, StarshipCreateInput, StarshipOrderByInput,
    StarshipUpdateInput, StarshipWhereInput, StarshipWhereUniqueInput, UpdateManyStarshipArgs,
    UpdateOneStarshipArgs,
};
use crate::service::StarshipsService;

/// Applies the API policy on top of [`StarshipsService`].
pub struct StarshipsResolver {
    service: StarshipsService,
}

impl StarshipsResolver {
    pub fn new(service: StarshipsService) -> Self {
        Self { service }
    }

    fn missing(filter: &StarshipWhereUniqueInput) -> ApiError {
        ApiError::missing("Starship", filter)
    }

    fn none_match(filter: Option<&StarshipWhereInput>) -> ApiError {
        ApiError::none_match("Starships", filter)
    }

    pub async fn find_starship(&self, args: FindUniqueStarshipArgs) -> ApiResult<model::Starship> {
        self.service
            .find(&args)
            .await?
            .ok_or_else(|| Self::missing(&args.filter))
    }

    pub async fn find_all_starships(&self) -> ApiResult<Vec<model::Starship>> {
        Ok(self.service.find_all().await?)
    }

    pub async fn find_many_starships(
        &self,
        args: FindManyStarshipArgs,
    ) -> ApiResult<Vec<model::Starship>> {
        let starships = self.service.find_many(&args).await?;
        if starships.is_empty() {
            return Err(Self::none_match(args.filter.as_ref()));
        }
        Ok(starships)
    }

    pub async fn create_starship(&self, args: CreateOneStarshipArgs) -> ApiResult<model::Starship> {
        self.service
            .create(&args)
            .await
            .map_err(|e| ApiError::from_write(e, false))
    }

    pub async fn create_many_starships(
        &self,
        args: CreateManyStarshipArgs,
    ) -> ApiResult<Vec<model::Starship>> {
        self.service
            .create_many(&args)
            .await
            .map_err(|e| ApiError::from_write(e, true))
    }

    pub async fn update_starship(&self, args: UpdateOneStarshipArgs) -> ApiResult<model::Starship> {
        self.service
            .update(&args)
            .await
            .map_err(|e| ApiError::from_write(e, false))
    }

    pub async fn update_many_starships(
        &self,
        args: UpdateManyStarshipArgs,
    ) -> ApiResult<Vec<model::Starship>> {
        let matching = FindManyStarshipArgs {
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

    pub async fn delete_starship(&self, args: DeleteOneStarshipArgs) -> ApiResult<()> {
        let lookup = FindUniqueStarshipArgs {
            filter: args.filter.clone(),
        };
        if self.service.find(&lookup).await?.is_none() {
            return Err(Self::missing(&args.filter));
        }
        match self.service.delete(&args).await {
            Err(HolocronError::NotFoundForDelete) => Err(Self::missing(&args.filter)),
            result => Ok(result?),
        }
    }

    pub async fn delete_many_starships(&self, args: DeleteManyStarshipArgs) -> ApiResult<()> {
        let matching = FindManyStarshipArgs {
            filter: args.filter.clone(),
            ..Default::default()
        };
        if self.service.find_many(&matching).await?.is_empty() {
            return Err(Self::none_match(args.filter.as_ref()));
        }
        Ok(self.service.delete_many(&args).await?)
    }
}

pub struct StarshipsQuery {
    resolver: Arc<StarshipsResolver>,
}

impl StarshipsQuery {
    pub fn new(resolver: Arc<StarshipsResolver>) -> Self {
        Self { resolver }
    }
}

#[Object]
impl StarshipsQuery {
    /// Get a single starship by id, name or model
    async fn find_starship(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "where")] filter: StarshipWhereUniqueInput,
    ) -> async_graphql::Result<Starship> {
        self.resolver
            .find_starship(FindUniqueStarshipArgs { filter })
            .await
            .map(Starship::from)
            .map_err(|e| e.with_request_where(ctx).extend())
    }

    async fn find_all_starships(&self) -> async_graphql::Result<Vec<Starship>> {
        self.resolver
            .find_all_starships()
            .await
            .map(|ships| ships.into_iter().map(Starship::from).collect())
            .map_err(|e| e.extend())
    }

    async fn find_many_starships(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "where")] filter: Option<StarshipWhereInput>,
        order_by: Option<Vec<StarshipOrderByInput>>,
        take: Option<i64>,
        skip: Option<i64>,
    ) -> async_graphql::Result<Vec<Starship>> {
        let args = FindManyStarshipArgs {
            filter,
            order_by,
            take,
            skip,
        };
        self.resolver
            .find_many_starships(args)
            .await
            .map(|ships| ships.into_iter().map(Starship::from).collect())
            .map_err(|e| e.with_request_where(ctx).extend())
    }
}

pub struct StarshipsMutation {
    resolver: Arc<StarshipsResolver>,
}

impl StarshipsMutation {
    pub fn new(resolver: Arc<StarshipsResolver>) -> Self {
        Self { resolver }
    }
}

#[Object]
impl StarshipsMutation {
    async fn create_starship(&self, data: StarshipCreateInput) -> async_graphql::Result<Starship> {
        self.resolver
            .create_starship(CreateOneStarshipArgs { data })
            .await
            .map(Starship::from)
            .map_err(|e| e.extend())
    }

    async fn create_many_starships(
        &self,
        data: Vec<StarshipCreateInput>,
        #[graphql(default)] skip_duplicates: bool,
    ) -> async_graphql::Result<Vec<Starship>> {
        let args = CreateManyStarshipArgs {
            data,
            skip_duplicates,
        };
        self.resolver
            .create_many_starships(args)
            .await
            .map(|ships| ships.into_iter().map(Starship::from).collect())
            .map_err(|e| e.extend())
    }

    async fn update_starship(
        &self,
        #[graphql(name = "where")] filter: StarshipWhereUniqueInput,
        data: StarshipUpdateInput,
    ) -> async_graphql::Result<Starship> {
        self.resolver
            .update_starship(UpdateOneStarshipArgs { filter, data })
            .await
            .map(Starship::from)
            .map_err(|e| e.extend())
    }

    async fn update_many_starships(
        &self,
        #[graphql(name = "where")] filter: Option<StarshipWhereInput>,
        data: StarshipUpdateInput,
    ) -> async_graphql::Result<Vec<Starship>> {
        self.resolver
            .update_many_starships(UpdateManyStarshipArgs { filter, data })
            .await
            .map(|ships| ships.into_iter().map(Starship::from).collect())
            .map_err(|e| e.extend())
    }

    async fn delete_starship(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "where")] filter: StarshipWhereUniqueInput,
    ) -> async_graphql::Result<bool> {
        self.resolver
            .delete_starship(DeleteOneStarshipArgs { filter })
            .await
            .map(|()| true)
            .map_err(|e| e.with_request_where(ctx).extend())
    }

    async fn delete_many_starships(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "where")] filter: Option<StarshipWhereInput>,
    ) -> async_graphql::Result<bool> {
        self.resolver
            .delete_many_starships(DeleteManyStarshipArgs { filter })
            .await
            .map(|()| true)
            .map_err(|e| e.with_request_where(ctx).extend())
    }
}
