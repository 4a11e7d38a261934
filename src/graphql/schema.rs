use std::sync::Arc;

use async_graphql::{EmptySubscription, MergedObject, Schema};

use super::people::{PeopleMutation, PeopleQuery, PeopleResolver};
use super::starships::{StarshipsMutation, StarshipsQuery, StarshipsResolver};
use crate::service::{PeopleService, StarshipsService};
use crate::storage::Database;

pub type HolocronSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

#[derive(MergedObject)]
pub struct QueryRoot(PeopleQuery, StarshipsQuery);

#[derive(MergedObject)]
pub struct MutationRoot(PeopleMutation, StarshipsMutation);

/// Wires repositories, services and resolvers for both entities into one
/// schema.
pub fn build_schema(db: &Database) -> HolocronSchema {
    let people = Arc::new(PeopleResolver::new(PeopleService::new(db.people())));
    let starships = Arc::new(StarshipsResolver::new(StarshipsService::new(
        db.starships(),
    )));

    Schema::build(
        QueryRoot(
            PeopleQuery::new(people.clone()),
            StarshipsQuery::new(starships.clone()),
        ),
        MutationRoot(PeopleMutation::new(people), StarshipsMutation::new(starships)),
        EmptySubscription,
    )
    .finish()
}
