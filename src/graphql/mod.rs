//! GraphQL API for people and starships.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! holocron serve --port 3000
//!
//! # Execute a query from CLI
//! holocron query '{ findManyPeople(where: { mass: { gte: 80 } }) { id name } }'
//!
//! # Execute a mutation from CLI
//! holocron mutate 'createPerson(data: { name: "Luke" }) { id }'
//! ```
//!
//! ## Schema
//!
//! Per entity (`Person`/`People`, `Starship`/`Starships`):
//!
//! - **Queries**: `findPerson`, `findAllPeople`, `findManyPeople`
//! - **Mutations**: `createPerson`, `createManyPeople`, `updatePerson`,
//!   `updateManyPeople`, `deletePerson`, `deleteManyPeople`
//!
//! Errors carry `extensions.code` (`NOT_FOUND`, `BAD_REQUEST`,
//! `INTERNAL_SERVER_ERROR`) and a matching `extensions.status`.

mod error;
mod people;
mod schema;
mod server;
mod starships;
mod types;

pub use error::{ApiError, ApiResult};
pub use people::PeopleResolver;
pub use schema::{HolocronSchema, MutationRoot, QueryRoot, build_schema};
pub use server::run_server;
pub use starships::StarshipsResolver;
pub use types::*;
