//! Typed operation arguments and the filter grammar.
//!
//! Every operation takes an explicit argument struct (`FindManyPersonArgs`,
//! `UpdateOneStarshipArgs`, ...). Their `where`/`data`/`orderBy` inputs are
//! GraphQL input objects that compile into the backend-neutral types in
//! [`predicate`], which the storage layer renders into SQL.
//!
//! ## Filter grammar
//!
//! ```graphql
//! { OR: [{ name: { equals: "s0" } }, { name: { startsWith: "X-" } }],
//!   crewMembers: { gte: 2 } }
//! ```
//!
//! An explicit `null` is significant: `{ model: { equals: null } }` matches
//! starships without a model, while an omitted operator matches everything.
//!
//! ## Update grammar
//!
//! ```graphql
//! { mass: { set: 20 }, homeworld: { set: null }, crewMembers: { increment: 1 } }
//! ```

pub mod filter;
pub mod person;
pub mod predicate;
pub mod starship;

pub use filter::*;
pub use person::*;
pub use predicate::{Assignment, Direction, Ordering, Predicate, Selection, SqlValue, Values};
pub use starship::*;
