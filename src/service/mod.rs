//! Per-entity services.
//!
//! A service turns typed operation arguments into storage calls and hands
//! back models or tagged [`HolocronError`](crate::error::HolocronError)s.
//! It does not interpret emptiness; that policy lives in the GraphQL layer.

mod people;
mod starships;

pub use people::PeopleService;
pub use starships::StarshipsService;
