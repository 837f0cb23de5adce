//! Catalog reads and the view models the pages render.

mod error;
mod macros;
mod query;

pub mod episodes;
pub mod shows;
pub mod store;
pub mod videos;

#[cfg(test)]
mod testing;

pub use error::FetchError;
pub use query::QueryState;
pub use store::{CatalogStore, VideoOrder, VideoQuery, VideoScope};
