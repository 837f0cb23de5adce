//! Row shapes of the catalog tables, as returned by the data store.
//!
//! Each table module carries its table name, the `Model` for a full row, and
//! the narrower projections (with the matching `select` string) that the
//! pages request.

mod embedded;

pub mod episode;
pub mod season;
pub mod show;
pub mod video;

pub use embedded::Embedded;
