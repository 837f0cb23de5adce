pub mod extractors;
pub mod headers;
