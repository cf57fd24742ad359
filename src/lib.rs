#![doc = include_str!("../README.md")]

mod error;
pub mod geodesic;
pub mod kdtree;
pub mod project;
mod reverse;
mod r#type;

pub use error::{Result, RevGeoError};
pub use r#type::IndexScalar;
pub use reverse::{LocatedRecord, ReverseGeocoder, SearchResult};

#[cfg(test)]
pub(crate) mod test;
