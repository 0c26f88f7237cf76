mod builder;
mod types;

pub use builder::ListingBuilder;
pub use types::{DirAggregate, FileRecord, Listing};
