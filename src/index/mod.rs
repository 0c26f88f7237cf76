mod memory;
mod range;

pub use memory::MemoryStore;
pub use range::{KeyBound, KeyRange};

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::core::CanopyError;

/// Aggregate over the sizes of every object sharing a grouped key.
///
/// Size fields travel as floats on the wire; consumers truncate where they
/// need byte counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    pub count: u64,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
}

/// One row of a grouped index query: the grouped key and the aggregate over
/// every object beneath it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexRow {
    pub key: Vec<String>,
    pub value: Aggregate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexParams {
    /// Number of leading key segments rows are bucketed by.
    pub group_level: usize,
    pub range: KeyRange,
}

/// Sorted range scan over segmented keys, aggregated at a group level.
/// Rows come back ordered by key.
#[async_trait]
pub trait GroupedIndex: Send + Sync {
    async fn query(
        &self,
        index: &str,
        params: &IndexParams,
    ) -> Result<Vec<IndexRow>, CanopyError>;
}

/// Multi-key point lookup. Keys with no stored object are absent from the
/// result, not an error.
#[async_trait]
pub trait BulkGet: Send + Sync {
    async fn get_bulk(&self, keys: &[String]) -> Result<HashMap<String, Bytes>, CanopyError>;
}
