//! Test utilities.
//!
//! This module is only available when the `testutil` feature is enabled.

use async_trait::async_trait;
use serde_json::json;

use crate::core::CanopyError;
use crate::index::{GroupedIndex, IndexParams, IndexRow, MemoryStore};

/// JSON metadata payload in the shape stored alongside file objects.
pub fn file_meta(size: u64) -> Vec<u8> {
    serde_json::to_vec(&json!({
        "length": size,
        "ctype": "application/octet-stream",
    }))
    .unwrap()
}

/// Memory store seeded with `(path, size)` files carrying well-formed
/// metadata payloads.
pub async fn seeded_store(files: &[(&str, u64)]) -> MemoryStore {
    let store = MemoryStore::new();
    for (path, size) in files {
        store.put(path, *size, file_meta(*size)).await;
    }
    store
}

/// Grouped index whose every query fails, for error-propagation tests.
pub struct FailingIndex;

#[async_trait]
impl GroupedIndex for FailingIndex {
    async fn query(
        &self,
        _index: &str,
        _params: &IndexParams,
    ) -> Result<Vec<IndexRow>, CanopyError> {
        Err(CanopyError::IndexError("index unavailable".to_string()))
    }
}
