use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use crate::core::CanopyError;

use super::{Aggregate, BulkGet, GroupedIndex, IndexParams, IndexRow};

#[derive(Debug, Clone)]
struct StoredObject {
    size: u64,
    payload: Bytes,
}

/// In-memory backend implementing both collaborator contracts.
///
/// Backs the unit tests and the development server. The grouped query folds
/// object sizes the same way the production index reduces them, so listing
/// behavior is identical against either backend.
#[derive(Default)]
pub struct MemoryStore {
    objects: RwLock<BTreeMap<Vec<String>, StoredObject>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an object under a slash-delimited path.
    pub async fn put(&self, path: &str, size: u64, payload: impl Into<Bytes>) {
        let mut objects = self.objects.write().await;
        objects.insert(
            split_key(path),
            StoredObject {
                size,
                payload: payload.into(),
            },
        );
    }

    pub async fn remove(&self, path: &str) {
        self.objects.write().await.remove(&split_key(path));
    }

    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

fn split_key(path: &str) -> Vec<String> {
    path.split('/').map(str::to_string).collect()
}

#[async_trait]
impl GroupedIndex for MemoryStore {
    async fn query(
        &self,
        _index: &str,
        params: &IndexParams,
    ) -> Result<Vec<IndexRow>, CanopyError> {
        let objects = self.objects.read().await;

        // BTreeMap keeps groups in key order, matching the sorted scan.
        let mut groups: BTreeMap<Vec<String>, Aggregate> = BTreeMap::new();
        for (key, obj) in objects.iter() {
            if !params.range.contains(key) {
                continue;
            }
            let group: Vec<String> = key.iter().take(params.group_level).cloned().collect();
            let size = obj.size as f64;
            groups
                .entry(group)
                .and_modify(|agg| {
                    agg.count += 1;
                    agg.sum += size;
                    agg.min = agg.min.min(size);
                    agg.max = agg.max.max(size);
                })
                .or_insert(Aggregate {
                    count: 1,
                    sum: size,
                    min: size,
                    max: size,
                });
        }

        Ok(groups
            .into_iter()
            .map(|(key, value)| IndexRow { key, value })
            .collect())
    }
}

#[async_trait]
impl BulkGet for MemoryStore {
    async fn get_bulk(&self, keys: &[String]) -> Result<HashMap<String, Bytes>, CanopyError> {
        let objects = self.objects.read().await;
        let mut found = HashMap::with_capacity(keys.len());
        for key in keys {
            if let Some(obj) = objects.get(&split_key(key)) {
                found.insert(key.clone(), obj.payload.clone());
            }
        }
        Ok(found)
    }
}
