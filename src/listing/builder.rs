use std::collections::BTreeMap;
use std::sync::Arc;

use log::warn;

use crate::conf::ListingConfig;
use crate::core::CanopyError;
use crate::index::{BulkGet, GroupedIndex, IndexParams, KeyRange};

use super::{DirAggregate, FileRecord, Listing};

/// Synthesizes one level of directory hierarchy from the flat key namespace.
///
/// No directory objects exist in storage. The grouped index buckets every
/// key under the requested path at `len(path) + depth` segments; a bulk get
/// over the bucket keys then tells files (stored objects) apart from
/// directories (buckets with no object of their own). Classification depends
/// only on bulk-get membership; `depth` shapes display names.
pub struct ListingBuilder {
    index: Arc<dyn GroupedIndex>,
    store: Arc<dyn BulkGet>,
    conf: ListingConfig,
}

impl ListingBuilder {
    pub fn new(
        index: Arc<dyn GroupedIndex>,
        store: Arc<dyn BulkGet>,
        conf: ListingConfig,
    ) -> Self {
        Self { index, store, conf }
    }

    pub fn default_depth(&self) -> usize {
        self.conf.default_depth
    }

    /// Build the listing under `path`, naming children by their last
    /// `depth` segments. A depth of zero is clamped to one.
    pub async fn build(
        &self,
        path: &str,
        include_meta: bool,
        depth: usize,
    ) -> Result<Listing, CanopyError> {
        let depth = depth.max(1);
        let start_key = split_path(path);

        let params = IndexParams {
            group_level: start_key.len() + depth,
            range: KeyRange::prefix(&start_key),
        };
        let rows = self.index.query(&self.conf.index, &params).await?;

        let keys: Vec<String> = rows.iter().map(|r| r.key.join("/")).collect();
        let stored = self.store.get_bulk(&keys).await?;

        let mut files = BTreeMap::new();
        let mut dirs = BTreeMap::new();
        for (row, key) in rows.iter().zip(&keys) {
            let name = display_name(&row.key, depth);
            match stored.get(key) {
                Some(payload) => match serde_json::from_slice::<FileRecord>(payload) {
                    Ok(meta) => {
                        let meta = if include_meta { meta } else { FileRecord::new() };
                        files.insert(name, meta);
                    }
                    Err(err) => {
                        warn!("dropping entry {key}: undecodable metadata: {err}");
                    }
                },
                None => {
                    // No stored object at the grouped key, so the row is a
                    // synthetic directory bucket.
                    dirs.insert(name, DirAggregate::from(&row.value));
                }
            }
        }

        Ok(Listing {
            path: format!("/{path}"),
            files,
            dirs,
        })
    }
}

fn split_path(path: &str) -> Vec<String> {
    if path.is_empty() {
        Vec::new()
    } else {
        path.split('/').map(str::to_string).collect()
    }
}

/// Last `depth` segments of the key joined by `/`, or the whole key when it
/// has fewer.
fn display_name(key: &[String], depth: usize) -> String {
    let tail = if key.len() > depth {
        &key[key.len() - depth..]
    } else {
        key
    };
    tail.join("/")
}
