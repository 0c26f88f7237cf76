use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::index::Aggregate;

/// Stored file metadata, republished verbatim from the storage layer.
pub type FileRecord = serde_json::Map<String, serde_json::Value>;

/// Derived statistics for a synthetic directory: what the grouped index
/// reports for every object beneath the prefix. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirAggregate {
    pub descendants: u64,
    pub size: i64,
    pub smallest: i64,
    pub largest: i64,
}

impl From<&Aggregate> for DirAggregate {
    fn from(agg: &Aggregate) -> Self {
        Self {
            descendants: agg.count,
            size: agg.sum as i64,
            smallest: agg.min as i64,
            largest: agg.max as i64,
        }
    }
}

/// One level of the synthesized hierarchy under a path. A name appears in
/// `files` or `dirs`, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub path: String,
    pub files: BTreeMap<String, FileRecord>,
    pub dirs: BTreeMap<String, DirAggregate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_sizes_truncate_to_bytes() {
        let agg = Aggregate {
            count: 3,
            sum: 65.9,
            min: 5.2,
            max: 30.7,
        };
        assert_eq!(
            DirAggregate::from(&agg),
            DirAggregate {
                descendants: 3,
                size: 65,
                smallest: 5,
                largest: 30,
            }
        );
    }
}
