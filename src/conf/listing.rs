use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ListingConfig {
    /// Name of the grouped index the builder queries.
    #[serde(default = "ListingConfig::default_index")]
    pub index: String,
    /// Listing depth applied when a request does not ask for one.
    #[serde(default = "ListingConfig::default_depth")]
    pub default_depth: usize,
}

impl ListingConfig {
    fn default_index() -> String {
        String::from("file_browse")
    }

    fn default_depth() -> usize {
        1
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            index: Self::default_index(),
            default_depth: Self::default_depth(),
        }
    }
}
