use std::sync::Arc;

use crate::listing::ListingBuilder;
use crate::track::InflightTracker;

/// Shared application state for HTTP handlers.
pub struct ApiState {
    pub builder: ListingBuilder,
    pub tracker: Arc<InflightTracker>,
}
