mod error;
mod handlers;
mod state;

pub use state::ApiState;

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::core::CanopyError;
use crate::listing::ListingBuilder;
use crate::track::InflightTracker;

pub struct CanopyApi {
    state: Arc<ApiState>,
}

impl CanopyApi {
    pub fn new(builder: ListingBuilder, tracker: Arc<InflightTracker>) -> Self {
        Self {
            state: Arc::new(ApiState { builder, tracker }),
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/openapi.json", get(handlers::openapi))
            .route("/health", get(handlers::health))
            .route("/api/v1/list", get(handlers::list_root))
            .route("/api/v1/list/{*path}", get(handlers::list))
            .route("/debug/inflight", get(handlers::inflight))
            .layer(middleware::from_fn_with_state(
                self.state.clone(),
                handlers::track_request,
            ))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    pub async fn serve(self, addr: &str) -> Result<(), CanopyError> {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| CanopyError::IoError(format!("binding to {addr}: {e}")))?;
        axum::serve(listener, self.router())
            .await
            .map_err(|e| CanopyError::IoError(format!("serving: {e}")))?;
        Ok(())
    }
}
