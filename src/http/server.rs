//! HTTP server setup for the in-memory backend.
//!
//! # Responsibilities
//! - Create the Axum Router for the `/foods` resource
//! - Wire up middleware (timeout, body limit, request ID, tracing)
//! - Serve until the shutdown signal fires

use std::time::Duration;

use axum::{
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::http::handlers::*;
use crate::lifecycle::shutdown;
use crate::store::FoodStore;

/// HTTP server exposing a [`FoodStore`] as a REST resource.
pub struct HttpServer {
    router: Router,
    store: FoodStore,
}

impl HttpServer {
    pub fn new(config: &ServerConfig, store: FoodStore) -> Self {
        let router = Self::build_router(config, store.clone());
        Self { router, store }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, store: FoodStore) -> Router {
        Router::new()
            .route("/health", get(get_health))
            .route("/foods", get(list_foods).post(create_food))
            .route(
                "/foods/{id}",
                get(get_food).put(update_food).delete(delete_food),
            )
            .with_state(store)
            .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn store(&self) -> &FoodStore {
        &self.store
    }

    /// Run the server until `stop` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        stop: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            foods = self.store.len(),
            "Food API listening"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(stop))
            .await?;

        tracing::info!("Food API stopped");
        Ok(())
    }
}
