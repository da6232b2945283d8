//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: wiring (currency registry, seeded store, selection service)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs and date parsing
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app() -> anyhow::Result<Router> {
    let services = Arc::new(services::build_services()?);

    Ok(Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(ServiceBuilder::new().layer(Extension(services))))
}
