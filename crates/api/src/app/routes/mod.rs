use axum::Router;

pub mod prices;
pub mod system;

/// Router for the versioned API surface.
pub fn router() -> Router {
    Router::new().nest("/api/v1/prices", prices::router())
}
