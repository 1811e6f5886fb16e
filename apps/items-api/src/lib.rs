//! Items API service
//!
//! `POST /items` and `GET /items/{id}` over an in-memory store, plus
//! `/health` and the OpenAPI document.

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;
use axum_helpers::server::{create_router, health_router};

use state::AppState;

/// Build the full application router for the given state
pub fn app(state: &AppState) -> Router {
    let routes = api::routes(state).merge(health_router(state.config.app));
    create_router::<openapi::ApiDoc>(routes)
}
