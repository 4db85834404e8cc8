//! Route tables and the assembled application router.

mod boarding;
mod books;
mod common;

pub use boarding::boarding_routes;
pub use books::book_routes;
pub use common::common_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

pub const API_PREFIX: &str = "/api/v1";

/// Request bodies above this size are rejected.
pub const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Full service: common routes at the root, resources under `/api/v1`, any origin allowed.
pub fn app_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(book_routes(state.clone()))
        .merge(boarding_routes(state.clone()));

    Router::new()
        .merge(common_routes(state))
        .nest(API_PREFIX, api)
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
