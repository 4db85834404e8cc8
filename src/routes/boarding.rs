//! Boarding query routes, mounted under `/api/v1`.

use crate::handlers::boarding::{boarding_by_id, list_boardings};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn boarding_routes(state: AppState) -> Router {
    Router::new()
        .route("/boarding", get(list_boardings))
        .route("/boardingbyid", get(boarding_by_id))
        .with_state(state)
}
