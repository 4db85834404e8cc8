//! Boarding lookups over the seeded list.

use crate::model::Boarding;
use crate::response::{message, MessageBody};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BoardingByNameParams {
    /// Exact pet name. Omit to list every record.
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BoardingByIdParams {
    /// Exact boarding id.
    pub id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/boarding",
    tag = "Boarding",
    params(BoardingByNameParams),
    responses((status = 200, description = "Matching records, possibly none", body = [Boarding]))
)]
pub async fn list_boardings(
    State(state): State<AppState>,
    Query(params): Query<BoardingByNameParams>,
) -> Json<Vec<Boarding>> {
    let rows = match params.name.as_deref().filter(|s| !s.is_empty()) {
        Some(name) => state.boardings.by_pet_name(name).await,
        None => state.boardings.all().await,
    };
    Json(rows)
}

/// An unknown id still answers 200 with an empty array; only a missing id is a 404.
#[utoipa::path(
    get,
    path = "/api/v1/boardingbyid",
    tag = "Boarding",
    params(BoardingByIdParams),
    responses(
        (status = 200, description = "Matching records, possibly none", body = [Boarding]),
        (status = 404, description = "No id given", body = MessageBody)
    )
)]
pub async fn boarding_by_id(
    State(state): State<AppState>,
    Query(params): Query<BoardingByIdParams>,
) -> Response {
    let id = params.id.unwrap_or_default();
    if id.is_empty() {
        return message(StatusCode::NOT_FOUND, format!("No boarding found with ID {}", id)).into_response();
    }
    Json(state.boardings.by_id(&id).await).into_response()
}
