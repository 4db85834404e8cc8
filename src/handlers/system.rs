//! Health and version handlers.

use crate::response::{MessageBody, UnhealthyBody};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "Store answered a ping", body = MessageBody),
        (status = 503, description = "Store ping failed", body = UnhealthyBody)
    )
)]
pub async fn health(
    State(state): State<AppState>,
) -> Result<Json<MessageBody>, (StatusCode, Json<UnhealthyBody>)> {
    if let Err(e) = state.books.ping().await {
        tracing::warn!(error = %e, "health check failed");
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(UnhealthyBody {
                message: "unhealthy".into(),
                error: e.to_string(),
            }),
        ));
    }
    Ok(Json(MessageBody {
        message: "healthy".into(),
    }))
}

pub async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
