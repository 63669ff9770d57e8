//! Single entity state handler

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::api::AppState;
use crate::error::AppError;

/// GET /api/state/:entity_id - Relay one entity's state from the hub
pub async fn get_entity_state(
    State(state): State<AppState>,
    Path(entity_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let entity = state.hass()?.get_state(&entity_id).await.map_err(|e| {
        tracing::error!("Error fetching state for {}: {}", entity_id, e);
        e
    })?;

    Ok(Json(entity))
}
