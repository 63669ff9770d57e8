//! Connection status handler

use axum::{extract::State, response::IntoResponse, Json};

use crate::api::AppState;
use crate::models::ConnectionStatus;

/// GET /api/status - Probe hub connectivity
///
/// The dashboard polls this as a health signal, so it always answers 200:
/// an unconfigured hub is reported as disconnected, not as a 503.
pub async fn get_status(State(state): State<AppState>) -> impl IntoResponse {
    let Some(hass) = state.hass.as_deref() else {
        return Json(ConnectionStatus::disconnected(
            "Home Assistant not configured. Please set HA_URL and HA_TOKEN in the environment.",
        ));
    };

    Json(hass.check_connection().await)
}
