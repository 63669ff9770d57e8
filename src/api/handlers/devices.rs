//! Device listing handlers

use axum::{extract::State, response::IntoResponse, Json};

use crate::api::AppState;
use crate::error::AppError;
use crate::models::DevicesResponse;

/// GET /api/devices - Lights and switches, fetched concurrently
pub async fn get_devices(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let hass = state.hass()?;

    // All-or-nothing join: if either fetch fails the whole request fails.
    let (lights, switches) = tokio::try_join!(hass.get_lights(), hass.get_switches())
        .map_err(|e| {
            tracing::error!("Error fetching devices: {}", e);
            e
        })?;

    Ok(Json(DevicesResponse { lights, switches }))
}

/// GET /api/lights - Light entities only
pub async fn get_lights(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let lights = state.hass()?.get_lights().await.map_err(|e| {
        tracing::error!("Error fetching lights: {}", e);
        e
    })?;

    Ok(Json(lights))
}

/// GET /api/switches - Switch entities only
pub async fn get_switches(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let switches = state.hass()?.get_switches().await.map_err(|e| {
        tracing::error!("Error fetching switches: {}", e);
        e
    })?;

    Ok(Json(switches))
}
