//! API module - HTTP handlers and routes

pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::error::AppError;
use crate::hass::HassClient;

/// Shared application state. `hass` is `None` when no token was configured
/// at startup; the server still runs, but hub-dependent routes answer 503.
#[derive(Clone, Default)]
pub struct AppState {
    pub hass: Option<Arc<HassClient>>,
}

impl AppState {
    pub fn new(hass: Option<HassClient>) -> Self {
        Self {
            hass: hass.map(Arc::new),
        }
    }

    /// The configured client, or the 503 error for routes that need one.
    pub fn hass(&self) -> Result<&HassClient, AppError> {
        self.hass.as_deref().ok_or(AppError::NotConfigured)
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        // Connection status (polled by the dashboard, never 503s)
        .route("/api/status", get(handlers::get_status))
        // Device listing
        .route("/api/devices", get(handlers::get_devices))
        .route("/api/lights", get(handlers::get_lights))
        .route("/api/switches", get(handlers::get_switches))
        // Commands
        .route("/api/toggle", post(handlers::toggle_device))
        .route("/api/turn_on", post(handlers::turn_on_device))
        .route("/api/turn_off", post(handlers::turn_off_device))
        // Single entity state
        .route("/api/state/:entity_id", get(handlers::get_entity_state))
}
