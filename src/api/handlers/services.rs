//! Device command handlers (toggle / turn_on / turn_off)

use axum::{extract::State, Json};

use crate::api::AppState;
use crate::error::AppError;
use crate::models::{ServiceCallRequest, ServiceCallResponse};

#[derive(Clone, Copy)]
enum Command {
    Toggle,
    TurnOn,
    TurnOff,
}

impl Command {
    fn verb(self) -> &'static str {
        match self {
            Command::Toggle => "toggle",
            Command::TurnOn => "turn on",
            Command::TurnOff => "turn off",
        }
    }
}

/// POST /api/toggle - Toggle a device
pub async fn toggle_device(
    State(state): State<AppState>,
    Json(payload): Json<ServiceCallRequest>,
) -> Result<Json<ServiceCallResponse>, AppError> {
    run_command(&state, payload, Command::Toggle).await
}

/// POST /api/turn_on - Turn a device on
pub async fn turn_on_device(
    State(state): State<AppState>,
    Json(payload): Json<ServiceCallRequest>,
) -> Result<Json<ServiceCallResponse>, AppError> {
    run_command(&state, payload, Command::TurnOn).await
}

/// POST /api/turn_off - Turn a device off
pub async fn turn_off_device(
    State(state): State<AppState>,
    Json(payload): Json<ServiceCallRequest>,
) -> Result<Json<ServiceCallResponse>, AppError> {
    run_command(&state, payload, Command::TurnOff).await
}

/// Shared body for the three command routes: 503 if unconfigured, 400 if the
/// entity id is missing (checked before any upstream call), then delegate.
async fn run_command(
    state: &AppState,
    payload: ServiceCallRequest,
    command: Command,
) -> Result<Json<ServiceCallResponse>, AppError> {
    let hass = state.hass()?;

    let entity_id = payload
        .entity_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::Validation("entity_id is required".to_string()))?;

    let result = match command {
        Command::Toggle => hass.toggle(&entity_id).await,
        Command::TurnOn => hass.turn_on(&entity_id).await,
        Command::TurnOff => hass.turn_off(&entity_id).await,
    };

    match result {
        Ok(result) => Ok(Json(ServiceCallResponse::new(result))),
        Err(e) => {
            tracing::error!("Error trying to {} {}: {}", command.verb(), entity_id, e);
            Err(e)
        }
    }
}
