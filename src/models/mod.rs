//! Data models for hass-dashboard

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Upstream Entity Models
// ============================================================================

/// A single Home Assistant entity as returned by `/api/states`.
///
/// `entity_id` and `state` are required; everything else the hub sends
/// (`last_changed`, `last_updated`, context, ...) is preserved untouched in
/// `extra` so the proxy relays the payload without losing fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub entity_id: String,
    pub state: String,
    #[serde(default)]
    pub attributes: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ============================================================================
// Proxy API Shapes
// ============================================================================

/// Result of the hub connectivity probe. Never an error: failures are data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionStatus {
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConnectionStatus {
    pub fn connected() -> Self {
        Self {
            connected: true,
            error: None,
        }
    }

    pub fn disconnected(error: impl Into<String>) -> Self {
        Self {
            connected: false,
            error: Some(error.into()),
        }
    }
}

/// Body of `GET /api/devices`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DevicesResponse {
    pub lights: Vec<Entity>,
    pub switches: Vec<Entity>,
}

/// Body of the toggle/turn_on/turn_off routes. `entity_id` is optional so
/// the handler can answer 400 itself instead of axum rejecting with 422.
#[derive(Debug, Deserialize)]
pub struct ServiceCallRequest {
    pub entity_id: Option<String>,
}

/// Success envelope for the three command routes.
#[derive(Debug, Serialize)]
pub struct ServiceCallResponse {
    pub success: bool,
    pub result: Value,
}

impl ServiceCallResponse {
    pub fn new(result: Value) -> Self {
        Self {
            success: true,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_attributes_default_to_empty() {
        let entity: Entity = serde_json::from_value(serde_json::json!({
            "entity_id": "light.kitchen",
            "state": "off",
        }))
        .unwrap();
        assert_eq!(entity.entity_id, "light.kitchen");
        assert!(entity.attributes.is_empty());
    }

    #[test]
    fn test_entity_preserves_unknown_fields() {
        let payload = serde_json::json!({
            "entity_id": "switch.fan",
            "state": "on",
            "attributes": {"friendly_name": "Fan"},
            "last_changed": "2024-01-01T00:00:00+00:00",
        });
        let entity: Entity = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(entity.extra["last_changed"], "2024-01-01T00:00:00+00:00");

        let round = serde_json::to_value(&entity).unwrap();
        assert_eq!(round, payload);
    }

    #[test]
    fn test_connection_status_skips_absent_error() {
        let json = serde_json::to_value(ConnectionStatus::connected()).unwrap();
        assert_eq!(json, serde_json::json!({"connected": true}));

        let json = serde_json::to_value(ConnectionStatus::disconnected("boom")).unwrap();
        assert_eq!(json, serde_json::json!({"connected": false, "error": "boom"}));
    }
}
