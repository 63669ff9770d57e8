//! Home Assistant REST API client

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;
use crate::models::{ConnectionStatus, Entity};

const LIGHT_PREFIX: &str = "light.";
const SWITCH_PREFIX: &str = "switch.";

/// Thin wrapper over the hub's REST API. Builds the request, attaches the
/// bearer token, and normalizes every non-2xx response into
/// [`AppError::Upstream`] so callers never see a raw decode error for a
/// failed call.
pub struct HassClient {
    base_url: String,
    token: String,
    client: Client,
}

impl HassClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            token: token.into(),
            client: Client::new(),
        }
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<T, AppError> {
        let url = format!("{}/api{}", self.base_url, endpoint);

        let mut request = self
            .client
            .request(method, &url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/json");

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }

    /// Full entity list from `GET /api/states`.
    pub async fn get_states(&self) -> Result<Vec<Entity>, AppError> {
        self.request(Method::GET, "/states", None).await
    }

    /// A single entity from `GET /api/states/{entity_id}`.
    pub async fn get_state(&self, entity_id: &str) -> Result<Entity, AppError> {
        self.request(Method::GET, &format!("/states/{}", entity_id), None)
            .await
    }

    /// Invoke a service via `POST /api/services/{domain}/{service}`.
    pub async fn call_service(
        &self,
        domain: &str,
        service: &str,
        data: Value,
    ) -> Result<Value, AppError> {
        self.request(
            Method::POST,
            &format!("/services/{}/{}", domain, service),
            Some(&data),
        )
        .await
    }

    pub async fn turn_on(&self, entity_id: &str) -> Result<Value, AppError> {
        self.entity_service(entity_id, "turn_on").await
    }

    pub async fn turn_off(&self, entity_id: &str) -> Result<Value, AppError> {
        self.entity_service(entity_id, "turn_off").await
    }

    pub async fn toggle(&self, entity_id: &str) -> Result<Value, AppError> {
        self.entity_service(entity_id, "toggle").await
    }

    /// Derive the domain from the entity id and call the named service with
    /// an `{entity_id}` payload.
    async fn entity_service(&self, entity_id: &str, service: &str) -> Result<Value, AppError> {
        let domain = entity_id.split('.').next().unwrap_or(entity_id);
        self.call_service(domain, service, serde_json::json!({ "entity_id": entity_id }))
            .await
    }

    pub async fn get_lights(&self) -> Result<Vec<Entity>, AppError> {
        let states = self.get_states().await?;
        Ok(filter_by_prefixes(states, &[LIGHT_PREFIX]))
    }

    pub async fn get_switches(&self) -> Result<Vec<Entity>, AppError> {
        let states = self.get_states().await?;
        Ok(filter_by_prefixes(states, &[SWITCH_PREFIX]))
    }

    pub async fn get_lights_and_switches(&self) -> Result<Vec<Entity>, AppError> {
        let states = self.get_states().await?;
        Ok(filter_by_prefixes(states, &[LIGHT_PREFIX, SWITCH_PREFIX]))
    }

    /// Probe `GET /api/` as a liveness check. This never fails: any error is
    /// folded into the returned status.
    pub async fn check_connection(&self) -> ConnectionStatus {
        match self.request::<Value>(Method::GET, "/", None).await {
            Ok(_) => ConnectionStatus::connected(),
            Err(e) => ConnectionStatus::disconnected(e.to_string()),
        }
    }
}

/// Keep entities whose id starts with any of the given domain prefixes.
/// The hub has no server-side filtering; this runs over the full state list.
fn filter_by_prefixes(states: Vec<Entity>, prefixes: &[&str]) -> Vec<Entity> {
    states
        .into_iter()
        .filter(|entity| prefixes.iter().any(|p| entity.entity_id.starts_with(p)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(id: &str, state: &str) -> Entity {
        serde_json::from_value(serde_json::json!({
            "entity_id": id,
            "state": state,
        }))
        .unwrap()
    }

    fn sample_states() -> Vec<Entity> {
        vec![
            entity("light.kitchen", "off"),
            entity("switch.fan", "on"),
            entity("sensor.temperature", "21.5"),
            entity("light.living_room", "on"),
            entity("lightning.fake", "on"),
        ]
    }

    #[test]
    fn test_filter_partitions_by_prefix() {
        let lights = filter_by_prefixes(sample_states(), &[LIGHT_PREFIX]);
        let switches = filter_by_prefixes(sample_states(), &[SWITCH_PREFIX]);

        let light_ids: Vec<_> = lights.iter().map(|e| e.entity_id.as_str()).collect();
        assert_eq!(light_ids, ["light.kitchen", "light.living_room"]);

        let switch_ids: Vec<_> = switches.iter().map(|e| e.entity_id.as_str()).collect();
        assert_eq!(switch_ids, ["switch.fan"]);

        // Entities in neither domain are excluded from both; a domain that
        // merely shares the string prefix ("lightning") does not match.
        assert!(lights.iter().all(|e| e.entity_id != "sensor.temperature"));
        assert!(lights.iter().all(|e| e.entity_id != "lightning.fake"));
    }

    #[test]
    fn test_filter_combined_prefixes() {
        let both = filter_by_prefixes(sample_states(), &[LIGHT_PREFIX, SWITCH_PREFIX]);
        assert_eq!(both.len(), 3);
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = HassClient::new("http://hub:8123/", "token");
        assert_eq!(client.base_url, "http://hub:8123");

        let client = HassClient::new("http://hub:8123", "token");
        assert_eq!(client.base_url, "http://hub:8123");
    }

    #[tokio::test]
    async fn test_check_connection_never_fails() {
        // Nothing listens on this address; the probe must still resolve to a
        // disconnected status instead of an error.
        let client = HassClient::new("http://127.0.0.1:1", "token");
        let status = client.check_connection().await;
        assert!(!status.connected);
        assert!(status.error.is_some());
    }
}
