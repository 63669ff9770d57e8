//! Configuration module

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_ha_url")]
    pub ha_url: String,
    #[serde(default)]
    pub ha_token: Option<String>,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_port() -> u16 {
    3000
}

fn default_ha_url() -> String {
    "http://homeassistant.local:8123".to_string()
}

fn default_static_dir() -> String {
    "public".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            ha_url: default_ha_url(),
            ha_token: None,
            static_dir: default_static_dir(),
        }
    }
}

impl Config {
    /// Load from an optional `config/default` file, then the environment
    /// (`HA_URL`, `HA_TOKEN`, `PORT`, `STATIC_DIR`).
    pub fn load() -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::Environment::default())
            .build()?;

        let config: Config = settings.try_deserialize().unwrap_or_default();

        Ok(config)
    }

    /// An empty token counts as unset: the server starts but every
    /// hub-dependent route answers 503.
    pub fn token(&self) -> Option<&str> {
        self.ha_token.as_deref().filter(|t| !t.is_empty())
    }
}
