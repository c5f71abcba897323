//! Server configuration from Shuttle secrets
//!
//! - `CODECAMP_SWAGGER_UI`: serve `/swagger-ui` (default `true`)
//! - `CODECAMP_CORS_ORIGIN`: single allowed origin; CORS is permissive when unset

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use shuttle_runtime::SecretStore;
use tower_http::cors::CorsLayer;

const SWAGGER_UI_KEY: &str = "CODECAMP_SWAGGER_UI";
const CORS_ORIGIN_KEY: &str = "CODECAMP_CORS_ORIGIN";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub swagger_ui: bool,
    pub cors_origin: Option<HeaderValue>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            swagger_ui: true,
            cors_origin: None,
        }
    }
}

impl ServerConfig {
    pub fn from_secrets(secrets: &SecretStore) -> Result<Self> {
        Self::from_lookup(|key| secrets.get(key))
    }

    /// Build from any key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(SWAGGER_UI_KEY) {
            config.swagger_ui = raw
                .trim()
                .parse()
                .with_context(|| format!("{} must be true or false, got {:?}", SWAGGER_UI_KEY, raw))?;
        }

        if let Some(raw) = lookup(CORS_ORIGIN_KEY) {
            let origin = HeaderValue::from_str(raw.trim())
                .with_context(|| format!("{} is not a valid origin: {:?}", CORS_ORIGIN_KEY, raw))?;
            config.cors_origin = Some(origin);
        }

        Ok(config)
    }

    pub fn cors_layer(&self) -> CorsLayer {
        match &self.cors_origin {
            Some(origin) => CorsLayer::new()
                .allow_origin(origin.clone())
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE])
                .expose_headers([header::LOCATION]),
            None => CorsLayer::permissive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert!(config.swagger_ui);
        assert!(config.cors_origin.is_none());
    }

    #[test]
    fn test_reads_values() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("CODECAMP_SWAGGER_UI", "false"),
            ("CODECAMP_CORS_ORIGIN", "https://camps.example.com"),
        ]))
        .unwrap();

        assert!(!config.swagger_ui);
        assert_eq!(
            config.cors_origin.unwrap(),
            HeaderValue::from_static("https://camps.example.com")
        );
    }

    #[test]
    fn test_rejects_invalid_bool() {
        let err = ServerConfig::from_lookup(lookup(&[("CODECAMP_SWAGGER_UI", "yes please")]))
            .unwrap_err();
        assert!(err.to_string().contains("CODECAMP_SWAGGER_UI"));
    }
}
