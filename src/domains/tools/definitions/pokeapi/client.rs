//! PokéAPI HTTP client.
//!
//! Thin wrapper around `reqwest` that issues exactly one GET per call against
//! the PokéAPI REST service and deserializes the JSON body into the partial
//! schema the caller asks for. No retries, no caching; a non-2xx status is
//! surfaced as a typed error carrying the status code and reason phrase.

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::core::config::ApiConfig;

/// Errors raised while talking to the upstream service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The upstream service answered with a non-success HTTP status.
    #[error("PokéAPI error: {status} {status_text}")]
    Status { status: u16, status_text: String },

    /// The request failed in transit or the body could not be decoded.
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// The upstream document did not have the shape a projector relies on.
    #[error("{0}")]
    Malformed(String),
}

impl ApiError {
    /// Create a new "malformed response" error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}

/// Client for the upstream PokéAPI service.
///
/// Cheap to clone behind an `Arc`; concurrent tool invocations share the
/// underlying connection pool but no mutable state.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
    debug: bool,
}

impl PokeApiClient {
    /// Create a client from the API configuration.
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            debug: config.debug,
        }
    }

    /// Whether successful tool output should carry the debug marker.
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// The configured base URL (without trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch `base_url + path` and deserialize the JSON response.
    ///
    /// `path` must start with `/` and already contain normalized resource
    /// identifiers (see [`normalize_resource_name`]), since the upstream
    /// service is case- and format-sensitive.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

/// Normalize a caller-supplied resource identifier for use in a request path.
///
/// The upstream service keys resources by lower-cased, hyphen-separated
/// names, so spaces are turned into hyphens and the whole identifier is
/// lower-cased. Numeric ids pass through unchanged.
pub fn normalize_resource_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize_resource_name("Pikachu"), "pikachu");
        assert_eq!(normalize_resource_name("CHARIZARD"), "charizard");
    }

    #[test]
    fn test_normalize_hyphenates_spaces() {
        assert_eq!(normalize_resource_name("Tapu Koko"), "tapu-koko");
        assert_eq!(normalize_resource_name("great tusk"), "great-tusk");
    }

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize_resource_name("  Mew  "), "mew");
    }

    #[test]
    fn test_normalize_keeps_numeric_ids() {
        assert_eq!(normalize_resource_name("25"), "25");
    }

    #[test]
    fn test_status_error_display() {
        let err = ApiError::Status {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "PokéAPI error: 404 Not Found");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let config = ApiConfig {
            base_url: "https://pokeapi.co/api/v2/".to_string(),
            debug: false,
        };
        let client = PokeApiClient::new(&config);
        assert_eq!(client.base_url(), "https://pokeapi.co/api/v2");
    }

    // Integration tests (require network, run with: cargo test -- --ignored)
    #[ignore]
    #[tokio::test]
    async fn test_get_json_success() {
        let client = PokeApiClient::new(&ApiConfig::default());
        let doc: serde_json::Value = client.get_json("/pokemon/pikachu").await.unwrap();
        assert_eq!(doc["name"], "pikachu");
    }

    #[ignore]
    #[tokio::test]
    async fn test_get_json_not_found() {
        let client = PokeApiClient::new(&ApiConfig::default());
        let result = client
            .get_json::<serde_json::Value>("/pokemon/definitely-not-a-pokemon")
            .await;
        assert!(matches!(
            result,
            Err(ApiError::Status { status: 404, .. })
        ));
    }
}
