//! Lineage HTTP Client
//!
//! A small, type-safe HTTP client for the metadata catalog API.
//!
//! Only the handful of endpoints lineage reporting needs are covered:
//! pipeline service lookup and registration, and create-or-update for
//! tasks and pipelines.
//!
//! # Example
//!
//! ```no_run
//! use lineage_client::{MetadataClient, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = MetadataClient::new(ServerConfig::new("http://localhost:8585"))?;
//!
//!     match client.get_pipeline_service("airflow").await? {
//!         Some(service) => println!("Found service: {}", service.id),
//!         None => println!("Service not registered yet"),
//!     }
//!     Ok(())
//! }
//! ```

mod api;
pub mod auth;
pub mod error;
mod pipeline_services;
mod pipelines;
mod tasks;

// Re-export commonly used types
pub use api::CatalogApi;
pub use auth::AuthProvider;
pub use error::{ClientError, Result};

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Connection settings for the catalog API
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Catalog endpoint (e.g., "http://localhost:8585")
    pub api_endpoint: String,

    /// Authentication mode
    pub auth_provider: AuthProvider,

    /// Secret used as bearer token when the provider requires one
    pub secret_key: Option<String>,
}

impl ServerConfig {
    /// Settings for an unauthenticated catalog
    pub fn new(api_endpoint: impl Into<String>) -> Self {
        Self {
            api_endpoint: api_endpoint.into(),
            auth_provider: AuthProvider::NoAuth,
            secret_key: None,
        }
    }

    /// Sets the authentication provider and its secret
    pub fn with_auth(mut self, provider: AuthProvider, secret_key: Option<String>) -> Self {
        self.auth_provider = provider;
        self.secret_key = secret_key;
        self
    }
}

/// HTTP client for the metadata catalog API
///
/// Endpoints are organized into logical groups:
/// - Pipeline services (lookup by name, register)
/// - Tasks (create or update)
/// - Pipelines (create or update)
#[derive(Debug, Clone)]
pub struct MetadataClient {
    /// Versioned API root (e.g., "http://localhost:8585/api/v1")
    base_url: String,
    /// Bearer token attached to every request, if any
    token: Option<String>,
    /// HTTP client instance
    client: Client,
}

impl MetadataClient {
    /// Create a new catalog client
    ///
    /// # Arguments
    /// * `config` - Endpoint and authentication settings
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidConfig`] when the auth provider needs a
    /// token but no secret key is configured.
    ///
    /// # Example
    /// ```
    /// use lineage_client::{MetadataClient, ServerConfig};
    ///
    /// let client = MetadataClient::new(ServerConfig::new("http://localhost:8585")).unwrap();
    /// assert_eq!(client.base_url(), "http://localhost:8585/api/v1");
    /// ```
    pub fn new(config: ServerConfig) -> Result<Self> {
        Self::with_client(config, Client::new())
    }

    /// Create a new catalog client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use lineage_client::{MetadataClient, ServerConfig};
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client =
    ///     MetadataClient::with_client(ServerConfig::new("http://localhost:8585"), http_client)
    ///         .unwrap();
    /// ```
    pub fn with_client(config: ServerConfig, client: Client) -> Result<Self> {
        let token = if config.auth_provider.requires_token() {
            match config.secret_key.filter(|key| !key.is_empty()) {
                Some(key) => Some(key),
                None => {
                    return Err(ClientError::InvalidConfig(format!(
                        "auth provider '{}' requires a secret key",
                        config.auth_provider
                    )));
                }
            }
        } else {
            None
        };

        Ok(Self {
            base_url: format!("{}/api/v1", config.api_endpoint.trim_end_matches('/')),
            token,
            client,
        })
    }

    /// Get the versioned API root
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Attach authentication to an outgoing request
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        debug!("Catalog responded with {}", status);

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ClientError::Unauthorized {
                    status: status.as_u16(),
                    message: error_text,
                },
                _ => ClientError::api_error(status.as_u16(), error_text),
            });
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Like [`Self::handle_response`], but maps 404 to `None`
    async fn handle_optional_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<Option<T>> {
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        self.handle_response(response).await.map(Some)
    }
}
