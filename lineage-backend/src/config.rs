//! Lineage configuration
//!
//! Settings live in the host orchestrator's configuration under the
//! `lineage` section. Every key is optional; missing keys fall back to
//! defaults so loading never fails.
//!
//! Configuration is read fresh on every report, so edits take effect on the
//! next finished task without restarting anything.

use lineage_client::{AuthProvider, ServerConfig};
use std::collections::HashMap;

/// Section holding the lineage keys
pub const LINEAGE_SECTION: &str = "lineage";

/// Section holding the orchestrator web server keys
pub const WEBSERVER_SECTION: &str = "webserver";

pub const DEFAULT_SERVICE_NAME: &str = "airflow";
pub const DEFAULT_API_ENDPOINT: &str = "http://localhost:8585";
pub const DEFAULT_AUTH_PROVIDER: &str = "no-auth";
pub const DEFAULT_WEBSERVER_BASE_URL: &str = "http://localhost:8080";

/// A readable source of `(section, key)` configuration values
///
/// Implement this trait to plug in whatever configuration store the host
/// orchestrator uses.
pub trait ConfigSource: Send + Sync {
    /// Get a value by section and key
    ///
    /// # Returns
    /// The raw value if it is set, otherwise None
    fn get(&self, section: &str, key: &str) -> Option<String>;
}

/// Reads `AIRFLOW__{SECTION}__{KEY}` environment variables
#[derive(Debug, Clone)]
pub struct EnvConfigSource {
    prefix: String,
}

impl EnvConfigSource {
    /// Source using the orchestrator's `AIRFLOW` prefix
    pub fn new() -> Self {
        Self::with_prefix("AIRFLOW")
    }

    /// Source using a custom variable prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Name of the environment variable backing `(section, key)`
    pub fn var_name(&self, section: &str, key: &str) -> String {
        format!(
            "{}__{}__{}",
            self.prefix,
            section.to_ascii_uppercase(),
            key.to_ascii_uppercase()
        )
    }
}

impl Default for EnvConfigSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSource for EnvConfigSource {
    fn get(&self, section: &str, key: &str) -> Option<String> {
        std::env::var(self.var_name(section, key)).ok()
    }
}

/// In-memory configuration source
#[derive(Debug, Clone, Default)]
pub struct MapConfigSource {
    values: HashMap<(String, String), String>,
}

impl MapConfigSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value, replacing any previous one
    pub fn with(
        mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.values
            .insert((section.into(), key.into()), value.into());
        self
    }
}

impl ConfigSource for MapConfigSource {
    fn get(&self, section: &str, key: &str) -> Option<String> {
        self.values
            .get(&(section.to_string(), key.to_string()))
            .cloned()
    }
}

/// Lineage reporting configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineageConfig {
    /// Name the orchestrator is registered under in the catalog
    pub service_name: String,

    /// Catalog base URL
    pub api_endpoint: String,

    /// Authentication mode name (e.g., "no-auth", "google")
    pub auth_provider_type: String,

    /// Secret for SSO-backed catalogs
    pub secret_key: Option<String>,

    /// Base URL of the orchestrator web UI, used to build links
    pub webserver_base_url: String,
}

impl LineageConfig {
    /// Loads configuration from a source, applying defaults for missing keys
    ///
    /// Keys read from the `lineage` section:
    /// - airflow_service_name (default: "airflow")
    /// - openmetadata_api_endpoint (default: "http://localhost:8585")
    /// - auth_provider_type (default: "no-auth")
    /// - secret_key (default: unset)
    ///
    /// The web UI base URL comes from `webserver.base_url`
    /// (default: "http://localhost:8080").
    pub fn load(source: &dyn ConfigSource) -> Self {
        let lineage = |key: &str, default: &str| {
            source
                .get(LINEAGE_SECTION, key)
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            service_name: lineage("airflow_service_name", DEFAULT_SERVICE_NAME),
            api_endpoint: lineage("openmetadata_api_endpoint", DEFAULT_API_ENDPOINT),
            auth_provider_type: lineage("auth_provider_type", DEFAULT_AUTH_PROVIDER),
            secret_key: source.get(LINEAGE_SECTION, "secret_key"),
            webserver_base_url: source
                .get(WEBSERVER_SECTION, "base_url")
                .unwrap_or_else(|| DEFAULT_WEBSERVER_BASE_URL.to_string()),
        }
    }

    /// Parsed authentication provider
    pub fn auth_provider(&self) -> AuthProvider {
        self.auth_provider_type.parse().unwrap_or_default()
    }

    /// Catalog connection settings derived from this configuration
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig::new(self.api_endpoint.clone())
            .with_auth(self.auth_provider(), self.secret_key.clone())
    }
}

impl Default for LineageConfig {
    fn default() -> Self {
        Self::load(&MapConfigSource::new())
    }
}
