//! Read access to a CKAN catalog's action API.

use std::env;
use std::time::Duration;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use ureq::Agent;
use url::Url;

use crate::errors::{RejectionError, RejectionKind, Result};

/// Header CKAN reads the API token from.
pub const AUTH_HEADER: &str = "X-Auth-token";

/// Default timeout for a single catalog lookup.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Trait for fetching catalog API resources.
///
/// Synchronous. Implementations return non-200 statuses as data and only
/// fail when the request could not be completed at all.
pub trait CatalogClient: Send + Sync {
    /// `GET url`, authenticated with the provider's access token.
    fn get(&self, url: &Url, access_token: &str) -> Result<CatalogResponse>;
}

/// Status and raw body of a catalog API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogResponse {
    pub status: u16,
    pub body: String,
}

impl CatalogResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Deserialize the body into the expected action schema.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|e| {
            RejectionError::new(
                RejectionKind::MalformedResponse,
                format!("The CKAN server returned an unexpected response: {e}"),
            )
        })
    }
}

/// Settings for [`HttpCatalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Upper bound on each lookup, connect through body.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("ckan-dataset/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl CatalogConfig {
    /// Build a config from environment variables.
    ///
    /// Reads `CKAN_DATASET_TIMEOUT_SECS` (positive integer, optional) and
    /// `CKAN_DATASET_USER_AGENT` (optional). Unusable values fall back to
    /// the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(raw) = env::var("CKAN_DATASET_TIMEOUT_SECS")
            .ok()
            .filter(|s| !s.is_empty())
        {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!(
                    "ignoring CKAN_DATASET_TIMEOUT_SECS={raw:?}, using {}s",
                    DEFAULT_TIMEOUT.as_secs()
                ),
            }
        }
        if let Some(ua) = env::var("CKAN_DATASET_USER_AGENT")
            .ok()
            .filter(|s| !s.is_empty())
        {
            config.user_agent = ua;
        }
        config
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Blocking HTTP catalog client built on `ureq`.
pub struct HttpCatalog {
    agent: Agent,
    config: CatalogConfig,
}

impl HttpCatalog {
    #[must_use]
    pub fn new(config: CatalogConfig) -> Self {
        let agent_config = Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .http_status_as_error(false)
            .build();
        Self {
            agent: Agent::new_with_config(agent_config),
            config,
        }
    }

    /// Client configured from the environment. See [`CatalogConfig::from_env`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(CatalogConfig::from_env())
    }

    #[must_use]
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }
}

impl Default for HttpCatalog {
    fn default() -> Self {
        Self::new(CatalogConfig::default())
    }
}

impl CatalogClient for HttpCatalog {
    fn get(&self, url: &Url, access_token: &str) -> Result<CatalogResponse> {
        debug!("GET {url}");

        let mut response = self
            .agent
            .get(url.as_str())
            .header(AUTH_HEADER, access_token)
            .header("User-Agent", self.config.user_agent.as_str())
            .call()
            .map_err(|e| {
                debug!("catalog request to {url} failed: {e}");
                RejectionError::service_unavailable()
            })?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().map_err(|e| {
            debug!("reading catalog response from {url} failed: {e}");
            RejectionError::service_unavailable()
        })?;

        debug!("GET {url} -> {status}");
        Ok(CatalogResponse { status, body })
    }
}
