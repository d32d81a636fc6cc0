use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{RejectionError, Result};

/// The authenticated user submitting a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provider {
    pub username: String,
    /// Credential for the remote catalog's API.
    pub access_token: String,
}

impl Provider {
    #[must_use]
    pub fn new(username: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            access_token: access_token.into(),
        }
    }
}

/// Submission data handed to the plugin by the host.
///
/// Opaque apart from `link`; the plugin returns it unchanged on success.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceData(pub Map<String, Value>);

impl ResourceData {
    /// Submission containing only a `link`.
    #[must_use]
    pub fn with_link(link: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert("link".to_string(), Value::String(link.into()));
        Self(map)
    }

    /// The submitted dataset link.
    ///
    /// A missing or non-string `link` is a malformed URL.
    pub fn link(&self) -> Result<&str> {
        self.0
            .get("link")
            .and_then(Value::as_str)
            .ok_or_else(RejectionError::malformed_url)
    }
}

/// An already registered resource, as passed to the update/upgrade/delete hooks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub version: String,
    pub provider: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// `dataset_show` response body.
#[derive(Debug, Deserialize)]
pub struct DatasetShow {
    pub result: DatasetResult,
}

#[derive(Debug, Deserialize)]
pub struct DatasetResult {
    pub creator_user_id: String,
}

/// `user_show` response body.
#[derive(Debug, Deserialize)]
pub struct UserShow {
    pub result: UserResult,
}

#[derive(Debug, Deserialize)]
pub struct UserResult {
    pub name: String,
}
