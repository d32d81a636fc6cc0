//! Dataset link parsing.
//!
//! A dataset link looks like `https://ckan.example.org/dataset/<id>` (or
//! `/package/<id>`). The catalog's API lives at the root of the same
//! `scheme://netloc`.

use percent_encoding::percent_decode_str;
use url::Url;

use crate::errors::{RejectionError, Result};

/// Path tokens that name a dataset page. CKAN treats them as synonyms.
const DATASET_TOKENS: &[&str] = &["dataset", "package"];

/// Where a dataset lives: the catalog root and the dataset identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetLocation {
    /// `scheme://netloc/` of the catalog.
    pub base: Url,
    /// The path segment after `dataset`/`package`, percent-decoded.
    pub dataset_id: String,
}

impl DatasetLocation {
    /// Parse a dataset link.
    ///
    /// Fails with a malformed URL rejection when the link is not an absolute
    /// HTTP(S) URL, or when its path is not `/dataset/<id>` or
    /// `/package/<id>`. Segments after the identifier are ignored. Dot
    /// segments are rejected rather than resolved.
    pub fn parse(link: &str) -> Result<Self> {
        if has_dot_segments(link) {
            return Err(RejectionError::malformed_url());
        }
        let url = Url::parse(link).map_err(|_| RejectionError::malformed_url())?;

        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(RejectionError::malformed_url());
        }

        // Element 0 is the empty string before the leading slash.
        let segments: Vec<&str> = url.path().split('/').collect();
        if segments.len() < 3 || !DATASET_TOKENS.contains(&segments[1]) {
            return Err(RejectionError::malformed_url());
        }
        let dataset_id = percent_decode_str(segments[2])
            .decode_utf8()
            .map_err(|_| RejectionError::malformed_url())?;
        if dataset_id.is_empty() {
            return Err(RejectionError::malformed_url());
        }

        let mut base = url.clone();
        base.set_path("/");
        base.set_query(None);
        base.set_fragment(None);

        Ok(Self {
            base,
            dataset_id: dataset_id.to_string(),
        })
    }

    /// URL of the `dataset_show` action for this dataset.
    #[must_use]
    pub fn dataset_show_url(&self) -> Url {
        self.action_url("dataset_show", &self.dataset_id)
    }

    /// URL of the `user_show` action for the given catalog user id.
    #[must_use]
    pub fn user_show_url(&self, user_id: &str) -> Url {
        self.action_url("user_show", user_id)
    }

    fn action_url(&self, action: &str, id: &str) -> Url {
        let mut url = self.base.clone();
        url.set_path(&format!("/api/action/{action}"));
        url.query_pairs_mut().append_pair("id", id);
        url
    }
}

/// Whether the path of `link`, as written, contains `.`/`..` segments or
/// backslashes, which URL parsing would otherwise resolve away.
fn has_dot_segments(link: &str) -> bool {
    let Some((_, rest)) = link.split_once("://") else {
        return false;
    };
    let rest = rest.split(['?', '#']).next().unwrap_or_default();
    let Some(start) = rest.find(['/', '\\']) else {
        return false;
    };
    let path = &rest[start..];
    path.contains('\\')
        || path.split('/').any(|seg| {
            matches!(
                seg.to_ascii_lowercase().as_str(),
                "." | ".." | "%2e" | ".%2e" | "%2e." | "%2e%2e"
            )
        })
}
