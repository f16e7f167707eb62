//! Google Indexing API and Search Console helpers used by the
//! `submit-url` and `check-indexing` commands.

mod auth;
mod client;
mod credentials;

use std::path::PathBuf;
use thiserror::Error;

pub use client::{AnalyticsRow, IndexingClient};
pub use credentials::ServiceAccountKey;

pub const INDEXING_SCOPE: &str = "https://www.googleapis.com/auth/indexing";
pub const WEBMASTERS_SCOPE: &str = "https://www.googleapis.com/auth/webmasters.readonly";

pub const PUBLISH_ENDPOINT: &str = "https://indexing.googleapis.com/v3/urlNotifications:publish";
pub const SEARCH_CONSOLE_ENDPOINT: &str = "https://www.googleapis.com/webmasters/v3";

/// Printed when the Indexing API rejects a URL with 403.
pub const FORBIDDEN_HINT: &str = "The Indexing API only accepts pages with JobPosting or \
BroadcastEvent structured data, and the service account must be an owner of the \
Search Console property.";

#[derive(Debug, Error)]
pub enum IndexingError {
    #[error("Credentials file not found: {}", .0.display())]
    MissingCredentials(PathBuf),

    #[error("Failed to read credentials file {}: {source}", .path.display())]
    ReadCredentials {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid service account key {}: {source}", .path.display())]
    InvalidCredentials {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to sign JWT assertion: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Token exchange failed ({status}): {body}")]
    TokenExchange { status: u16, body: String },

    #[error("API returned {status}: {body}")]
    Api { status: u16, body: String },
}

impl IndexingError {
    /// HTTP status of a rejected API call, if that is what failed.
    pub fn status(&self) -> Option<u16> {
        match self {
            IndexingError::Api { status, .. } | IndexingError::TokenExchange { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}
