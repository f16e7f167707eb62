use serde::Deserialize;
use std::path::Path;

use super::IndexingError;

const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// The fields of a Google service-account JSON key that we use.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl ServiceAccountKey {
    pub fn from_file(path: &Path) -> Result<Self, IndexingError> {
        if !path.exists() {
            return Err(IndexingError::MissingCredentials(path.to_path_buf()));
        }

        let content =
            std::fs::read_to_string(path).map_err(|source| IndexingError::ReadCredentials {
                path: path.to_path_buf(),
                source,
            })?;

        serde_json::from_str(&content).map_err(|source| IndexingError::InvalidCredentials {
            path: path.to_path_buf(),
            source,
        })
    }
}
