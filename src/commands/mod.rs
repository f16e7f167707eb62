pub mod build;
pub mod check;
pub mod search;
pub mod serve;
pub mod submit;

pub use build::handle_build;
pub use check::handle_check_indexing;
pub use search::handle_search;
pub use serve::handle_serve;
pub use submit::handle_submit_url;

use anyhow::Result;
use std::path::Path;

use crate::indexing::{IndexingClient, IndexingError, ServiceAccountKey};

/// Load the service-account key, explaining how to supply one when it is missing.
pub(crate) fn indexing_client(credentials: &Path) -> Result<IndexingClient> {
    match ServiceAccountKey::from_file(credentials) {
        Ok(key) => Ok(IndexingClient::new(key)),
        Err(e @ IndexingError::MissingCredentials(_)) => {
            eprintln!("Error: {e}");
            eprintln!();
            eprintln!("Download a JSON key for a Google Cloud service account and pass it with");
            eprintln!("--credentials <PATH> or the TOOLSHELF_CREDENTIALS environment variable.");
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}
