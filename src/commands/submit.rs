use anyhow::{Context, Result, bail};
use std::path::Path;

use super::indexing_client;
use crate::indexing::FORBIDDEN_HINT;

/// Notify the Indexing API about each URL in turn.
///
/// A failing URL is reported and skipped; the command fails at the end if any did.
pub async fn handle_submit_url(urls: &[String], credentials: &Path) -> Result<()> {
    let client = indexing_client(credentials)?;
    let token = client
        .indexing_token()
        .await
        .context("Failed to obtain an Indexing API access token")?;

    let mut failed = 0;
    for url in urls {
        match client.publish(&token, url).await {
            Ok(response) => {
                let notified = response.notify_time().unwrap_or("unknown time");
                log::info!("Submitted {url}");
                println!("✓ {url} (notified {notified})");
            }
            Err(e) => {
                failed += 1;
                log::error!("Failed to submit {url}: {e}");
                println!("✗ {url}: {e}");
                if e.status() == Some(403) {
                    println!("  hint: {FORBIDDEN_HINT}");
                }
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} URLs failed", urls.len());
    }
    Ok(())
}
