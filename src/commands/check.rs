use anyhow::{Context, Result};
use chrono::{Days, Utc};
use std::path::Path;

use super::indexing_client;
use crate::config::SiteConfig;
use crate::indexing::AnalyticsRow;

const LOOKBACK_DAYS: u64 = 7;

/// Print the last week of Search Console queries for the configured site.
pub async fn handle_check_indexing(config: &SiteConfig, credentials: &Path) -> Result<()> {
    let client = indexing_client(credentials)?;
    let token = client
        .search_console_token()
        .await
        .context("Failed to obtain a Search Console access token")?;

    let site = config.search_console_site();
    let end = Utc::now().date_naive();
    let start = end - Days::new(LOOKBACK_DAYS);

    log::info!("Querying Search Console for {site} ({start} to {end})");
    let rows = client
        .search_analytics(&token, &site, start, end)
        .await
        .with_context(|| format!("Search Console query failed for {site}"))?;

    if rows.is_empty() {
        println!("no data");
        return Ok(());
    }

    for row in &rows {
        println!("{}", format_row(row));
    }
    Ok(())
}

fn format_row(row: &AnalyticsRow) -> String {
    format!(
        "{}  clicks={} impressions={} ctr={:.2}% position={:.1}",
        row.keys.join(" | "),
        row.clicks,
        row.impressions,
        row.ctr * 100.0,
        row.position
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_format() {
        let row = AnalyticsRow {
            keys: vec!["uuid".into(), "https://toolshelf.dev/tools/uuid-generator".into()],
            clicks: 2.0,
            impressions: 40.0,
            ctr: 0.05,
            position: 3.4,
        };
        assert_eq!(
            format_row(&row),
            "uuid | https://toolshelf.dev/tools/uuid-generator  clicks=2 impressions=40 ctr=5.00% position=3.4"
        );
    }
}
