use anyhow::Result;
use chrono::Utc;
use std::path::Path;

use crate::catalog;
use crate::config::SiteConfig;
use crate::site::export_site;

pub fn handle_build(config: SiteConfig, out_dir: &Path) -> Result<()> {
    catalog::ensure_valid()?;

    let written = export_site(config, out_dir, Utc::now())?;

    log::info!("Exported {written} files to {}", out_dir.display());
    println!("Wrote {written} files to {}", out_dir.display());
    Ok(())
}
