//! Static export of the whole site into a directory.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;

use super::metadata::StaticPage;
use super::render::SiteRenderer;
use super::robots::render_robots;
use super::sitemap::{render_sitemap, sitemap_entries};
use crate::catalog::{ALL_CATEGORY, all_tools};
use crate::config::SiteConfig;
use crate::embedded;

/// Render every page and asset into `out_dir` in the default locale.
///
/// Returns the number of files written.
pub fn export_site(config: SiteConfig, out_dir: &Path, now: DateTime<Utc>) -> Result<usize> {
    let renderer = SiteRenderer::new(config)
        .context("Failed to load page templates")?
        .for_static_export();
    let config = renderer.config();
    let locale = config.default_locale();
    let mut written = 0;

    let mut write = |relative: &str, contents: &[u8]| -> Result<()> {
        let target = out_dir.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&target, contents)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        log::debug!("Wrote {}", target.display());
        written += 1;
        Ok(())
    };

    let home = renderer
        .home(locale, "", ALL_CATEGORY)
        .context("Failed to render homepage")?;
    write("index.html", home.as_bytes())?;

    for tool in all_tools() {
        let Some(page) = renderer.tool(locale, tool.id) else {
            continue;
        };
        let page = page.with_context(|| format!("Failed to render tool page: {}", tool.id))?;
        write(&format!("tools/{}/index.html", tool.id), page.as_bytes())?;
    }

    for (page, dir) in [(StaticPage::Privacy, "privacy"), (StaticPage::Terms, "terms")] {
        let html = renderer
            .static_page(locale, page)
            .with_context(|| format!("Failed to render {dir} page"))?;
        write(&format!("{dir}/index.html"), html.as_bytes())?;
    }

    let not_found = renderer
        .not_found(locale)
        .context("Failed to render 404 page")?;
    write("404.html", not_found.as_bytes())?;

    let entries = sitemap_entries(config, all_tools(), now);
    write("sitemap.xml", render_sitemap(&entries)?.as_bytes())?;
    write("robots.txt", render_robots(config).as_bytes())?;

    for asset in ["sw.js", "manifest.webmanifest"] {
        let bytes = embedded::get_bytes(asset)
            .with_context(|| format!("Embedded asset missing: {asset}"))?;
        write(asset, bytes)?;
    }

    for path in embedded::static_files() {
        let asset = format!("static/{path}");
        let bytes = embedded::get_bytes(&asset)
            .with_context(|| format!("Embedded asset missing: {asset}"))?;
        write(&asset, bytes)?;
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_every_page_and_asset() {
        let dir = tempfile::tempdir().unwrap();
        let count = export_site(SiteConfig::default(), dir.path(), Utc::now()).unwrap();

        let out = dir.path();
        for file in [
            "index.html",
            "privacy/index.html",
            "terms/index.html",
            "404.html",
            "sitemap.xml",
            "robots.txt",
            "sw.js",
            "manifest.webmanifest",
            "static/site.css",
            "static/catalog.js",
        ] {
            assert!(out.join(file).is_file(), "missing {file}");
        }
        for tool in all_tools() {
            assert!(out.join("tools").join(tool.id).join("index.html").is_file());
        }

        let expected = 4 + all_tools().len() + 4 + embedded::static_files().len();
        assert_eq!(count, expected);

        let sitemap = fs::read_to_string(out.join("sitemap.xml")).unwrap();
        assert_eq!(sitemap.matches("<url>").count(), all_tools().len() + 3);
    }

    #[test]
    fn uses_configured_last_modified() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig {
            last_modified: Some("2024-05-01T00:00:00Z".parse().unwrap()),
            ..SiteConfig::default()
        };
        export_site(config, dir.path(), Utc::now()).unwrap();

        let sitemap = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("<lastmod>2024-05-01T00:00:00Z</lastmod>"));
    }

    #[test]
    fn exported_pages_work_without_server_endpoints() {
        let dir = tempfile::tempdir().unwrap();
        export_site(SiteConfig::default(), dir.path(), Utc::now()).unwrap();
        let out = dir.path();

        let index = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(index.contains("id=\"tool-data\""));
        assert!(index.contains("\"id\":\"base64\""));
        assert!(index.contains("data-static"));

        for tool in all_tools() {
            let page = fs::read_to_string(out.join("tools").join(tool.id).join("index.html")).unwrap();
            assert!(!page.contains("id=\"tool-form\""), "{} posts to the runner", tool.id);
            assert!(!page.contains("/static/tool.js"));
        }

        let catalog = fs::read_to_string(out.join("static/catalog.js")).unwrap();
        assert!(catalog.contains("tool-data"));
    }
}
