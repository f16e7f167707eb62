//! `sitemap.xml` generation.

use anyhow::Context;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::metadata::{alternates, AlternateLink, StaticPage};
use crate::catalog::ToolDescriptor;
use crate::config::SiteConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Yearly,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
    pub alternates: Vec<AlternateLink>,
}

const HOME: (ChangeFrequency, f32) = (ChangeFrequency::Daily, 1.0);
const TOOL: (ChangeFrequency, f32) = (ChangeFrequency::Weekly, 0.8);
const LEGAL: (ChangeFrequency, f32) = (ChangeFrequency::Yearly, 0.3);

/// Homepage, privacy, terms, then one entry per tool in registry order.
pub fn sitemap_entries(
    config: &SiteConfig,
    tools: &[ToolDescriptor],
    now: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    let last_modified = config.last_modified.unwrap_or(now);
    let entry = |path: &str, (change_frequency, priority): (ChangeFrequency, f32)| SitemapEntry {
        url: config.absolute_url(path),
        last_modified,
        change_frequency,
        priority,
        alternates: alternates(config, path),
    };

    let mut entries = Vec::with_capacity(tools.len() + StaticPage::ALL.len());
    for page in StaticPage::ALL {
        let schedule = match page {
            StaticPage::Home => HOME,
            StaticPage::Privacy | StaticPage::Terms => LEGAL,
        };
        entries.push(entry(page.path(), schedule));
    }
    entries.extend(tools.iter().map(|tool| entry(tool.path, TOOL)));
    entries
}

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

#[derive(Serialize)]
#[serde(rename = "urlset")]
struct UrlSet<'a> {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    #[serde(rename = "@xmlns:xhtml")]
    xmlns_xhtml: &'static str,
    #[serde(rename = "url")]
    urls: Vec<UrlElement<'a>>,
}

#[derive(Serialize)]
struct UrlElement<'a> {
    loc: &'a str,
    #[serde(rename = "xhtml:link")]
    links: Vec<XhtmlLink<'a>>,
    lastmod: String,
    changefreq: ChangeFrequency,
    priority: String,
}

#[derive(Serialize)]
struct XhtmlLink<'a> {
    #[serde(rename = "@rel")]
    rel: &'static str,
    #[serde(rename = "@hreflang")]
    hreflang: &'a str,
    #[serde(rename = "@href")]
    href: &'a str,
}

/// Serialize entries as a `urlset` document with `xhtml:link` alternates.
pub fn render_sitemap(entries: &[SitemapEntry]) -> anyhow::Result<String> {
    let urlset = UrlSet {
        xmlns: SITEMAP_NS,
        xmlns_xhtml: XHTML_NS,
        urls: entries
            .iter()
            .map(|entry| UrlElement {
                loc: &entry.url,
                links: entry
                    .alternates
                    .iter()
                    .map(|link| XhtmlLink {
                        rel: "alternate",
                        hreflang: link.hreflang,
                        href: &link.href,
                    })
                    .collect(),
                lastmod: entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true),
                changefreq: entry.change_frequency,
                priority: format!("{:.1}", entry.priority),
            })
            .collect(),
    };

    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let mut serializer = quick_xml::se::Serializer::new(&mut xml);
    serializer.indent(' ', 2);
    urlset
        .serialize(serializer)
        .context("Failed to serialize sitemap")?;
    xml.push('\n');
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::all_tools;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap()
    }

    #[test]
    fn one_entry_per_tool_plus_three_pages() {
        let entries = sitemap_entries(&SiteConfig::default(), all_tools(), fixed_now());
        assert_eq!(entries.len(), all_tools().len() + 3);
    }

    #[test]
    fn schedules_are_fixed_per_page_kind() {
        let entries = sitemap_entries(&SiteConfig::default(), all_tools(), fixed_now());

        assert_eq!(entries[0].url, "https://toolshelf.dev/");
        assert_eq!(entries[0].change_frequency, ChangeFrequency::Daily);
        assert_eq!(entries[0].priority, 1.0);

        assert_eq!(entries[1].url, "https://toolshelf.dev/privacy");
        assert_eq!(entries[2].url, "https://toolshelf.dev/terms");
        assert_eq!(entries[2].change_frequency, ChangeFrequency::Yearly);

        for entry in &entries[3..] {
            assert!(entry.url.starts_with("https://toolshelf.dev/tools/"));
            assert_eq!(entry.change_frequency, ChangeFrequency::Weekly);
            assert_eq!(entry.priority, 0.8);
        }
    }

    #[test]
    fn configured_last_modified_wins() {
        let pinned = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let config = SiteConfig {
            last_modified: Some(pinned),
            ..SiteConfig::default()
        };
        let entries = sitemap_entries(&config, all_tools(), fixed_now());
        assert!(entries.iter().all(|entry| entry.last_modified == pinned));
    }

    #[test]
    fn renders_urlset_with_alternates() {
        let entries = sitemap_entries(&SiteConfig::default(), &all_tools()[..1], fixed_now());
        let xml = render_sitemap(&entries).unwrap();

        assert!(xml.starts_with("<?xml"));
        assert_eq!(xml.matches("<url>").count(), 4);
        assert!(xml.contains("<loc>https://toolshelf.dev/tools/json-formatter</loc>"));
        assert!(xml.contains(
            "<xhtml:link rel=\"alternate\" hreflang=\"zh-CN\" href=\"https://toolshelf.dev/privacy?lang=zh\"/>"
        ));
        assert!(xml.contains("<lastmod>2026-10-19T08:30:00Z</lastmod>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>0.3</priority>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn escapes_urls() {
        let config = SiteConfig {
            base_url: "https://example.com/a&b".to_string(),
            ..SiteConfig::default()
        };
        let entries = sitemap_entries(&config, &[], fixed_now());
        let xml = render_sitemap(&entries).unwrap();

        assert!(xml.contains("<loc>https://example.com/a&amp;b/</loc>"));
        assert!(!xml.contains("a&b"));
    }
}
