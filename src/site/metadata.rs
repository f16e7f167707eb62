//! Head metadata (title, description, canonical and alternate links) per page.

use serde::Serialize;

use crate::catalog::find_tool;
use crate::config::SiteConfig;
use crate::i18n::Locale;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateLink {
    pub hreflang: &'static str,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub alternates: Vec<AlternateLink>,
}

/// Pages that exist independently of the tool registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticPage {
    Home,
    Privacy,
    Terms,
}

impl StaticPage {
    pub const ALL: [StaticPage; 3] = [StaticPage::Home, StaticPage::Privacy, StaticPage::Terms];

    pub fn path(self) -> &'static str {
        match self {
            StaticPage::Home => "/",
            StaticPage::Privacy => "/privacy",
            StaticPage::Terms => "/terms",
        }
    }

    fn heading(self) -> Option<&'static str> {
        match self {
            StaticPage::Home => None,
            StaticPage::Privacy => Some("Privacy Policy"),
            StaticPage::Terms => Some("Terms of Service"),
        }
    }

    fn description(self) -> &'static str {
        match self {
            StaticPage::Home => {
                "Free online developer tools: formatters, encoders, converters, generators and image utilities that run in your browser."
            }
            StaticPage::Privacy => "How this site handles your data: tools run locally and nothing you paste is stored.",
            StaticPage::Terms => "Terms of service for using the developer tools on this site.",
        }
    }
}

/// Metadata for the tool with `id`, or `None` when no such tool exists.
pub fn tool_metadata(config: &SiteConfig, id: &str) -> Option<PageMetadata> {
    let tool = find_tool(id)?;
    Some(PageMetadata {
        title: format!("{} - {}", tool.name, config.site_name),
        description: tool.description.to_string(),
        canonical_url: config.absolute_url(tool.path),
        alternates: alternates(config, tool.path),
    })
}

pub fn static_page_metadata(config: &SiteConfig, page: StaticPage) -> PageMetadata {
    let title = match page.heading() {
        Some(heading) => format!("{heading} - {}", config.site_name),
        None => format!("{} - Developer Tools", config.site_name),
    };
    PageMetadata {
        title,
        description: page.description().to_string(),
        canonical_url: config.absolute_url(page.path()),
        alternates: alternates(config, page.path()),
    }
}

/// One link per configured locale.
pub fn alternates(config: &SiteConfig, path: &str) -> Vec<AlternateLink> {
    config
        .locales()
        .into_iter()
        .map(|locale: Locale| AlternateLink {
            hreflang: locale.html_lang(),
            href: config.localized_url(path, locale),
        })
        .collect()
}
