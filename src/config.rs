//! Site configuration loaded from an optional JSON file.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::i18n::Locale;

/// Environment variable that overrides `base_url`.
pub const BASE_URL_ENV: &str = "TOOLSHELF_BASE_URL";

/// Site-wide settings shared by page rendering, the sitemap and the indexing commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Appended to every page title
    pub site_name: String,

    /// Absolute origin without a trailing slash, e.g. `https://toolshelf.dev`
    pub base_url: String,

    pub default_locale: String,

    /// Locales rendered as `hreflang` alternates
    pub locales: Vec<String>,

    /// Fixed `lastmod` for sitemap entries. Build time when unset.
    pub last_modified: Option<DateTime<Utc>>,

    /// Search Console property, e.g. `sc-domain:toolshelf.dev`.
    /// Defaults to `base_url` with a trailing slash.
    pub search_console_site: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Toolshelf".to_string(),
            base_url: "https://toolshelf.dev".to_string(),
            default_locale: "en".to_string(),
            locales: vec!["en".to_string(), "zh".to_string()],
            last_modified: None,
            search_console_site: None,
        }
    }
}

impl SiteConfig {
    /// Load config from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: SiteConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file as JSON: {}", path.display()))?;

        Ok(config)
    }

    /// Load from `path` if given, otherwise defaults, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                config.base_url = base_url;
            }
        }

        config.base_url = normalize_base_url(&config.base_url);
        Ok(config)
    }

    pub fn default_locale(&self) -> Locale {
        Locale::parse(&self.default_locale).unwrap_or(Locale::En)
    }

    /// Configured locales that the translation table knows, default locale first.
    pub fn locales(&self) -> Vec<Locale> {
        let default = self.default_locale();
        let mut locales = vec![default];
        for locale in self.locales.iter().filter_map(|code| Locale::parse(code)) {
            if !locales.contains(&locale) {
                locales.push(locale);
            }
        }
        locales
    }

    /// Absolute URL for a site-relative path.
    pub fn absolute_url(&self, path: &str) -> String {
        if path == "/" {
            format!("{}/", self.base_url)
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    /// Absolute URL of `path` rendered in `locale`.
    ///
    /// The default locale uses the bare URL; others add `?lang=<code>`.
    pub fn localized_url(&self, path: &str, locale: Locale) -> String {
        let url = self.absolute_url(path);
        if locale == self.default_locale() {
            url
        } else {
            format!("{url}?lang={}", locale.code())
        }
    }

    pub fn sitemap_url(&self) -> String {
        self.absolute_url("/sitemap.xml")
    }

    pub fn search_console_site(&self) -> String {
        self.search_console_site
            .clone()
            .unwrap_or_else(|| format!("{}/", self.base_url))
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_cover_both_locales() {
        let config = SiteConfig::default();
        assert_eq!(config.locales(), vec![Locale::En, Locale::Zh]);
        assert_eq!(config.default_locale(), Locale::En);
    }

    #[test]
    fn urls_are_absolute_and_localized() {
        let config = SiteConfig::default();
        assert_eq!(config.absolute_url("/"), "https://toolshelf.dev/");
        assert_eq!(
            config.localized_url("/tools/base64", Locale::Zh),
            "https://toolshelf.dev/tools/base64?lang=zh"
        );
        assert_eq!(
            config.localized_url("/tools/base64", Locale::En),
            "https://toolshelf.dev/tools/base64"
        );
        assert_eq!(config.search_console_site(), "https://toolshelf.dev/");
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"site_name": "Devbox", "base_url": "https://devbox.example/"}}"#).unwrap();

        let config = SiteConfig::from_file(file.path()).unwrap();
        assert_eq!(config.site_name, "Devbox");
        assert_eq!(config.default_locale, "en");
        assert_eq!(normalize_base_url(&config.base_url), "https://devbox.example");
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let err = SiteConfig::from_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn unknown_locales_are_skipped() {
        let config = SiteConfig {
            default_locale: "zh".to_string(),
            locales: vec!["en".into(), "klingon".into(), "zh".into()],
            ..SiteConfig::default()
        };
        assert_eq!(config.locales(), vec![Locale::Zh, Locale::En]);
    }
}
