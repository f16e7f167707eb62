//! Locales and the translation table for category labels and page chrome.
//!
//! Tool names and descriptions are English only; everything the homepage
//! frames them with is translated here.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Zh,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// Parse a locale code, accepting region suffixes such as `zh-CN`.
    pub fn parse(code: &str) -> Option<Self> {
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(primary))
    }

    /// Value for the `<html lang>` attribute and `hreflang`.
    pub fn html_lang(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh-CN",
        }
    }
}

/// Look up `key` for `locale`.
///
/// Category labels are keyed `category.<id>`. Unknown keys fall back to the
/// English text, then to the key itself.
pub fn translate(locale: Locale, key: &str) -> &str {
    lookup(locale, key)
        .or_else(|| lookup(Locale::En, key))
        .unwrap_or(key)
}

/// Label for a category id.
pub fn category_label(locale: Locale, category_id: &str) -> String {
    let key = format!("category.{category_id}");
    let label = translate(locale, &key);
    if label == key {
        category_id.to_string()
    } else {
        label.to_string()
    }
}

fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    let text = match (locale, key) {
        (Locale::En, "category.all") => "All tools",
        (Locale::En, "category.formatting") => "Formatters",
        (Locale::En, "category.encoding") => "Encoders",
        (Locale::En, "category.conversion") => "Converters",
        (Locale::En, "category.generators") => "Generators",
        (Locale::En, "category.text") => "Text",
        (Locale::En, "category.image") => "Images",
        (Locale::En, "home.tagline") => "Small, fast utilities for everyday development work.",
        (Locale::En, "home.search_placeholder") => "Search tools...",
        (Locale::En, "home.empty") => "No tools match your search.",
        (Locale::En, "nav.home") => "Home",
        (Locale::En, "nav.privacy") => "Privacy",
        (Locale::En, "nav.terms") => "Terms",
        (Locale::En, "tool.input") => "Input",
        (Locale::En, "tool.output") => "Output",
        (Locale::En, "tool.run") => "Run",
        (Locale::En, "tool.browser_only") => "This tool runs entirely in your browser. Files never leave your device.",
        (Locale::En, "tool.needs_server") => "This tool runs on the Toolshelf server and is not available in the static copy of the site.",
        (Locale::En, "not_found.title") => "Page not found",
        (Locale::En, "not_found.body") => "The page you are looking for does not exist.",

        (Locale::Zh, "category.all") => "全部工具",
        (Locale::Zh, "category.formatting") => "格式化",
        (Locale::Zh, "category.encoding") => "编码",
        (Locale::Zh, "category.conversion") => "转换",
        (Locale::Zh, "category.generators") => "生成器",
        (Locale::Zh, "category.text") => "文本",
        (Locale::Zh, "category.image") => "图片",
        (Locale::Zh, "home.tagline") => "小巧快速的日常开发工具。",
        (Locale::Zh, "home.search_placeholder") => "搜索工具...",
        (Locale::Zh, "home.empty") => "没有匹配的工具。",
        (Locale::Zh, "nav.home") => "首页",
        (Locale::Zh, "nav.privacy") => "隐私政策",
        (Locale::Zh, "nav.terms") => "服务条款",
        (Locale::Zh, "tool.input") => "输入",
        (Locale::Zh, "tool.output") => "输出",
        (Locale::Zh, "tool.run") => "运行",
        (Locale::Zh, "tool.browser_only") => "此工具完全在浏览器中运行，文件不会离开你的设备。",
        (Locale::Zh, "tool.needs_server") => "此工具需要在 Toolshelf 服务器上运行，静态站点中不可用。",
        (Locale::Zh, "not_found.title") => "页面不存在",
        (Locale::Zh, "not_found.body") => "你访问的页面不存在。",
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::all_categories;

    #[test]
    fn parse_accepts_region_suffix() {
        assert_eq!(Locale::parse("zh-CN"), Some(Locale::Zh));
        assert_eq!(Locale::parse("EN_us"), Some(Locale::En));
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn every_category_has_a_label_in_every_locale() {
        for locale in Locale::ALL {
            for category in all_categories() {
                let key = format!("category.{}", category.id);
                assert!(lookup(locale, &key).is_some(), "{key} missing for {locale:?}");
            }
        }
    }

    #[test]
    fn unknown_keys_fall_back() {
        assert_eq!(translate(Locale::Zh, "no.such.key"), "no.such.key");
        assert_eq!(category_label(Locale::En, "mystery"), "mystery");
        assert_eq!(category_label(Locale::Zh, "encoding"), "编码");
    }
}
