//! Page rendering with the embedded minijinja templates.

use minijinja::{context, Environment, Value};
use serde::Serialize;

use super::metadata::{static_page_metadata, tool_metadata, PageMetadata, StaticPage};
use crate::catalog::{all_categories, all_tools, filter_tools, ToolDescriptor};
use crate::config::SiteConfig;
use crate::embedded;
use crate::i18n::{category_label, translate, Locale};
use crate::runner;

/// Template environment plus the config every page needs.
#[derive(Debug)]
pub struct SiteRenderer {
    env: Environment<'static>,
    config: SiteConfig,
    /// Pages are written to disk with no server behind them
    static_export: bool,
}

/// Fields shared by every page: header, footer and head metadata.
#[derive(Debug, Serialize)]
struct Chrome {
    site_name: String,
    locale: &'static str,
    html_lang: &'static str,
    /// `?lang=<code>` for non-default locales, empty otherwise
    lang_query: String,
    lang_param: &'static str,
    locale_links: Vec<LocaleLink>,
    meta: PageMetadata,
}

#[derive(Debug, Serialize)]
struct LocaleLink {
    code: &'static str,
    href: String,
    active: bool,
}

#[derive(Debug, Serialize)]
struct CategoryLink {
    id: &'static str,
    icon: &'static str,
    label: String,
    href: String,
    active: bool,
}

impl SiteRenderer {
    pub fn new(config: SiteConfig) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for (name, source) in embedded::templates() {
            env.add_template(name, source)?;
        }
        env.add_function("t", |locale: String, key: String| -> String {
            let locale = Locale::parse(&locale).unwrap_or(Locale::En);
            translate(locale, &key).to_string()
        });
        Ok(Self {
            env,
            config,
            static_export: false,
        })
    }

    /// Render pages for a static copy of the site: text tools drop their
    /// run form and the homepage filters its embedded registry in the browser.
    pub fn for_static_export(mut self) -> Self {
        self.static_export = true;
        self
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Homepage showing the tools that match `query` within `category`.
    pub fn home(&self, locale: Locale, query: &str, category: &str) -> Result<String, minijinja::Error> {
        let meta = static_page_metadata(&self.config, StaticPage::Home);
        let chrome = self.chrome(locale, "/", meta);
        let tools = filter_tools(query, category, all_tools());

        let categories: Vec<CategoryLink> = all_categories()
            .iter()
            .map(|cat| CategoryLink {
                id: cat.id,
                icon: cat.icon,
                label: category_label(locale, cat.id),
                href: self.home_href(locale, query, cat.id),
                active: cat.id == category,
            })
            .collect();

        self.render(
            "home.html",
            context! {
                query => query,
                category => category,
                categories => categories,
                tools => tools,
                registry => all_tools(),
                static_export => self.static_export,
                ..Value::from_serialize(&chrome)
            },
        )
    }

    /// Page for one tool. `None` when the id is not in the registry.
    pub fn tool(&self, locale: Locale, id: &str) -> Option<Result<String, minijinja::Error>> {
        let meta = tool_metadata(&self.config, id)?;
        let tool: &ToolDescriptor = all_tools().iter().find(|tool| tool.id == id)?;
        let chrome = self.chrome(locale, tool.path, meta);

        Some(self.render(
            "tool.html",
            context! {
                tool => tool,
                category_label => category_label(locale, tool.category),
                modes => runner::modes(tool.id),
                static_export => self.static_export,
                ..Value::from_serialize(&chrome)
            },
        ))
    }

    /// Privacy or terms page.
    pub fn static_page(&self, locale: Locale, page: StaticPage) -> Result<String, minijinja::Error> {
        let meta = static_page_metadata(&self.config, page);
        let chrome = self.chrome(locale, page.path(), meta);
        let name = match page {
            StaticPage::Privacy => "privacy",
            StaticPage::Terms => "terms",
            StaticPage::Home => return self.home(locale, "", crate::catalog::ALL_CATEGORY),
        };
        self.render("page.html", context! { page => name, ..Value::from_serialize(&chrome) })
    }

    /// Not-found page. It has no canonical URL and is marked `noindex`.
    pub fn not_found(&self, locale: Locale) -> Result<String, minijinja::Error> {
        let meta = PageMetadata {
            title: format!("{} - {}", translate(locale, "not_found.title"), self.config.site_name),
            description: translate(locale, "not_found.body").to_string(),
            canonical_url: String::new(),
            alternates: Vec::new(),
        };
        let mut chrome = self.chrome(locale, "/", meta);
        chrome.meta.canonical_url.clear();
        self.render("not_found.html", Value::from_serialize(&chrome))
    }

    fn render(&self, name: &str, ctx: Value) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }

    fn chrome(&self, locale: Locale, path: &str, mut meta: PageMetadata) -> Chrome {
        let default = self.config.default_locale();
        meta.canonical_url = self.config.localized_url(path, locale);

        let locale_links = self
            .config
            .locales()
            .into_iter()
            .map(|other| LocaleLink {
                code: other.code(),
                href: relative_localized(path, other, default),
                active: other == locale,
            })
            .collect();

        Chrome {
            site_name: self.config.site_name.clone(),
            locale: locale.code(),
            html_lang: locale.html_lang(),
            lang_query: lang_query(locale, default),
            lang_param: if locale == default { "" } else { locale.code() },
            locale_links,
            meta,
        }
    }

    fn home_href(&self, locale: Locale, query: &str, category: &str) -> String {
        let mut href = format!("/?category={}", urlencoding::encode(category));
        if !query.is_empty() {
            href.push_str("&q=");
            href.push_str(&urlencoding::encode(query));
        }
        if locale != self.config.default_locale() {
            href.push_str("&lang=");
            href.push_str(locale.code());
        }
        href
    }
}

fn lang_query(locale: Locale, default: Locale) -> String {
    if locale == default {
        String::new()
    } else {
        format!("?lang={}", locale.code())
    }
}

fn relative_localized(path: &str, locale: Locale, default: Locale) -> String {
    format!("{path}{}", lang_query(locale, default))
}
