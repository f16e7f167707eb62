//! `robots.txt`: allow everything except API and asset paths.

use crate::config::SiteConfig;

pub const DISALLOWED_PATHS: &[&str] = &["/api/", "/static/"];

pub fn render_robots(config: &SiteConfig) -> String {
    let mut robots = String::from("User-agent: *\nAllow: /\n");
    for path in DISALLOWED_PATHS {
        robots.push_str("Disallow: ");
        robots.push_str(path);
        robots.push('\n');
    }
    robots.push('\n');
    robots.push_str("Sitemap: ");
    robots.push_str(&config.sitemap_url());
    robots.push('\n');
    robots
}
