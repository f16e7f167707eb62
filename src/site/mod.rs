//! Everything served to browsers and crawlers: pages, sitemap, robots,
//! the HTTP server and the static export.

mod export;
mod metadata;
mod render;
mod robots;
mod server;
mod sitemap;

pub use export::export_site;
pub use render::SiteRenderer;
pub use server::{AppState, router};
