//! HTTP routes for the catalog site and its JSON API.

use axum::{
    Json, Router,
    extract::{FromRequestParts, Path, Query, Request, State},
    http::{StatusCode, header, request::Parts},
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Instant;

use super::metadata::StaticPage;
use super::render::SiteRenderer;
use super::robots::render_robots;
use super::sitemap::{render_sitemap, sitemap_entries};
use crate::catalog::{ALL_CATEGORY, ToolDescriptor, all_categories, all_tools, filter_tools};
use crate::embedded;
use crate::i18n::{Locale, category_label};
use crate::runner::{self, RunError};

#[derive(Clone)]
pub struct AppState {
    renderer: Arc<SiteRenderer>,
}

impl AppState {
    pub fn new(renderer: SiteRenderer) -> Self {
        Self {
            renderer: Arc::new(renderer),
        }
    }

    fn locale(&self, lang: Option<&str>) -> Locale {
        lang.and_then(Locale::parse)
            .unwrap_or_else(|| self.renderer.config().default_locale())
    }
}

/// Query string shared by the homepage, pages and the filter API.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub q: String,
    pub category: Option<String>,
    pub lang: Option<String>,
}

impl PageQuery {
    fn category(&self) -> &str {
        self.category
            .as_deref()
            .filter(|category| !category.is_empty())
            .unwrap_or(ALL_CATEGORY)
    }
}

/// [`PageQuery`] for HTML pages. A query string that does not parse falls
/// back to the defaults so the page still renders.
struct PageParams(PageQuery);

impl<S: Send + Sync> FromRequestParts<S> for PageParams {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match Query::<PageQuery>::try_from_uri(&parts.uri) {
            Ok(Query(params)) => Ok(Self(params)),
            Err(rejection) => {
                log::debug!("Ignoring query string of {}: {rejection}", parts.uri.path());
                Ok(Self(PageQuery::default()))
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct ToolListResponse {
    count: usize,
    tools: Vec<&'static ToolDescriptor>,
}

#[derive(Debug, Serialize)]
struct CategoryResponse {
    id: &'static str,
    icon: &'static str,
    label: String,
}

#[derive(Debug, Deserialize)]
pub struct RunRequest {
    #[serde(default)]
    pub input: String,
    pub mode: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/tools/{id}", get(tool_page))
        .route("/privacy", get(privacy))
        .route("/terms", get(terms))
        .route("/sitemap.xml", get(sitemap))
        .route("/robots.txt", get(robots))
        .route("/sw.js", get(service_worker))
        .route("/manifest.webmanifest", get(manifest))
        .route("/static/{*path}", get(static_asset))
        .route("/api/tools", get(list_tools))
        .route("/api/categories", get(list_categories))
        .route("/api/tools/{id}/run", post(run_tool))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    log::debug!(
        "{method} {path} -> {} ({:?})",
        response.status().as_u16(),
        started.elapsed()
    );
    response
}

fn html_page(status: StatusCode, rendered: Result<String, minijinja::Error>) -> Response {
    match rendered {
        Ok(body) => (status, Html(body)).into_response(),
        Err(e) => {
            log::error!("Template rendering failed: {e:#}");
            (StatusCode::INTERNAL_SERVER_ERROR, "template error").into_response()
        }
    }
}

async fn home(State(state): State<AppState>, PageParams(params): PageParams) -> Response {
    let locale = state.locale(params.lang.as_deref());
    html_page(
        StatusCode::OK,
        state.renderer.home(locale, &params.q, params.category()),
    )
}

async fn tool_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
    PageParams(params): PageParams,
) -> Response {
    let locale = state.locale(params.lang.as_deref());
    match state.renderer.tool(locale, &id) {
        Some(rendered) => html_page(StatusCode::OK, rendered),
        None => html_page(StatusCode::NOT_FOUND, state.renderer.not_found(locale)),
    }
}

async fn privacy(State(state): State<AppState>, PageParams(params): PageParams) -> Response {
    let locale = state.locale(params.lang.as_deref());
    html_page(StatusCode::OK, state.renderer.static_page(locale, StaticPage::Privacy))
}

async fn terms(State(state): State<AppState>, PageParams(params): PageParams) -> Response {
    let locale = state.locale(params.lang.as_deref());
    html_page(StatusCode::OK, state.renderer.static_page(locale, StaticPage::Terms))
}

async fn not_found(State(state): State<AppState>, PageParams(params): PageParams) -> Response {
    let locale = state.locale(params.lang.as_deref());
    html_page(StatusCode::NOT_FOUND, state.renderer.not_found(locale))
}

async fn sitemap(State(state): State<AppState>) -> Response {
    let entries = sitemap_entries(state.renderer.config(), all_tools(), Utc::now());
    match render_sitemap(&entries) {
        Ok(xml) => ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml).into_response(),
        Err(e) => {
            log::error!("Sitemap rendering failed: {e:#}");
            (StatusCode::INTERNAL_SERVER_ERROR, "sitemap error").into_response()
        }
    }
}

async fn robots(State(state): State<AppState>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_robots(state.renderer.config()),
    )
        .into_response()
}

async fn service_worker() -> Response {
    embedded_asset("sw.js", "application/javascript; charset=utf-8")
}

async fn manifest() -> Response {
    embedded_asset("manifest.webmanifest", "application/manifest+json")
}

async fn static_asset(Path(path): Path<String>) -> Response {
    let content_type = mime_guess::from_path(&path).first_or_octet_stream();
    embedded_asset(&format!("static/{path}"), content_type.as_ref())
}

fn embedded_asset(path: &str, content_type: &str) -> Response {
    match embedded::get_bytes(path) {
        Some(bytes) => (
            [
                (header::CONTENT_TYPE, content_type.to_string()),
                (header::CACHE_CONTROL, "public, max-age=3600".to_string()),
            ],
            bytes,
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn list_tools(Query(params): Query<PageQuery>) -> Json<ToolListResponse> {
    let tools = filter_tools(&params.q, params.category(), all_tools());
    Json(ToolListResponse {
        count: tools.len(),
        tools,
    })
}

async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Json<Vec<CategoryResponse>> {
    let locale = state.locale(params.lang.as_deref());
    Json(
        all_categories()
            .iter()
            .map(|category| CategoryResponse {
                id: category.id,
                icon: category.icon,
                label: category_label(locale, category.id),
            })
            .collect(),
    )
}

async fn run_tool(Path(id): Path<String>, Json(request): Json<RunRequest>) -> Response {
    match runner::run(&id, &request.input, request.mode.as_deref()) {
        Ok(output) => Json(json!({ "output": output })).into_response(),
        Err(e) => {
            let status = match e {
                RunError::UnknownTool(_) => StatusCode::NOT_FOUND,
                _ => StatusCode::BAD_REQUEST,
            };
            (status, Json(json!({ "error": e.to_string() }))).into_response()
        }
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "tools": all_tools().len() }))
}
