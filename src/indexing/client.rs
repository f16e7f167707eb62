use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::auth::fetch_access_token;
use super::{
    INDEXING_SCOPE, IndexingError, PUBLISH_ENDPOINT, SEARCH_CONSOLE_ENDPOINT, ServiceAccountKey,
    WEBMASTERS_SCOPE,
};

const ROW_LIMIT: u32 = 25;

/// API base URLs. Overridable so tests can point at a local mock server.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub publish: String,
    pub search_console: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            publish: PUBLISH_ENDPOINT.to_string(),
            search_console: SEARCH_CONSOLE_ENDPOINT.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishResponse {
    #[serde(default)]
    pub url_notification_metadata: Option<NotificationMetadata>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationMetadata {
    pub latest_update: Option<UrlNotification>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlNotification {
    pub notify_time: Option<String>,
}

impl PublishResponse {
    pub fn notify_time(&self) -> Option<&str> {
        self.url_notification_metadata
            .as_ref()?
            .latest_update
            .as_ref()?
            .notify_time
            .as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalyticsRow {
    #[serde(default)]
    pub keys: Vec<String>,
    #[serde(default)]
    pub clicks: f64,
    #[serde(default)]
    pub impressions: f64,
    #[serde(default)]
    pub ctr: f64,
    #[serde(default)]
    pub position: f64,
}

#[derive(Debug, Deserialize)]
struct AnalyticsResponse {
    #[serde(default)]
    rows: Vec<AnalyticsRow>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyticsQuery<'a> {
    start_date: String,
    end_date: String,
    dimensions: [&'a str; 2],
    row_limit: u32,
}

/// Authenticated client for the two Google APIs. One token per call, no retries.
#[derive(Debug, Clone)]
pub struct IndexingClient {
    http: reqwest::Client,
    key: ServiceAccountKey,
    endpoints: Endpoints,
}

impl IndexingClient {
    pub fn new(key: ServiceAccountKey) -> Self {
        Self::with_endpoints(key, Endpoints::default())
    }

    pub fn with_endpoints(key: ServiceAccountKey, endpoints: Endpoints) -> Self {
        Self {
            http: reqwest::Client::new(),
            key,
            endpoints,
        }
    }

    pub async fn indexing_token(&self) -> Result<String, IndexingError> {
        fetch_access_token(&self.http, &self.key, INDEXING_SCOPE).await
    }

    pub async fn search_console_token(&self) -> Result<String, IndexingError> {
        fetch_access_token(&self.http, &self.key, WEBMASTERS_SCOPE).await
    }

    /// Notify Google that `url` was updated.
    pub async fn publish(&self, token: &str, url: &str) -> Result<PublishResponse, IndexingError> {
        let response = self
            .http
            .post(&self.endpoints.publish)
            .bearer_auth(token)
            .json(&json!({ "url": url, "type": "URL_UPDATED" }))
            .send()
            .await?;

        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Top queries and pages for `site` between `start` and `end` inclusive.
    pub async fn search_analytics(
        &self,
        token: &str,
        site: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AnalyticsRow>, IndexingError> {
        let url = format!(
            "{}/sites/{}/searchAnalytics/query",
            self.endpoints.search_console.trim_end_matches('/'),
            urlencoding::encode(site)
        );
        let query = AnalyticsQuery {
            start_date: start.format("%Y-%m-%d").to_string(),
            end_date: end.format("%Y-%m-%d").to_string(),
            dimensions: ["query", "page"],
            row_limit: ROW_LIMIT,
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&query)
            .send()
            .await?;

        let response = check_status(response).await?;
        let body: AnalyticsResponse = response.json().await?;
        Ok(body.rows)
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, IndexingError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(IndexingError::Api {
        status: status.as_u16(),
        body,
    })
}
