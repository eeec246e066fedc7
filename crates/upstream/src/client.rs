use std::time::Instant;

use serde_json::{Map, Value};

pub const DEFAULT_BASE_URL: &str = "https://api-live.euroleague.net/v3";

/// Query parameters before filtering: entries with a `None` value are
/// dropped and never reach the wire.
pub type Params<'a> = &'a [(&'a str, Option<String>)];

#[derive(Debug, thiserror::Error)]
enum RequestError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("response body is not a JSON object")]
    NotAnObject,
}

/// Client for the Euroleague REST API.
///
/// `request` is fail-soft: transport errors, non-2xx statuses and malformed
/// bodies are logged and collapsed into an empty map. Callers observe absent
/// data, never an error.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        let base_url =
            std::env::var("EUROLEAGUE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET against `{base_url}/{endpoint}` and return the JSON body
    /// as a map. Returns an empty map on any failure.
    pub async fn request(&self, endpoint: &str, params: Params<'_>) -> Map<String, Value> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let query: Vec<(&str, &str)> = params
            .iter()
            .filter_map(|(key, value)| value.as_deref().map(|v| (*key, v)))
            .collect();

        let before = Instant::now();
        match self.get_json(&url, &query).await {
            Ok(body) => {
                tracing::info!("GET {url} {:.2?}", before.elapsed());
                body
            }
            Err(err) => {
                tracing::error!("GET {url} failed: {err}");
                Map::new()
            }
        }
    }

    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<Map<String, Value>, RequestError> {
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        let body: Value = response.json().await?;
        match body {
            Value::Object(map) => Ok(map),
            _ => Err(RequestError::NotAnObject),
        }
    }
}
