use std::{
    sync::OnceLock,
    time::{Duration, Instant},
};

use anyhow::Context;
use common::search_const::DEFAULT_API_TIMEOUT_SECS;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::{Serialize, de::DeserializeOwned};

/// HTTP client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

static API_CLIENT: OnceLock<ApiClient> = OnceLock::new();

/// Process-wide client, built on first use so every server call shares one
/// connection pool.
pub fn get_api_client() -> anyhow::Result<&'static ApiClient> {
    if let Some(client) = API_CLIENT.get() {
        return Ok(client);
    }
    let client = api_client_from_env()?;
    Ok(API_CLIENT.get_or_init(|| client))
}

/// Builds a client from `API_BASE_URL` (or `NEXT_PUBLIC_API_BASE_URL`) and
/// `API_TIMEOUT_SECS`. A missing base URL is not an error here: requests made
/// with it fail and are reported by the caller.
fn api_client_from_env() -> anyhow::Result<ApiClient> {
    let base_url = std::env::var("API_BASE_URL")
        .or_else(|_| std::env::var("NEXT_PUBLIC_API_BASE_URL"))
        .unwrap_or_else(|_| {
            tracing::warn!("API_BASE_URL is not set, backend requests will fail");
            String::new()
        });
    let timeout_secs = std::env::var("API_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_API_TIMEOUT_SECS);
    ApiClient::new(base_url, Duration::from_secs(timeout_secs))
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build http client")?;
        Ok(Self { http, base_url: base_url.into() })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let url = self.endpoint(path);
        let t0 = Instant::now();
        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .with_context(|| format!("GET {url} failed"))?;
        read_json_response(&url, t0, response).await
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> anyhow::Result<T> {
        let url = self.endpoint(path);
        let body = serde_json::to_string(body)?;
        tracing::debug!("POST {}: {}", url, body);
        let t0 = Instant::now();
        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .with_context(|| format!("POST {url} failed"))?;
        read_json_response(&url, t0, response).await
    }
}

async fn read_json_response<T: DeserializeOwned>(url: &str, t0: Instant, response: reqwest::Response) -> anyhow::Result<T> {
    let status = response.status();
    let response_txt = response.text().await.with_context(|| format!("Failed to read response from {url}"))?;
    let dt_ms = t0.elapsed().as_millis();
    if status.is_client_error() || status.is_server_error() {
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    tracing::debug!("{} -> {} (len = {}, {}ms)", url, status, response_txt.len(), dt_ms);
    let parsed = serde_json::from_str(&response_txt).with_context(|| format!("Invalid JSON from {url}"))?;
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::get_api_client;

    #[test]
    fn server_calls_share_one_client() {
        let first = get_api_client().unwrap();
        let second = get_api_client().unwrap();
        assert!(std::ptr::eq(first, second));
    }
}
