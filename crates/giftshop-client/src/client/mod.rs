//! HTTP client for the gift-shop REST backend.

mod catalog;
mod orders;

use std::time::Duration;

use giftshop_core::AppConfig;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use serde_json::Value;

use crate::error::ClientError;
use crate::response::decode_json_body;

/// Client for the catalog, admin and order endpoints.
///
/// Every non-2xx status becomes [`ClientError::UnexpectedStatus`] carrying the
/// response body, which the backend uses for human-readable error text.
/// Nothing is retried and there is no request timeout; only connecting is
/// bounded.
#[derive(Debug, Clone)]
pub struct ShopClient {
    client: Client,
    base_url: String,
}

impl ShopClient {
    /// Creates a client from the loaded application config.
    ///
    /// # Errors
    ///
    /// See [`ShopClient::with_base_url`].
    pub fn new(config: &AppConfig) -> Result<Self, ClientError> {
        Self::with_base_url(
            &config.api_base_url,
            &config.user_agent,
            config.connect_timeout_secs,
        )
    }

    /// Creates a client against an explicit base URL, e.g. a mock server.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if `base_url` is not an
    /// absolute `http`/`https` URL, or [`ClientError::Http`] if the
    /// underlying `reqwest::Client` cannot be built.
    pub fn with_base_url(
        base_url: &str,
        user_agent: &str,
        connect_timeout_secs: u64,
    ) -> Result<Self, ClientError> {
        let base_url = normalize_base_url(base_url)?;
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, base_url })
    }

    /// The base URL every endpoint path is appended to, without a trailing
    /// slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Sends `request` and returns the body text of a 2xx response.
    async fn send(&self, request: RequestBuilder, url: String) -> Result<String, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), %url, "backend rejected request");
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url,
                body,
            });
        }
        Ok(body)
    }

    /// `GET {path}` and decodes the body, unwrapping double-encoded JSON.
    async fn get_json(&self, path: &str) -> Result<Value, ClientError> {
        let url = self.url(path);
        let body = self.send(self.client.get(&url), url).await?;
        decode_json_body(&body, &format!("GET {path}"))
    }

    /// Sends a JSON body with `method` and returns the raw response text.
    async fn send_json<T: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        payload: &T,
    ) -> Result<String, ClientError> {
        let url = self.url(path);
        let request = self.client.request(method, &url).json(payload);
        self.send(request, url).await
    }

    async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let url = self.url(path);
        self.send(self.client.delete(&url), url).await?;
        Ok(())
    }
}

/// Validates a base URL and strips any trailing slash so endpoint paths can
/// be appended directly.
fn normalize_base_url(base_url: &str) -> Result<String, ClientError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let invalid = |reason: String| ClientError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason,
    };

    let parsed = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme \"{}\"", parsed.scheme())));
    }
    Ok(trimmed.to_owned())
}

/// Reads a JSON object out of an informational mutation response.
///
/// Admin endpoints answer with the saved record, a status string, or
/// nothing; only an object is worth normalizing.
fn record_from_body(body: &str) -> Option<Value> {
    if body.trim().is_empty() {
        return None;
    }
    decode_json_body(body, "mutation response")
        .ok()
        .filter(Value::is_object)
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
