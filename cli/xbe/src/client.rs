//! HTTP client for API communication.

use std::time::Duration;

use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde_json::Value;
use tracing::debug;
use xbe_jsonapi::{error_summary, Document, MEDIA_TYPE};

use crate::error::CliError;

/// Longest raw body echoed in an error summary.
const MAX_ERROR_BODY: usize = 500;

/// Query parameters as ordered pairs (`filter[broker]`, `page[limit]`, ...).
pub type QueryPairs = [(String, String)];

/// API client for the JSON:API server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client; `token` becomes a bearer `Authorization` header.
    pub fn new(base_url: &str, token: Option<&str>, timeout: Duration) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(MEDIA_TYPE));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("xbe-cli/", env!("CARGO_PKG_VERSION"))),
        );

        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
                .context("Invalid token format")?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a document.
    pub async fn get(&self, path: &str, query: &QueryPairs) -> Result<Document, CliError> {
        let request = self.client.get(self.url(path)).query(query);
        let body = self.send(Method::GET, path, request).await?;
        Ok(Document::from_slice(&body)?)
    }

    /// POST a request document. An empty reply decodes as an empty document.
    pub async fn post(&self, path: &str, document: &Value) -> Result<Document, CliError> {
        self.post_with_query(path, &[], document).await
    }

    /// POST a request document with query parameters (e.g. `meta[...]`).
    pub async fn post_with_query(
        &self,
        path: &str,
        query: &QueryPairs,
        document: &Value,
    ) -> Result<Document, CliError> {
        let request = self.client.post(self.url(path)).query(query);
        let request = self.with_body(request, document)?;
        let body = self.send(Method::POST, path, request).await?;
        decode_optional(&body)
    }

    /// PATCH a request document. An empty reply decodes as an empty document.
    pub async fn patch(&self, path: &str, document: &Value) -> Result<Document, CliError> {
        let request = self.with_body(self.client.patch(self.url(path)), document)?;
        let body = self.send(Method::PATCH, path, request).await?;
        decode_optional(&body)
    }

    /// DELETE a resource; any 2xx counts as success.
    pub async fn delete(&self, path: &str) -> Result<(), CliError> {
        let request = self.client.delete(self.url(path));
        self.send(Method::DELETE, path, request).await?;
        Ok(())
    }

    fn with_body(&self, request: RequestBuilder, document: &Value) -> Result<RequestBuilder, CliError> {
        let body = serde_json::to_vec(document).context("Failed to encode request body")?;
        Ok(request.header(CONTENT_TYPE, MEDIA_TYPE).body(body))
    }

    /// Send a request and return the raw body of a successful response.
    async fn send(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<Vec<u8>, CliError> {
        debug!(%method, path, "sending request");
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        debug!(%method, path, status = status.as_u16(), bytes = body.len(), "received response");

        if status.is_success() {
            Ok(body)
        } else {
            Err(api_error(status, &body))
        }
    }
}

fn decode_optional(body: &[u8]) -> Result<Document, CliError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Document::default());
    }
    Ok(Document::from_slice(body)?)
}

/// Map a non-2xx response to an error, preferring JSON:API `errors`.
fn api_error(status: StatusCode, body: &[u8]) -> CliError {
    if status == StatusCode::UNAUTHORIZED {
        return CliError::NotAuthenticated;
    }

    let raw = String::from_utf8_lossy(body).trim().to_string();
    let summary = Document::from_slice(body)
        .ok()
        .map(|doc| error_summary(&doc.errors))
        .filter(|summary| !summary.is_empty())
        .unwrap_or_else(|| {
            if raw.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            } else {
                cap(&raw, MAX_ERROR_BODY)
            }
        });

    CliError::Api {
        status: status.as_u16(),
        summary,
        body: raw,
    }
}

fn cap(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(max).collect();
        out.push_str("...");
        out
    }
}
