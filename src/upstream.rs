// Upstream HTTP client for the delivery-data API.
// Byte-oriented on purpose: list fallbacks pass upstream bodies through
// verbatim, so JSON decoding stays at the call sites.
use std::time::Duration;

use anyhow::Context;
use bytes::Bytes;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The request never produced a usable response (connect failure,
    /// timeout, or a failed body read).
    #[error("upstream request failed: {0}")]
    Unavailable(#[from] reqwest::Error),
    /// The upstream answered with a status other than 200.
    #[error("upstream returned status {status}")]
    Status { status: StatusCode },
}

pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("build upstream http client")?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches `path` (leading slash included by the caller) and returns the
    /// raw response body. Exactly one attempt, no retries; any status other
    /// than 200 is an error.
    pub async fn fetch(&self, path: &str) -> Result<Bytes, UpstreamError> {
        let url = format!("{}{}", self.base_url, path);
        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                metrics::counter!("entrega_upstream_requests_total", "outcome" => "unreachable")
                    .increment(1);
                return Err(UpstreamError::Unavailable(err));
            }
        };
        let status = response.status();
        if status != StatusCode::OK {
            metrics::counter!("entrega_upstream_requests_total", "outcome" => "http_error")
                .increment(1);
            return Err(UpstreamError::Status { status });
        }
        match response.bytes().await {
            Ok(body) => {
                metrics::counter!("entrega_upstream_requests_total", "outcome" => "ok")
                    .increment(1);
                Ok(body)
            }
            Err(err) => {
                metrics::counter!("entrega_upstream_requests_total", "outcome" => "unreachable")
                    .increment(1);
                Err(UpstreamError::Unavailable(err))
            }
        }
    }
}
