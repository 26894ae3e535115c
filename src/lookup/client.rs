//! Product lookup boundary and the HTTP client for the product service

use crate::lookup::error::{LookupError, LookupResult};
use crate::lookup::record::ProductRecord;
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;

/// Something that can resolve a product code to a [`ProductRecord`]
#[async_trait]
pub trait ProductLookup: Send + Sync {
    /// Perform exactly one request for `code`
    async fn lookup(&self, code: &str) -> LookupResult<ProductRecord>;

    /// Short name used in log lines
    fn name(&self) -> &str;
}

/// Build a reqwest client, with a request timeout only when one is configured
pub(crate) fn build_http_client(timeout: Option<Duration>) -> LookupResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| LookupError::Transport(format!("Failed to create HTTP client: {}", e)))
}

pub(crate) fn parse_base_url(base_url: &str) -> LookupResult<Url> {
    let url = Url::parse(base_url).map_err(|e| LookupError::InvalidUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(LookupError::InvalidUrl {
            url: base_url.to_string(),
            reason: "Only http:// and https:// base URLs are supported".to_string(),
        });
    }
    Ok(url)
}

/// Append path segments to a base URL, percent-encoding each one
pub(crate) fn join_segments(base: &Url, segments: &[&str]) -> LookupResult<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| LookupError::InvalidUrl {
            url: base.to_string(),
            reason: "URL cannot carry path segments".to_string(),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Client for the product service's `GET /api/scan/{code}` route
pub struct HttpLookupClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpLookupClient {
    /// Create a client for the service at `base_url`
    ///
    /// No timeout is applied unless one is given; an unresponsive service
    /// then keeps the lookup pending.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> LookupResult<Self> {
        Ok(Self {
            client: build_http_client(timeout)?,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// URL addressing `code` as a single path segment
    pub fn request_url(&self, code: &str) -> LookupResult<Url> {
        join_segments(&self.base_url, &["api", "scan", code])
    }
}

#[async_trait]
impl ProductLookup for HttpLookupClient {
    async fn lookup(&self, code: &str) -> LookupResult<ProductRecord> {
        let url = self.request_url(code)?;
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log::debug!(
                "Product service answered {} for '{}'",
                status.as_u16(),
                code
            );
            return Err(LookupError::NotFound);
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| LookupError::Parse(e.to_string()))
    }

    fn name(&self) -> &str {
        "product-service"
    }
}
