//! This module contains the basic HTTP client used in this library.
use crate::query::{Method, Query};
use crate::{Error, Result};

/// Basic HTTP client wrapping a `reqwest::Client`, with the minimum required
/// features to call the storefront backend.
/// Clone is low cost, internals of `reqwest::Client` are wrapped in an Arc.
#[derive(Debug, Clone)]
pub struct Client {
    inner: reqwest::Client,
}

/// Represents a basic response from our basic HTTP client.
pub struct QueryResponse {
    pub text: String,
    pub status_code: u16,
}

impl Client {
    pub fn new() -> Result<Self> {
        let inner = reqwest::Client::builder().build()?;
        Ok(Self { inner })
    }
    /// Re-use a pre-existing reqwest::Client.
    pub fn new_from_reqwest_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
    /// Execute a query against `base_url`. Fails with a network error if the
    /// request never completes, or a status error on a non-2xx response.
    /// No retries and no request timeout are applied here; a hung request
    /// blocks only its caller.
    pub async fn execute(&self, base_url: &str, query: &impl Query) -> Result<QueryResponse> {
        let url = format!("{}{}", base_url.trim_end_matches('/'), query.path());
        let mut request_builder = match query.method() {
            Method::Get => self.inner.get(&url),
            Method::Post => self.inner.post(&url),
            Method::Put => self.inner.put(&url),
            Method::Delete => self.inner.delete(&url),
        };
        let params = query.params();
        if !params.is_empty() {
            request_builder = request_builder.query(&params);
        }
        if let Some(body) = query.body() {
            request_builder = request_builder.json(&body);
        }
        let response = request_builder.send().await?;
        let status_code = response.status().as_u16();
        let text = response.text().await?;
        if !(200..300).contains(&status_code) {
            return Err(Error::status(status_code, text));
        }
        Ok(QueryResponse { text, status_code })
    }
}
