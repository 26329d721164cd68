//! HTTP request builder

use super::Response;
use crate::error::{Error, Result};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use std::time::Duration;
use url::Url;

/// Builder for HTTP requests.
///
/// Provides a fluent API for constructing and sending a single HTTP request
/// with configurable headers, query parameters, and a JSON body. One builder
/// maps to exactly one request on the wire; there is no retry loop.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
    timeout: Duration,
    pub(crate) http_client: Option<reqwest::Client>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
            timeout: Duration::from_secs(60),
            http_client: None,
        }
    }

    /// Set the HTTP client to use
    pub(crate) fn with_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set a header.
    ///
    /// # Panics
    ///
    /// Panics if the header name or value is invalid according to HTTP
    /// specifications.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key
            .into()
            .parse::<HeaderName>()
            .expect("invalid HTTP header name: header names must be valid HTTP identifiers");
        let value = value
            .into()
            .parse::<HeaderValue>()
            .expect("invalid HTTP header value: header values must be valid ASCII strings");
        self.headers.insert(key, value);
        self
    }

    /// Merge a header map into the request, later values winning.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        for (key, value) in headers.iter() {
            self.headers.insert(key.clone(), value.clone());
        }
        self
    }

    /// Append a query parameter to the URL.
    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.url.query_pairs_mut().append_pair(key, value);
        self
    }

    /// Append a query parameter when the value is present.
    pub fn query_opt(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Set the request body from a serializable value.
    pub fn json<T: serde::Serialize>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send the request and collect the response.
    ///
    /// Transport failures map to [`Error::Connection`] and timeouts to
    /// [`Error::Timeout`]; HTTP error statuses are left for
    /// [`Response::parse_result`] so callers see the API's error body.
    pub async fn send(self) -> Result<Response> {
        let client = self
            .http_client
            .ok_or_else(|| Error::HttpClient("No HTTP client configured".to_string()))?;

        tracing::debug!(method = %self.method, url = %self.url, "sending request");

        let mut req = client
            .request(self.method.clone(), self.url.as_str())
            .timeout(self.timeout);

        for (key, value) in &self.headers {
            req = req.header(key, value);
        }

        if let Some(body) = self.body {
            req = req.body(body);
        }

        match req.send().await {
            Ok(resp) => {
                let status = resp.status();
                let headers = resp.headers().clone();
                let body = resp
                    .bytes()
                    .await
                    .map_err(|e| Error::Connection(e.to_string()))?
                    .to_vec();

                tracing::debug!(status = status.as_u16(), bytes = body.len(), "received response");

                Ok(Response::new(status, headers, body))
            }
            Err(e) if e.is_timeout() => Err(Error::Timeout(self.timeout)),
            Err(e) => Err(Error::Connection(e.to_string())),
        }
    }

    /// Get the method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Get the URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Get the headers.
    pub fn header_map(&self) -> &HeaderMap {
        &self.headers
    }
}
