//! HTTP transport abstraction
//!
//! The client never talks to the network directly. Every request goes through an
//! [`HttpTransport`], which turns an [`HttpRequest`] into the raw response body.
//! [`ReqwestTransport`] is the default; tests and embedders can supply their own.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::error::RestResult;

/// HTTP verb used by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Public market data
    Get,
    /// Signed trade API
    Post,
}

impl HttpMethod {
    /// Returns the verb as an upper-case string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A fully prepared request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Verb
    pub method: HttpMethod,
    /// Absolute URL
    pub url: String,
    /// Header name/value pairs
    pub headers: Vec<(String, String)>,
    /// Request body, if any
    pub body: Option<String>,
}

impl HttpRequest {
    /// Bodyless GET
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// POST with a body
    pub fn post(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            headers: Vec::new(),
            body: Some(body.into()),
        }
    }

    /// Add a header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Look up a header value (case-insensitive name match)
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Sends prepared requests and returns the raw response body
///
/// Implementations should not retry; a failure is returned to the caller as is.
/// Non-2xx responses are not errors at this layer: the body is returned so the
/// exchange's own error envelope can be decoded.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Perform the request
    async fn send(&self, request: HttpRequest) -> RestResult<Vec<u8>>;
}

/// Default transport backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with the given timeout and user agent
    pub fn new(timeout: Duration, user_agent: &str) -> RestResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Wrap an existing `reqwest` client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> RestResult<Vec<u8>> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let bytes = response.bytes().await?;

        Ok(bytes.to_vec())
    }
}
