//! Request dispatch shared by every endpoint
//!
//! Public calls are `GET {public_base}/{path}` with no body and no auth headers.
//! Private calls are `POST {private_base}/tapi` with a signed form body. The body
//! is encoded exactly once; the same string is signed and transmitted.

use indodax_auth::{Credentials, Params, RequestSigner};
use indodax_types::Method;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::client::BaseUrls;
use crate::envelope::Envelope;
use crate::error::{ApiKind, RestError, RestResult};
use crate::hooks::{ErrorLog, Hooks, LogLevel, RequestLog};
use crate::transport::{HttpRequest, HttpTransport};

/// Path of the trade API relative to the private base URL
pub const TRADE_API_PATH: &str = "tapi";

/// Content type of signed trade API bodies
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Sends requests for the endpoint groups
pub struct Dispatcher {
    transport: Arc<dyn HttpTransport>,
    base_urls: BaseUrls,
    credentials: Option<Credentials>,
    hooks: Hooks,
}

impl Dispatcher {
    pub(crate) fn new(
        transport: Arc<dyn HttpTransport>,
        base_urls: BaseUrls,
        credentials: Option<Credentials>,
        hooks: Hooks,
    ) -> Self {
        Self {
            transport,
            base_urls,
            credentials,
            hooks,
        }
    }

    /// Configured base URLs
    pub fn base_urls(&self) -> &BaseUrls {
        &self.base_urls
    }

    /// Returns true if credentials are configured
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    // ========================================================================
    // Public API
    // ========================================================================

    /// Build the public URL for `path`
    ///
    /// Surrounding `/` and whitespace are trimmed from `path`.
    pub fn public_url(&self, path: &str) -> RestResult<String> {
        let path = path.trim_matches(|c: char| c == '/' || c.is_whitespace());
        if path.is_empty() {
            return Err(RestError::InvalidParameter("uri can not be empty".to_string()));
        }

        let base = self.base_urls.public_api_base_url.trim_end_matches('/');
        if base.is_empty() {
            return Err(RestError::MissingBaseUrl(ApiKind::Public));
        }

        Ok(format!("{}/{}", base, path))
    }

    /// `GET` a public path and return the raw body
    pub async fn public_call(&self, path: &str) -> RestResult<Vec<u8>> {
        let url = match self.public_url(path) {
            Ok(url) => url,
            Err(e) => {
                self.report_error(None, None, None, &e);
                return Err(e);
            }
        };

        debug!(url = %url, "Calling public api");

        match self.transport.send(HttpRequest::get(&url)).await {
            Ok(body) => {
                if self.hooks.has_hooks() {
                    self.hooks.emit_request(&RequestLog {
                        level: LogLevel::Debug,
                        http_method: "GET",
                        url,
                        api_method: None,
                        request: None,
                        response: String::from_utf8_lossy(&body).into_owned(),
                    });
                }
                Ok(body)
            }
            Err(e) => {
                self.report_error(Some(url), None, None, &e);
                Err(e)
            }
        }
    }

    /// `GET` a public path and decode the body directly into `T`
    pub async fn public_get<T: DeserializeOwned>(&self, path: &str) -> RestResult<T> {
        let body = self.public_call(path).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // ========================================================================
    // Private API
    // ========================================================================

    /// Build the trade API URL
    pub fn private_url(&self) -> RestResult<String> {
        let base = self.base_urls.private_api_base_url.trim_end_matches('/');
        if base.is_empty() {
            return Err(RestError::MissingBaseUrl(ApiKind::Private));
        }

        Ok(format!("{}/{}", base, TRADE_API_PATH))
    }

    /// Sign and `POST` a trade API call, returning the raw body
    ///
    /// Fails before any I/O if the private base URL is empty, no credentials are
    /// configured, or signing yields no signature.
    pub async fn private_call(&self, method: Method, params: Params) -> RestResult<Vec<u8>> {
        let url = match self.private_url() {
            Ok(url) => url,
            Err(e) => {
                self.report_error(None, Some(method), None, &e);
                return Err(e);
            }
        };

        let Some(credentials) = self.credentials.as_ref() else {
            let e = RestError::AuthRequired;
            self.report_error(Some(url), Some(method), None, &e);
            return Err(e);
        };

        let signed = match RequestSigner::new(credentials, method).params(params).sign() {
            Ok(signed) if signed.signature.is_empty() => {
                let e = RestError::EmptySignature;
                self.report_error(Some(url), Some(method), Some(signed.body), &e);
                return Err(e);
            }
            Ok(signed) => signed,
            Err(e) => {
                let e = RestError::from(e);
                self.report_error(Some(url), Some(method), None, &e);
                return Err(e);
            }
        };

        debug!(method = %method, url = %url, "Calling private api");

        let request = HttpRequest::post(&url, signed.body.clone())
            .header("Content-Type", FORM_CONTENT_TYPE)
            .header("Key", credentials.api_key())
            .header("Sign", signed.signature);

        match self.transport.send(request).await {
            Ok(body) => {
                if self.hooks.has_hooks() {
                    self.hooks.emit_request(&RequestLog {
                        level: LogLevel::Debug,
                        http_method: "POST",
                        url,
                        api_method: Some(method),
                        request: Some(signed.body),
                        response: String::from_utf8_lossy(&body).into_owned(),
                    });
                }
                Ok(body)
            }
            Err(e) => {
                if method.is_mutating() {
                    warn!(method = %method, "Transport failed after sending; order state is unknown");
                }
                self.report_error(Some(url), Some(method), Some(signed.body), &e);
                Err(e)
            }
        }
    }

    /// Perform a trade API call and parse the envelope without checking it
    pub async fn private_envelope(&self, method: Method, params: Params) -> RestResult<Envelope> {
        let body = self.private_call(method, params).await?;
        Envelope::from_slice(&body)
    }

    /// Perform a trade API call and decode its `return` payload into `T`
    pub async fn private<T: DeserializeOwned>(&self, method: Method, params: Params) -> RestResult<T> {
        self.private_envelope(method, params).await?.into_result()
    }

    fn report_error(
        &self,
        url: Option<String>,
        api_method: Option<Method>,
        request: Option<String>,
        err: &RestError,
    ) {
        error!(
            url = url.as_deref().unwrap_or_default(),
            method = api_method.map(|m| m.as_str()).unwrap_or_default(),
            error = %err,
            "API call failed"
        );
        if self.hooks.has_hooks() {
            self.hooks.emit_error(&ErrorLog {
                level: LogLevel::Error,
                url,
                api_method,
                message: err.to_string(),
                request,
            });
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("base_urls", &self.base_urls)
            .field("has_credentials", &self.has_credentials())
            .field("hooks", &self.hooks)
            .finish()
    }
}
