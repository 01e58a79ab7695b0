//! Observability hooks for request monitoring
//!
//! Hooks let an application see every dispatched request without wrapping the
//! client. Each completed call fires `on_request`; each failed call fires
//! `on_error`. Callbacks run synchronously on the calling task and cannot change
//! the outcome of the call.
//!
//! # Example
//!
//! ```
//! use indodax_rest::hooks::Hooks;
//!
//! let hooks = Hooks::new()
//!     .on_request(|log| {
//!         println!("{} {} -> {} bytes", log.http_method, log.url, log.response.len());
//!     })
//!     .on_error(|log| {
//!         eprintln!("request failed: {}", log.message);
//!     });
//! ```

use indodax_types::Method;
use std::fmt;
use std::sync::Arc;

/// Severity attached to a hook payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    /// Routine request/response trace
    Debug,
    /// Failed request
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => f.write_str("debug"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// A request that reached the exchange and returned a body
#[derive(Debug, Clone)]
pub struct RequestLog {
    /// Always [`LogLevel::Debug`]
    pub level: LogLevel,
    /// `GET` or `POST`
    pub http_method: &'static str,
    /// Full request URL
    pub url: String,
    /// Trade API method, for private calls
    pub api_method: Option<Method>,
    /// Encoded request body, for private calls
    pub request: Option<String>,
    /// Raw response body (lossy UTF-8)
    pub response: String,
}

/// A request that failed before or during transport
#[derive(Debug, Clone)]
pub struct ErrorLog {
    /// Always [`LogLevel::Error`]
    pub level: LogLevel,
    /// Request URL, when one had been built
    pub url: Option<String>,
    /// Trade API method, for private calls
    pub api_method: Option<Method>,
    /// Error message
    pub message: String,
    /// Encoded request body, for private calls
    pub request: Option<String>,
}

/// Type alias for hook callbacks
pub type RequestHook = Arc<dyn Fn(&RequestLog) + Send + Sync>;
pub type ErrorHook = Arc<dyn Fn(&ErrorLog) + Send + Sync>;

/// Observability hooks container
///
/// All hooks are optional. Keep callbacks fast; they run inline with the request.
pub struct Hooks {
    /// Called after each request that returned a body
    pub(crate) on_request: Option<RequestHook>,
    /// Called when a request fails at the transport
    pub(crate) on_error: Option<ErrorHook>,
}

impl Default for Hooks {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("on_request", &self.on_request.as_ref().map(|_| "..."))
            .field("on_error", &self.on_error.as_ref().map(|_| "..."))
            .finish()
    }
}

impl Clone for Hooks {
    fn clone(&self) -> Self {
        Self {
            on_request: self.on_request.clone(),
            on_error: self.on_error.clone(),
        }
    }
}

impl Hooks {
    /// Create a new empty hooks container
    pub fn new() -> Self {
        Self {
            on_request: None,
            on_error: None,
        }
    }

    /// Register a callback for completed requests
    pub fn on_request<F>(mut self, f: F) -> Self
    where
        F: Fn(&RequestLog) + Send + Sync + 'static,
    {
        self.on_request = Some(Arc::new(f));
        self
    }

    /// Register a callback for failed requests
    pub fn on_error<F>(mut self, f: F) -> Self
    where
        F: Fn(&ErrorLog) + Send + Sync + 'static,
    {
        self.on_error = Some(Arc::new(f));
        self
    }

    /// Returns true if any hook is registered
    pub fn has_hooks(&self) -> bool {
        self.on_request.is_some() || self.on_error.is_some()
    }

    pub(crate) fn emit_request(&self, log: &RequestLog) {
        if let Some(ref hook) = self.on_request {
            hook(log);
        }
    }

    pub(crate) fn emit_error(&self, log: &ErrorLog) {
        if let Some(ref hook) = self.on_error {
            hook(log);
        }
    }
}
