//! Main REST client implementation

use crate::dispatch::Dispatcher;
use crate::endpoints::{AccountEndpoints, FundingEndpoints, MarketEndpoints, TradingEndpoints};
use crate::error::RestResult;
use crate::hooks::Hooks;
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::types::{
    AccountInfo, Depth, OpenOrders, Record, TickerResponse, TradeRequest, TradeResult,
    WithdrawCoinResult, WithdrawRequest,
};
use indodax_auth::Credentials;
use indodax_types::{OrderType, TradeType};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default base URL for both APIs
pub const DEFAULT_BASE_URL: &str = "https://indodax.com";

/// Indodax REST API client
///
/// Provides access to both public and private endpoints. Cloning is cheap; clones
/// share the transport.
///
/// # Example
///
/// ```no_run
/// use indodax_rest::{IndodaxRestClient, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = IndodaxRestClient::new()?;
///     let ticker = client.get_ticker("btc_idr").await?;
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = IndodaxRestClient::with_credentials(creds)?;
///     let info = auth_client.get_info().await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct IndodaxRestClient {
    inner: Arc<Dispatcher>,
}

impl IndodaxRestClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::new().with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let transport: Arc<dyn HttpTransport> = match config.transport {
            Some(transport) => transport,
            None => {
                let user_agent = config
                    .user_agent
                    .unwrap_or_else(|| format!("indodax-rest/{}", env!("CARGO_PKG_VERSION")));
                Arc::new(ReqwestTransport::new(
                    Duration::from_secs(config.timeout_secs),
                    &user_agent,
                )?)
            }
        };

        info!(
            public = %config.base_urls.public_api_base_url,
            private = %config.base_urls.private_api_base_url,
            authenticated = config.credentials.is_some(),
            "Created Indodax REST client"
        );

        Ok(Self {
            inner: Arc::new(Dispatcher::new(
                transport,
                config.base_urls,
                config.credentials,
                config.hooks,
            )),
        })
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.inner.has_credentials()
    }

    /// Configured base URLs
    pub fn base_urls(&self) -> &BaseUrls {
        self.inner.base_urls()
    }

    /// Low-level dispatcher, for calls not covered by the endpoint groups
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.inner
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.inner)
    }

    /// Get ticker for a market
    ///
    /// # Arguments
    /// * `pair` - Pair id (e.g., "btc_idr")
    pub async fn get_ticker(&self, pair: &str) -> RestResult<TickerResponse> {
        self.market().get_ticker(pair).await
    }

    /// Get order book for a market
    pub async fn get_depth(&self, pair: &str) -> RestResult<Depth> {
        self.market().get_depth(pair).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints
    ///
    /// Calls fail with [`RestError::AuthRequired`](crate::RestError::AuthRequired)
    /// when no credentials are configured.
    pub fn account(&self) -> AccountEndpoints<'_> {
        AccountEndpoints::new(&self.inner)
    }

    /// Get balances and profile
    pub async fn get_info(&self) -> RestResult<AccountInfo> {
        self.account().get_info().await
    }

    /// Get open orders, for one pair or all
    pub async fn get_open_orders(&self, pair: Option<&str>) -> RestResult<OpenOrders> {
        self.account().get_open_orders(pair).await
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Get trading endpoints
    pub fn trading(&self) -> TradingEndpoints<'_> {
        TradingEndpoints::new(&self.inner)
    }

    /// Place an order
    pub async fn trade(&self, order: &TradeRequest) -> RestResult<TradeResult> {
        self.trading().trade(order).await
    }

    /// Cancel an order by exchange id
    pub async fn cancel_order(
        &self,
        pair: &str,
        order_id: &str,
        side: TradeType,
        order_type: Option<OrderType>,
    ) -> RestResult<Record> {
        self.trading()
            .cancel_order(pair, order_id, side, order_type)
            .await
    }

    // ========================================================================
    // Private Funding Endpoints
    // ========================================================================

    /// Get funding endpoints
    pub fn funding(&self) -> FundingEndpoints<'_> {
        FundingEndpoints::new(&self.inner)
    }

    /// Withdraw coins to an external address
    pub async fn withdraw(&self, request: &WithdrawRequest) -> RestResult<WithdrawCoinResult> {
        self.funding().withdraw(request).await
    }
}

impl std::fmt::Debug for IndodaxRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndodaxRestClient")
            .field("base_urls", self.base_urls())
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Base URLs of the public and private APIs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseUrls {
    /// Base for `GET` market data
    #[serde(default)]
    pub public_api_base_url: String,
    /// Base for `POST /tapi`
    #[serde(default)]
    pub private_api_base_url: String,
}

impl BaseUrls {
    /// Create from explicit URLs
    pub fn new(public: impl Into<String>, private: impl Into<String>) -> Self {
        Self {
            public_api_base_url: public.into(),
            private_api_base_url: private.into(),
        }
    }
}

impl Default for BaseUrls {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_BASE_URL)
    }
}

/// Client configuration
#[derive(Clone)]
pub struct ClientConfig {
    /// API base URLs
    pub base_urls: BaseUrls,
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Request timeout in seconds (default transport only)
    pub timeout_secs: u64,
    /// Custom user agent (default transport only)
    pub user_agent: Option<String>,
    /// Observability hooks
    pub hooks: Hooks,
    /// Custom transport; replaces the reqwest default
    pub transport: Option<Arc<dyn HttpTransport>>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_urls: BaseUrls::default(),
            credentials: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            hooks: Hooks::default(),
            transport: None,
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_urls", &self.base_urls)
            .field("credentials", &self.credentials)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("hooks", &self.hooks)
            .field("transport", &self.transport.as_ref().map(|_| "..."))
            .finish()
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set both base URLs
    pub fn with_base_urls(mut self, base_urls: BaseUrls) -> Self {
        self.base_urls = base_urls;
        self
    }

    /// Set the public API base URL
    pub fn with_public_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_urls.public_api_base_url = url.into();
        self
    }

    /// Set the private API base URL
    pub fn with_private_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_urls.private_api_base_url = url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set observability hooks
    pub fn with_hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Use a custom transport
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }
}
