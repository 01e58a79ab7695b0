//! REST API client for the Indodax cryptocurrency exchange
//!
//! This crate provides a REST API client for trading on Indodax, covering
//! market data, account queries, order placement and withdrawals.
//!
//! # Features
//!
//! - **Market Data**: Pairs, tickers, summaries, trades, depth, OHLC history
//! - **Account**: Balances, transaction/trade/order history, open orders
//! - **Trading**: Place and cancel orders
//! - **Funding**: Withdrawal fees and coin withdrawals
//!
//! # Authentication
//!
//! Private endpoints require API credentials. Each call is a `POST /tapi` whose
//! form body is signed with HMAC-SHA512 (lowercase hex) and sent with `Key` and
//! `Sign` headers.
//!
//! # Example
//!
//! ```no_run
//! use indodax_rest::{IndodaxRestClient, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = IndodaxRestClient::new()?;
//!     let ticker = client.get_ticker("btc_idr").await?;
//!     println!("BTC/IDR last: {}", ticker.ticker.last);
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = IndodaxRestClient::with_credentials(creds)?;
//!     let info = auth_client.get_info().await?;
//!     println!("IDR available: {}", info.available("idr"));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Retries
//!
//! Nothing is retried. Order placement, cancellation and withdrawals are not
//! idempotent; the caller decides what to do with a failure.

pub mod client;
pub mod dispatch;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod hooks;
pub mod transport;
pub mod types;

// Re-export main types
pub use client::{BaseUrls, ClientConfig, IndodaxRestClient, DEFAULT_BASE_URL};
pub use dispatch::Dispatcher;
pub use envelope::Envelope;
pub use error::{ApiKind, ErrorKind, RestError, RestResult, GENERIC_API_FAILURE};
pub use hooks::{ErrorLog, Hooks, LogLevel, RequestLog};
pub use indodax_auth::{Credentials, Params};
pub use transport::{HttpMethod, HttpRequest, HttpTransport, ReqwestTransport};

// Re-export endpoint-specific types
pub use types::{
    // Market data
    Candle, Depth, DepthLevel, PairInfo, PriceIncrements, PublicTrade, ServerTime, Summaries,
    Ticker, TickerAll, TickerResponse,
    // Account
    AccountInfo, AllOpenOrders, OpenOrders, OrderDetail, OrderHistory, PairOpenOrders, Record,
    TradeHistory, TradeHistoryQuery, TransactionHistory,
    // Trading
    TradeRequest, TradeResult,
    // Funding
    WithdrawCoinResult, WithdrawRequest,
};

pub use indodax_types::{Method, OrderType, Pair, SortOrder, TimeFrame, TimeInForce, TradeType};
