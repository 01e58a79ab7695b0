//! Types for Indodax REST API requests and responses

use indodax_types::{de_helpers, OrderType, SortOrder, TimeInForce, TradeType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Free-form JSON object returned by endpoints without a fixed shape
pub type Record = serde_json::Map<String, Value>;

// ============================================================================
// Market Data Types
// ============================================================================

/// Server clock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerTime {
    /// Server timezone, e.g. "UTC"
    pub timezone: String,
    /// Unix time in milliseconds
    pub server_time: i64,
}

/// Market listing from `/api/pairs`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairInfo {
    /// Pair id, e.g. "btcidr"
    pub id: String,
    /// Symbol, e.g. "BTCIDR"
    #[serde(default)]
    pub symbol: String,
    /// Quote currency, e.g. "idr"
    #[serde(default)]
    pub base_currency: String,
    /// Base asset, e.g. "btc"
    #[serde(default)]
    pub traded_currency: String,
    /// Display unit of the base asset
    #[serde(default)]
    pub traded_currency_unit: String,
    /// Human-readable name
    #[serde(default)]
    pub description: String,
    /// Underscore form used by the ticker endpoints, e.g. "btc_idr"
    #[serde(default)]
    pub ticker_id: String,
    /// Amount precision
    #[serde(default)]
    pub volume_precision: Decimal,
    /// Price precision
    #[serde(default)]
    pub price_precision: Decimal,
    /// Price rounding
    #[serde(default)]
    pub price_round: Decimal,
    /// Chart price scale
    #[serde(default, rename = "pricescale")]
    pub price_scale: Decimal,
    /// Minimum order size in the quote currency
    #[serde(default)]
    pub trade_min_base_currency: Decimal,
    /// Minimum order size in the base asset
    #[serde(default)]
    pub trade_min_traded_currency: Decimal,
    /// Fee percent
    #[serde(default)]
    pub trade_fee_percent: Decimal,
    /// Taker fee percent
    #[serde(default)]
    pub trade_fee_percent_taker: Decimal,
    /// Maker fee percent
    #[serde(default)]
    pub trade_fee_percent_maker: Decimal,
    /// Withdrawals need a memo
    #[serde(default)]
    pub has_memo: bool,
    /// Memo label
    #[serde(default)]
    pub memo_name: Value,
    /// Logo URL
    #[serde(default)]
    pub url_logo: String,
    /// PNG logo URL
    #[serde(default)]
    pub url_logo_png: String,
    /// 1 while under maintenance
    #[serde(default)]
    pub is_maintenance: i64,
    /// 1 while trading is suspended
    #[serde(default)]
    pub is_market_suspended: i64,
    /// CoinMarketCap id
    #[serde(default)]
    pub cmc_id: Value,
    /// CoinGecko id
    #[serde(default)]
    pub coingecko_id: Option<String>,
}

impl PairInfo {
    /// Returns true if orders can currently be placed on this market
    pub fn is_tradable(&self) -> bool {
        self.is_maintenance == 0 && self.is_market_suspended == 0
    }
}

/// Minimum price step per market
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceIncrements {
    /// Pair id -> tick size
    #[serde(default)]
    pub increments: HashMap<String, Decimal>,
}

/// 24h ticker
///
/// Volume keys depend on the market (`vol_btc`, `vol_idr`, ...) and are kept in
/// `extra`; use [`Ticker::volume`] to read them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticker {
    /// 24h high
    #[serde(default)]
    pub high: Decimal,
    /// 24h low
    #[serde(default)]
    pub low: Decimal,
    /// Last trade price
    #[serde(default)]
    pub last: Decimal,
    /// Best bid
    #[serde(default)]
    pub buy: Decimal,
    /// Best ask
    #[serde(default)]
    pub sell: Decimal,
    /// Unix time in seconds
    #[serde(default)]
    pub server_time: i64,
    /// Remaining fields, including volumes
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Ticker {
    /// 24h volume denominated in `asset` (e.g. "btc" or "idr")
    pub fn volume(&self, asset: &str) -> Option<Decimal> {
        let value = self.extra.get(&format!("vol_{}", asset.to_lowercase()))?;
        serde_json::from_value(value.clone()).ok()
    }

    /// Ask minus bid
    pub fn spread(&self) -> Decimal {
        self.sell - self.buy
    }
}

/// Response of `/api/ticker/{pair}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerResponse {
    /// Ticker for the requested pair
    pub ticker: Ticker,
}

/// Response of `/api/ticker_all`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickerAll {
    /// Pair id (e.g. "btc_idr") -> ticker
    #[serde(default)]
    pub tickers: HashMap<String, Ticker>,
}

/// Response of `/api/summaries`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Summaries {
    /// Pair id -> ticker
    #[serde(default)]
    pub tickers: HashMap<String, Ticker>,
    /// Compact pair id -> price 24h ago
    #[serde(default)]
    pub prices_24h: HashMap<String, Decimal>,
    /// Compact pair id -> price 7d ago
    #[serde(default)]
    pub prices_7d: HashMap<String, Decimal>,
}

/// Public trade print
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicTrade {
    /// Unix time in seconds
    #[serde(deserialize_with = "de_helpers::string_or_number")]
    pub date: String,
    /// Price
    pub price: Decimal,
    /// Amount in the base asset
    pub amount: Decimal,
    /// Trade id
    #[serde(deserialize_with = "de_helpers::string_or_number")]
    pub tid: String,
    /// Taker side
    #[serde(rename = "type")]
    pub side: TradeType,
}

/// One price level of the order book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(Decimal, Decimal)", into = "(Decimal, Decimal)")]
pub struct DepthLevel {
    /// Price
    pub price: Decimal,
    /// Amount in the base asset
    pub amount: Decimal,
}

impl From<(Decimal, Decimal)> for DepthLevel {
    fn from((price, amount): (Decimal, Decimal)) -> Self {
        Self { price, amount }
    }
}

impl From<DepthLevel> for (Decimal, Decimal) {
    fn from(level: DepthLevel) -> Self {
        (level.price, level.amount)
    }
}

/// Order book from `/api/depth/{pair}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Depth {
    /// Bids, best first
    #[serde(default, deserialize_with = "de_helpers::null_as_default")]
    pub buy: Vec<DepthLevel>,
    /// Asks, best first
    #[serde(default, deserialize_with = "de_helpers::null_as_default")]
    pub sell: Vec<DepthLevel>,
}

impl Depth {
    /// Highest bid
    pub fn best_bid(&self) -> Option<&DepthLevel> {
        self.buy.iter().max_by(|a, b| a.price.cmp(&b.price))
    }

    /// Lowest ask
    pub fn best_ask(&self) -> Option<&DepthLevel> {
        self.sell.iter().min_by(|a, b| a.price.cmp(&b.price))
    }

    /// Best ask minus best bid
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()?.price - self.best_bid()?.price)
    }

    /// Midpoint of best bid and best ask
    pub fn mid_price(&self) -> Option<Decimal> {
        Some((self.best_ask()?.price + self.best_bid()?.price) / Decimal::TWO)
    }
}

/// OHLC candle from the tradingview history endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candle {
    /// Open time, Unix seconds
    #[serde(rename = "Time")]
    pub time: i64,
    /// Open price
    #[serde(rename = "Open")]
    pub open: Decimal,
    /// High price
    #[serde(rename = "High")]
    pub high: Decimal,
    /// Low price
    #[serde(rename = "Low")]
    pub low: Decimal,
    /// Close price
    #[serde(rename = "Close")]
    pub close: Decimal,
    /// Volume
    #[serde(rename = "Volume", default)]
    pub volume: Decimal,
}

// ============================================================================
// Account Types
// ============================================================================

/// Account profile and balances from `getInfo`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountInfo {
    /// User id
    #[serde(deserialize_with = "de_helpers::string_or_number")]
    pub user_id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Email
    #[serde(default)]
    pub email: String,
    /// Avatar URL
    #[serde(default)]
    pub profile_picture: Option<String>,
    /// KYC status
    #[serde(default)]
    pub verification_status: String,
    /// Two-factor enabled
    #[serde(default)]
    pub gauth_enable: bool,
    /// Withdrawal permission flag
    #[serde(default)]
    pub withdraw_status: i64,
    /// Available balance per asset
    #[serde(default)]
    pub balance: HashMap<String, Decimal>,
    /// Balance held by open orders per asset
    #[serde(default)]
    pub balance_hold: HashMap<String, Decimal>,
    /// Deposit networks per asset
    #[serde(default)]
    pub network: HashMap<String, Value>,
    /// Asset -> network -> memo required
    #[serde(default)]
    pub memo_is_required: HashMap<String, Value>,
    /// Deposit address per asset
    #[serde(default)]
    pub address: HashMap<String, Value>,
    /// Unix time in seconds
    #[serde(default)]
    pub server_time: i64,
}

impl AccountInfo {
    /// Available balance of `asset`, zero if absent
    pub fn available(&self, asset: &str) -> Decimal {
        self.balance.get(asset).copied().unwrap_or_default()
    }

    /// Balance of `asset` held by open orders, zero if absent
    pub fn held(&self, asset: &str) -> Decimal {
        self.balance_hold.get(asset).copied().unwrap_or_default()
    }

    /// Available plus held
    pub fn total(&self, asset: &str) -> Decimal {
        self.available(asset) + self.held(asset)
    }

    /// Assets with a non-zero available or held balance
    pub fn non_zero_assets(&self) -> Vec<&str> {
        let mut assets: Vec<&str> = self
            .balance
            .keys()
            .chain(self.balance_hold.keys())
            .map(String::as_str)
            .filter(|a| !self.total(a).is_zero())
            .collect();
        assets.sort_unstable();
        assets.dedup();
        assets
    }
}

/// Deposits and withdrawals from `transHistory`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionHistory {
    /// Asset -> withdrawals
    #[serde(default, deserialize_with = "de_helpers::null_as_default")]
    pub withdraw: HashMap<String, Vec<Record>>,
    /// Asset -> deposits
    #[serde(default, deserialize_with = "de_helpers::null_as_default")]
    pub deposit: HashMap<String, Vec<Record>>,
}

/// Fills from `tradeHistory`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TradeHistory {
    /// Trades, in the requested order
    #[serde(default, deserialize_with = "de_helpers::null_as_default")]
    pub trades: Vec<Record>,
}

/// Open orders for a single pair
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PairOpenOrders {
    /// Orders
    #[serde(default, deserialize_with = "de_helpers::null_as_default")]
    pub orders: Vec<Record>,
}

/// Open orders across all pairs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllOpenOrders {
    /// Pair id -> orders
    #[serde(default, deserialize_with = "de_helpers::null_as_default")]
    pub orders: HashMap<String, Vec<Record>>,
}

/// Result of `openOrders`; the variant follows whether a pair was requested
#[derive(Debug, Clone)]
pub enum OpenOrders {
    /// A pair was given
    Pair(PairOpenOrders),
    /// No pair was given
    All(AllOpenOrders),
}

impl OpenOrders {
    /// Total number of open orders
    pub fn len(&self) -> usize {
        match self {
            Self::Pair(p) => p.orders.len(),
            Self::All(a) => a.orders.values().map(Vec::len).sum(),
        }
    }

    /// Returns true if there are no open orders
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Single-pair result, if that shape was requested
    pub fn as_pair(&self) -> Option<&PairOpenOrders> {
        match self {
            Self::Pair(p) => Some(p),
            Self::All(_) => None,
        }
    }

    /// All-pairs result, if that shape was requested
    pub fn as_all(&self) -> Option<&AllOpenOrders> {
        match self {
            Self::All(a) => Some(a),
            Self::Pair(_) => None,
        }
    }
}

/// Closed and cancelled orders from `orderHistory`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderHistory {
    /// Orders
    #[serde(default, deserialize_with = "de_helpers::null_as_default")]
    pub orders: Vec<Record>,
}

/// Single order from `getOrder` / `getOrderByClientOrderId`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderDetail {
    /// Order fields
    #[serde(default)]
    pub order: Record,
}

impl OrderDetail {
    /// Exchange order id
    pub fn order_id(&self) -> Option<String> {
        match self.order.get("order_id")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Order status, e.g. "open", "filled", "cancelled"
    pub fn status(&self) -> Option<&str> {
        self.order.get("status")?.as_str()
    }
}

// ============================================================================
// Trading Types
// ============================================================================

/// Order placement request
///
/// `amount` is sent under the base asset id, except for market buys, which are
/// sized in the quote currency unless [`TradeRequest::force_base_amount`] is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeRequest {
    /// Pair in `{base}_{quote}` form, e.g. "btc_idr"
    pub pair: String,
    /// Order side
    pub side: TradeType,
    /// Order type
    pub order_type: OrderType,
    /// Limit price; ignored for market orders
    pub price: Option<Decimal>,
    /// Order size
    pub amount: Decimal,
    /// Time in force
    pub time_in_force: Option<TimeInForce>,
    /// Client-assigned order id
    pub client_order_id: Option<String>,
    /// Size a market buy in the base asset instead of the quote currency
    pub force_base_amount: bool,
}

impl TradeRequest {
    fn new(
        pair: impl Into<String>,
        side: TradeType,
        order_type: OrderType,
        price: Option<Decimal>,
        amount: Decimal,
    ) -> Self {
        Self {
            pair: pair.into(),
            side,
            order_type,
            price,
            amount,
            time_in_force: None,
            client_order_id: None,
            force_base_amount: false,
        }
    }

    /// Create a limit order
    pub fn limit(pair: impl Into<String>, side: TradeType, price: Decimal, amount: Decimal) -> Self {
        Self::new(pair, side, OrderType::Limit, Some(price), amount)
    }

    /// Create a market order
    pub fn market(pair: impl Into<String>, side: TradeType, amount: Decimal) -> Self {
        Self::new(pair, side, OrderType::Market, None, amount)
    }

    /// Create a stop order
    pub fn stop(pair: impl Into<String>, side: TradeType, price: Decimal, amount: Decimal) -> Self {
        Self::new(pair, side, OrderType::Stop, Some(price), amount)
    }

    /// Create a stop-limit order
    pub fn stop_limit(
        pair: impl Into<String>,
        side: TradeType,
        price: Decimal,
        amount: Decimal,
    ) -> Self {
        Self::new(pair, side, OrderType::StopLimit, Some(price), amount)
    }

    /// Set time in force
    pub fn with_time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = Some(tif);
        self
    }

    /// Set client order id
    pub fn with_client_order_id(mut self, id: impl Into<String>) -> Self {
        self.client_order_id = Some(id.into());
        self
    }

    /// Size a market buy in the base asset
    pub fn force_base_amount(mut self) -> Self {
        self.force_base_amount = true;
        self
    }

    /// Post-only shorthand for `time_in_force = MOC`
    pub fn post_only(self) -> Self {
        self.with_time_in_force(TimeInForce::MakerOrCancel)
    }
}

/// Result of `trade`
///
/// Field names depend on the pair (`receive_btc`, `spend_rp`, ...), so everything
/// except the ids is kept in `fields`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TradeResult {
    /// Exchange order id
    #[serde(default, deserialize_with = "de_helpers::opt_string_or_number")]
    pub order_id: Option<String>,
    /// Client order id, if one was sent
    #[serde(default, deserialize_with = "de_helpers::opt_string_or_number")]
    pub client_order_id: Option<String>,
    /// Remaining fields
    #[serde(flatten)]
    pub fields: Record,
}

impl TradeResult {
    /// Read a decimal field such as `receive_btc` or `remain_rp`
    pub fn decimal(&self, key: &str) -> Option<Decimal> {
        let value = self.fields.get(key)?;
        serde_json::from_value(value.clone()).ok()
    }
}

/// Filters for `tradeHistory`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeHistoryQuery {
    /// Pair in `{base}_{quote}` form
    pub pair: String,
    /// First trade id
    pub from_id: Option<String>,
    /// Last trade id
    pub end_id: Option<String>,
    /// Sort order
    pub order: Option<SortOrder>,
    /// Start time, Unix seconds
    pub since: Option<i64>,
    /// End time, Unix seconds
    pub end: Option<i64>,
    /// Max rows; sent only when between 1 and 999
    pub count: Option<i64>,
    /// Restrict to one order
    pub order_id: Option<String>,
}

impl TradeHistoryQuery {
    /// Query all trades of `pair`
    pub fn new(pair: impl Into<String>) -> Self {
        Self {
            pair: pair.into(),
            from_id: None,
            end_id: None,
            order: None,
            since: None,
            end: None,
            count: None,
            order_id: None,
        }
    }

    /// Trade id range
    pub fn ids(mut self, from_id: impl Into<String>, end_id: impl Into<String>) -> Self {
        self.from_id = Some(from_id.into());
        self.end_id = Some(end_id.into());
        self
    }

    /// Time range, Unix seconds
    pub fn between(mut self, since: i64, end: i64) -> Self {
        self.since = Some(since);
        self.end = Some(end);
        self
    }

    /// Sort order
    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Max rows
    pub fn count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    /// Restrict to one order
    pub fn order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }
}

// ============================================================================
// Funding Types
// ============================================================================

/// Coin withdrawal request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawRequest {
    /// Caller-chosen idempotency id
    pub request_id: String,
    /// Asset, e.g. "usdt"
    pub currency: String,
    /// Destination address
    pub address: String,
    /// Amount to withdraw
    pub amount: Decimal,
    /// Network name or alias, e.g. "trc20" or "tron"
    pub network: Option<String>,
    /// Destination memo / tag
    pub memo: Option<String>,
}

impl WithdrawRequest {
    /// Create a withdrawal request
    pub fn new(
        request_id: impl Into<String>,
        currency: impl Into<String>,
        address: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            currency: currency.into(),
            address: address.into(),
            amount,
            network: None,
            memo: None,
        }
    }

    /// Set network
    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.network = Some(network.into());
        self
    }

    /// Set memo
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }
}

/// Result of `withdrawCoin`; fields sit next to `success` at the top level
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WithdrawCoinResult {
    /// 1 on success
    #[serde(default)]
    pub success: i64,
    /// e.g. "approved"
    #[serde(default, deserialize_with = "de_helpers::opt_string_or_number")]
    pub status: Option<String>,
    /// Asset withdrawn
    #[serde(default, deserialize_with = "de_helpers::opt_string_or_number")]
    pub withdraw_currency: Option<String>,
    /// Destination address
    #[serde(default, deserialize_with = "de_helpers::opt_string_or_number")]
    pub withdraw_address: Option<String>,
    /// Requested amount
    #[serde(default)]
    pub withdraw_amount: Option<Decimal>,
    /// Network fee
    #[serde(default)]
    pub fee: Option<Decimal>,
    /// Amount received after fee
    #[serde(default)]
    pub amount_after_fee: Option<Decimal>,
    /// Submission time, Unix seconds
    #[serde(default, deserialize_with = "de_helpers::opt_string_or_number")]
    pub submit_time: Option<String>,
    /// Withdrawal id
    #[serde(default, deserialize_with = "de_helpers::opt_string_or_number")]
    pub withdraw_id: Option<String>,
    /// On-chain transaction id, once known
    #[serde(default, deserialize_with = "de_helpers::opt_string_or_number")]
    pub tx_id: Option<String>,
}
