//! Method, TradeType, OrderType, TimeInForce, TimeFrame and SortOrder enums

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TypesError;

/// Private trade API methods, sent as the `method` field of the signed body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Method {
    /// Account balances and profile
    #[serde(rename = "getInfo")]
    GetInfo,
    /// Deposit and withdrawal history
    #[serde(rename = "transHistory")]
    TransactionHistory,
    /// Filled trades for a pair
    #[serde(rename = "tradeHistory")]
    TradeHistory,
    /// Open orders for one pair or all pairs
    #[serde(rename = "openOrders")]
    OpenOrders,
    /// Closed and cancelled orders for a pair
    #[serde(rename = "orderHistory")]
    OrderHistory,
    /// Single order by exchange id
    #[serde(rename = "getOrder")]
    GetOrder,
    /// Single order by client-assigned id
    #[serde(rename = "getOrderByClientOrderId")]
    GetOrderByClientOrderId,
    /// Place an order
    #[serde(rename = "trade")]
    Trade,
    /// Cancel an order by exchange id
    #[serde(rename = "cancelOrder")]
    CancelOrder,
    /// Cancel an order by client-assigned id
    #[serde(rename = "cancelByClientOrderId")]
    CancelByClientOrderId,
    /// Withdrawal fee quote
    #[serde(rename = "withdrawFee")]
    WithdrawFee,
    /// Withdraw coins to an external address
    #[serde(rename = "withdrawCoin")]
    WithdrawCoin,
}

impl Method {
    /// Returns the method name as sent to the exchange
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetInfo => "getInfo",
            Self::TransactionHistory => "transHistory",
            Self::TradeHistory => "tradeHistory",
            Self::OpenOrders => "openOrders",
            Self::OrderHistory => "orderHistory",
            Self::GetOrder => "getOrder",
            Self::GetOrderByClientOrderId => "getOrderByClientOrderId",
            Self::Trade => "trade",
            Self::CancelOrder => "cancelOrder",
            Self::CancelByClientOrderId => "cancelByClientOrderId",
            Self::WithdrawFee => "withdrawFee",
            Self::WithdrawCoin => "withdrawCoin",
        }
    }

    /// Returns true if the call has exchange-side effects and must not be replayed
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Trade | Self::CancelOrder | Self::CancelByClientOrderId | Self::WithdrawCoin
        )
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trade direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeType {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl TradeType {
    /// Returns the wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TradeType {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            other => Err(TypesError::UnknownVariant {
                kind: "trade type",
                value: other.to_string(),
            }),
        }
    }
}

/// Order types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Market order, sized in quote currency for buys
    Market,
    /// Limit order at a given price
    #[default]
    Limit,
    /// Stop order
    Stop,
    /// Stop-limit order
    #[serde(rename = "stoplimit")]
    StopLimit,
}

impl OrderType {
    /// Returns the wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "market",
            Self::Limit => "limit",
            Self::Stop => "stop",
            Self::StopLimit => "stoplimit",
        }
    }

    /// Returns true for market orders, which carry no price
    pub fn is_market(&self) -> bool {
        matches!(self, Self::Market)
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "market" => Ok(Self::Market),
            "limit" => Ok(Self::Limit),
            "stop" => Ok(Self::Stop),
            "stoplimit" => Ok(Self::StopLimit),
            other => Err(TypesError::UnknownVariant {
                kind: "order type",
                value: other.to_string(),
            }),
        }
    }
}

/// Time in force for orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeInForce {
    /// Good till cancelled
    #[serde(rename = "GTC")]
    GoodTillCancelled,
    /// Maker or cancel (post-only)
    #[serde(rename = "MOC")]
    MakerOrCancel,
}

impl TimeInForce {
    /// Returns the wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoodTillCancelled => "GTC",
            Self::MakerOrCancel => "MOC",
        }
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// OHLC candle time frame for the tradingview history endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeFrame {
    /// 1 minute
    #[serde(rename = "1")]
    M1,
    /// 15 minutes
    #[serde(rename = "15")]
    M15,
    /// 30 minutes
    #[serde(rename = "30")]
    M30,
    /// 1 hour
    #[serde(rename = "60")]
    H1,
    /// 4 hours
    #[serde(rename = "240")]
    H4,
    /// 1 day
    #[serde(rename = "1D")]
    D1,
    /// 3 days
    #[serde(rename = "3D")]
    D3,
    /// 1 week
    #[serde(rename = "1W")]
    W1,
}

impl TimeFrame {
    /// Returns the `tf` query value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::M1 => "1",
            Self::M15 => "15",
            Self::M30 => "30",
            Self::H1 => "60",
            Self::H4 => "240",
            Self::D1 => "1D",
            Self::D3 => "3D",
            Self::W1 => "1W",
        }
    }

    /// Candle width in seconds
    pub fn as_secs(&self) -> u64 {
        match self {
            Self::M1 => 60,
            Self::M15 => 15 * 60,
            Self::M30 => 30 * 60,
            Self::H1 => 60 * 60,
            Self::H4 => 4 * 60 * 60,
            Self::D1 => 24 * 60 * 60,
            Self::D3 => 3 * 24 * 60 * 60,
            Self::W1 => 7 * 24 * 60 * 60,
        }
    }
}

impl fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result ordering for history queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first
    Asc,
    /// Newest first
    #[default]
    Desc,
}

impl SortOrder {
    /// Returns the wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
