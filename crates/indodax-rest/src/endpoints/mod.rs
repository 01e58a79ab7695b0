//! API endpoint implementations

pub mod market;
pub mod account;
pub mod trading;
pub mod funding;

pub use market::MarketEndpoints;
pub use account::AccountEndpoints;
pub use trading::{trade_params, TradingEndpoints};
pub use funding::FundingEndpoints;
