//! Trading endpoints for order management
//!
//! These endpoints require authentication.

use crate::dispatch::Dispatcher;
use crate::error::{RestError, RestResult};
use crate::types::{Record, TradeRequest, TradeResult};
use indodax_auth::Params;
use indodax_types::{Method, OrderType, Pair, TradeType};
use tracing::{debug, instrument};

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Place an order
    ///
    /// The pair and price are validated before anything is sent.
    ///
    /// # Arguments
    /// * `order` - Order request
    #[instrument(skip(self, order), fields(pair = %order.pair, side = %order.side, order_type = %order.order_type))]
    pub async fn trade(&self, order: &TradeRequest) -> RestResult<TradeResult> {
        let params = trade_params(order)?;

        debug!(
            "Placing {} {} order for {} {}",
            order.side, order.order_type, order.amount, order.pair
        );

        self.dispatcher.private(Method::Trade, params).await
    }

    /// Cancel an order by exchange id
    ///
    /// # Arguments
    /// * `pair` - Pair id (e.g., "btc_idr")
    /// * `order_id` - Exchange order id
    /// * `side` - Side of the order being cancelled
    /// * `order_type` - Needed for stop orders
    #[instrument(skip(self))]
    pub async fn cancel_order(
        &self,
        pair: &str,
        order_id: &str,
        side: TradeType,
        order_type: Option<OrderType>,
    ) -> RestResult<Record> {
        let mut params = Params::new()
            .with("pair", pair)
            .with("order_id", order_id)
            .with("type", side);
        params.insert_opt("order_type", order_type);

        debug!("Cancelling order {} on {}", order_id, pair);

        self.dispatcher.private(Method::CancelOrder, params).await
    }

    /// Cancel an order by client order id
    #[instrument(skip(self))]
    pub async fn cancel_order_by_client_order_id(&self, client_order_id: &str) -> RestResult<Record> {
        let params = Params::new().with("client_order_id", client_order_id);

        debug!("Cancelling order {}", client_order_id);

        self.dispatcher
            .private(Method::CancelByClientOrderId, params)
            .await
    }
}

/// Build the `trade` parameters
///
/// The amount goes under exactly one key: the quote asset id for a market buy
/// (unless `force_base_amount` is set), the base asset id otherwise.
pub fn trade_params(order: &TradeRequest) -> RestResult<Params> {
    let pair: Pair = order
        .pair
        .parse()
        .map_err(|_| RestError::InvalidPair(order.pair.clone()))?;

    let mut params = Params::new()
        .with("pair", &order.pair)
        .with("type", order.side)
        .with("order_type", order.order_type);

    if !order.order_type.is_market() {
        let price = order.price.ok_or_else(|| {
            RestError::InvalidParameter(format!("price is required for {} orders", order.order_type))
        })?;
        params.insert("price", price);
    }

    let quote_sized =
        order.side == TradeType::Buy && order.order_type.is_market() && !order.force_base_amount;
    let amount_key = if quote_sized { pair.quote() } else { pair.base() };
    params.insert(amount_key, order.amount);

    params
        .insert_opt("time_in_force", order.time_in_force)
        .insert_opt("client_order_id", order.client_order_id.as_deref());

    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indodax_types::TimeInForce;
    use rust_decimal_macros::dec;

    #[test]
    fn test_limit_buy_uses_base_amount() {
        let order = TradeRequest::limit("btc_idr", TradeType::Buy, dec!(650000000), dec!(0.001));
        let params = trade_params(&order).unwrap();

        assert_eq!(params.get("btc"), Some("0.001"));
        assert!(!params.contains_key("idr"));
        assert_eq!(params.get("price"), Some("650000000"));
        assert_eq!(params.get("type"), Some("buy"));
        assert_eq!(params.get("order_type"), Some("limit"));
    }

    #[test]
    fn test_market_buy_uses_quote_amount() {
        let order = TradeRequest::market("btc_idr", TradeType::Buy, dec!(100000));
        let params = trade_params(&order).unwrap();

        assert_eq!(params.get("idr"), Some("100000"));
        assert!(!params.contains_key("btc"));
        assert!(!params.contains_key("price"));
    }

    #[test]
    fn test_market_buy_force_base_amount() {
        let order = TradeRequest::market("btc_idr", TradeType::Buy, dec!(0.002)).force_base_amount();
        let params = trade_params(&order).unwrap();

        assert_eq!(params.get("btc"), Some("0.002"));
        assert!(!params.contains_key("idr"));
    }

    #[test]
    fn test_market_sell_uses_base_amount() {
        let order = TradeRequest::market("eth_idr", TradeType::Sell, dec!(1.5));
        let params = trade_params(&order).unwrap();

        assert_eq!(params.get("eth"), Some("1.5"));
        assert!(!params.contains_key("idr"));
        assert!(!params.contains_key("price"));
    }

    #[test]
    fn test_optional_fields() {
        let order = TradeRequest::stop_limit("btc_idr", TradeType::Sell, dec!(600000000), dec!(0.01))
            .with_time_in_force(TimeInForce::GoodTillCancelled)
            .with_client_order_id("clientx-sj82ks82j");
        let params = trade_params(&order).unwrap();

        assert_eq!(params.get("order_type"), Some("stoplimit"));
        assert_eq!(params.get("time_in_force"), Some("GTC"));
        assert_eq!(params.get("client_order_id"), Some("clientx-sj82ks82j"));
    }

    #[test]
    fn test_invalid_pair_rejected() {
        for pair in ["btcidr", "btc_idr_x", "_idr", "btc_"] {
            let order = TradeRequest::limit(pair, TradeType::Buy, dec!(1), dec!(1));
            let err = trade_params(&order).unwrap_err();
            assert!(matches!(err, RestError::InvalidPair(ref p) if p == pair));
        }
    }

    #[test]
    fn test_missing_price_rejected() {
        let mut order = TradeRequest::limit("btc_idr", TradeType::Buy, dec!(1), dec!(1));
        order.price = None;
        let err = trade_params(&order).unwrap_err();
        assert!(matches!(err, RestError::InvalidParameter(_)));
    }
}
