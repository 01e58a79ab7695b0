//! Private account endpoints
//!
//! These endpoints require authentication.

use crate::dispatch::Dispatcher;
use crate::error::RestResult;
use crate::types::{
    AccountInfo, AllOpenOrders, OpenOrders, OrderDetail, OrderHistory, PairOpenOrders,
    TradeHistory, TradeHistoryQuery, TransactionHistory,
};
use indodax_auth::Params;
use indodax_types::Method;
use tracing::{debug, instrument};

/// Largest row count (exclusive) the history endpoints accept
pub const MAX_HISTORY_COUNT: i64 = 1000;

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Get balances and profile
    #[instrument(skip(self))]
    pub async fn get_info(&self) -> RestResult<AccountInfo> {
        debug!("Fetching account info");
        self.dispatcher.private(Method::GetInfo, Params::new()).await
    }

    /// Get deposits and withdrawals
    ///
    /// # Arguments
    /// * `start` - Start date (`YYYY-MM-DD`)
    /// * `end` - End date (`YYYY-MM-DD`)
    #[instrument(skip(self))]
    pub async fn get_transaction_history(
        &self,
        start: &str,
        end: &str,
    ) -> RestResult<TransactionHistory> {
        let params = Params::new().with("start", start).with("end", end);

        self.dispatcher.private(Method::TransactionHistory, params).await
    }

    /// Get filled trades
    #[instrument(skip(self))]
    pub async fn get_trade_history(&self, query: &TradeHistoryQuery) -> RestResult<TradeHistory> {
        self.dispatcher
            .private(Method::TradeHistory, trade_history_params(query))
            .await
    }

    /// Get open orders
    ///
    /// # Arguments
    /// * `pair` - Restrict to one pair; `None` returns every pair keyed by pair id
    #[instrument(skip(self))]
    pub async fn get_open_orders(&self, pair: Option<&str>) -> RestResult<OpenOrders> {
        let mut params = Params::new();
        params.insert_opt("pair", pair);

        match pair {
            Some(_) => {
                let orders: PairOpenOrders =
                    self.dispatcher.private(Method::OpenOrders, params).await?;
                Ok(OpenOrders::Pair(orders))
            }
            None => {
                let orders: AllOpenOrders =
                    self.dispatcher.private(Method::OpenOrders, params).await?;
                Ok(OpenOrders::All(orders))
            }
        }
    }

    /// Get closed and cancelled orders
    ///
    /// # Arguments
    /// * `pair` - Pair id (e.g., "btc_idr")
    /// * `count` - Max rows; sent only when between 1 and 999
    /// * `from` - Offset order id
    #[instrument(skip(self))]
    pub async fn get_order_history(
        &self,
        pair: &str,
        count: Option<i64>,
        from: Option<i64>,
    ) -> RestResult<OrderHistory> {
        let mut params = Params::new().with("pair", pair);
        params.insert_opt("count", history_count(count));
        params.insert_opt("from", from);

        self.dispatcher.private(Method::OrderHistory, params).await
    }

    /// Get one order by exchange id
    #[instrument(skip(self))]
    pub async fn get_order(&self, pair: &str, order_id: &str) -> RestResult<OrderDetail> {
        let params = Params::new().with("pair", pair).with("order_id", order_id);

        self.dispatcher.private(Method::GetOrder, params).await
    }

    /// Get one order by client order id
    #[instrument(skip(self))]
    pub async fn get_order_by_client_order_id(
        &self,
        client_order_id: &str,
    ) -> RestResult<OrderDetail> {
        let params = Params::new().with("client_order_id", client_order_id);

        self.dispatcher
            .private(Method::GetOrderByClientOrderId, params)
            .await
    }
}

/// Keep a row count only when it lies strictly between 0 and [`MAX_HISTORY_COUNT`]
pub(crate) fn history_count(count: Option<i64>) -> Option<i64> {
    count.filter(|c| *c > 0 && *c < MAX_HISTORY_COUNT)
}

pub(crate) fn trade_history_params(query: &TradeHistoryQuery) -> Params {
    let mut params = Params::new().with("pair", &query.pair);
    params
        .insert_opt("from_id", query.from_id.as_deref())
        .insert_opt("end_id", query.end_id.as_deref())
        .insert_opt("order", query.order)
        .insert_opt("since", query.since)
        .insert_opt("end", query.end)
        .insert_opt("count", history_count(query.count))
        .insert_opt("order_id", query.order_id.as_deref());
    params
}
