//! Public market data endpoints
//!
//! These endpoints don't require authentication. Responses carry no envelope and
//! are decoded directly.

use crate::dispatch::Dispatcher;
use crate::error::RestResult;
use crate::types::{
    Candle, Depth, PairInfo, PriceIncrements, PublicTrade, ServerTime, Summaries, TickerAll,
    TickerResponse,
};
use indodax_types::TimeFrame;
use tracing::{debug, instrument};

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Get server time
    #[instrument(skip(self))]
    pub async fn get_server_time(&self) -> RestResult<ServerTime> {
        debug!("Fetching server time");
        self.dispatcher.public_get("/api/server_time").await
    }

    /// Get all listed markets
    #[instrument(skip(self))]
    pub async fn get_pairs(&self) -> RestResult<Vec<PairInfo>> {
        debug!("Fetching pairs");
        self.dispatcher.public_get("/api/pairs").await
    }

    /// Get minimum price steps per market
    #[instrument(skip(self))]
    pub async fn get_price_increments(&self) -> RestResult<PriceIncrements> {
        debug!("Fetching price increments");
        self.dispatcher.public_get("/api/price_increments").await
    }

    /// Get tickers plus 24h and 7d reference prices for every market
    #[instrument(skip(self))]
    pub async fn get_summaries(&self) -> RestResult<Summaries> {
        debug!("Fetching summaries");
        self.dispatcher.public_get("/api/summaries").await
    }

    /// Get ticker for one market
    ///
    /// # Arguments
    /// * `pair` - Pair id (e.g., "btc_idr" or "btcidr")
    #[instrument(skip(self))]
    pub async fn get_ticker(&self, pair: &str) -> RestResult<TickerResponse> {
        debug!("Fetching ticker for {}", pair);
        self.dispatcher.public_get(&market_path("ticker", pair)).await
    }

    /// Get tickers for every market
    #[instrument(skip(self))]
    pub async fn get_ticker_all(&self) -> RestResult<TickerAll> {
        debug!("Fetching all tickers");
        self.dispatcher.public_get("/api/ticker_all").await
    }

    /// Get recent public trades
    ///
    /// # Arguments
    /// * `pair` - Pair id (e.g., "btc_idr")
    #[instrument(skip(self))]
    pub async fn get_trades(&self, pair: &str) -> RestResult<Vec<PublicTrade>> {
        debug!("Fetching trades for {}", pair);
        self.dispatcher.public_get(&market_path("trades", pair)).await
    }

    /// Get order book
    ///
    /// # Arguments
    /// * `pair` - Pair id (e.g., "btc_idr")
    #[instrument(skip(self))]
    pub async fn get_depth(&self, pair: &str) -> RestResult<Depth> {
        debug!("Fetching depth for {}", pair);
        self.dispatcher.public_get(&market_path("depth", pair)).await
    }

    /// Get OHLC candles
    ///
    /// # Arguments
    /// * `symbol` - Chart symbol (e.g., "BTCIDR")
    /// * `tf` - Candle width
    /// * `from` - Start time, Unix seconds
    /// * `to` - End time, Unix seconds
    #[instrument(skip(self))]
    pub async fn get_ohlc_history(
        &self,
        symbol: &str,
        tf: TimeFrame,
        from: i64,
        to: i64,
    ) -> RestResult<Vec<Candle>> {
        debug!("Fetching {} candles for {}", tf, symbol);
        self.dispatcher.public_get(&ohlc_path(symbol, tf, from, to)).await
    }
}

fn market_path(resource: &str, pair: &str) -> String {
    format!("/api/{}/{}", resource, pair)
}

fn ohlc_path(symbol: &str, tf: TimeFrame, from: i64, to: i64) -> String {
    format!(
        "/tradingview/history_v2?symbol={}&tf={}&from={}&to={}",
        symbol,
        tf.as_str(),
        from,
        to
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_path() {
        assert_eq!(market_path("ticker", "btc_idr"), "/api/ticker/btc_idr");
        assert_eq!(market_path("depth", "ethidr"), "/api/depth/ethidr");
    }

    #[test]
    fn test_ohlc_path() {
        assert_eq!(
            ohlc_path("BTCIDR", TimeFrame::D1, 1700000000, 1700086400),
            "/tradingview/history_v2?symbol=BTCIDR&tf=1D&from=1700000000&to=1700086400"
        );
    }
}
