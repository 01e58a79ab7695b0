//! Funding endpoints for withdrawals
//!
//! These endpoints require authentication.

use crate::dispatch::Dispatcher;
use crate::error::RestResult;
use crate::envelope::Envelope;
use crate::types::{Record, WithdrawCoinResult, WithdrawRequest};
use indodax_auth::Params;
use indodax_types::{normalize_network, Method};
use tracing::{debug, instrument};

/// Funding endpoints for withdrawals
pub struct FundingEndpoints<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> FundingEndpoints<'a> {
    pub fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Get the withdrawal fee for an asset
    ///
    /// # Arguments
    /// * `currency` - Asset (e.g., "usdt")
    /// * `network` - Network name or alias; empty is treated as absent
    #[instrument(skip(self))]
    pub async fn get_withdraw_fee(&self, currency: &str, network: Option<&str>) -> RestResult<Record> {
        let mut params = Params::new().with("currency", currency);
        params.insert_opt(
            "network",
            network
                .filter(|n| !n.is_empty())
                .map(|n| normalize_network(currency, n)),
        );

        self.dispatcher.private(Method::WithdrawFee, params).await
    }

    /// Withdraw coins to an external address
    ///
    /// This moves funds; it is never retried.
    #[instrument(skip(self, request), fields(currency = %request.currency, amount = %request.amount))]
    pub async fn withdraw(&self, request: &WithdrawRequest) -> RestResult<WithdrawCoinResult> {
        let params = withdraw_params(request);

        debug!("Withdrawing {} {}", request.amount, request.currency);

        let body = self
            .dispatcher
            .private_call(Method::WithdrawCoin, params)
            .await?;
        Envelope::from_slice(&body)?.check()?;

        Ok(serde_json::from_slice(&body)?)
    }
}

pub(crate) fn withdraw_params(request: &WithdrawRequest) -> Params {
    let mut params = Params::new()
        .with("request_id", &request.request_id)
        .with("currency", &request.currency)
        .with("withdraw_address", &request.address)
        .with("withdraw_amount", request.amount);

    params
        .insert_opt(
            "network",
            request
                .network
                .as_deref()
                .filter(|n| !n.is_empty())
                .map(|n| normalize_network(&request.currency, n)),
        )
        .insert_opt(
            "withdraw_memo",
            request.memo.as_deref().filter(|m| !m.is_empty()),
        );
    params
}
