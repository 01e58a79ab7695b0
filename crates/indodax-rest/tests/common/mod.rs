//! Common test utilities and fixtures for integration tests
//!
//! Contains sample JSON bodies shaped like live Indodax API responses and a
//! transport that records requests instead of touching the network.

#![allow(dead_code)]

use async_trait::async_trait;
use indodax_rest::{
    ClientConfig, Credentials, HttpRequest, HttpTransport, IndodaxRestClient, Params, RestError,
    RestResult,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const API_KEY: &str = "TEST-API-KEY-0001";
pub const API_SECRET: &str = "test-secret";

/// Transport that records every request and replays canned responses in order
#[derive(Default)]
pub struct MockTransport {
    requests: Mutex<Vec<HttpRequest>>,
    responses: Mutex<VecDeque<RestResult<Vec<u8>>>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a successful response body
    pub fn respond(&self, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(body.as_bytes().to_vec()));
    }

    /// Queue a transport failure
    pub fn fail(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(RestError::Transport(message.to_string())));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    /// Decoded form body of the last request
    pub fn last_params(&self) -> Params {
        let body = self.last_request().body.expect("request had no body");
        Params::decode(&body).expect("body is not form-urlencoded")
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> RestResult<Vec<u8>> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(b"{}".to_vec()))
    }
}

pub fn credentials() -> Credentials {
    Credentials::new(API_KEY, API_SECRET).unwrap()
}

/// Authenticated client backed by `transport`
pub fn client(transport: &Arc<MockTransport>) -> IndodaxRestClient {
    let config = ClientConfig::new()
        .with_credentials(credentials())
        .with_transport(transport.clone());
    IndodaxRestClient::with_config(config).unwrap()
}

/// Unauthenticated client backed by `transport`
pub fn public_client(transport: &Arc<MockTransport>) -> IndodaxRestClient {
    let config = ClientConfig::new().with_transport(transport.clone());
    IndodaxRestClient::with_config(config).unwrap()
}

// ============================================================================
// Public fixtures
// ============================================================================

pub const SERVER_TIME: &str = r#"{"timezone":"UTC","server_time":1700000000123}"#;

pub const PAIRS: &str = r#"[
    {
        "id": "btcidr",
        "symbol": "BTCIDR",
        "base_currency": "idr",
        "traded_currency": "btc",
        "traded_currency_unit": "BTC",
        "description": "BTC/IDR",
        "ticker_id": "btc_idr",
        "volume_precision": 0,
        "price_precision": 1000,
        "price_round": 8,
        "pricescale": 1000,
        "trade_min_base_currency": 10000,
        "trade_min_traded_currency": "0.00007",
        "has_memo": false,
        "memo_name": false,
        "trade_fee_percent": 0.3,
        "trade_fee_percent_taker": "0.3",
        "trade_fee_percent_maker": 0,
        "url_logo": "https://indodax.com/v2/logo/svg/color/btc.svg",
        "url_logo_png": "https://indodax.com/v2/logo/png/color/btc.png",
        "is_maintenance": 0,
        "is_market_suspended": 0,
        "coingecko_id": "bitcoin",
        "cmc_id": 1
    }
]"#;

pub const PRICE_INCREMENTS: &str = r#"{"increments":{"btc_idr":"1000","eth_idr":"500","usdt_idr":"1"}}"#;

pub const TICKER: &str = r#"{"ticker":{"high":"652000000","low":"640000000","vol_btc":"81.5","vol_idr":"52700000000","last":"648000000","buy":"647999000","sell":"648000000","server_time":1700000000}}"#;

pub const TICKER_ALL: &str = r#"{"tickers":{
    "btc_idr":{"high":"652000000","low":"640000000","vol_btc":"81.5","vol_idr":"52700000000","last":"648000000","buy":"647999000","sell":"648000000","server_time":1700000000,"name":"Bitcoin"},
    "eth_idr":{"high":"35000000","low":"34000000","vol_eth":"900","vol_idr":"31000000000","last":"34500000","buy":"34490000","sell":"34500000","server_time":1700000000,"name":"Ethereum"}
}}"#;

pub const SUMMARIES: &str = r#"{
    "tickers":{"btc_idr":{"high":"652000000","low":"640000000","vol_btc":"81.5","vol_idr":"52700000000","last":"648000000","buy":"647999000","sell":"648000000","server_time":1700000000,"name":"Bitcoin"}},
    "prices_24h":{"btcidr":"645000000"},
    "prices_7d":{"btcidr":"610000000"}
}"#;

pub const TRADES: &str = r#"[
    {"date":"1700000000","price":"648000000","amount":"0.00150000","tid":"98765","type":"buy"},
    {"date":"1699999990","price":"647999000","amount":"0.01000000","tid":"98764","type":"sell"}
]"#;

pub const DEPTH: &str = r#"{"buy":[[647999000,"0.05"],[647990000,"0.20"]],"sell":[[648000000,"0.10"],[648010000,"1.00"]]}"#;

pub const OHLC: &str = r#"[
    {"Time":1700000000,"Open":648000000,"High":650000000,"Low":646000000,"Close":649000000,"Volume":"3.25"},
    {"Time":1700086400,"Open":649000000,"High":652000000,"Low":647000000,"Close":651000000,"Volume":"2.10"}
]"#;

// ============================================================================
// Private fixtures
// ============================================================================

pub const GET_INFO: &str = r#"{"success":1,"return":{
    "server_time":1700000000,
    "balance":{"idr":1500000,"btc":"0.01000000","eth":"0"},
    "balance_hold":{"idr":"500000","btc":"0.00000000"},
    "address":{"btc":"1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"},
    "user_id":"123456",
    "name":"Test Trader",
    "email":"trader@example.com",
    "profile_picture":null,
    "verification_status":"verified",
    "gauth_enable":true,
    "withdraw_status":1
}}"#;

pub const TRANS_HISTORY: &str = r#"{"success":1,"return":{
    "withdraw":{"idr":[{"status":"success","type":"coupon","rp":"115205","fee":"500","amount":"114705","submit_time":"1539844166","success_time":"1539844189","withdraw_id":"1783717","tx":"BTC-IDR-RDTVVO2P-ETD0EVAW-VTNZGMIR-HTNTUAPI-84ULM9OI","sender":"","used_by":"yuwewe"}],"btc":[]},
    "deposit":{"idr":[{"status":"success","type":"duitku","rp":"393000","fee":"5895","amount":"387105","submit_time":"1576555012","success_time":"1576555012","deposit_id":"3395438","tx":"Duitku OVO Settlement"}],"btc":[]}
}}"#;

pub const TRADE_HISTORY: &str = r#"{"success":1,"return":{"trades":[
    {"trade_id":"5869","order_id":"11560","type":"buy","btc":"0.00040000","price":"650000000","fee":"0","trade_time":"1700000000","client_order_id":"clientx-sj82ks82j"}
]}}"#;

pub const OPEN_ORDERS_PAIR: &str = r#"{"success":1,"return":{"orders":[
    {"order_id":"11560","client_order_id":"clientx-sj82ks82j","submit_time":"1700000000","price":"640000000","type":"buy","order_type":"limit","order_idr":"64000","remain_idr":"64000"}
]}}"#;

pub const OPEN_ORDERS_ALL: &str = r#"{"success":1,"return":{"orders":{
    "btc_idr":[{"order_id":"11560","price":"640000000","type":"buy"}],
    "eth_idr":[{"order_id":"11561","price":"34000000","type":"sell"},{"order_id":"11562","price":"35000000","type":"sell"}]
}}}"#;

pub const ORDER_HISTORY: &str = r#"{"success":1,"return":{"orders":[
    {"order_id":"11555","type":"sell","price":"660000000","submit_time":"1699990000","finish_time":"1699990500","status":"filled","order_btc":"0.001","remain_btc":"0"}
]}}"#;

pub const GET_ORDER: &str = r#"{"success":1,"return":{"order":{"order_id":"94425","client_order_id":"clientx-sj82ks82j","price":"648000000","type":"sell","order_type":"limit","submit_time":"1700000000","finish_time":"1700000100","status":"filled","order_btc":"0.00100000","remain_btc":"0"}}}"#;

pub const TRADE_OK: &str = r#"{"success":1,"return":{"receive_btc":"0.00000000","spend_rp":0,"fee":0,"remain_rp":"650000","order_id":11560,"client_order_id":"clientx-sj82ks82j"}}"#;

pub const CANCEL_OK: &str = r#"{"success":1,"return":{"order_id":11560,"client_order_id":"clientx-sj82ks82j","type":"buy","pair":"btc_idr","balance":{"idr":"1500000"}}}"#;

pub const WITHDRAW_FEE: &str = r#"{"success":1,"return":{"server_time":1700000000,"withdraw_fee":"1","currency":"usdt","network":"trc20"}}"#;

pub const WITHDRAW_OK: &str = r#"{"success":1,"status":"approved","withdraw_currency":"usdt","withdraw_address":"TXyz1234567890","withdraw_amount":"10.5","fee":"1","amount_after_fee":"9.5","submit_time":"1700000000","withdraw_id":"usdt-175734","tx_id":""}"#;

pub const INVALID_CREDENTIALS: &str = r#"{"success":0,"error":"Invalid credentials. API not found or session has expired.","error_code":"invalid_credentials"}"#;

pub const FAILURE_NO_MESSAGE: &str = r#"{"success":0}"#;
