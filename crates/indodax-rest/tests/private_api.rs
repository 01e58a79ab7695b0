//! Private trade API endpoints against a recording transport

mod common;

use common::*;
use indodax_rest::{
    ApiKind, ClientConfig, ErrorKind, Hooks, HttpMethod, IndodaxRestClient, Method, OrderType,
    RestError, SortOrder, TimeInForce, TradeHistoryQuery, TradeRequest, TradeType,
    WithdrawRequest, GENERIC_API_FAILURE,
};
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};

// ============================================================================
// Request shape and signing
// ============================================================================

#[tokio::test]
async fn test_private_request_shape() {
    let transport = MockTransport::new();
    transport.respond(GET_INFO);
    let client = client(&transport);

    client.get_info().await.unwrap();

    let req = transport.last_request();
    assert_eq!(req.method, HttpMethod::Post);
    assert_eq!(req.url, "https://indodax.com/tapi");
    assert_eq!(
        req.header_value("Content-Type"),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(req.header_value("Key"), Some(API_KEY));

    let params = transport.last_params();
    assert_eq!(params.get("method"), Some("getInfo"));
    assert_eq!(params.get("recvWindow"), Some("5000"));
    assert!(params.get("timestamp").unwrap().parse::<u64>().unwrap() > 1_600_000_000_000);
}

#[tokio::test]
async fn test_signature_covers_transmitted_body() {
    let transport = MockTransport::new();
    transport.respond(OPEN_ORDERS_PAIR);
    let client = client(&transport);

    client.get_open_orders(Some("btc_idr")).await.unwrap();

    let req = transport.last_request();
    let body = req.body.clone().unwrap();
    let sign = req.header_value("Sign").unwrap();

    assert_eq!(sign.len(), 128);
    assert!(sign.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    assert_eq!(sign, credentials().sign(&body).unwrap());

    // Keys are sent in sorted order
    let keys: Vec<&str> = body.split('&').map(|kv| kv.split('=').next().unwrap()).collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted);
}

// ============================================================================
// Preconditions
// ============================================================================

#[tokio::test]
async fn test_missing_credentials_fails_without_request() {
    let transport = MockTransport::new();
    let client = public_client(&transport);

    let err = client.get_info().await.unwrap_err();
    assert!(matches!(err, RestError::AuthRequired));
    assert!(err.is_local());
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_missing_private_base_url() {
    let transport = MockTransport::new();
    let config = ClientConfig::new()
        .with_private_base_url("")
        .with_credentials(credentials())
        .with_transport(transport.clone());
    let client = IndodaxRestClient::with_config(config).unwrap();

    let err = client.get_info().await.unwrap_err();
    assert!(matches!(err, RestError::MissingBaseUrl(ApiKind::Private)));
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn test_empty_credentials_rejected() {
    assert!(indodax_rest::Credentials::new(API_KEY, "").is_err());
    assert!(indodax_rest::Credentials::new("", API_SECRET).is_err());
}

// ============================================================================
// Envelope handling
// ============================================================================

#[tokio::test]
async fn test_exchange_error_message_exact() {
    let transport = MockTransport::new();
    transport.respond(INVALID_CREDENTIALS);
    let client = client(&transport);

    let err = client.get_info().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid credentials. API not found or session has expired."
    );
    assert_eq!(err.kind(), ErrorKind::Exchange);
    assert_eq!(err.api_code(), Some("invalid_credentials"));
}

#[tokio::test]
async fn test_exchange_error_without_message() {
    let transport = MockTransport::new();
    transport.respond(FAILURE_NO_MESSAGE);
    let client = client(&transport);

    let err = client.trading().cancel_order_by_client_order_id("x").await.unwrap_err();
    assert_eq!(err.to_string(), GENERIC_API_FAILURE);
}

#[tokio::test]
async fn test_return_shape_mismatch_is_decode_error() {
    let transport = MockTransport::new();
    transport.respond(r#"{"success":1,"return":{"orders":"not-a-list"}}"#);
    let client = client(&transport);

    let err = client.account().get_order_history("btc_idr", None, None).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

// ============================================================================
// Account
// ============================================================================

#[tokio::test]
async fn test_get_info() {
    let transport = MockTransport::new();
    transport.respond(GET_INFO);
    let client = client(&transport);

    let info = client.get_info().await.unwrap();
    assert_eq!(info.user_id, "123456");
    assert_eq!(info.available("idr"), dec!(1500000));
    assert_eq!(info.held("idr"), dec!(500000));
    assert_eq!(info.total("btc"), dec!(0.01));
    assert!(info.profile_picture.is_none());
}

#[tokio::test]
async fn test_transaction_history() {
    let transport = MockTransport::new();
    transport.respond(TRANS_HISTORY);
    let client = client(&transport);

    let history = client
        .account()
        .get_transaction_history("2023-11-01", "2023-11-14")
        .await
        .unwrap();
    assert_eq!(history.withdraw["idr"].len(), 1);
    assert_eq!(history.deposit["idr"][0]["deposit_id"], "3395438");

    let params = transport.last_params();
    assert_eq!(params.get("method"), Some("transHistory"));
    assert_eq!(params.get("start"), Some("2023-11-01"));
    assert_eq!(params.get("end"), Some("2023-11-14"));
}

#[tokio::test]
async fn test_trade_history_count_filter() {
    let transport = MockTransport::new();
    for _ in 0..4 {
        transport.respond(TRADE_HISTORY);
    }
    let client = client(&transport);

    for (count, expected) in [(0, None), (1000, None), (-3, None), (500, Some("500"))] {
        let query = TradeHistoryQuery::new("btc_idr").count(count);
        let history = client.account().get_trade_history(&query).await.unwrap();
        assert_eq!(history.trades.len(), 1);
        assert_eq!(transport.last_params().get("count"), expected);
    }
}

#[tokio::test]
async fn test_trade_history_filters() {
    let transport = MockTransport::new();
    transport.respond(TRADE_HISTORY);
    let client = client(&transport);

    let query = TradeHistoryQuery::new("btc_idr")
        .order(SortOrder::Desc)
        .between(1699990000, 1700000000)
        .order_id("11560");
    client.account().get_trade_history(&query).await.unwrap();

    let params = transport.last_params();
    assert_eq!(params.get("method"), Some("tradeHistory"));
    assert_eq!(params.get("pair"), Some("btc_idr"));
    assert_eq!(params.get("order"), Some("desc"));
    assert_eq!(params.get("since"), Some("1699990000"));
    assert_eq!(params.get("order_id"), Some("11560"));
}

#[tokio::test]
async fn test_open_orders_shape_follows_argument() {
    let transport = MockTransport::new();
    transport.respond(OPEN_ORDERS_PAIR);
    transport.respond(OPEN_ORDERS_ALL);
    let client = client(&transport);

    let single = client.get_open_orders(Some("btc_idr")).await.unwrap();
    assert_eq!(single.as_pair().unwrap().orders.len(), 1);
    assert_eq!(transport.last_params().get("pair"), Some("btc_idr"));

    let all = client.get_open_orders(None).await.unwrap();
    let all = all.as_all().unwrap();
    assert_eq!(all.orders["eth_idr"].len(), 2);
    assert!(!transport.last_params().contains_key("pair"));
}

#[tokio::test]
async fn test_open_orders_all_shape_for_pair_is_decode_error() {
    // A pair was requested, so the list shape is expected even if a map comes back
    let transport = MockTransport::new();
    transport.respond(OPEN_ORDERS_ALL);
    let client = client(&transport);

    let err = client.get_open_orders(Some("btc_idr")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn test_order_history() {
    let transport = MockTransport::new();
    transport.respond(ORDER_HISTORY);
    transport.respond(ORDER_HISTORY);
    let client = client(&transport);

    let history = client
        .account()
        .get_order_history("btc_idr", Some(500), Some(11000))
        .await
        .unwrap();
    assert_eq!(history.orders[0]["status"], "filled");
    let params = transport.last_params();
    assert_eq!(params.get("count"), Some("500"));
    assert_eq!(params.get("from"), Some("11000"));

    client
        .account()
        .get_order_history("btc_idr", Some(0), None)
        .await
        .unwrap();
    let params = transport.last_params();
    assert!(!params.contains_key("count"));
    assert!(!params.contains_key("from"));
}

#[tokio::test]
async fn test_get_order_variants() {
    let transport = MockTransport::new();
    transport.respond(GET_ORDER);
    transport.respond(GET_ORDER);
    let client = client(&transport);

    let order = client.account().get_order("btc_idr", "94425").await.unwrap();
    assert_eq!(order.order_id().as_deref(), Some("94425"));
    let params = transport.last_params();
    assert_eq!(params.get("method"), Some("getOrder"));
    assert_eq!(params.get("order_id"), Some("94425"));

    let order = client
        .account()
        .get_order_by_client_order_id("clientx-sj82ks82j")
        .await
        .unwrap();
    assert_eq!(order.status(), Some("filled"));
    let params = transport.last_params();
    assert_eq!(params.get("method"), Some("getOrderByClientOrderId"));
    assert_eq!(params.get("client_order_id"), Some("clientx-sj82ks82j"));
}

// ============================================================================
// Trading
// ============================================================================

#[tokio::test]
async fn test_trade_limit_buy() {
    let transport = MockTransport::new();
    transport.respond(TRADE_OK);
    let client = client(&transport);

    let order = TradeRequest::limit("btc_idr", TradeType::Buy, dec!(650000000), dec!(0.0004))
        .with_time_in_force(TimeInForce::MakerOrCancel)
        .with_client_order_id("clientx-sj82ks82j");
    let result = client.trade(&order).await.unwrap();
    assert_eq!(result.order_id.as_deref(), Some("11560"));
    assert_eq!(result.decimal("remain_rp"), Some(dec!(650000)));

    let params = transport.last_params();
    assert_eq!(params.get("method"), Some("trade"));
    assert_eq!(params.get("pair"), Some("btc_idr"));
    assert_eq!(params.get("type"), Some("buy"));
    assert_eq!(params.get("order_type"), Some("limit"));
    assert_eq!(params.get("price"), Some("650000000"));
    assert_eq!(params.get("btc"), Some("0.0004"));
    assert!(!params.contains_key("idr"));
    assert_eq!(params.get("time_in_force"), Some("MOC"));
}

#[tokio::test]
async fn test_trade_market_buy_amount_placement() {
    let transport = MockTransport::new();
    transport.respond(TRADE_OK);
    transport.respond(TRADE_OK);
    let client = client(&transport);

    let order = TradeRequest::market("btc_idr", TradeType::Buy, dec!(100000));
    client.trade(&order).await.unwrap();
    let params = transport.last_params();
    assert_eq!(params.get("idr"), Some("100000"));
    assert!(!params.contains_key("btc"));
    assert!(!params.contains_key("price"));

    let order = TradeRequest::market("btc_idr", TradeType::Buy, dec!(0.001)).force_base_amount();
    client.trade(&order).await.unwrap();
    let params = transport.last_params();
    assert_eq!(params.get("btc"), Some("0.001"));
    assert!(!params.contains_key("idr"));
}

#[tokio::test]
async fn test_trade_invalid_pair_sends_nothing() {
    let transport = MockTransport::new();
    let client = client(&transport);

    for pair in ["btcidr", "btc_idr_usdt"] {
        let order = TradeRequest::limit(pair, TradeType::Sell, dec!(1), dec!(1));
        let err = client.trade(&order).await.unwrap_err();
        assert!(matches!(err, RestError::InvalidPair(_)));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_cancel_order() {
    let transport = MockTransport::new();
    transport.respond(CANCEL_OK);
    let client = client(&transport);

    let record = client
        .cancel_order("btc_idr", "11560", TradeType::Buy, Some(OrderType::Limit))
        .await
        .unwrap();
    assert_eq!(record["pair"], "btc_idr");

    let params = transport.last_params();
    assert_eq!(params.get("method"), Some("cancelOrder"));
    assert_eq!(params.get("order_id"), Some("11560"));
    assert_eq!(params.get("type"), Some("buy"));
    assert_eq!(params.get("order_type"), Some("limit"));
}

// ============================================================================
// Funding
// ============================================================================

#[tokio::test]
async fn test_withdraw_fee_normalizes_network() {
    let transport = MockTransport::new();
    transport.respond(WITHDRAW_FEE);
    transport.respond(WITHDRAW_FEE);
    let client = client(&transport);

    let fee = client.funding().get_withdraw_fee("usdt", Some("Tron")).await.unwrap();
    assert_eq!(fee["withdraw_fee"], "1");
    let params = transport.last_params();
    assert_eq!(params.get("method"), Some("withdrawFee"));
    assert_eq!(params.get("network"), Some("trc20"));

    client.funding().get_withdraw_fee("usdt", Some("")).await.unwrap();
    assert!(!transport.last_params().contains_key("network"));
}

#[tokio::test]
async fn test_withdraw_top_level_result() {
    let transport = MockTransport::new();
    transport.respond(WITHDRAW_OK);
    let client = client(&transport);

    let request = WithdrawRequest::new("req-20231114-1", "usdt", "TXyz1234567890", dec!(10.5))
        .with_network("TRC-20");
    let result = client.withdraw(&request).await.unwrap();
    assert_eq!(result.status.as_deref(), Some("approved"));
    assert_eq!(result.withdraw_id.as_deref(), Some("usdt-175734"));
    assert_eq!(result.amount_after_fee.unwrap(), dec!(9.5));

    let params = transport.last_params();
    assert_eq!(params.get("method"), Some("withdrawCoin"));
    assert_eq!(params.get("request_id"), Some("req-20231114-1"));
    assert_eq!(params.get("withdraw_amount"), Some("10.5"));
    assert_eq!(params.get("network"), Some("trc20"));
    assert!(!params.contains_key("withdraw_memo"));
}

#[tokio::test]
async fn test_withdraw_failure() {
    let transport = MockTransport::new();
    transport.respond(r#"{"success":0,"error":"Insufficient balance.","error_code":"insufficient_balance"}"#);
    let client = client(&transport);

    let request = WithdrawRequest::new("req-2", "usdt", "TXyz", dec!(1000000));
    let err = client.withdraw(&request).await.unwrap_err();
    assert_eq!(err.to_string(), "Insufficient balance.");
    assert_eq!(transport.request_count(), 1);
}

// ============================================================================
// Hooks
// ============================================================================

#[tokio::test]
async fn test_hooks_see_private_calls_without_secret() {
    let transport = MockTransport::new();
    transport.respond(GET_INFO);

    let seen: Arc<Mutex<Vec<(Option<Method>, String)>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let hooks = Hooks::new().on_request(move |log| {
        sink.lock()
            .unwrap()
            .push((log.api_method, log.request.clone().unwrap_or_default()));
    });

    let config = ClientConfig::new()
        .with_credentials(credentials())
        .with_hooks(hooks)
        .with_transport(transport.clone());
    let client = IndodaxRestClient::with_config(config).unwrap();
    client.get_info().await.unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, Some(Method::GetInfo));
    assert!(seen[0].1.contains("method=getInfo"));
    assert!(!seen[0].1.contains(API_SECRET));
}

#[tokio::test]
async fn test_trade_transport_failure_reports_signed_body() {
    let transport = MockTransport::new();
    transport.fail("connection reset");

    let seen: Arc<Mutex<Vec<(Option<Method>, String)>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let hooks = Hooks::new().on_error(move |log| {
        sink.lock()
            .unwrap()
            .push((log.api_method, log.request.clone().unwrap_or_default()));
    });

    let config = ClientConfig::new()
        .with_credentials(credentials())
        .with_hooks(hooks)
        .with_transport(transport.clone());
    let client = IndodaxRestClient::with_config(config).unwrap();

    let order = TradeRequest::limit("btc_idr", TradeType::Buy, dec!(650000000), dec!(0.001));
    let err = client.trade(&order).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(transport.request_count(), 1);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, Some(Method::Trade));
    assert_eq!(Some(seen[0].1.as_str()), transport.last_request().body.as_deref());
}

#[tokio::test]
async fn test_client_is_clone_and_shares_transport() {
    let transport = MockTransport::new();
    transport.respond(GET_INFO);
    transport.respond(GET_INFO);
    let client = client(&transport);
    let cloned = client.clone();

    client.get_info().await.unwrap();
    cloned.get_info().await.unwrap();
    assert_eq!(transport.request_count(), 2);
}
