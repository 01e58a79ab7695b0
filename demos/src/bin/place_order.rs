//! Demo 3: Place and Cancel
//!
//! Showcases: Order placement, lookup by client order id, cancellation
//!
//! Places a small post-only bid far below the market and cancels it again.
//! Nothing is sent unless INDODAX_DEMO_LIVE=1.
//!
//! Run: INDODAX_DEMO_LIVE=1 INDODAX_API_KEY=... INDODAX_API_SECRET=... cargo run --bin place_order

use colored::*;
use indodax_rest::endpoints::trade_params;
use indodax_rest::{Credentials, IndodaxRestClient, OrderType, Pair, TradeRequest, TradeType};
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let pair = Pair::BTC_IDR;
    let client_order_id = format!("demo-{}", std::process::id());

    let public = IndodaxRestClient::new()?;
    let ticker = public.get_ticker(pair).await?.ticker;
    let price = (ticker.buy * dec!(0.5) / dec!(1000)).floor() * dec!(1000);

    let order = TradeRequest::limit(pair, TradeType::Buy, price, dec!(0.00002))
        .post_only()
        .with_client_order_id(&client_order_id);

    println!("{}", "Order parameters:".bold());
    for (key, value) in trade_params(&order)?.iter() {
        println!("  {:<16} {}", key, value);
    }

    if std::env::var("INDODAX_DEMO_LIVE").as_deref() != Ok("1") {
        println!("\n{}", "Dry run; set INDODAX_DEMO_LIVE=1 to send.".yellow());
        return Ok(());
    }

    let client = IndodaxRestClient::with_credentials(Credentials::from_env()?)?;

    let placed = client.trade(&order).await?;
    let order_id = placed
        .order_id
        .clone()
        .ok_or("exchange returned no order id")?;
    println!("\n{} {}", "Placed order".green(), order_id);

    let detail = client
        .account()
        .get_order_by_client_order_id(&client_order_id)
        .await?;
    println!("Status: {}", detail.status().unwrap_or("unknown"));

    client
        .cancel_order(pair, &order_id, TradeType::Buy, Some(OrderType::Limit))
        .await?;
    println!("{} {}", "Cancelled order".red(), order_id);

    Ok(())
}
