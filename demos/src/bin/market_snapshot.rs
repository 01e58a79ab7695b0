//! Demo 1: Market Snapshot
//!
//! Showcases: Public endpoints, ticker + depth chart
//!
//! Run: cargo run --bin market_snapshot -- btc_idr

use colored::*;
use indodax_rest::{DepthLevel, IndodaxRestClient, TimeFrame};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

const LEVELS: usize = 8;
const HALF_WIDTH: usize = 25;

fn bar(amount: Decimal, max: Decimal) -> usize {
    if max.is_zero() {
        return 0;
    }
    (amount / max * Decimal::from(HALF_WIDTH))
        .to_usize()
        .unwrap_or(0)
        .min(HALF_WIDTH)
}

fn draw_depth(bids: &[DepthLevel], asks: &[DepthLevel]) {
    let max = bids
        .iter()
        .take(LEVELS)
        .chain(asks.iter().take(LEVELS))
        .map(|l| l.amount)
        .max()
        .unwrap_or(dec!(1));

    for level in asks.iter().take(LEVELS).rev() {
        let len = bar(level.amount, max);
        println!(
            "  {:>12} │{}{}│ {}",
            level.amount.round_dp(6),
            " ".repeat(HALF_WIDTH - len),
            "█".repeat(len).red(),
            level.price
        );
    }

    println!("  {:>12} ├{}┤", "", "─".repeat(HALF_WIDTH * 2));

    for level in bids.iter().take(LEVELS) {
        let len = bar(level.amount, max);
        println!(
            "  {:>12} │{}{}│ {}",
            level.amount.round_dp(6),
            " ".repeat(HALF_WIDTH - len),
            "█".repeat(len).green(),
            level.price
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let pair = std::env::args().nth(1).unwrap_or_else(|| "btc_idr".to_string());
    let client = IndodaxRestClient::new()?;

    let time = client.market().get_server_time().await?;
    println!("{} {} ({})", "Server time:".bold(), time.server_time, time.timezone);

    let ticker = client.get_ticker(&pair).await?.ticker;
    let base = pair.split('_').next().unwrap_or_default();
    println!("\n{}", format!("=== {} ===", pair.to_uppercase()).bold());
    println!("  Last:   {}", ticker.last.to_string().yellow());
    println!("  Bid:    {}", ticker.buy.to_string().green());
    println!("  Ask:    {}", ticker.sell.to_string().red());
    println!("  High:   {}", ticker.high);
    println!("  Low:    {}", ticker.low);
    if let Some(vol) = ticker.volume(base) {
        println!("  Volume: {} {}", vol, base.to_uppercase());
    }

    let depth = client.get_depth(&pair).await?;
    println!();
    draw_depth(&depth.buy, &depth.sell);
    if let (Some(spread), Some(mid)) = (depth.spread(), depth.mid_price()) {
        println!("\n  Spread: {}  Mid: {}", spread.to_string().yellow(), mid);
    }

    let symbol = pair.replace('_', "").to_uppercase();
    let to = time.server_time / 1000;
    let from = to - 7 * TimeFrame::D1.as_secs() as i64;
    let candles = client
        .market()
        .get_ohlc_history(&symbol, TimeFrame::D1, from, to)
        .await?;

    println!("\n{}", "Daily closes:".bold());
    for candle in candles.iter().rev().take(7) {
        println!("  {}  {}", candle.time, candle.close);
    }

    Ok(())
}
