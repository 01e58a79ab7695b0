//! Demo 2: Account Overview
//!
//! Showcases: Private endpoints, balances, open orders, request hooks
//!
//! Run: INDODAX_API_KEY=... INDODAX_API_SECRET=... cargo run --bin account_overview

use colored::*;
use indodax_rest::{ClientConfig, Credentials, Hooks, IndodaxRestClient, OpenOrders};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let hooks = Hooks::new()
        .on_request(|log| {
            info!(
                method = log.api_method.map(|m| m.as_str()).unwrap_or("public"),
                bytes = log.response.len(),
                "request completed"
            );
        })
        .on_error(|log| {
            eprintln!("{} {}", "request failed:".red(), log.message);
        });

    let config = ClientConfig::new()
        .with_credentials(Credentials::from_env()?)
        .with_hooks(hooks);
    let client = IndodaxRestClient::with_config(config)?;

    let info = client.get_info().await?;
    println!("{} {} ({})", "Account:".bold(), info.name, info.verification_status);

    println!("\n{}", "Balances:".bold());
    for asset in info.non_zero_assets() {
        println!(
            "  {:<8} available {:>20}  held {:>20}",
            asset.to_uppercase(),
            info.available(asset).to_string().green(),
            info.held(asset).to_string().yellow()
        );
    }

    println!("\n{}", "Open orders:".bold());
    match client.get_open_orders(None).await? {
        OpenOrders::All(all) => {
            if all.orders.is_empty() {
                println!("  none");
            }
            for (pair, orders) in &all.orders {
                println!("  {:<10} {}", pair, orders.len());
            }
        }
        OpenOrders::Pair(single) => println!("  {}", single.orders.len()),
    }

    Ok(())
}
