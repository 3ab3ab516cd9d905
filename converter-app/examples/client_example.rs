//! Client example demonstrating a conversion session against a running server.
//!
//! Run with: cargo run -p converter-app --example client_example
//!
//! Currency rates come from a fixed table so the example works offline.

use converter_client::ConverterClient;
use converter_hex::{ConverterService, inbound::HttpServer};
use converter_types::{Category, CurrencyPair};
use exchange_rates::FixedRates;
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Bind an available port
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;

    let mut rates = FixedRates::new();
    for (pair, rate) in [("USD to PKR", 280.0), ("PKR to USD", 1.0 / 280.0)] {
        if let Some(pair) = CurrencyPair::parse(pair) {
            rates = rates.with_rate(pair, rate);
        }
    }

    println!("🚀 Starting server on {addr}...");

    // Start server in background
    let service = ConverterService::new(rates);
    let router = HttpServer::new(service).router();
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            eprintln!("server error: {e}");
        }
    });

    // Create client
    let client = ConverterClient::new(format!("http://{addr}"));

    // ─────────────────────────────────────────────────────────────────────────
    // Demo: A conversion session
    // ─────────────────────────────────────────────────────────────────────────

    // Health check
    let health = client.health().await?;
    println!("✅ Server health: {health}");

    let catalog = client.conversions(None).await?;
    println!("\n📂 Categories:");
    for entry in &catalog {
        println!("   - {}: {}", entry.category, entry.conversions.join(", "));
    }

    println!();
    for (category, conversion, value) in [
        (Category::Length, "Kilometer to miles", 10.0),
        (Category::Temperature, "Celsius to Fahrenheit", 37.0),
        (Category::Time, "Hours to days", 48.0),
        (Category::Currency, "USD to PKR", 100.0),
    ] {
        let result = client.convert(category, conversion, value).await?;
        println!(
            "✅ {} {} → {:.2}{}",
            value,
            conversion,
            result.output,
            result
                .rate
                .map(|r| format!(" (rate {r})"))
                .unwrap_or_default()
        );
    }

    // A conversion the catalog does not offer
    let unknown = client
        .convert(Category::Weight, "Stone to Pounds", 1.0)
        .await;
    if let Err(e) = unknown {
        println!("✅ Unknown conversion rejected: {e}");
    }

    // A currency pair without a rate
    let no_rate = client.convert(Category::Currency, "USD to EUR", 1.0).await;
    if let Err(e) = no_rate {
        println!("✅ Missing rate surfaced: {e}");
    }

    println!("\n📜 Conversion history:");
    for record in client.history().await? {
        println!("   {}", client.export_record(record.id).await?);
    }

    println!("\n📊 Conversions per category:");
    for stat in client.history_stats().await? {
        println!("   {:<12} {}", stat.category.name(), "█".repeat(stat.count));
    }

    println!("\n🎉 Example completed successfully!");

    Ok(())
}
