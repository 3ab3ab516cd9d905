//! Unit Converter CLI
//!
//! Command-line interface for the Unit Converter API, with an in-process
//! mode that needs no server.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use converter_client::ConverterClient;
use converter_hex::ConversionEngine;
use converter_types::{Category, Conversion, HistoryRecordId};
use exchange_rates::HttpRateResolver;

#[derive(Parser)]
#[command(name = "unit-convert")]
#[command(author, version, about = "Unit converter CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Converter API
    #[arg(
        long,
        env = "CONVERTER_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check API health
    Health,
    /// List the conversions offered per category
    Conversions {
        /// Only list this category
        #[arg(long)]
        category: Option<String>,
    },
    /// Convert a value
    Convert {
        /// Category (Length, Weight, Time, Temperature, Currency)
        category: String,
        /// Conversion identifier, e.g. "Kilometer to miles" or "USD to PKR"
        conversion: String,
        /// Value to convert
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Convert in-process instead of calling the API (not recorded in history)
        #[arg(long)]
        local: bool,
        /// Exchange rate endpoint used with --local
        #[arg(
            long,
            env = "RATES_API_URL",
            default_value = exchange_rates::DEFAULT_ENDPOINT
        )]
        rates_url: String,
        /// Access key for the exchange rate endpoint
        #[arg(long, env = "RATES_ACCESS_KEY")]
        rates_access_key: Option<String>,
    },
    /// Show the session history, most recent first
    History,
    /// Show conversion counts per category
    Stats,
    /// Export the history (or one record) as text
    Export {
        /// Export only this history record (UUID)
        #[arg(long)]
        id: Option<String>,
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn parse_category(s: &str) -> Result<Category> {
    s.parse().map_err(|e: String| anyhow::anyhow!(e))
}

fn ensure_finite(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        anyhow::bail!("Value must be a finite number, got {}", value)
    }
}

fn parse_record_id(s: &str) -> Result<HistoryRecordId> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("Invalid history record ID: {}", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = ConverterClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Conversions { category } => {
            let category = category.as_deref().map(parse_category).transpose()?;
            let catalog = client.conversions(category).await?;
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }

        Commands::Convert {
            category,
            conversion,
            value,
            local,
            rates_url,
            rates_access_key,
        } => {
            let category = parse_category(&category)?;
            let value = ensure_finite(value)?;
            if local {
                let conversion = Conversion::parse(category, &conversion)?;
                let mut resolver = HttpRateResolver::new(rates_url);
                if let Some(key) = rates_access_key {
                    resolver = resolver.with_access_key(key);
                }
                let engine = ConversionEngine::new(resolver);
                let outcome = engine.apply(&conversion, value).await?;
                let result = serde_json::json!({
                    "category": category,
                    "conversion": conversion.to_string(),
                    "input": value,
                    "output": outcome.value,
                    "rate": outcome.rate,
                });
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let response = client.convert(category, &conversion, value).await?;
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
        }

        Commands::History => {
            let history = client.history().await?;
            println!("{}", serde_json::to_string_pretty(&history)?);
        }

        Commands::Stats => {
            let stats = client.history_stats().await?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }

        Commands::Export { id, output } => {
            let text = match id {
                Some(id) => client.export_record(parse_record_id(&id)?).await?,
                None => client.export_history().await?,
            };
            match output {
                Some(path) => {
                    std::fs::write(&path, text)?;
                    println!("✓ Wrote {}", path.display());
                }
                None => println!("{}", text),
            }
        }
    }

    Ok(())
}
