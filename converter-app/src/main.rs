//! # Unit Converter Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize tracing and the OTLP exporter
//! - Initialize the exchange rate resolver
//! - Create the converter service
//! - Start the HTTP server

mod config;

use opentelemetry::global;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use converter_hex::{ConverterService, inbound::HttpServer};
use exchange_rates::HttpRateResolver;

/// Installs the global OTLP tracer provider.
///
/// The exporter honours the standard `OTEL_EXPORTER_OTLP_*` environment variables.
fn init_tracer() -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("converter-service"), provider))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::from_env()?;

    // Initialize OpenTelemetry tracing
    let (otel_tracer, otel_provider) = init_tracer()?;
    let telemetry = tracing_opentelemetry::layer().with_tracer(otel_tracer);

    // Initialize tracing subscriber
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,converter_app=debug,converter_hex=debug".into());
    let json_logs = config
        .log_json
        .then(|| tracing_subscriber::fmt::layer().json());
    let plain_logs = (!config.log_json).then(|| tracing_subscriber::fmt::layer());
    tracing_subscriber::registry()
        .with(filter)
        .with(json_logs)
        .with(plain_logs)
        .with(telemetry)
        .init();

    tracing::info!("Starting converter server on port {}", config.port);
    tracing::info!("Using exchange rates from: {}", config.rates_api_url);

    // Build the rate resolver
    let mut resolver = HttpRateResolver::new(&config.rates_api_url);
    if let Some(key) = &config.rates_access_key {
        resolver = resolver.with_access_key(key);
    }

    // Create the converter service
    let service = ConverterService::new(resolver);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Ensure traces are flushed before exit
    if let Err(e) = otel_provider.shutdown() {
        eprintln!("Failed to flush traces: {e}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_tracer_without_collector() {
        // The tonic channel connects lazily, so no collector is needed to build it.
        let (_tracer, provider) = init_tracer().unwrap();
        let _ = provider.shutdown();
    }
}
