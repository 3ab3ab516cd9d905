//! End-to-end tests: the client SDK against a live server on an ephemeral port.

use converter_client::{ClientError, ConverterClient};
use converter_hex::{ConverterService, inbound::HttpServer};
use converter_types::{Category, CurrencyPair};
use exchange_rates::FixedRates;

async fn spawn_server() -> ConverterClient {
    let rates = FixedRates::new().with_rate(CurrencyPair::parse("USD to EUR").unwrap(), 0.5);
    let router = HttpServer::new(ConverterService::new(rates)).router();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    ConverterClient::new(format!("http://{}", addr)).with_http_client(http)
}

#[tokio::test]
async fn test_client_flow() {
    let client = spawn_server().await;
    assert!(client.health().await.unwrap());

    let catalog = client.conversions(Some(Category::Length)).await.unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].conversions, vec!["Kilometer to miles", "Miles to Kilometer"]);

    let euros = client
        .convert(Category::Currency, "USD to EUR", 10.0)
        .await
        .unwrap();
    assert_eq!(euros.output, 5.0);
    assert_eq!(euros.rate, Some(0.5));

    let days = client
        .convert(Category::Time, "Hours to days", 72.0)
        .await
        .unwrap();
    assert_eq!(days.output, 3.0);

    let history = client.history().await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, days.id);

    let stats = client.history_stats().await.unwrap();
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].category, Category::Currency);

    let export = client.export_history().await.unwrap();
    assert_eq!(export.lines().count(), 2);

    let single = client.export_record(euros.id).await.unwrap();
    assert!(single.ends_with("| 10 → 5.00 | USD to EUR (Currency)"));
}

#[tokio::test]
async fn test_client_surfaces_api_errors() {
    let client = spawn_server().await;

    let unknown = client
        .convert(Category::Weight, "Stone to Pounds", 1.0)
        .await;
    assert!(matches!(unknown, Err(ClientError::Api { status: 400, .. })));

    let no_rate = client
        .convert(Category::Currency, "USD to PKR", 1.0)
        .await;
    assert!(matches!(no_rate, Err(ClientError::Api { status: 502, .. })));
}
