//! Integration tests for the HTTP rate resolver.
//!
//! Each test serves a canned response from a local axum server bound to an
//! ephemeral port and points the resolver at it.

use std::collections::HashMap;

use axum::{
    Json, Router,
    extract::Query,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use converter_types::{CurrencyPair, FetchError, RateResolver};
use exchange_rates::HttpRateResolver;
use serde_json::json;

/// Starts a rate service on 127.0.0.1 and returns its `/latest` URL.
async fn spawn_rate_service(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/latest", addr)
}

/// Resolver that talks to the local service directly, whatever the proxy environment.
fn resolver(url: String) -> HttpRateResolver {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpRateResolver::new(url).with_client(client)
}

fn pair(s: &str) -> CurrencyPair {
    CurrencyPair::parse(s).unwrap()
}

/// Quotes 280.0 for whatever symbol was requested.
async fn echo_rates(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    let mut rates = serde_json::Map::new();
    if let Some(symbol) = params.get("symbols") {
        rates.insert(symbol.clone(), json!(280.0));
    }
    Json(json!({
        "success": true,
        "base": params.get("base"),
        "rates": rates
    }))
}

#[tokio::test]
async fn test_resolve_reads_target_rate() {
    let url = spawn_rate_service(Router::new().route("/latest", get(echo_rates))).await;
    let rates = resolver(url);

    let rate = rates.resolve(&pair("USD to PKR")).await.unwrap();
    assert_eq!(rate, 280.0);
}

#[tokio::test]
async fn test_resolve_sends_base_and_symbols() {
    let app = Router::new().route(
        "/latest",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            let ok = params.get("base").map(String::as_str) == Some("EUR")
                && params.get("symbols").map(String::as_str) == Some("USD")
                && params.get("access_key").map(String::as_str) == Some("secret");
            if ok {
                (StatusCode::OK, Json(json!({ "rates": { "USD": 1.08 } })))
            } else {
                (StatusCode::BAD_REQUEST, Json(json!({ "received": params })))
            }
        }),
    );
    let url = spawn_rate_service(app).await;
    let rates = resolver(url).with_access_key("secret");

    let rate = rates.resolve(&pair("EUR to USD")).await.unwrap();
    assert_eq!(rate, 1.08);
}

#[tokio::test]
async fn test_server_error_is_fetch_error() {
    let app = Router::new().route(
        "/latest",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let url = spawn_rate_service(app).await;
    let rates = resolver(url);

    let result = rates.resolve(&pair("USD to PKR")).await;
    assert!(matches!(result, Err(FetchError::Status(500))));
}

#[tokio::test]
async fn test_missing_target_key_is_fetch_error() {
    let app = Router::new().route(
        "/latest",
        get(|| async { Json(json!({ "base": "USD", "rates": { "EUR": 0.92 } })) }),
    );
    let url = spawn_rate_service(app).await;
    let rates = resolver(url);

    let result = rates.resolve(&pair("USD to PKR")).await;
    assert!(matches!(result, Err(FetchError::MissingRate(c)) if c.as_str() == "PKR"));
}

#[tokio::test]
async fn test_non_json_body_is_fetch_error() {
    let app = Router::new().route("/latest", get(|| async { "service temporarily busy" }));
    let url = spawn_rate_service(app).await;
    let rates = resolver(url);

    let result = rates.resolve(&pair("USD to PKR")).await;
    assert!(matches!(result, Err(FetchError::MalformedBody(_))));
}

#[tokio::test]
async fn test_unreachable_service_is_fetch_error() {
    // Bind then drop a listener so the port is (almost certainly) closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let rates = resolver(format!("http://{}/latest", addr));
    let result = rates.resolve(&pair("USD to PKR")).await;
    assert!(matches!(result, Err(FetchError::Transport(_))));
}
