//! # Converter Client SDK
//!
//! A typed Rust client for the Unit Converter API.

use converter_types::{
    CatalogEntry, Category, CategoryCount, ConvertRequest, ConvertResponse, HistoryRecordId,
};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Converter API client.
pub struct ConverterClient {
    base_url: String,
    http: Client,
}

impl ConverterClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Uses a preconfigured HTTP client.
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Lists the conversions offered, optionally for one category.
    pub async fn conversions(
        &self,
        category: Option<Category>,
    ) -> Result<Vec<CatalogEntry>, ClientError> {
        let mut req = self.http.get(format!("{}/api/conversions", self.base_url));
        if let Some(category) = category {
            req = req.query(&[("category", category.name())]);
        }
        let resp = req.send().await?;
        self.handle_response(resp).await
    }

    /// Converts a value; the server records it in its history.
    pub async fn convert(
        &self,
        category: Category,
        conversion: &str,
        value: f64,
    ) -> Result<ConvertResponse, ClientError> {
        let req = ConvertRequest {
            category,
            conversion: conversion.to_string(),
            value,
        };
        let resp = self
            .http
            .post(format!("{}/api/convert", self.base_url))
            .json(&req)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    /// Lists the session history, most recent first.
    pub async fn history(&self) -> Result<Vec<ConvertResponse>, ClientError> {
        self.get("/api/history").await
    }

    /// Conversion counts per category.
    pub async fn history_stats(&self) -> Result<Vec<CategoryCount>, ClientError> {
        self.get("/api/history/stats").await
    }

    /// Downloads the whole history as text.
    pub async fn export_history(&self) -> Result<String, ClientError> {
        self.get_text("/api/history/export").await
    }

    /// Downloads one history record as text.
    pub async fn export_record(&self, id: HistoryRecordId) -> Result<String, ClientError> {
        self.get_text(&format!("/api/history/{}/export", id)).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn get_text(&self, path: &str) -> Result<String, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(api_error(status.as_u16(), body))
        }
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(api_error(status.as_u16(), body))
        }
    }
}

fn api_error(status: u16, body: String) -> ClientError {
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or(body);
    ClientError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ConverterClient::new("http://localhost:3000");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = ConverterClient::new("http://localhost:3000/");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_api_error_extracts_message() {
        let err = api_error(400, r#"{"error":"Unknown Time conversion: x","code":400}"#.into());
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Unknown Time conversion: x");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_api_error_falls_back_to_body() {
        let err = api_error(502, "Bad Gateway".into());
        assert!(matches!(err, ClientError::Api { status: 502, ref message } if message == "Bad Gateway"));
    }
}
