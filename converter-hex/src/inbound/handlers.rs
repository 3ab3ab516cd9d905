//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use converter_types::{
    AppError, Category, ConvertRequest, ConvertResponse, HistoryRecordId, RateResolver,
};

use crate::ConverterService;

/// Application state shared across handlers.
pub struct AppState<R: RateResolver> {
    pub service: ConverterService<R>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::RateUnavailable(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Query parameters for the conversion catalog.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// List the conversions offered per category.
#[tracing::instrument(skip(state))]
pub async fn list_conversions<R: RateResolver>(
    State(state): State<Arc<AppState<R>>>,
    Query(query): Query<CatalogQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let category = query
        .category
        .as_deref()
        .map(str::parse::<Category>)
        .transpose()
        .map_err(AppError::BadRequest)?;

    Ok(Json(state.service.catalog(category)))
}

/// Convert a value and record it in the session history.
#[tracing::instrument(skip_all)]
pub async fn convert<R: RateResolver>(
    State(state): State<Arc<AppState<R>>>,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    tracing::debug!(category = %req.category, conversion = %req.conversion, "Convert request");

    let record = state.service.convert(req).await?;
    Ok(Json(ConvertResponse::from(record)))
}

/// List the session history, most recent first.
#[tracing::instrument(skip(state))]
pub async fn list_history<R: RateResolver>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<impl IntoResponse, ApiError> {
    let history: Vec<ConvertResponse> = state
        .service
        .list_history()
        .into_iter()
        .map(ConvertResponse::from)
        .collect();
    Ok(Json(history))
}

/// Conversion counts per category.
#[tracing::instrument(skip(state))]
pub async fn history_stats<R: RateResolver>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.service.history_stats()))
}

/// Download the whole history as a text file.
#[tracing::instrument(skip(state))]
pub async fn export_history<R: RateResolver>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<impl IntoResponse, ApiError> {
    let text = state.service.export_history();
    Ok(text_attachment("conversion_history.txt", text))
}

/// Download one history record as a text file.
#[tracing::instrument(skip(state), fields(record_id = %id))]
pub async fn export_record<R: RateResolver>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let record_id: HistoryRecordId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid history record ID".into()))?;

    let text = state.service.export_record(record_id)?;
    Ok(text_attachment("conversion_result.txt", text))
}

fn text_attachment(file_name: &str, text: String) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        text,
    )
}
