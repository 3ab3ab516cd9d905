//! Data Transfer Objects (DTOs) for requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Category, ConversionSpec, HistoryRecord, HistoryRecordId};

// ─────────────────────────────────────────────────────────────────────────────
// Conversion DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to convert a value.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConvertRequest {
    pub category: Category,
    /// Conversion identifier within the category
    #[schema(example = "Kilometer to miles")]
    pub conversion: String,
    /// Value to convert
    #[schema(example = 10.0)]
    pub value: f64,
}

/// A completed conversion, as stored in the session history.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConvertResponse {
    /// History record identifier
    pub id: HistoryRecordId,
    pub category: Category,
    #[schema(example = "Kilometer to miles")]
    pub conversion: String,
    #[schema(example = 10.0)]
    pub input: f64,
    #[schema(example = 6.21371)]
    pub output: f64,
    /// Exchange rate used (currency conversions only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

impl From<HistoryRecord> for ConvertResponse {
    fn from(record: HistoryRecord) -> Self {
        Self {
            id: record.id,
            category: record.category,
            conversion: record.conversion,
            input: record.input,
            output: record.output,
            rate: record.rate,
            timestamp: record.timestamp,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalog & Stats DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// The conversions offered for one category.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CatalogEntry {
    pub category: Category,
    #[schema(example = json!(["Kilometer to miles", "Miles to Kilometer"]))]
    pub conversions: Vec<String>,
}

impl CatalogEntry {
    pub fn for_category(category: Category) -> Self {
        Self {
            category,
            conversions: ConversionSpec::catalog(category)
                .into_iter()
                .map(|spec| spec.id)
                .collect(),
        }
    }
}

/// How many conversions of one category the session has made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryCount {
    pub category: Category,
    #[schema(example = 3)]
    pub count: usize,
}
