//! Converter Application Service
//!
//! Runs conversions through the engine and keeps the session history.
//! Contains NO infrastructure logic - pure orchestration.

use std::sync::{Mutex, MutexGuard, PoisonError};

use converter_types::{
    AppError, CatalogEntry, Category, CategoryCount, ConvertRequest, Conversion, HistoryLog,
    HistoryRecord, HistoryRecordId, RateResolver,
};

use crate::ConversionEngine;

/// Application service for conversions.
///
/// Generic over `R: RateResolver` - the rate source is injected at compile time.
/// The history log belongs to this service, not to the engine; it lives as long
/// as the process and is never persisted.
pub struct ConverterService<R: RateResolver> {
    engine: ConversionEngine<R>,
    history: Mutex<HistoryLog>,
}

impl<R: RateResolver> ConverterService<R> {
    /// Creates a new service with an empty history.
    pub fn new(resolver: R) -> Self {
        Self {
            engine: ConversionEngine::new(resolver),
            history: Mutex::new(HistoryLog::new()),
        }
    }

    /// Returns a reference to the underlying engine.
    pub fn engine(&self) -> &ConversionEngine<R> {
        &self.engine
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversions
    // ─────────────────────────────────────────────────────────────────────────────

    /// Converts a value and records it in the history.
    ///
    /// Failed conversions are not recorded. The record carries the canonical
    /// identifier, whatever casing or padding the request used.
    pub async fn convert(&self, req: ConvertRequest) -> Result<HistoryRecord, AppError> {
        if !req.value.is_finite() {
            return Err(AppError::BadRequest("Value must be a finite number".into()));
        }

        let conversion = Conversion::parse(req.category, &req.conversion)?;
        let outcome = self.engine.apply(&conversion, req.value).await?;

        let record = HistoryRecord::new(
            conversion.category(),
            conversion.to_string(),
            req.value,
            outcome,
        );
        self.history().push(record.clone());
        Ok(record)
    }

    /// Lists the conversions offered, optionally for a single category.
    pub fn catalog(&self, category: Option<Category>) -> Vec<CatalogEntry> {
        match category {
            Some(category) => vec![CatalogEntry::for_category(category)],
            None => Category::all()
                .iter()
                .copied()
                .map(CatalogEntry::for_category)
                .collect(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // History
    // ─────────────────────────────────────────────────────────────────────────────

    /// Lists the session history, most recent first.
    pub fn list_history(&self) -> Vec<HistoryRecord> {
        self.history().newest_first().cloned().collect()
    }

    /// Counts conversions per category, in order of first use.
    pub fn history_stats(&self) -> Vec<CategoryCount> {
        self.history()
            .category_counts()
            .into_iter()
            .map(|(category, count)| CategoryCount { category, count })
            .collect()
    }

    /// Renders the whole history as text, oldest first.
    pub fn export_history(&self) -> String {
        self.history().export()
    }

    /// Renders a single history record as text.
    pub fn export_record(&self, id: HistoryRecordId) -> Result<String, AppError> {
        self.history()
            .get(id)
            .map(ToString::to_string)
            .ok_or_else(|| AppError::NotFound(format!("History record {}", id)))
    }

    fn history(&self) -> MutexGuard<'_, HistoryLog> {
        // The log is append-only, so a poisoned lock still holds consistent records.
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
