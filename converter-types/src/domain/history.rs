//! Session-scoped conversion history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

use super::category::Category;
use super::conversion::ConversionOutcome;

/// Unique identifier for a HistoryRecord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct HistoryRecordId(Uuid);

impl HistoryRecordId {
    /// Creates a new random HistoryRecordId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for HistoryRecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HistoryRecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for HistoryRecordId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// One successful conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: HistoryRecordId,
    pub timestamp: DateTime<Utc>,
    pub category: Category,
    pub conversion: String,
    pub input: f64,
    pub output: f64,
    /// Exchange rate the output was computed with, for currency conversions.
    pub rate: Option<f64>,
}

impl HistoryRecord {
    pub fn new(
        category: Category,
        conversion: impl Into<String>,
        input: f64,
        outcome: ConversionOutcome,
    ) -> Self {
        Self {
            id: HistoryRecordId::new(),
            timestamp: Utc::now(),
            category,
            conversion: conversion.into(),
            input,
            output: outcome.value,
            rate: outcome.rate,
        }
    }
}

impl fmt::Display for HistoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} → {:.2} | {} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.input,
            self.output,
            self.conversion,
            self.category
        )
    }
}

/// Append-only log of the conversions made in one session.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    records: Vec<HistoryRecord>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: HistoryRecord) {
        self.records.push(record);
    }

    /// Records in the order they were made.
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Records, most recent first.
    pub fn newest_first(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter().rev()
    }

    pub fn get(&self, id: HistoryRecordId) -> Option<&HistoryRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Renders the whole log as text, one record per line, oldest first.
    pub fn export(&self) -> String {
        self.records
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of conversions per category, in order of first appearance.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        let mut counts: Vec<(Category, usize)> = Vec::new();
        for record in &self.records {
            match counts.iter_mut().find(|(c, _)| *c == record.category) {
                Some((_, count)) => *count += 1,
                None => counts.push((record.category, 1)),
            }
        }
        counts
    }
}
