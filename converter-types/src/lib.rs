//! # Converter Types
//!
//! Domain types and port traits for the unit converter service.
//! This crate has ZERO external IO dependencies - only data structures,
//! conversion formulas, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Category, Conversion tables, CurrencyPair, History)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Category, Conversion, ConversionOutcome, ConversionSpec, CurrencyCode, CurrencyPair,
    HistoryLog, HistoryRecord, HistoryRecordId, LengthConversion, TemperatureConversion,
    TimeConversion, WeightConversion,
};
pub use dto::*;
pub use error::{AppError, ConversionError};
pub use ports::{FetchError, RateResolver};
