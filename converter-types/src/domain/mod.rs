//! Domain models for the unit converter.

pub mod category;
pub mod conversion;
pub mod currency;
pub mod history;

pub use category::Category;
pub use conversion::{
    Conversion, ConversionOutcome, ConversionSpec, LengthConversion, TemperatureConversion,
    TimeConversion, WeightConversion,
};
pub use currency::{CurrencyCode, CurrencyPair};
pub use history::{HistoryLog, HistoryRecord, HistoryRecordId};
