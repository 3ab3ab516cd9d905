//! # Converter Hex
//!
//! Conversion engine, application service layer and HTTP adapter for the unit converter.
//!
//! ## Architecture
//!
//! - `engine/` - Conversion engine (formula dispatch, currency delegation)
//! - `service/` - Application service (engine + session history)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The engine and service are generic over `R: RateResolver`, allowing
//! different rate sources to be injected.

pub mod engine;
pub mod inbound;
pub mod openapi;
pub mod service;


pub use engine::ConversionEngine;
pub use service::ConverterService;
