//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The conversion engine depends on these traits, not concrete implementations.

mod exchange;

pub use exchange::{FetchError, RateResolver};
