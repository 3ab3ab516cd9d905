//! Conversion Engine
//!
//! Dispatches a (category, identifier) pair to its fixed formula, or to the
//! rate resolver for currency conversions. Holds no state of its own.

use converter_types::{Category, Conversion, ConversionError, ConversionOutcome, RateResolver};

/// Converts values using the fixed formula tables and a rate resolver.
///
/// Generic over `R: RateResolver` - the rate source is injected at compile time.
pub struct ConversionEngine<R: RateResolver> {
    resolver: R,
}

impl<R: RateResolver> ConversionEngine<R> {
    /// Creates a new engine backed by the given rate resolver.
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Returns a reference to the underlying rate resolver.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Converts `value` with the conversion named `id` in `category`.
    pub async fn convert(
        &self,
        category: Category,
        id: &str,
        value: f64,
    ) -> Result<f64, ConversionError> {
        self.convert_detailed(category, id, value)
            .await
            .map(|outcome| outcome.value)
    }

    /// Like [`convert`](Self::convert), also reporting the exchange rate used.
    pub async fn convert_detailed(
        &self,
        category: Category,
        id: &str,
        value: f64,
    ) -> Result<ConversionOutcome, ConversionError> {
        let conversion = Conversion::parse(category, id)?;
        self.apply(&conversion, value).await
    }

    /// Runs an already parsed conversion.
    #[tracing::instrument(skip(self, conversion), fields(conversion = %conversion))]
    pub async fn apply(
        &self,
        conversion: &Conversion,
        value: f64,
    ) -> Result<ConversionOutcome, ConversionError> {
        let outcome = match conversion {
            Conversion::Length(c) => ConversionOutcome::fixed(c.apply(value)),
            Conversion::Weight(c) => ConversionOutcome::fixed(c.apply(value)),
            Conversion::Time(c) => ConversionOutcome::fixed(c.apply(value)),
            Conversion::Temperature(c) => ConversionOutcome::fixed(c.apply(value)),
            Conversion::Currency(pair) => {
                let rate = self.resolver.resolve(pair).await.inspect_err(|e| {
                    tracing::warn!(pair = %pair, error = %e, "Exchange rate unavailable");
                })?;
                ConversionOutcome {
                    value: value * rate,
                    rate: Some(rate),
                }
            }
        };

        tracing::debug!(output = outcome.value, "Converted");
        Ok(outcome)
    }
}
