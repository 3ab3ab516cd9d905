//! Conversion tables and identifier dispatch.
//!
//! Each fixed category is a closed enum generated by `define_conversions!`, pairing a
//! human-readable identifier with its formula. Adding a conversion means adding one line
//! to the relevant table:
//!
//! ```ignore
//! define_conversions! {
//!     /// Length conversions.
//!     LengthConversion {
//!         // ... existing conversions ...
//!         MetersToFeet => ("Meters to feet", |v| v * 3.28084),
//!     }
//! }
//! ```

use std::fmt;

use super::category::Category;
use super::currency::CurrencyPair;
use crate::error::ConversionError;

// ─────────────────────────────────────────────────────────────────────────────
// THE MACRO: Defines a category's conversion enum, label table and formulas
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! define_conversions {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $variant:ident => ($label:literal, |$v:ident| $formula:expr)
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),*
        }

        impl $name {
            /// Every conversion in this table, in catalog order.
            pub fn all() -> &'static [$name] {
                &[$($name::$variant),*]
            }

            /// The identifier shown to users, e.g. `"Kilometer to miles"`.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),*
                }
            }

            /// Looks up a conversion by identifier, ignoring case and surrounding whitespace.
            pub fn from_label(id: &str) -> Option<Self> {
                let id = id.trim();
                Self::all()
                    .iter()
                    .copied()
                    .find(|c| c.label().eq_ignore_ascii_case(id))
            }

            /// Applies the formula.
            pub fn apply(&self, value: f64) -> f64 {
                match self {
                    $($name::$variant => {
                        let $v = value;
                        $formula
                    }),*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// CONVERSION TABLES - Add new conversions here!
// ─────────────────────────────────────────────────────────────────────────────

const MILES_PER_KILOMETER: f64 = 0.621371;
const POUNDS_PER_KILOGRAM: f64 = 2.20462;
const KELVIN_OFFSET: f64 = 273.15;

define_conversions! {
    /// Length conversions.
    LengthConversion {
        KilometersToMiles => ("Kilometer to miles", |v| v * MILES_PER_KILOMETER),
        MilesToKilometers => ("Miles to Kilometer", |v| v / MILES_PER_KILOMETER),
    }
}

define_conversions! {
    /// Weight conversions.
    WeightConversion {
        KilogramsToPounds => ("Kilogram to Pounds", |v| v * POUNDS_PER_KILOGRAM),
        PoundsToKilograms => ("Pounds to Kilogram", |v| v / POUNDS_PER_KILOGRAM),
    }
}

define_conversions! {
    /// Time conversions.
    TimeConversion {
        SecondsToMinutes => ("Seconds to Minutes", |v| v / 60.0),
        MinutesToSeconds => ("Minutes to Seconds", |v| v * 60.0),
        MinutesToHours => ("Minutes to hours", |v| v / 60.0),
        HoursToMinutes => ("Hours to minutes", |v| v * 60.0),
        HoursToDays => ("Hours to days", |v| v / 24.0),
        DaysToHours => ("Days to hours", |v| v * 24.0),
    }
}

define_conversions! {
    /// Temperature conversions.
    TemperatureConversion {
        CelsiusToFahrenheit => ("Celsius to Fahrenheit", |v| (v * 9.0 / 5.0) + 32.0),
        FahrenheitToCelsius => ("Fahrenheit to Celsius", |v| (v - 32.0) * 5.0 / 9.0),
        CelsiusToKelvin => ("Celsius to Kelvin", |v| v + KELVIN_OFFSET),
        KelvinToCelsius => ("Kelvin to Celsius", |v| v - KELVIN_OFFSET),
    }
}

/// Currency identifiers offered in the catalog. Any well-formed pair is accepted.
const CATALOG_CURRENCY_PAIRS: &[&str] = &[
    "USD to PKR",
    "PKR to USD",
    "USD to EUR",
    "EUR to USD",
    "USD to GBP",
    "GBP to USD",
];

// ─────────────────────────────────────────────────────────────────────────────
// Dispatch
// ─────────────────────────────────────────────────────────────────────────────

/// A resolved conversion: a fixed formula, or a currency pair needing a live rate.
#[derive(Debug, Clone, PartialEq)]
pub enum Conversion {
    Length(LengthConversion),
    Weight(WeightConversion),
    Time(TimeConversion),
    Temperature(TemperatureConversion),
    Currency(CurrencyPair),
}

impl Conversion {
    /// Resolves an identifier within a category.
    pub fn parse(category: Category, id: &str) -> Result<Self, ConversionError> {
        let conversion = match category {
            Category::Length => LengthConversion::from_label(id).map(Conversion::Length),
            Category::Weight => WeightConversion::from_label(id).map(Conversion::Weight),
            Category::Time => TimeConversion::from_label(id).map(Conversion::Time),
            Category::Temperature => {
                TemperatureConversion::from_label(id).map(Conversion::Temperature)
            }
            Category::Currency => CurrencyPair::parse(id).map(Conversion::Currency),
        };

        conversion.ok_or_else(|| ConversionError::UnknownConversion {
            category,
            id: id.to_string(),
        })
    }

    pub fn category(&self) -> Category {
        match self {
            Conversion::Length(_) => Category::Length,
            Conversion::Weight(_) => Category::Weight,
            Conversion::Time(_) => Category::Time,
            Conversion::Temperature(_) => Category::Temperature,
            Conversion::Currency(_) => Category::Currency,
        }
    }

}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conversion::Length(c) => c.fmt(f),
            Conversion::Weight(c) => c.fmt(f),
            Conversion::Time(c) => c.fmt(f),
            Conversion::Temperature(c) => c.fmt(f),
            Conversion::Currency(pair) => pair.fmt(f),
        }
    }
}

/// One directed conversion within a category, as offered to users.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConversionSpec {
    pub category: Category,
    pub id: String,
}

impl ConversionSpec {
    pub fn new(category: Category, id: impl Into<String>) -> Self {
        Self {
            category,
            id: id.into(),
        }
    }

    /// The enumerated conversions offered for one category.
    pub fn catalog(category: Category) -> Vec<ConversionSpec> {
        let labels: Vec<&'static str> = match category {
            Category::Length => LengthConversion::all().iter().map(|c| c.label()).collect(),
            Category::Weight => WeightConversion::all().iter().map(|c| c.label()).collect(),
            Category::Time => TimeConversion::all().iter().map(|c| c.label()).collect(),
            Category::Temperature => TemperatureConversion::all()
                .iter()
                .map(|c| c.label())
                .collect(),
            Category::Currency => CATALOG_CURRENCY_PAIRS.to_vec(),
        };
        labels
            .into_iter()
            .map(|id| ConversionSpec::new(category, id))
            .collect()
    }
}

/// The result of a successful conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionOutcome {
    pub value: f64,
    /// Exchange rate used, for currency conversions only.
    pub rate: Option<f64>,
}

impl ConversionOutcome {
    /// Outcome of a fixed formula; no rate involved.
    pub fn fixed(value: f64) -> Self {
        Self { value, rate: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(category: Category, id: &str, value: f64) -> f64 {
        match Conversion::parse(category, id).unwrap() {
            Conversion::Length(c) => c.apply(value),
            Conversion::Weight(c) => c.apply(value),
            Conversion::Time(c) => c.apply(value),
            Conversion::Temperature(c) => c.apply(value),
            Conversion::Currency(pair) => panic!("{pair} needs an exchange rate"),
        }
    }

    fn assert_round_trip(category: Category, forward: &str, back: &str) {
        for v in [0.0, 1.0, 2.5, 37.5, 100.0, 1234.5678, 1e6] {
            let there = fixed(category, forward, v);
            let again = fixed(category, back, there);
            let tolerance = 1e-9 * v.abs().max(1.0);
            assert!(
                (again - v).abs() <= tolerance,
                "{forward} / {back} drifted: {v} -> {there} -> {again}"
            );
        }
    }

    #[test]
    fn test_celsius_to_kelvin_at_zero() {
        assert_eq!(fixed(Category::Temperature, "Celsius to Kelvin", 0.0), 273.15);
    }

    #[test]
    fn test_kilometers_to_miles() {
        let miles = fixed(Category::Length, "Kilometer to miles", 10.0);
        assert!((miles - 6.21371).abs() < 1e-9);
    }

    #[test]
    fn test_hours_to_days() {
        assert_eq!(fixed(Category::Time, "Hours to days", 48.0), 2.0);
    }

    #[test]
    fn test_pounds_to_kilograms_zero() {
        assert_eq!(fixed(Category::Weight, "Pounds to Kilogram", 0.0), 0.0);
    }

    #[test]
    fn test_fahrenheit_boiling_point() {
        assert_eq!(fixed(Category::Temperature, "Celsius to Fahrenheit", 100.0), 212.0);
        assert_eq!(fixed(Category::Temperature, "Fahrenheit to Celsius", 32.0), 0.0);
    }

    #[test]
    fn test_negative_values_are_accepted() {
        assert_eq!(fixed(Category::Temperature, "Celsius to Fahrenheit", -40.0), -40.0);
        assert_eq!(fixed(Category::Time, "Days to hours", -1.0), -24.0);
    }

    #[test]
    fn test_round_trips() {
        assert_round_trip(
            Category::Temperature,
            "Celsius to Fahrenheit",
            "Fahrenheit to Celsius",
        );
        assert_round_trip(Category::Temperature, "Celsius to Kelvin", "Kelvin to Celsius");
        assert_round_trip(Category::Length, "Kilometer to miles", "Miles to Kilometer");
        assert_round_trip(Category::Weight, "Kilogram to Pounds", "Pounds to Kilogram");
        assert_round_trip(Category::Time, "Seconds to Minutes", "Minutes to Seconds");
        assert_round_trip(Category::Time, "Minutes to hours", "Hours to minutes");
        assert_round_trip(Category::Time, "Hours to days", "Days to hours");
    }

    #[test]
    fn test_labels_match_ignoring_case() {
        assert_eq!(
            TimeConversion::from_label("hours TO days"),
            Some(TimeConversion::HoursToDays)
        );
        assert_eq!(
            LengthConversion::from_label("  Kilometer to miles "),
            Some(LengthConversion::KilometersToMiles)
        );
    }

    #[test]
    fn test_unknown_identifier_in_every_category() {
        for &category in Category::all() {
            let err = Conversion::parse(category, "not-a-real-conversion").unwrap_err();
            assert!(matches!(
                err,
                ConversionError::UnknownConversion { category: c, ref id }
                    if c == category && id == "not-a-real-conversion"
            ));
        }
    }

    #[test]
    fn test_identifier_from_another_category_is_unknown() {
        let result = Conversion::parse(Category::Length, "Hours to days");
        assert!(matches!(
            result,
            Err(ConversionError::UnknownConversion { .. })
        ));
    }

    #[test]
    fn test_currency_identifier_resolves_to_pair() {
        let conversion = Conversion::parse(Category::Currency, "usd to pkr").unwrap();
        match &conversion {
            Conversion::Currency(pair) => {
                assert_eq!(pair.base.as_str(), "USD");
                assert_eq!(pair.target.as_str(), "PKR");
            }
            other => panic!("expected currency pair, got {other:?}"),
        }
        assert_eq!(conversion.category(), Category::Currency);
    }

    #[test]
    fn test_catalog_resolves() {
        for &category in Category::all() {
            let specs = ConversionSpec::catalog(category);
            assert!(!specs.is_empty());
            for spec in specs {
                let conversion = Conversion::parse(spec.category, &spec.id).unwrap();
                assert_eq!(conversion.category(), category);
                assert_eq!(conversion.to_string(), spec.id);
            }
        }
        assert_eq!(ConversionSpec::catalog(Category::Time).len(), 6);
        assert_eq!(ConversionSpec::catalog(Category::Temperature).len(), 4);
    }
}
