//! Conversion categories.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// The closed set of categories a conversion can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub enum Category {
    Length,
    Weight,
    Time,
    Temperature,
    Currency,
}

impl Category {
    /// Returns every category in display order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Length,
            Category::Weight,
            Category::Time,
            Category::Temperature,
            Category::Currency,
        ]
    }

    /// Returns the display name of the category.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Time => "Time",
            Category::Temperature => "Temperature",
            Category::Currency => "Currency",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "Unknown category: {}. Supported: Length, Weight, Time, Temperature, Currency",
                    s
                )
            })
    }
}

/// Accepts any casing, matching [`FromStr`](std::str::FromStr).
impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_ignores_case() {
        assert_eq!("length".parse::<Category>().unwrap(), Category::Length);
        assert_eq!(
            " TEMPERATURE ".parse::<Category>().unwrap(),
            Category::Temperature
        );
    }

    #[test]
    fn test_category_parse_unknown() {
        assert!("volume".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Currency.to_string(), "Currency");
        assert_eq!(Category::all().len(), 5);
    }

    #[test]
    fn test_category_serializes_by_name() {
        let json = serde_json::to_string(&Category::Weight).unwrap();
        assert_eq!(json, "\"Weight\"");
    }

    #[test]
    fn test_category_deserializes_ignoring_case() {
        let category: Category = serde_json::from_str("\"length\"").unwrap();
        assert_eq!(category, Category::Length);

        let err = serde_json::from_str::<Category>("\"volume\"").unwrap_err();
        assert!(err.to_string().contains("Unknown category: volume"));
    }
}
