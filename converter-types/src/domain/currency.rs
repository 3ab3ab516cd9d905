//! Currency codes and directed currency pairs.

use std::fmt;

/// An ISO-4217 style three-letter currency code, always upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() == 3 && s.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(s.to_ascii_uppercase()))
        } else {
            Err(format!("Invalid currency code: {:?}", s))
        }
    }
}

/// A directed currency conversion: one unit of `base` buys `rate` units of `target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    pub base: CurrencyCode,
    pub target: CurrencyCode,
}

impl CurrencyPair {
    /// Literal separator between the two codes in a conversion identifier.
    pub const SEPARATOR: &'static str = " to ";

    pub fn new(base: CurrencyCode, target: CurrencyCode) -> Self {
        Self { base, target }
    }

    /// Parses an identifier such as `"USD to PKR"`.
    ///
    /// Returns `None` unless the identifier splits into exactly two valid codes.
    pub fn parse(id: &str) -> Option<Self> {
        let (base, target) = id.trim().split_once(Self::SEPARATOR)?;
        if target.contains(Self::SEPARATOR) {
            return None;
        }
        Some(Self {
            base: base.parse().ok()?,
            target: target.parse().ok()?,
        })
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.base, Self::SEPARATOR, self.target)
    }
}
