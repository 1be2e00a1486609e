//! CSS-style lengths (`200px`, `12ch`, `1.5rem`)
//!
//! Lengths keep their unit through all geometry math so that derived values
//! (translate distance, container width) print back in the unit the caller
//! configured.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Unit of a [`Length`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Px,
    Ch,
    Em,
    Rem,
}

impl LengthUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::Ch => "ch",
            LengthUnit::Em => "em",
            LengthUnit::Rem => "rem",
        }
    }
}

/// A length value with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Length {
    value: f64,
    unit: LengthUnit,
}

impl Length {
    pub const fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub const fn px(value: f64) -> Self {
        Self::new(value, LengthUnit::Px)
    }

    pub const fn ch(value: f64) -> Self {
        Self::new(value, LengthUnit::Ch)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// Multiply the magnitude, keeping the unit
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.value * factor, self.unit)
    }

    pub fn negate(self) -> Self {
        self.scale(-1.0)
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    pub fn is_positive(&self) -> bool {
        self.value.is_finite() && self.value > 0.0
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::px(200.0)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // -0.0 would otherwise print as "-0px"
        let value = if self.value == 0.0 { 0.0 } else { self.value };
        if value.fract() == 0.0 && value.abs() < 1e15 {
            write!(f, "{}{}", value as i64, self.unit.suffix())
        } else {
            write!(f, "{}{}", value, self.unit.suffix())
        }
    }
}

impl FromStr for Length {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidLength("empty length".to_string()));
        }

        // Longest suffix first so "rem" is not read as "em"
        let units = [
            LengthUnit::Rem,
            LengthUnit::Px,
            LengthUnit::Ch,
            LengthUnit::Em,
        ];
        let parsed = units.iter().find_map(|unit| {
            trimmed
                .strip_suffix(unit.suffix())
                .map(|number| (number.trim(), *unit))
        });

        let (number, unit) = match parsed {
            Some(found) => found,
            // CSS allows a unitless zero
            None if trimmed.parse::<f64>().ok() == Some(0.0) => ("0", LengthUnit::Px),
            None => {
                return Err(Error::InvalidLength(format!(
                    "'{}' has no supported unit (px, ch, em, rem)",
                    s
                )))
            }
        };

        let value: f64 = number
            .parse()
            .map_err(|_| Error::InvalidLength(format!("'{}' is not a number", s)))?;
        if !value.is_finite() {
            return Err(Error::InvalidLength(format!("'{}' is not finite", s)));
        }

        Ok(Self::new(value, unit))
    }
}

impl TryFrom<String> for Length {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Length> for String {
    fn from(length: Length) -> Self {
        length.to_string()
    }
}
