//! Percentage value object (0-100 scale, one decimal place).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Largest representable value, in tenths of a percent.
const MAX_TENTHS: u16 = 1000;

/// A value between 0.0 and 100.0 inclusive, stored in tenths of a percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u16);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(MAX_TENTHS);

    /// Creates a Percentage from a fraction (0.0 to 1.0), clamping to valid range.
    ///
    /// Rounds to the nearest tenth of a percent. NaN maps to zero.
    pub fn from_fraction(fraction: f64) -> Self {
        if fraction.is_nan() {
            return Self::ZERO;
        }
        let tenths = (fraction * 1000.0).round().clamp(0.0, f64::from(MAX_TENTHS));
        Self(tenths as u16)
    }

    /// Creates a Percentage from tenths of a percent, returning error if out of range.
    pub fn try_from_tenths(tenths: u16) -> Result<Self, ValidationError> {
        if tenths > MAX_TENTHS {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                i32::from(MAX_TENTHS),
                i32::from(tenths),
            ));
        }
        Ok(Self(tenths))
    }

    /// Returns the value in percent (0.0 to 100.0).
    pub fn value(&self) -> f64 {
        f64::from(self.0) / 10.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 1000.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.value())
    }
}
