//! Height newtype with a validating smart constructor.
//!
//! All heights are device-independent units. Negative and non-finite
//! values are rejected at construction time so the transition function
//! never sees them.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A non-negative, finite length in device-independent units.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Height(f64);

/// Rejected height value.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("height must be a finite, non-negative number, got {0}")]
pub struct InvalidHeight(pub f64);

impl Height {
    /// Zero height.
    pub const ZERO: Height = Height(0.0);

    /// Smart constructor: validates finite and non-negative.
    pub fn new(raw: f64) -> Result<Self, InvalidHeight> {
        if raw.is_finite() && raw >= 0.0 {
            // Normalize -0.0 so equality and display stay predictable
            Ok(Self(raw + 0.0))
        } else {
            Err(InvalidHeight(raw))
        }
    }

    /// The raw value in device-independent units.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Height {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64's Display already prints 291, not 291.0, and never saturates
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Height {
    type Error = InvalidHeight;

    fn try_from(raw: f64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}
