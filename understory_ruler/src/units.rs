// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measurement systems for body weight.
//!
//! Weights are stored in kilograms and converted to the display unit of the
//! active [`MeasurementSystem`] when bound to a ruler.

use core::ops::RangeInclusive;

/// Kilograms in one international avoirdupois pound.
pub const KILOGRAMS_PER_POUND: f64 = 0.453_592_37;

/// Pounds in one kilogram, as shown to users.
///
/// This is the rounded factor the onboarding flow displays with, not the exact
/// reciprocal of [`KILOGRAMS_PER_POUND`].
pub const POUNDS_PER_KILOGRAM: f64 = 2.204_62;

/// Unit system used for display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeasurementSystem {
    /// Pounds.
    #[default]
    Imperial,
    /// Kilograms.
    Metric,
}

impl MeasurementSystem {
    /// Short unit label for weights.
    #[must_use]
    pub fn weight_unit(self) -> &'static str {
        match self {
            Self::Imperial => "lb",
            Self::Metric => "kg",
        }
    }

    /// Range of selectable body weights, in this system's unit.
    #[must_use]
    pub fn weight_range(self) -> RangeInclusive<f64> {
        match self {
            Self::Imperial => 50.0..=700.0,
            Self::Metric => 20.0..=360.0,
        }
    }

    /// Converts a weight in this system's unit to kilograms.
    #[must_use]
    pub fn to_kilograms(self, weight: f64) -> f64 {
        match self {
            Self::Imperial => weight * KILOGRAMS_PER_POUND,
            Self::Metric => weight,
        }
    }

    /// Converts a weight in kilograms to this system's unit.
    #[must_use]
    pub fn from_kilograms(self, kilograms: f64) -> f64 {
        match self {
            Self::Imperial => kilograms * POUNDS_PER_KILOGRAM,
            Self::Metric => kilograms,
        }
    }

    /// The other system.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Imperial => Self::Metric,
            Self::Metric => Self::Imperial,
        }
    }
}
