// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ruler configuration and its validation errors.

use core::fmt;
use core::ops::RangeInclusive;

use crate::ValueSpace;

/// Pixel distance between adjacent ticks used when none is configured.
pub const DEFAULT_TICK_SPACING: f64 = 14.0;

/// Static configuration of a ruler: domain range, granularity, and geometry.
///
/// Built with [`RulerConfig::new`] and the `with_*` methods, then checked with
/// [`RulerConfig::validate`]. The controller validates every configuration it
/// is handed, so callers rarely need to call `validate` themselves.
///
/// ```rust
/// use understory_ruler::RulerConfig;
///
/// let config = RulerConfig::new(50.0..=700.0, 0.1)
///     .with_major_tick_interval(1.0)
///     .with_viewport_width(390.0);
/// let space = config.validate().unwrap();
/// assert_eq!(space.step_count(), 6500);
/// assert_eq!(config.content_inset(), 188.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RulerConfig {
    /// Closed domain range of selectable values.
    pub range: RangeInclusive<f64>,
    /// Smallest selectable increment.
    pub step: f64,
    /// Domain distance between emphasized ticks; visual only.
    pub major_tick_interval: f64,
    /// Pixel distance between adjacent ticks.
    pub tick_spacing: f64,
    /// Width of the visible scroll viewport, in pixels.
    pub viewport_width: f64,
}

impl RulerConfig {
    /// Creates a configuration with a major tick on every step, the default
    /// tick spacing, and a zero-width viewport.
    #[must_use]
    pub fn new(range: RangeInclusive<f64>, step: f64) -> Self {
        Self {
            range,
            step,
            major_tick_interval: step,
            tick_spacing: DEFAULT_TICK_SPACING,
            viewport_width: 0.0,
        }
    }

    /// Sets the domain distance between major ticks.
    #[must_use]
    pub fn with_major_tick_interval(mut self, interval: f64) -> Self {
        self.major_tick_interval = interval;
        self
    }

    /// Sets the pixel distance between adjacent ticks.
    #[must_use]
    pub fn with_tick_spacing(mut self, spacing: f64) -> Self {
        self.tick_spacing = spacing;
        self
    }

    /// Sets the viewport width in pixels.
    #[must_use]
    pub fn with_viewport_width(mut self, width: f64) -> Self {
        self.viewport_width = width;
        self
    }

    /// Leading/trailing padding that puts the viewport midpoint on a tick
    /// center when the scroll offset is a whole number of steps.
    ///
    /// This is `max(0, viewport_width / 2 - tick_spacing / 2)`.
    #[must_use]
    pub fn content_inset(&self) -> f64 {
        (self.viewport_width * 0.5 - self.tick_spacing * 0.5).max(0.0)
    }

    /// Validates the configuration and returns the value space it describes.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<ValueSpace, ConfigError> {
        let space = ValueSpace::new(self.range.clone(), self.step, self.tick_spacing)?;
        if !self.major_tick_interval.is_finite() || self.major_tick_interval <= 0.0 {
            return Err(ConfigError::NonPositiveMajorTickInterval {
                interval: self.major_tick_interval,
            });
        }
        if !self.viewport_width.is_finite() || self.viewport_width < 0.0 {
            return Err(ConfigError::InvalidViewportWidth {
                width: self.viewport_width,
            });
        }
        Ok(space)
    }
}

/// A ruler configuration that cannot describe a usable tick strip.
///
/// These are programmer errors: they are reported when a configuration is
/// handed to the controller, and the previous valid state is left untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// One of the range bounds is infinite or `NaN`.
    NonFiniteBounds {
        /// Supplied lower bound.
        lower: f64,
        /// Supplied upper bound.
        upper: f64,
    },
    /// The range is empty or its bounds are swapped.
    InvertedRange {
        /// Supplied lower bound.
        lower: f64,
        /// Supplied upper bound.
        upper: f64,
    },
    /// The step is zero, negative, or not finite.
    NonPositiveStep {
        /// Supplied step.
        step: f64,
    },
    /// The step is wider than the whole range.
    StepExceedsRange {
        /// Supplied step.
        step: f64,
        /// Width of the supplied range.
        width: f64,
    },
    /// The range holds more steps than can be indexed exactly.
    TooManySteps {
        /// Number of steps the range would hold.
        steps: f64,
        /// Largest supported number of steps.
        limit: f64,
    },
    /// The major tick interval is zero, negative, or not finite.
    NonPositiveMajorTickInterval {
        /// Supplied interval.
        interval: f64,
    },
    /// The tick spacing is zero, negative, or not finite.
    NonPositiveTickSpacing {
        /// Supplied spacing.
        tick_spacing: f64,
    },
    /// The viewport width is negative or not finite.
    InvalidViewportWidth {
        /// Supplied width.
        width: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteBounds { lower, upper } => {
                write!(f, "range bounds must be finite, got {lower}..={upper}")
            }
            Self::InvertedRange { lower, upper } => {
                write!(
                    f,
                    "range lower bound must be below the upper bound, got {lower}..={upper}"
                )
            }
            Self::NonPositiveStep { step } => write!(f, "step must be positive, got {step}"),
            Self::StepExceedsRange { step, width } => {
                write!(f, "step {step} is wider than the range width {width}")
            }
            Self::TooManySteps { steps, limit } => {
                write!(f, "range holds {steps} steps, more than the supported {limit}")
            }
            Self::NonPositiveMajorTickInterval { interval } => {
                write!(f, "major tick interval must be positive, got {interval}")
            }
            Self::NonPositiveTickSpacing { tick_spacing } => {
                write!(f, "tick spacing must be positive, got {tick_spacing}")
            }
            Self::InvalidViewportWidth { width } => {
                write!(f, "viewport width must be finite and non-negative, got {width}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::{ConfigError, DEFAULT_TICK_SPACING, RulerConfig};
    use std::string::ToString;

    #[test]
    fn defaults_put_a_major_tick_on_every_step() {
        let config = RulerConfig::new(0.0..=10.0, 0.5);
        assert_eq!(config.major_tick_interval, 0.5);
        assert_eq!(config.tick_spacing, DEFAULT_TICK_SPACING);
        assert_eq!(config.viewport_width, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn content_inset_centers_a_tick_and_never_goes_negative() {
        let config = RulerConfig::new(0.0..=10.0, 1.0).with_viewport_width(100.0);
        assert_eq!(config.content_inset(), 43.0);

        let narrow = RulerConfig::new(0.0..=10.0, 1.0).with_viewport_width(6.0);
        assert_eq!(narrow.content_inset(), 0.0);
    }

    #[test]
    fn validate_checks_major_interval_and_viewport() {
        let config = RulerConfig::new(0.0..=10.0, 1.0).with_major_tick_interval(0.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveMajorTickInterval { interval: 0.0 })
        );

        let config = RulerConfig::new(0.0..=10.0, 1.0).with_viewport_width(-1.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidViewportWidth { width: -1.0 })
        );
    }

    #[test]
    fn errors_render_readable_messages() {
        let err = ConfigError::StepExceedsRange {
            step: 20.0,
            width: 10.0,
        };
        assert_eq!(err.to_string(), "step 20 is wider than the range width 10");

        let err = ConfigError::InvertedRange {
            lower: 5.0,
            upper: 1.0,
        };
        assert_eq!(
            err.to_string(),
            "range lower bound must be below the upper bound, got 5..=1"
        );
    }
}
