// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure conversions between step indices, domain values, and scroll offsets.

use core::ops::RangeInclusive;

use crate::ConfigError;

/// Largest number of steps a range may hold, `2^53`.
///
/// Above this, step indices no longer map to distinct `f64` values.
pub const MAX_STEP_COUNT: f64 = 9_007_199_254_740_992.0;

/// Mapping between a closed domain range, its uniform steps, and pixels.
///
/// A `ValueSpace` is three coordinate systems over the same axis:
///
/// - **step index**: integer tick position in `0..=step_count()`,
/// - **domain value**: a real number in `lower..=upper` (kilograms, pounds, ...),
/// - **offset**: a pixel position, `step_index * tick_spacing`.
///
/// Every conversion is total. Inputs outside the range clamp to the nearest
/// bound and `NaN` maps to the lower bound. Rounding to a step uses
/// round-half-away-from-zero.
///
/// ```rust
/// use understory_ruler::ValueSpace;
///
/// let space = ValueSpace::new(50.0..=700.0, 0.1, 14.0).unwrap();
/// assert_eq!(space.step_count(), 6500);
/// assert_eq!(space.step_of(155.0), 1050);
/// assert_eq!(space.offset_of(155.0), 14_700.0);
/// assert!((space.value_at_offset(14_700.0) - 155.0).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueSpace {
    lower: f64,
    upper: f64,
    step: f64,
    tick_spacing: f64,
    step_count: usize,
}

impl ValueSpace {
    /// Creates a value space, validating the range, step and tick spacing.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the bounds are not finite, the range is
    /// empty or inverted, the step is not positive or is wider than the range,
    /// or the tick spacing is not a positive finite number.
    pub fn new(range: RangeInclusive<f64>, step: f64, tick_spacing: f64) -> Result<Self, ConfigError> {
        let (lower, upper) = range.into_inner();
        if !lower.is_finite() || !upper.is_finite() {
            return Err(ConfigError::NonFiniteBounds { lower, upper });
        }
        if lower >= upper {
            return Err(ConfigError::InvertedRange { lower, upper });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::NonPositiveStep { step });
        }
        let width = upper - lower;
        if step > width {
            return Err(ConfigError::StepExceedsRange { step, width });
        }
        if !tick_spacing.is_finite() || tick_spacing <= 0.0 {
            return Err(ConfigError::NonPositiveTickSpacing { tick_spacing });
        }
        let steps = libm::round(width / step);
        // An infinite width from bounds near `f64::MAX` also lands here.
        if steps > MAX_STEP_COUNT {
            return Err(ConfigError::TooManySteps {
                steps,
                limit: MAX_STEP_COUNT,
            });
        }
        Ok(Self {
            lower,
            upper,
            step,
            tick_spacing,
            step_count: round_to_index(steps),
        })
    }

    /// Lower bound of the domain range.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound of the domain range.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// The domain range as a `RangeInclusive`.
    #[must_use]
    pub fn range(&self) -> RangeInclusive<f64> {
        self.lower..=self.upper
    }

    /// Domain distance between adjacent steps.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Pixel distance between adjacent steps.
    #[must_use]
    pub fn tick_spacing(&self) -> f64 {
        self.tick_spacing
    }

    /// Index of the last step; there are `step_count() + 1` ticks in total.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Scrollable width of the tick strip, `step_count() * tick_spacing()`.
    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.step_count as f64 * self.tick_spacing
    }

    /// Returns `true` if `value` lies inside the closed range.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.lower..=self.upper).contains(&value)
    }

    /// Clamps `value` into the range. `NaN` maps to the lower bound.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.lower
        } else {
            value.clamp(self.lower, self.upper)
        }
    }

    /// Nearest step index for a domain value.
    #[must_use]
    pub fn step_of(&self, value: f64) -> usize {
        let raw = libm::round((value - self.lower) / self.step);
        if raw.is_nan() || raw <= 0.0 {
            return 0;
        }
        if raw >= self.step_count as f64 {
            return self.step_count;
        }
        round_to_index(raw)
    }

    /// Domain value of a step index, clamped to the range.
    #[must_use]
    pub fn value_of_step(&self, index: usize) -> f64 {
        self.clamp(self.lower + index as f64 * self.step)
    }

    /// Pixel offset of the step nearest to `value`.
    #[must_use]
    pub fn offset_of(&self, value: f64) -> f64 {
        self.step_of(value) as f64 * self.tick_spacing
    }

    /// Pixel offset of a step index.
    #[must_use]
    pub fn offset_of_step(&self, index: usize) -> f64 {
        index.min(self.step_count) as f64 * self.tick_spacing
    }

    /// Continuous (unsnapped) domain value at a pixel offset.
    #[must_use]
    pub fn value_at_offset(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return self.lower;
        }
        self.clamp(self.lower + (offset / self.tick_spacing) * self.step)
    }

    /// Continuous step position of a value; the fractional part is the
    /// distance to the previous tick, in steps.
    #[must_use]
    pub fn step_position(&self, value: f64) -> f64 {
        (value - self.lower) / self.step
    }

    /// Rounds `value` to the nearest step inside the range.
    #[must_use]
    pub fn snap(&self, value: f64) -> f64 {
        self.value_of_step(self.step_of(value))
    }

    /// Number of steps between two major ticks for a major interval, at least 1.
    #[must_use]
    pub fn steps_per_major(&self, major_tick_interval: f64) -> usize {
        let ratio = libm::round(major_tick_interval / self.step);
        if ratio >= 1.0 { round_to_index(ratio) } else { 1 }
    }

    /// Returns `true` if tick `index` is a major tick.
    ///
    /// Step 0 is always major. A `steps_per_major` of zero is treated as one.
    #[must_use]
    pub fn is_major(index: usize, steps_per_major: usize) -> bool {
        index % steps_per_major.max(1) == 0
    }
}

/// Converts a rounded, non-negative float to an index.
fn round_to_index(value: f64) -> usize {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Callers pass rounded, non-negative values bounded by the step count"
    )]
    {
        libm::round(value) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::{MAX_STEP_COUNT, ValueSpace};
    use crate::ConfigError;

    fn pounds() -> ValueSpace {
        ValueSpace::new(50.0..=700.0, 0.1, 14.0).unwrap()
    }

    #[test]
    fn step_count_and_content_width() {
        let space = pounds();
        assert_eq!(space.step_count(), 6500);
        assert!((space.content_width() - 91_000.0).abs() < 1e-9);
    }

    #[test]
    fn offset_of_typical_weight() {
        let space = pounds();
        // (155 - 50) / 0.1 steps, 14 px each.
        assert_eq!(space.step_of(155.0), 1050);
        assert!((space.offset_of(155.0) - 14_700.0).abs() < 1e-9);
        assert!((space.value_at_offset(14_700.0) - 155.0).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_inputs_clamp() {
        let space = pounds();
        assert_eq!(space.step_of(-1_000.0), 0);
        assert_eq!(space.step_of(10_000.0), 6500);
        assert_eq!(space.step_of(f64::NAN), 0);
        assert!((space.value_of_step(99_999) - 700.0).abs() < 1e-9);
        assert!((space.value_at_offset(-50.0) - 50.0).abs() < 1e-9);
        assert!((space.value_at_offset(1e12) - 700.0).abs() < 1e-9);
        assert!((space.value_at_offset(f64::NAN) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn ties_round_away_from_zero() {
        let space = ValueSpace::new(0.0..=10.0, 1.0, 10.0).unwrap();
        assert_eq!(space.step_of(2.5), 3);
        assert_eq!(space.step_of(3.5), 4);
        assert_eq!(space.step_of(2.49), 2);
    }

    #[test]
    fn snap_rounds_to_nearest_step() {
        let space = pounds();
        assert!((space.snap(162.37) - 162.4).abs() < 1e-9);
        assert!((space.snap(162.34) - 162.3).abs() < 1e-9);
    }

    #[test]
    fn uneven_step_still_clamps_to_range() {
        // 1.0 / 0.4 = 2.5 steps, rounded up to 3; the last step clamps to 1.0.
        let space = ValueSpace::new(0.0..=1.0, 0.4, 10.0).unwrap();
        assert_eq!(space.step_count(), 3);
        assert!((space.value_of_step(3) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn steps_per_major_is_at_least_one() {
        let space = pounds();
        assert_eq!(space.steps_per_major(1.0), 10);
        assert_eq!(space.steps_per_major(0.5), 5);
        assert_eq!(space.steps_per_major(0.01), 1);
    }

    #[test]
    fn major_ticks_repeat_every_interval() {
        assert!(ValueSpace::is_major(0, 10));
        assert!(ValueSpace::is_major(1050, 10));
        assert!(!ValueSpace::is_major(1051, 10));
        assert!(ValueSpace::is_major(7, 0));
    }

    #[test]
    fn rejects_malformed_configuration() {
        assert_eq!(
            ValueSpace::new(10.0..=5.0, 1.0, 14.0),
            Err(ConfigError::InvertedRange {
                lower: 10.0,
                upper: 5.0
            })
        );
        assert_eq!(
            ValueSpace::new(0.0..=5.0, 0.0, 14.0),
            Err(ConfigError::NonPositiveStep { step: 0.0 })
        );
        assert_eq!(
            ValueSpace::new(0.0..=5.0, 6.0, 14.0),
            Err(ConfigError::StepExceedsRange {
                step: 6.0,
                width: 5.0
            })
        );
        assert_eq!(
            ValueSpace::new(0.0..=5.0, 1.0, -1.0),
            Err(ConfigError::NonPositiveTickSpacing { tick_spacing: -1.0 })
        );
        assert!(matches!(
            ValueSpace::new(0.0..=f64::INFINITY, 1.0, 14.0),
            Err(ConfigError::NonFiniteBounds { .. })
        ));
    }

    #[test]
    fn rejects_ranges_with_more_steps_than_f64_can_index() {
        assert_eq!(
            ValueSpace::new(0.0..=1e20, 1.0, 14.0),
            Err(ConfigError::TooManySteps {
                steps: 1e20,
                limit: MAX_STEP_COUNT
            })
        );
        assert!(matches!(
            ValueSpace::new(-f64::MAX..=f64::MAX, 1e300, 14.0),
            Err(ConfigError::TooManySteps { .. })
        ));

        let widest = ValueSpace::new(0.0..=MAX_STEP_COUNT, 1.0, 1.0).unwrap();
        assert_eq!(widest.step_count(), 1 << 53);
        assert_eq!(widest.step_of(widest.value_of_step(1 << 53)), 1 << 53);
    }
}
