// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric labels for ruler values.

/// Largest number of decimals a label will show.
const MAX_DECIMALS: usize = 6;

/// Number of decimals needed to show every multiple of `step` exactly.
///
/// A step of `0.1` needs one decimal, `0.25` needs two, `1.0` or `5.0` none.
#[must_use]
pub fn decimals_for_step(step: f64) -> usize {
    let mut scale = 1.0_f64;
    for decimals in 0..MAX_DECIMALS {
        let scaled = step * scale;
        if (scaled - scaled.round()).abs() < 1e-9 * scale {
            return decimals;
        }
        scale *= 10.0;
    }
    MAX_DECIMALS
}

/// Formats `value` with the precision of `step`, followed by `unit`.
///
/// ```rust
/// use understory_ruler_view::format_value;
///
/// assert_eq!(format_value(162.4, 0.1, "lb"), "162.4 lb");
/// assert_eq!(format_value(70.0, 1.0, "kg"), "70 kg");
/// assert_eq!(format_value(3.5, 0.25, ""), "3.50");
/// ```
#[must_use]
pub fn format_value(value: f64, step: f64, unit: &str) -> String {
    let decimals = decimals_for_step(step);
    if unit.is_empty() {
        format!("{value:.decimals$}")
    } else {
        format!("{value:.decimals$} {unit}")
    }
}

#[cfg(test)]
mod tests {
    use super::{decimals_for_step, format_value};

    #[test]
    fn decimals_follow_the_step() {
        assert_eq!(decimals_for_step(1.0), 0);
        assert_eq!(decimals_for_step(5.0), 0);
        assert_eq!(decimals_for_step(0.1), 1);
        assert_eq!(decimals_for_step(0.5), 1);
        assert_eq!(decimals_for_step(0.25), 2);
        assert_eq!(decimals_for_step(0.001), 3);
    }

    #[test]
    fn labels_round_float_noise() {
        assert_eq!(format_value(155.000_000_000_03, 0.1, "lb"), "155.0 lb");
        assert_eq!(format_value(360.0, 0.1, "kg"), "360.0 kg");
    }
}
