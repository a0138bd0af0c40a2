// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Virtualized tick window: which ticks intersect the viewport.
//!
//! A ruler over `50.0..=700.0` with a `0.1` step has 6501 ticks, and a finer
//! step or wider range can have millions. Only the ticks under the viewport
//! are ever materialized. [`visible_ticks`] computes their index range in
//! constant time from the scroll offset, and [`TickWindow::ticks`] yields them
//! lazily, so the cost of a frame depends on the viewport width alone.
//!
//! ## Coordinates
//!
//! Tick `i` is centered at
//!
//! ```text
//! x(i) = inset + tick_spacing / 2 + i * tick_spacing - offset
//! ```
//!
//! in viewport space, where `inset` is the centering inset from
//! [`RulerConfig::content_inset`](understory_ruler::RulerConfig::content_inset).
//! At a step-aligned offset the tick under the indicator sits exactly at the
//! viewport midpoint.

use understory_ruler::ValueSpace;

/// Extra ticks realized beyond each viewport edge by default.
pub const DEFAULT_OVERSCAN: usize = 2;

/// A contiguous run of tick indices `start..end` plus their x placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickWindow {
    /// First tick index in the window.
    pub start: usize,
    /// One past the last tick index in the window.
    pub end: usize,
    /// Viewport x of tick 0's center; may lie far outside the viewport.
    pub origin_x: f64,
    /// Pixel distance between adjacent ticks.
    pub spacing: f64,
}

impl TickWindow {
    /// Number of ticks in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if no tick is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns `true` if tick `index` is inside the window.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        (self.start..self.end).contains(&index)
    }

    /// Viewport x of the center of tick `index`.
    #[must_use]
    pub fn x_of(&self, index: usize) -> f64 {
        self.origin_x + index as f64 * self.spacing
    }

    /// Yields the ticks of the window in increasing index order.
    ///
    /// A tick is major when `index % steps_per_major == 0`; a
    /// `steps_per_major` of zero is treated as one.
    pub fn ticks(self, space: ValueSpace, steps_per_major: usize) -> impl Iterator<Item = Tick> {
        (self.start..self.end).map(move |index| Tick {
            index,
            value: space.value_of_step(index),
            x: self.x_of(index),
            major: ValueSpace::is_major(index, steps_per_major),
        })
    }
}

/// One realized tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Step index.
    pub index: usize,
    /// Domain value at this tick.
    pub value: f64,
    /// Viewport x of the tick center.
    pub x: f64,
    /// Whether the tick is emphasized.
    pub major: bool,
}

/// Computes the window of ticks intersecting `0.0..=viewport_width`.
///
/// `overscan` extra ticks are included beyond each edge so partially visible
/// strokes and fast scrolls do not pop in. The window never holds more than
/// `viewport_width / tick_spacing + 2 * overscan + 2` ticks, whatever the size
/// of the range.
#[must_use]
pub fn visible_ticks(
    space: &ValueSpace,
    offset: f64,
    viewport_width: f64,
    inset: f64,
    overscan: usize,
) -> TickWindow {
    let spacing = space.tick_spacing();
    let viewport = viewport_width.max(0.0);
    let origin_x = inset + spacing * 0.5 - offset;

    let first = floor_to_isize(-origin_x / spacing).saturating_sub_unsigned(overscan);
    let last = floor_to_isize((viewport - origin_x) / spacing).saturating_add_unsigned(overscan);

    let max_index = space.step_count();
    let limit = max_index.saturating_add(1);
    let start = clamp_index(first, limit);
    let end = clamp_index(last.saturating_add(1), limit).max(start);

    TickWindow {
        start,
        end,
        origin_x,
        spacing,
    }
}

fn floor_to_isize(value: f64) -> isize {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Float-to-int casts saturate; the result is clamped to the tick range"
    )]
    {
        value.floor() as isize
    }
}

fn clamp_index(value: isize, limit: usize) -> usize {
    usize::try_from(value).map_or(0, |index| index.min(limit))
}
