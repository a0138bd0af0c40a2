// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer-agnostic description of one ruler frame.
//!
//! A [`RulerScene`] is plain geometry: tick strokes as [`Line`]s, the
//! highlight span and center indicator as [`Rect`]s, each with a
//! [`Color`]. Hosts translate it into their own drawing calls, whether a
//! retained display list, a canvas, or a GPU scene.

use kurbo::{Line, Point, Rect, Size};
use peniko::Color;
use smallvec::SmallVec;
use understory_ruler::{Highlight, ValueSpace};

use crate::ticks::TickWindow;

/// Visual parameters of a ruler.
///
/// Heights given as fractions are relative to the scene height.
#[derive(Clone, Debug, PartialEq)]
pub struct RulerStyle {
    /// Height of a major tick, as a fraction of the scene height.
    pub major_tick_height: f64,
    /// Height of a minor tick, as a fraction of the scene height.
    pub minor_tick_height: f64,
    /// Gap between the bottom of the ticks and the bottom of the scene.
    pub tick_bottom_margin: f64,
    /// Stroke width of major ticks.
    pub major_tick_width: f64,
    /// Stroke width of minor ticks.
    pub minor_tick_width: f64,
    /// Stroke color of major ticks.
    pub major_tick_color: Color,
    /// Stroke color of minor ticks.
    pub minor_tick_color: Color,
    /// Fill of the span between the baseline and the value.
    pub highlight_color: Color,
    /// The highlight is this much shorter than the scene, centered vertically.
    pub highlight_inset: f64,
    /// Width of the center indicator.
    pub indicator_width: f64,
    /// The indicator is this much shorter than the scene, centered vertically.
    pub indicator_inset: f64,
    /// Fill of the center indicator.
    pub indicator_color: Color,
}

impl Default for RulerStyle {
    fn default() -> Self {
        Self {
            major_tick_height: 0.55,
            minor_tick_height: 0.3,
            tick_bottom_margin: 12.0,
            major_tick_width: 1.6,
            minor_tick_width: 1.0,
            major_tick_color: Color::BLACK.with_alpha(0.8),
            minor_tick_color: Color::BLACK.with_alpha(0.35),
            highlight_color: Color::BLACK.with_alpha(0.12),
            highlight_inset: 24.0,
            indicator_width: 2.0,
            indicator_inset: 20.0,
            indicator_color: Color::BLACK,
        }
    }
}

/// One tick stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickMark {
    /// Step index of the tick.
    pub index: usize,
    /// Domain value at the tick.
    pub value: f64,
    /// Whether the tick is a major tick.
    pub major: bool,
    /// Stroke geometry, bottom to top.
    pub line: Line,
    /// Stroke width.
    pub width: f64,
    /// Stroke color.
    pub color: Color,
}

/// Everything needed to draw one frame of a ruler.
#[derive(Clone, Debug, PartialEq)]
pub struct RulerScene {
    /// Size of the drawing area.
    pub size: Size,
    /// Tick strokes, in increasing index order.
    pub ticks: SmallVec<[TickMark; 64]>,
    /// Span between baseline and value, clipped to the scene, if any.
    pub highlight: Option<Rect>,
    /// Fill of the highlight.
    pub highlight_color: Color,
    /// Fixed center indicator.
    pub indicator: Rect,
    /// Fill of the indicator.
    pub indicator_color: Color,
}

/// Inputs to [`build_scene`] that come from the controller.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SceneInputs {
    pub(crate) space: ValueSpace,
    pub(crate) window: TickWindow,
    pub(crate) steps_per_major: usize,
    pub(crate) highlight: Option<Highlight>,
    pub(crate) indicator_x: f64,
    pub(crate) size: Size,
}

/// Lays out ticks, highlight, and indicator for one frame.
pub(crate) fn build_scene(inputs: SceneInputs, style: &RulerStyle) -> RulerScene {
    let SceneInputs {
        space,
        window,
        steps_per_major,
        highlight,
        indicator_x,
        size,
    } = inputs;
    let bottom = size.height - style.tick_bottom_margin;

    let ticks = window
        .ticks(space, steps_per_major)
        .map(|tick| {
            let (fraction, width, color) = if tick.major {
                (
                    style.major_tick_height,
                    style.major_tick_width,
                    style.major_tick_color,
                )
            } else {
                (
                    style.minor_tick_height,
                    style.minor_tick_width,
                    style.minor_tick_color,
                )
            };
            let top = bottom - size.height * fraction;
            TickMark {
                index: tick.index,
                value: tick.value,
                major: tick.major,
                line: Line::new((tick.x, bottom), (tick.x, top)),
                width,
                color,
            }
        })
        .collect();

    let bounds = Rect::from_origin_size(Point::ORIGIN, size);
    let highlight = highlight.and_then(|span| {
        let x_at = |value: f64| window.origin_x + space.step_position(value) * window.spacing;
        let height = (size.height - style.highlight_inset).max(0.0);
        let y0 = (size.height - height) * 0.5;
        let rect = Rect::new(x_at(span.start), y0, x_at(span.end), y0 + height).intersect(bounds);
        (rect.width() > 0.0 && rect.height() > 0.0).then_some(rect)
    });

    let indicator_height = (size.height - style.indicator_inset).max(0.0);
    let indicator_y0 = (size.height - indicator_height) * 0.5;
    let half_width = style.indicator_width * 0.5;
    let indicator = Rect::new(
        indicator_x - half_width,
        indicator_y0,
        indicator_x + half_width,
        indicator_y0 + indicator_height,
    );

    RulerScene {
        size,
        ticks,
        highlight,
        highlight_color: style.highlight_color,
        indicator,
        indicator_color: style.indicator_color,
    }
}
