// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thin host adapter around a [`RulerController`].

use kurbo::{Point, Size};
use log::debug;
use understory_ruler::{ConfigError, RulerConfig, RulerController, RulerHost};

use crate::gesture::HorizontalDrag;
use crate::label::format_value;
use crate::scene::{RulerScene, RulerStyle, SceneInputs, build_scene};
use crate::ticks::{DEFAULT_OVERSCAN, TickWindow, visible_ticks};

/// A ruler picker as seen by a widget toolkit.
///
/// `RulerView` relays pointer and scroll input to its [`RulerController`]
/// without interpreting it, and turns the controller state into a
/// [`RulerScene`]. Snapping and haptics stay with the controller, so what is
/// drawn and what is bound can never disagree.
///
/// ```rust
/// use kurbo::Point;
/// use understory_ruler::{RecordingHost, RulerConfig};
/// use understory_ruler_view::RulerView;
///
/// let config = RulerConfig::new(50.0..=700.0, 0.1)
///     .with_major_tick_interval(1.0)
///     .with_viewport_width(390.0);
/// let mut view = RulerView::new(config, 155.0, 150.0).unwrap();
/// let mut host = RecordingHost::new();
///
/// view.pointer_down(Point::new(200.0, 50.0));
/// view.pointer_move(Point::new(130.0, 52.0), &mut host);
/// view.pointer_up(&mut host);
/// assert_eq!(view.label("lb"), "155.5 lb");
///
/// let scene = view.scene(110.0);
/// assert!(scene.ticks.len() <= 33);
/// assert!(scene.highlight.is_some());
/// ```
#[derive(Clone, Debug)]
pub struct RulerView {
    controller: RulerController,
    style: RulerStyle,
    drag: HorizontalDrag,
    overscan: usize,
}

impl RulerView {
    /// Creates a view over a new controller.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` is invalid; there is no view to
    /// render in that case.
    pub fn new(config: RulerConfig, initial_value: f64, baseline: f64) -> Result<Self, ConfigError> {
        Ok(Self::from_controller(RulerController::new(
            config,
            initial_value,
            baseline,
        )?))
    }

    /// Wraps an existing controller.
    #[must_use]
    pub fn from_controller(controller: RulerController) -> Self {
        Self {
            controller,
            style: RulerStyle::default(),
            drag: HorizontalDrag::default(),
            overscan: DEFAULT_OVERSCAN,
        }
    }

    /// Replaces the visual style.
    #[must_use]
    pub fn with_style(mut self, style: RulerStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets how many ticks are realized beyond each viewport edge.
    #[must_use]
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// The wrapped controller.
    #[must_use]
    pub fn controller(&self) -> &RulerController {
        &self.controller
    }

    /// Mutable access to the wrapped controller, for binding and
    /// configuration changes.
    pub fn controller_mut(&mut self) -> &mut RulerController {
        &mut self.controller
    }

    /// The visual style.
    #[must_use]
    pub fn style(&self) -> &RulerStyle {
        &self.style
    }

    /// The displayed value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.controller.value()
    }

    /// Pointer pressed on the strip.
    pub fn pointer_down(&mut self, pos: Point) {
        self.drag.start(pos);
    }

    /// Pointer moved; forwards the x translation since the press.
    pub fn pointer_move(&mut self, pos: Point, host: &mut impl RulerHost) {
        if let Some(translation) = self.drag.update(pos) {
            self.controller.on_drag_changed(translation, host);
        }
    }

    /// Pointer released; ends the gesture.
    pub fn pointer_up(&mut self, host: &mut impl RulerHost) {
        if self.drag.end() {
            self.controller.on_drag_ended(host);
        }
    }

    /// Gesture interrupted by the system; settles like a release.
    pub fn pointer_cancel(&mut self, host: &mut impl RulerHost) {
        self.drag.end();
        self.controller.on_drag_cancelled(host);
    }

    /// The host scroll surface reports its offset.
    pub fn scroll_reported(&mut self, offset: f64, host: &mut impl RulerHost) {
        self.controller.report_offset(offset, host);
    }

    /// The host finished animating a settle.
    pub fn settle_finished(&mut self, host: &mut impl RulerHost) {
        self.controller.on_settle_finished(host);
    }

    /// Layout changed the viewport width.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `width` is negative or not finite.
    pub fn set_viewport_width(&mut self, width: f64, host: &mut impl RulerHost) -> Result<(), ConfigError> {
        if self.controller.latest_config().viewport_width == width {
            return Ok(());
        }
        debug!("ruler viewport width {width}");
        let config = self.controller.latest_config().clone().with_viewport_width(width);
        self.controller.on_configuration_changed(config, host)
    }

    /// Ticks visible at the controller's offset.
    #[must_use]
    pub fn visible_window(&self) -> TickWindow {
        self.visible_window_at(self.controller.offset())
    }

    /// Ticks visible at an arbitrary offset, such as a frame of the host's
    /// settle animation.
    #[must_use]
    pub fn visible_window_at(&self, offset: f64) -> TickWindow {
        visible_ticks(
            self.controller.value_space(),
            offset,
            self.controller.config().viewport_width,
            self.controller.content_inset(),
            self.overscan,
        )
    }

    /// Scene at the controller's offset, `height` pixels tall.
    #[must_use]
    pub fn scene(&self, height: f64) -> RulerScene {
        self.scene_at(self.controller.offset(), height)
    }

    /// Scene at an arbitrary offset, `height` pixels tall.
    #[must_use]
    pub fn scene_at(&self, offset: f64, height: f64) -> RulerScene {
        let space = *self.controller.value_space();
        let inputs = SceneInputs {
            space,
            window: self.visible_window_at(offset),
            steps_per_major: self.controller.steps_per_major(),
            highlight: self.controller.current_highlight(),
            indicator_x: self.controller.content_inset() + space.tick_spacing() * 0.5,
            size: Size::new(self.controller.config().viewport_width, height),
        };
        build_scene(inputs, &self.style)
    }

    /// The displayed value formatted with the step's precision.
    #[must_use]
    pub fn label(&self, unit: &str) -> String {
        format_value(self.controller.value(), self.controller.value_space().step(), unit)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use understory_ruler::{RecordingHost, RulerConfig, RulerPhase};

    use super::RulerView;

    fn view() -> RulerView {
        let config = RulerConfig::new(50.0..=700.0, 0.1)
            .with_major_tick_interval(1.0)
            .with_viewport_width(390.0);
        RulerView::new(config, 155.0, 150.0).unwrap()
    }

    #[test]
    fn invalid_configuration_yields_no_view() {
        let config = RulerConfig::new(50.0..=700.0, 1_000.0);
        assert!(RulerView::new(config, 155.0, 150.0).is_err());
    }

    #[test]
    fn pointer_input_is_forwarded_unmodified() {
        let mut view = view();
        let mut host = RecordingHost::new();

        view.pointer_down(Point::new(200.0, 0.0));
        view.pointer_move(Point::new(186.0, 0.0), &mut host);
        assert_eq!(view.controller().phase(), RulerPhase::Dragging);
        assert!((view.value() - 155.1).abs() < 1e-9);
        assert_eq!(host.haptic_pulses, 1);

        view.pointer_up(&mut host);
        assert_eq!(view.controller().phase(), RulerPhase::Settling);
        view.settle_finished(&mut host);
        assert_eq!(view.controller().phase(), RulerPhase::Idle);
    }

    #[test]
    fn press_and_release_without_motion_is_not_a_gesture() {
        let mut view = view();
        let mut host = RecordingHost::new();
        view.pointer_down(Point::new(10.0, 10.0));
        view.pointer_up(&mut host);
        assert_eq!(view.controller().phase(), RulerPhase::Idle);
        assert!(host.offset_requests.is_empty());
    }

    #[test]
    fn cancel_settles_like_release() {
        let mut view = view();
        let mut host = RecordingHost::new();
        view.pointer_down(Point::new(200.0, 0.0));
        view.pointer_move(Point::new(190.0, 0.0), &mut host);
        view.pointer_cancel(&mut host);
        assert_eq!(view.controller().phase(), RulerPhase::Settling);
        assert!((view.value() - 155.1).abs() < 1e-9);
    }

    #[test]
    fn viewport_change_recenters() {
        let mut view = view();
        let mut host = RecordingHost::new();
        view.set_viewport_width(320.0, &mut host).unwrap();
        assert_eq!(view.controller().content_inset(), 153.0);
        assert!((view.value() - 155.0).abs() < 1e-9);

        let scene = view.scene(110.0);
        let center = scene.ticks.iter().find(|t| t.index == 1050).unwrap();
        assert!((center.line.p0.x - 160.0).abs() < 1e-9);
        assert!((scene.indicator.center().x - 160.0).abs() < 1e-9);

        assert!(view.set_viewport_width(f64::NAN, &mut host).is_err());
        assert_eq!(view.controller().config().viewport_width, 320.0);
    }

    #[test]
    fn label_uses_step_precision() {
        let view = view();
        assert_eq!(view.label("lb"), "155.0 lb");
    }
}
