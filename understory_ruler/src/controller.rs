// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction state machine of the ruler.

use log::{debug, trace, warn};

use crate::{ConfigError, RulerConfig, RulerHost, ValueSpace};

/// Value changes at or below this magnitude are not reported to the host.
pub const VALUE_EPSILON: f64 = 1e-9;

/// Baseline and value closer than this produce no highlight span.
pub const HIGHLIGHT_EPSILON: f64 = 1e-4;

/// Scroll reports closer than this, in pixels, count as "at the offset".
pub const OFFSET_EPSILON: f64 = 0.5;

/// Interaction phase of a [`RulerController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RulerPhase {
    /// At rest; the value is step-aligned.
    #[default]
    Idle,
    /// A gesture is in progress; the value may be anywhere in the range.
    Dragging,
    /// The gesture ended and the host is animating to the snapped offset.
    ///
    /// The value is already snapped and authoritative in this phase.
    Settling,
}

/// Ordered span between the baseline and the current value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    /// Smaller of the two values.
    pub start: f64,
    /// Larger of the two values.
    pub end: f64,
}

impl Highlight {
    /// Domain length of the span.
    #[must_use]
    pub fn len(&self) -> f64 {
        self.end - self.start
    }

    /// Returns `true` if the span has no length.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() <= 0.0
    }
}

/// Owner of a ruler's interaction state.
///
/// The controller holds the authoritative displayed value and derives the
/// scroll offset from it. Hosts feed it gesture, scroll, and binding events
/// and receive value changes, haptic pulses, and scroll requests through a
/// [`RulerHost`] passed to each call.
///
/// ## Phases
///
/// ```text
/// Idle --drag/scroll--> Dragging --end/cancel--> Settling --settle finished--> Idle
/// ```
///
/// Configuration changes and external values that arrive while
/// [`RulerPhase::Dragging`] are queued, newest wins, and applied once on the
/// next transition to [`RulerPhase::Idle`].
///
/// ## Minimal example
///
/// ```rust
/// use understory_ruler::{RecordingHost, RulerConfig, RulerController, RulerPhase};
///
/// let config = RulerConfig::new(50.0..=700.0, 0.1).with_viewport_width(390.0);
/// let mut ruler = RulerController::new(config, 150.0, 150.0).unwrap();
/// let mut host = RecordingHost::new();
///
/// // Drag the strip 42 px to the left: three ticks pass under the indicator.
/// ruler.on_drag_changed(-42.0, &mut host);
/// assert_eq!(host.haptic_pulses, 3);
///
/// ruler.on_drag_ended(&mut host);
/// assert_eq!(ruler.phase(), RulerPhase::Settling);
/// assert!((ruler.value() - 150.3).abs() < 1e-9);
///
/// ruler.on_settle_finished(&mut host);
/// assert_eq!(ruler.phase(), RulerPhase::Idle);
/// ```
#[derive(Clone, Debug)]
pub struct RulerController {
    config: RulerConfig,
    space: ValueSpace,
    steps_per_major: usize,
    content_inset: f64,
    value: f64,
    baseline: f64,
    offset: f64,
    phase: RulerPhase,
    gesture_origin: f64,
    haptic_cursor: Option<usize>,
    settle_target: f64,
    last_emitted: Option<f64>,
    pending_config: Option<(RulerConfig, ValueSpace)>,
    pending_value: Option<f64>,
}

impl RulerController {
    /// Creates a controller at rest on the step nearest to `initial_value`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` is invalid.
    pub fn new(config: RulerConfig, initial_value: f64, baseline: f64) -> Result<Self, ConfigError> {
        let space = config.validate().inspect_err(|err| {
            warn!("rejecting ruler configuration: {err}");
        })?;
        let value = space.snap(initial_value);
        let offset = space.offset_of(value);
        Ok(Self {
            steps_per_major: space.steps_per_major(config.major_tick_interval),
            content_inset: config.content_inset(),
            config,
            space,
            value,
            baseline,
            offset,
            phase: RulerPhase::Idle,
            gesture_origin: offset,
            haptic_cursor: None,
            settle_target: offset,
            last_emitted: None,
            pending_config: None,
            pending_value: None,
        })
    }

    /// The displayed value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The baseline used for the highlight span.
    #[must_use]
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    /// Replaces the baseline. Only affects [`Self::current_highlight`].
    pub fn set_baseline(&mut self, baseline: f64) {
        self.baseline = baseline;
    }

    /// Scroll offset in pixels, in `0.0..=content_width()`.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Current interaction phase.
    #[must_use]
    pub fn phase(&self) -> RulerPhase {
        self.phase
    }

    /// Step index of the last haptic pulse in the current gesture.
    ///
    /// `None` outside of a gesture.
    #[must_use]
    pub fn haptic_cursor(&self) -> Option<usize> {
        self.haptic_cursor
    }

    /// The value space of the active configuration.
    #[must_use]
    pub fn value_space(&self) -> &ValueSpace {
        &self.space
    }

    /// The active configuration.
    ///
    /// A configuration queued during a gesture is not visible here until it
    /// has been applied.
    #[must_use]
    pub fn config(&self) -> &RulerConfig {
        &self.config
    }

    /// The configuration that will be active once queued changes apply.
    ///
    /// Hosts deriving a new configuration from the current one (for example
    /// after a layout change) should start from this so an earlier queued
    /// change is not lost.
    #[must_use]
    pub fn latest_config(&self) -> &RulerConfig {
        self.pending_config
            .as_ref()
            .map_or(&self.config, |(config, _)| config)
    }

    /// Number of steps between major ticks in the active configuration.
    #[must_use]
    pub fn steps_per_major(&self) -> usize {
        self.steps_per_major
    }

    /// Scrollable width of the tick strip, excluding insets.
    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.space.content_width()
    }

    /// Padding before the first and after the last tick.
    #[must_use]
    pub fn content_inset(&self) -> f64 {
        self.content_inset
    }

    /// Returns `true` if a configuration or external value is waiting for the
    /// next idle transition.
    #[must_use]
    pub fn has_pending_changes(&self) -> bool {
        self.pending_config.is_some() || self.pending_value.is_some()
    }

    /// Span between the baseline and the value, or `None` when they
    /// (nearly) coincide.
    #[must_use]
    pub fn current_highlight(&self) -> Option<Highlight> {
        if (self.value - self.baseline).abs() <= HIGHLIGHT_EPSILON {
            return None;
        }
        Some(Highlight {
            start: self.value.min(self.baseline),
            end: self.value.max(self.baseline),
        })
    }

    /// Handles a drag update, `translation` pixels from where the gesture
    /// started.
    ///
    /// Positive translations move the strip right and lower the value. The
    /// first update of a gesture enters [`RulerPhase::Dragging`].
    pub fn on_drag_changed(&mut self, translation: f64, host: &mut impl RulerHost) {
        if self.phase != RulerPhase::Dragging {
            self.begin_gesture();
        }
        if translation.is_nan() {
            return;
        }
        self.track_offset(self.gesture_origin - translation, host);
    }

    /// Handles the end of a gesture: snaps the value and settles on its tick.
    ///
    /// Does nothing outside of [`RulerPhase::Dragging`].
    pub fn on_drag_ended(&mut self, host: &mut impl RulerHost) {
        if self.phase != RulerPhase::Dragging {
            return;
        }
        let snapped = self.space.snap(self.value);
        let changed = (snapped - self.value).abs() > VALUE_EPSILON;
        self.value = snapped;
        self.offset = self.space.offset_of(snapped);
        self.settle_target = self.offset;
        self.haptic_cursor = None;
        self.phase = RulerPhase::Settling;
        debug!("ruler settling at {snapped} (offset {})", self.offset);
        host.request_offset(self.offset, true);
        if changed {
            self.emit(host);
        }
    }

    /// Handles a gesture aborted by the host; identical to
    /// [`Self::on_drag_ended`].
    pub fn on_drag_cancelled(&mut self, host: &mut impl RulerHost) {
        self.on_drag_ended(host);
    }

    /// Handles the end of the host's settle animation.
    ///
    /// Enters [`RulerPhase::Idle`] and applies changes queued during the
    /// gesture. Does nothing outside of [`RulerPhase::Settling`].
    pub fn on_settle_finished(&mut self, host: &mut impl RulerHost) {
        if self.phase == RulerPhase::Settling {
            self.enter_idle(host);
        }
    }

    /// Handles the scroll surface reporting its current offset.
    ///
    /// - While dragging, the offset drives the value like a drag update.
    /// - At rest, moving away from the resting offset starts a scroll-driven
    ///   gesture, which the host ends with [`Self::on_drag_ended`].
    /// - While settling, reaching the settle target finishes the settle;
    ///   intermediate animation frames are ignored.
    pub fn report_offset(&mut self, offset: f64, host: &mut impl RulerHost) {
        if offset.is_nan() {
            return;
        }
        match self.phase {
            RulerPhase::Dragging => self.track_offset(offset, host),
            RulerPhase::Settling => {
                if (offset - self.settle_target).abs() <= OFFSET_EPSILON {
                    self.enter_idle(host);
                }
            }
            RulerPhase::Idle => {
                if (offset - self.offset).abs() > OFFSET_EPSILON {
                    self.begin_gesture();
                    self.track_offset(offset, host);
                }
            }
        }
    }

    /// Handles the host changing the bound value itself.
    ///
    /// Values equal to what the controller last reported, or to its current
    /// value, are echoes and are ignored. Other values are clamped, snapped,
    /// and aligned without animation or haptics; if that changes the value the
    /// host supplied, the corrected value is reported back. During a gesture
    /// the value is queued until the next idle transition.
    pub fn on_external_value_changed(&mut self, value: f64, host: &mut impl RulerHost) {
        let is_echo = self
            .last_emitted
            .is_some_and(|last| (last - value).abs() <= VALUE_EPSILON);
        if is_echo || (self.value - value).abs() <= VALUE_EPSILON {
            return;
        }
        if self.phase == RulerPhase::Dragging {
            debug!("deferring external ruler value {value} until the gesture ends");
            self.pending_value = Some(value);
            return;
        }
        self.pending_value = None;
        self.apply_external_value(value, host);
    }

    /// Handles a new range, step, major interval, tick spacing, or viewport.
    ///
    /// The configuration is validated first. At rest or while settling it
    /// applies immediately: the value is clamped into the new range, snapped,
    /// and the offset realigned without animation. During a gesture it is
    /// queued until the next idle transition so the value does not jump under
    /// the user's finger.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` is invalid; the controller keeps
    /// its previous configuration.
    pub fn on_configuration_changed(
        &mut self,
        config: RulerConfig,
        host: &mut impl RulerHost,
    ) -> Result<(), ConfigError> {
        let space = config.validate().inspect_err(|err| {
            warn!("rejecting ruler configuration: {err}");
        })?;
        if self.phase == RulerPhase::Dragging {
            debug!("deferring ruler reconfiguration until the gesture ends");
            self.pending_config = Some((config, space));
            return Ok(());
        }
        self.pending_config = None;
        self.apply_config(config, space, host);
        Ok(())
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> RulerDebugInfo {
        RulerDebugInfo {
            phase: self.phase,
            value: self.value,
            baseline: self.baseline,
            offset: self.offset,
            content_width: self.content_width(),
            content_inset: self.content_inset,
            step_count: self.space.step_count(),
            steps_per_major: self.steps_per_major,
            haptic_cursor: self.haptic_cursor,
            has_pending_config: self.pending_config.is_some(),
            has_pending_value: self.pending_value.is_some(),
        }
    }

    fn begin_gesture(&mut self) {
        debug!("ruler gesture started at {} (offset {})", self.value, self.offset);
        self.phase = RulerPhase::Dragging;
        self.gesture_origin = self.offset;
        self.haptic_cursor = Some(self.space.step_of(self.value));
    }

    fn track_offset(&mut self, offset: f64, host: &mut impl RulerHost) {
        self.offset = offset.clamp(0.0, self.space.content_width());
        let value = self.space.value_at_offset(self.offset);
        if (value - self.value).abs() > VALUE_EPSILON {
            self.value = value;
            trace!("ruler value {value}");
            self.emit(host);
        }

        let step = self.space.step_of(value);
        let cursor = self.haptic_cursor.unwrap_or(step);
        let crossed = step.abs_diff(cursor);
        if crossed > 0 {
            trace!("ruler crossed {crossed} step(s) to {step}");
            for _ in 0..crossed {
                host.haptic_pulse();
            }
        }
        self.haptic_cursor = Some(step);
    }

    fn enter_idle(&mut self, host: &mut impl RulerHost) {
        debug!("ruler idle at {}", self.value);
        self.phase = RulerPhase::Idle;
        if let Some((config, space)) = self.pending_config.take() {
            self.apply_config(config, space, host);
        }
        let pending = self.pending_value.take();
        if let Some(value) = pending.filter(|v| (self.value - v).abs() > VALUE_EPSILON) {
            self.apply_deferred_value(value, host);
        }
    }

    fn apply_config(&mut self, config: RulerConfig, space: ValueSpace, host: &mut impl RulerHost) {
        debug!(
            "applying ruler configuration {:?} step {} (viewport {})",
            config.range, config.step, config.viewport_width
        );
        self.steps_per_major = space.steps_per_major(config.major_tick_interval);
        self.content_inset = config.content_inset();
        self.config = config;
        self.space = space;
        let previous = self.value;
        self.align_to(space.snap(previous), host);
        if (self.value - previous).abs() > VALUE_EPSILON {
            self.emit(host);
        }
    }

    fn apply_external_value(&mut self, value: f64, host: &mut impl RulerHost) {
        self.align_to(self.space.snap(value), host);
        if (self.value - value).abs() > VALUE_EPSILON {
            self.emit(host);
        } else {
            self.last_emitted = Some(value);
        }
    }

    /// Applies an external value queued during a gesture.
    ///
    /// The gesture reported newer values after the host pushed this one, so
    /// the result is compared with the last emitted value, not with `value`.
    fn apply_deferred_value(&mut self, value: f64, host: &mut impl RulerHost) {
        self.align_to(self.space.snap(value), host);
        let host_is_stale = self
            .last_emitted
            .is_none_or(|last| (last - self.value).abs() > VALUE_EPSILON);
        if host_is_stale {
            self.emit(host);
        }
    }

    /// Moves to a step-aligned value without animation or haptics.
    fn align_to(&mut self, value: f64, host: &mut impl RulerHost) {
        self.value = value;
        self.offset = self.space.offset_of(value);
        self.settle_target = self.offset;
        host.request_offset(self.offset, false);
    }

    fn emit(&mut self, host: &mut impl RulerHost) {
        self.last_emitted = Some(self.value);
        host.value_changed(self.value);
    }
}

/// Debug snapshot of a [`RulerController`] state.
#[derive(Clone, Debug, PartialEq)]
pub struct RulerDebugInfo {
    /// Interaction phase.
    pub phase: RulerPhase,
    /// Displayed value.
    pub value: f64,
    /// Baseline value.
    pub baseline: f64,
    /// Scroll offset in pixels.
    pub offset: f64,
    /// Scrollable width of the strip.
    pub content_width: f64,
    /// Padding on either side of the strip.
    pub content_inset: f64,
    /// Index of the last step.
    pub step_count: usize,
    /// Steps between major ticks.
    pub steps_per_major: usize,
    /// Step of the last haptic pulse in the current gesture.
    pub haptic_cursor: Option<usize>,
    /// A reconfiguration is queued.
    pub has_pending_config: bool,
    /// An external value is queued.
    pub has_pending_value: bool,
}
