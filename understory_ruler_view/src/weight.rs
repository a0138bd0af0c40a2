// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Desired-weight screen model.
//!
//! [`WeightPicker`] binds a [`RulerView`] to a desired body weight stored in
//! kilograms. The ruler itself works in the display unit of the active
//! [`MeasurementSystem`]; the picker converts on the way in and out, and
//! reconfigures the ruler when the user switches units.

use kurbo::Point;
use log::{debug, warn};
use understory_ruler::{
    ConfigError, KILOGRAMS_PER_POUND, MeasurementSystem, RulerConfig, RulerHost, RulerPhase,
    ScrollAdapter,
};

use crate::scene::RulerScene;
use crate::view::RulerView;

/// Differences between desired and starting weight below this many
/// kilograms count as maintaining weight.
pub const GOAL_TOLERANCE_KG: f64 = 0.01;

/// Starting values for a [`WeightPicker`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightDefaults {
    /// Weight shown before the user has entered one, in kilograms.
    pub weight_kilograms: f64,
    /// Ruler step, in display units.
    pub step: f64,
    /// Distance between major ticks, in display units.
    pub major_tick_interval: f64,
    /// Pixel distance between adjacent ticks.
    pub tick_spacing: f64,
}

impl Default for WeightDefaults {
    fn default() -> Self {
        Self {
            weight_kilograms: 155.0 * KILOGRAMS_PER_POUND,
            step: 0.1,
            major_tick_interval: 1.0,
            tick_spacing: understory_ruler::DEFAULT_TICK_SPACING,
        }
    }
}

impl WeightDefaults {
    /// Ruler configuration for `system` in a viewport `viewport_width` wide.
    #[must_use]
    pub fn ruler_config(&self, system: MeasurementSystem, viewport_width: f64) -> RulerConfig {
        RulerConfig::new(system.weight_range(), self.step)
            .with_major_tick_interval(self.major_tick_interval)
            .with_tick_spacing(self.tick_spacing)
            .with_viewport_width(viewport_width)
    }
}

/// Direction of the desired weight relative to the starting weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WeightGoal {
    /// Within [`GOAL_TOLERANCE_KG`] of the starting weight.
    Maintain,
    /// Below the starting weight.
    Lose,
    /// Above the starting weight.
    Gain,
}

impl WeightGoal {
    /// Classifies `desired` against `starting`, both in kilograms.
    #[must_use]
    pub fn between(starting: f64, desired: f64) -> Self {
        let diff = desired - starting;
        if diff.abs() < GOAL_TOLERANCE_KG {
            Self::Maintain
        } else if diff < 0.0 {
            Self::Lose
        } else {
            Self::Gain
        }
    }

    /// User-facing caption.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Maintain => "Maintain",
            Self::Lose => "Lose weight",
            Self::Gain => "Gain weight",
        }
    }
}

/// The desired-weight picker.
///
/// Host callbacks pass through the picker on their way to the caller's
/// [`RulerHost`], so the desired weight is updated before the host sees the
/// new display value.
///
/// ```rust
/// use understory_ruler::{MeasurementSystem, RecordingHost};
/// use understory_ruler_view::{WeightDefaults, WeightGoal, WeightPicker};
///
/// let mut picker =
///     WeightPicker::new(WeightDefaults::default(), MeasurementSystem::Imperial, 390.0).unwrap();
/// let mut host = RecordingHost::new();
/// assert_eq!(picker.label(), "155.0 lb");
/// assert_eq!(picker.goal(), WeightGoal::Maintain);
///
/// picker.set_measurement_system(MeasurementSystem::Metric, &mut host).unwrap();
/// assert_eq!(picker.label(), "70.3 kg");
/// ```
#[derive(Clone, Debug)]
pub struct WeightPicker {
    view: RulerView,
    defaults: WeightDefaults,
    system: MeasurementSystem,
    starting_kilograms: f64,
    desired_kilograms: f64,
}

impl WeightPicker {
    /// Creates a picker showing the default weight as both the starting and
    /// desired weight.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `defaults` do not describe a valid ruler.
    pub fn new(
        defaults: WeightDefaults,
        system: MeasurementSystem,
        viewport_width: f64,
    ) -> Result<Self, ConfigError> {
        let weight = system.from_kilograms(defaults.weight_kilograms);
        let config = defaults.ruler_config(system, viewport_width);
        let space = config.validate()?;
        let view = RulerView::new(config, weight, space.snap(weight))?;
        let desired_kilograms = system.to_kilograms(view.value());
        Ok(Self {
            view,
            defaults,
            system,
            starting_kilograms: defaults.weight_kilograms,
            desired_kilograms,
        })
    }

    /// The wrapped ruler.
    #[must_use]
    pub fn view(&self) -> &RulerView {
        &self.view
    }

    /// Active measurement system.
    #[must_use]
    pub fn measurement_system(&self) -> MeasurementSystem {
        self.system
    }

    /// Weight the user starts from, in kilograms.
    #[must_use]
    pub fn starting_kilograms(&self) -> f64 {
        self.starting_kilograms
    }

    /// Weight the user is aiming for, in kilograms.
    #[must_use]
    pub fn desired_kilograms(&self) -> f64 {
        self.desired_kilograms
    }

    /// Desired weight in the display unit, as shown under the indicator.
    #[must_use]
    pub fn display_value(&self) -> f64 {
        self.view.value()
    }

    /// Whether the user is losing, gaining, or maintaining weight.
    #[must_use]
    pub fn goal(&self) -> WeightGoal {
        WeightGoal::between(self.starting_kilograms, self.desired_kilograms)
    }

    /// Desired weight formatted in the display unit.
    #[must_use]
    pub fn label(&self) -> String {
        self.view.label(self.system.weight_unit())
    }

    /// Scene of the ruler, `height` pixels tall.
    #[must_use]
    pub fn scene(&self, height: f64) -> RulerScene {
        self.view.scene(height)
    }

    /// Replaces the starting weight, which moves the highlight baseline.
    pub fn set_starting_kilograms(&mut self, kilograms: f64) {
        self.starting_kilograms = kilograms;
        self.sync_baseline();
    }

    /// The host changed the desired weight itself.
    ///
    /// The ruler recenters without haptics; if the weight falls outside the
    /// range or between steps, the corrected weight is reported back. During
    /// a gesture the weight is applied once the ruler comes to rest, and the
    /// desired weight follows the ruler until then.
    pub fn set_desired_kilograms(&mut self, kilograms: f64, host: &mut impl RulerHost) {
        let display = self.system.from_kilograms(kilograms);
        let mut binding = WeightBinding::new(&mut self.desired_kilograms, self.system, host);
        self.view
            .controller_mut()
            .on_external_value_changed(display, &mut binding);
        if self.view.controller().phase() != RulerPhase::Dragging {
            self.desired_kilograms = self.system.to_kilograms(self.view.value());
        }
    }

    /// Switches the display unit, keeping the desired weight.
    ///
    /// A gesture in progress is cancelled first. The ruler is reconfigured to
    /// the new unit's range and recentered on the converted weight without
    /// haptics.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the defaults do not describe a valid ruler
    /// in the new unit; the picker is left unchanged in that case.
    pub fn set_measurement_system(
        &mut self,
        system: MeasurementSystem,
        host: &mut impl RulerHost,
    ) -> Result<(), ConfigError> {
        if system == self.system {
            return Ok(());
        }
        let viewport_width = self.view.controller().latest_config().viewport_width;
        let config = self.defaults.ruler_config(system, viewport_width);
        config.validate().inspect_err(|err| {
            warn!("cannot switch weight picker to {system:?}: {err}");
        })?;
        debug!("switching weight picker to {system:?}");

        if self.view.controller().phase() == RulerPhase::Dragging {
            let mut binding =
                WeightBinding::new(&mut self.desired_kilograms, self.system, &mut *host);
            self.view.pointer_cancel(&mut binding);
        }
        let target = system.from_kilograms(self.desired_kilograms);

        // Values clamped into the new range are still in the old unit; only
        // the offset realignment reaches the host.
        self.view
            .controller_mut()
            .on_configuration_changed(config, &mut Realign { host: &mut *host })?;
        self.system = system;
        self.sync_baseline();

        let mut binding = WeightBinding::new(&mut self.desired_kilograms, system, host);
        self.view
            .controller_mut()
            .on_external_value_changed(target, &mut binding);
        self.desired_kilograms = system.to_kilograms(self.view.value());
        Ok(())
    }

    /// Pointer pressed on the ruler.
    pub fn pointer_down(&mut self, pos: Point) {
        self.view.pointer_down(pos);
    }

    /// Pointer moved.
    pub fn pointer_move(&mut self, pos: Point, host: &mut impl RulerHost) {
        let mut binding = WeightBinding::new(&mut self.desired_kilograms, self.system, host);
        self.view.pointer_move(pos, &mut binding);
    }

    /// Pointer released.
    pub fn pointer_up(&mut self, host: &mut impl RulerHost) {
        let mut binding = WeightBinding::new(&mut self.desired_kilograms, self.system, host);
        self.view.pointer_up(&mut binding);
    }

    /// Gesture interrupted by the system.
    pub fn pointer_cancel(&mut self, host: &mut impl RulerHost) {
        let mut binding = WeightBinding::new(&mut self.desired_kilograms, self.system, host);
        self.view.pointer_cancel(&mut binding);
    }

    /// The host scroll surface reports its offset.
    pub fn scroll_reported(&mut self, offset: f64, host: &mut impl RulerHost) {
        let mut binding = WeightBinding::new(&mut self.desired_kilograms, self.system, host);
        self.view.scroll_reported(offset, &mut binding);
    }

    /// The host finished animating a settle.
    pub fn settle_finished(&mut self, host: &mut impl RulerHost) {
        let mut binding = WeightBinding::new(&mut self.desired_kilograms, self.system, host);
        self.view.settle_finished(&mut binding);
    }

    /// Layout changed the viewport width.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `width` is negative or not finite.
    pub fn set_viewport_width(
        &mut self,
        width: f64,
        host: &mut impl RulerHost,
    ) -> Result<(), ConfigError> {
        let mut binding = WeightBinding::new(&mut self.desired_kilograms, self.system, host);
        self.view.set_viewport_width(width, &mut binding)
    }

    fn sync_baseline(&mut self) {
        let baseline = self.system.from_kilograms(self.starting_kilograms);
        let snapped = self.view.controller().value_space().snap(baseline);
        self.view.controller_mut().set_baseline(snapped);
    }
}

/// Forwards ruler callbacks to the caller's host after updating the desired
/// weight.
struct WeightBinding<'a, H> {
    desired_kilograms: &'a mut f64,
    system: MeasurementSystem,
    host: &'a mut H,
}

impl<'a, H> WeightBinding<'a, H> {
    fn new(desired_kilograms: &'a mut f64, system: MeasurementSystem, host: &'a mut H) -> Self {
        Self {
            desired_kilograms,
            system,
            host,
        }
    }
}

impl<H: RulerHost> ScrollAdapter for WeightBinding<'_, H> {
    fn request_offset(&mut self, offset: f64, animated: bool) {
        self.host.request_offset(offset, animated);
    }
}

impl<H: RulerHost> RulerHost for WeightBinding<'_, H> {
    fn value_changed(&mut self, value: f64) {
        *self.desired_kilograms = self.system.to_kilograms(value);
        self.host.value_changed(value);
    }

    fn haptic_pulse(&mut self) {
        self.host.haptic_pulse();
    }
}

/// Passes scroll requests through and drops everything else.
struct Realign<'a, H> {
    host: &'a mut H,
}

impl<H: RulerHost> ScrollAdapter for Realign<'_, H> {
    fn request_offset(&mut self, offset: f64, animated: bool) {
        self.host.request_offset(offset, animated);
    }
}

impl<H: RulerHost> RulerHost for Realign<'_, H> {
    fn value_changed(&mut self, _value: f64) {}

    fn haptic_pulse(&mut self) {}
}
