// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interfaces between the controller and the embedding toolkit.
//!
//! The controller never talks to a widget toolkit directly. Its outputs go
//! through two small traits:
//!
//! - [`ScrollAdapter`] moves the host's scroll surface. The opposite
//!   direction, the surface reporting where it currently is, goes through
//!   [`RulerController::report_offset`](crate::RulerController::report_offset).
//! - [`RulerHost`] receives the bound value and haptic pulses.
//!
//! Both are implemented by whatever owns the picker widget: a retained widget,
//! an immediate-mode frame closure, or a [`RecordingHost`] in tests.

use alloc::vec::Vec;

/// Output half of a scroll surface adapter.
pub trait ScrollAdapter {
    /// Asks the scroll surface to move to `offset` pixels.
    ///
    /// `animated` is `true` when the move is the settle after a gesture; hosts
    /// should animate to the target and then call
    /// [`RulerController::on_settle_finished`](crate::RulerController::on_settle_finished)
    /// (or report the final offset). Non-animated requests are realignments
    /// after external changes and should be applied immediately.
    fn request_offset(&mut self, offset: f64, animated: bool);
}

/// Receiver of the controller's value binding and haptic signal.
pub trait RulerHost: ScrollAdapter {
    /// The displayed value changed. Hosts store it in their own state.
    ///
    /// Values delivered here must not be fed back through
    /// [`RulerController::on_external_value_changed`](crate::RulerController::on_external_value_changed);
    /// the controller ignores such echoes, but they are wasted work.
    fn value_changed(&mut self, value: f64);

    /// One step boundary was crossed during a gesture.
    fn haptic_pulse(&mut self);
}

/// A host that records every callback.
///
/// Useful for tests, benchmarks, and embedders that prefer to poll the
/// outputs of an event rather than receive callbacks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingHost {
    /// Every value delivered through [`RulerHost::value_changed`], in order.
    pub values: Vec<f64>,
    /// Number of haptic pulses fired.
    pub haptic_pulses: usize,
    /// Every `(offset, animated)` scroll request, in order.
    pub offset_requests: Vec<(f64, bool)>,
}

impl RecordingHost {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent value delivered, if any.
    #[must_use]
    pub fn last_value(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// The most recent scroll request, if any.
    #[must_use]
    pub fn last_offset_request(&self) -> Option<(f64, bool)> {
        self.offset_requests.last().copied()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&mut self) {
        self.values.clear();
        self.haptic_pulses = 0;
        self.offset_requests.clear();
    }
}

impl ScrollAdapter for RecordingHost {
    fn request_offset(&mut self, offset: f64, animated: bool) {
        self.offset_requests.push((offset, animated));
    }
}

impl RulerHost for RecordingHost {
    fn value_changed(&mut self, value: f64) {
        self.values.push(value);
    }

    fn haptic_pulse(&mut self) {
        self.haptic_pulses += 1;
    }
}
