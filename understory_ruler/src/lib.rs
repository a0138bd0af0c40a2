// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_ruler --heading-base-level=0

//! Understory Ruler: a headless, ruler-style value picker.
//!
//! A ruler picker is a horizontally scrolling strip of tick marks with a fixed
//! indicator in the middle; the value under the indicator is the selection.
//! This crate holds everything about that widget that is not drawing:
//!
//! - [`ValueSpace`]: pure conversions between step indices, domain values, and
//!   pixel offsets over a closed range with a uniform step.
//! - [`RulerConfig`]: range, step, major tick interval, tick spacing, and
//!   viewport width, validated into a [`ValueSpace`] or a [`ConfigError`].
//! - [`RulerController`]: the interaction state machine. It turns drag and
//!   scroll events into a continuous value while dragging, snaps on release,
//!   fires one haptic pulse per crossed step, and keeps a two-way binding with
//!   host state, deferring reconfiguration that arrives mid-gesture.
//! - [`RulerHost`] / [`ScrollAdapter`]: the callbacks through which the
//!   controller reaches the embedding toolkit.
//! - [`MeasurementSystem`]: pound and kilogram units for body-weight rulers.
//!
//! The crate does **not** render anything and does not own a scroll view.
//! Rendering helpers built on top of it live in `understory_ruler_view`.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_ruler::{RecordingHost, RulerConfig, RulerController};
//!
//! // Body weight in pounds, one tick per 0.1 lb, emphasized every pound.
//! let config = RulerConfig::new(50.0..=700.0, 0.1)
//!     .with_major_tick_interval(1.0)
//!     .with_viewport_width(390.0);
//! let mut ruler = RulerController::new(config, 155.0, 160.0).unwrap();
//! let mut host = RecordingHost::new();
//!
//! // The user drags the strip right by ten ticks and lets go.
//! ruler.on_drag_changed(140.0, &mut host);
//! ruler.on_drag_ended(&mut host);
//! assert!((ruler.value() - 154.0).abs() < 1e-9);
//! assert_eq!(host.haptic_pulses, 10);
//!
//! // The host animates its scroll view to the settle offset, then reports back.
//! let (target, animated) = host.last_offset_request().unwrap();
//! assert!(animated);
//! ruler.report_offset(target, &mut host);
//!
//! // Highlight between the baseline and the selection.
//! let span = ruler.current_highlight().unwrap();
//! assert!((span.start - 154.0).abs() < 1e-9 && (span.end - 160.0).abs() < 1e-9);
//! ```
//!
//! ## Logging
//!
//! Phase transitions and deferred changes are logged through the `log`
//! facade at `debug` level, per-event values at `trace`, and rejected
//! configurations at `warn`. No logger is installed by this crate.
//!
//! ## Features
//!
//! - `std` (default): no effect on the API; the crate is `no_std` and uses
//!   `alloc`, with float rounding from `libm`.
//! - `serde`: derive `Serialize`/`Deserialize` for [`RulerConfig`] and
//!   [`MeasurementSystem`].

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod host;
mod units;
mod value_space;

pub use config::{ConfigError, DEFAULT_TICK_SPACING, RulerConfig};
pub use controller::{
    HIGHLIGHT_EPSILON, Highlight, OFFSET_EPSILON, RulerController, RulerDebugInfo, RulerPhase,
    VALUE_EPSILON,
};
pub use host::{RecordingHost, RulerHost, ScrollAdapter};
pub use units::{KILOGRAMS_PER_POUND, MeasurementSystem, POUNDS_PER_KILOGRAM};
pub use value_space::{MAX_STEP_COUNT, ValueSpace};
