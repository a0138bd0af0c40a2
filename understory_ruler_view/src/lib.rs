// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_ruler_view --heading-base-level=0

//! Understory Ruler View: drawing and input plumbing for `understory_ruler`.
//!
//! This crate sits between a [`RulerController`](understory_ruler::RulerController)
//! and a widget toolkit:
//!
//! - [`visible_ticks`] computes the window of ticks under the viewport in
//!   constant time, so a ruler with millions of steps costs the same per frame
//!   as one with a hundred.
//! - [`RulerScene`] describes one frame as `kurbo` geometry with `peniko`
//!   colors: tick strokes, the highlight between baseline and value, and the
//!   fixed center indicator. Its look is set by [`RulerStyle`].
//! - [`RulerView`] relays pointer and scroll input to the controller, tracking
//!   horizontal drags with [`HorizontalDrag`], and builds scenes.
//! - [`format_value`] renders a value with the precision of its step.
//! - [`WeightPicker`] binds a ruler to a desired body weight in kilograms and
//!   switches between pounds and kilograms without losing it.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_ruler::{RecordingHost, RulerConfig};
//! use understory_ruler_view::RulerView;
//!
//! let config = RulerConfig::new(0.0..=100_000.0, 0.01)
//!     .with_major_tick_interval(1.0)
//!     .with_viewport_width(400.0);
//! let mut view = RulerView::new(config, 50_000.0, 0.0).unwrap();
//! let mut host = RecordingHost::new();
//!
//! view.pointer_down(Point::new(200.0, 40.0));
//! view.pointer_move(Point::new(228.0, 40.0), &mut host);
//! view.pointer_up(&mut host);
//! assert_eq!(view.label(""), "49999.98");
//!
//! // Ten million steps, yet only the ticks under the viewport are built.
//! let scene = view.scene(100.0);
//! assert!(scene.ticks.len() <= 400 / 14 + 2 * 2 + 2);
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`WeightDefaults`] and
//!   enable the same feature in `understory_ruler`.

mod gesture;
mod label;
mod scene;
mod ticks;
mod view;
mod weight;

pub use gesture::HorizontalDrag;
pub use label::{decimals_for_step, format_value};
pub use scene::{RulerScene, RulerStyle, TickMark};
pub use ticks::{DEFAULT_OVERSCAN, Tick, TickWindow, visible_ticks};
pub use view::RulerView;
pub use weight::{GOAL_TOLERANCE_KG, WeightDefaults, WeightGoal, WeightPicker};
