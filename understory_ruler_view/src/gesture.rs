// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal drag tracking for a single pointer.
//!
//! The ruler only cares about the x translation since the pointer went down;
//! vertical movement is ignored. Every move after the press, including one
//! that has not moved yet, counts as a drag update.

use kurbo::Point;

/// Tracks one horizontal drag from press to release.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HorizontalDrag {
    start_x: Option<f64>,
    last_x: Option<f64>,
}

impl HorizontalDrag {
    /// Starts tracking a drag at `pos`, replacing any drag in progress.
    pub fn start(&mut self, pos: Point) {
        self.start_x = Some(pos.x);
        self.last_x = Some(pos.x);
    }

    /// Records a move and returns the x translation from the drag start.
    ///
    /// Returns `None` when no drag is being tracked.
    pub fn update(&mut self, pos: Point) -> Option<f64> {
        let start = self.start_x?;
        self.last_x = Some(pos.x);
        Some(pos.x - start)
    }

    /// x translation at the most recent update.
    #[must_use]
    pub fn translation(&self) -> Option<f64> {
        Some(self.last_x? - self.start_x?)
    }

    /// Stops tracking; returns `true` if a drag was in progress.
    pub fn end(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.start_x = None;
        self.last_x = None;
        was_dragging
    }

    /// Returns `true` while a drag is tracked.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_x.is_some()
    }
}
