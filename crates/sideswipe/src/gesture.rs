//! Drag recognition from raw pointer input.
//!
//! [`DragTracker`] turns press/move/release positions into the drag and tap
//! gesture events the row consumes. Platform gesture recognizers can bypass
//! the tracker and deliver [`DragGestureEvent`]s directly; the tracker exists
//! so mouse input behaves the same way.

use crate::events::{DragGestureEvent, GestureState, TapGestureEvent};
use crate::geometry::Point;

/// Default maximum movement for a tap in display units.
///
/// Movement beyond this threshold starts drag recognition.
pub const DEFAULT_TAP_SLOP: f32 = 10.0;

/// Outcome of releasing the pointer.
#[derive(Debug)]
pub enum DragEndOutcome {
    /// The pointer never left the tap slop; treat it as a tap.
    Tap(TapGestureEvent),
    /// An active drag finished.
    Drag(DragGestureEvent),
}

/// Tracks a single pointer from press to release and classifies the
/// interaction as a tap or a drag.
#[derive(Debug)]
pub struct DragTracker {
    press_pos: Option<Point>,
    last_translation: Point,
    dragging: bool,
    tap_slop: f32,
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl DragTracker {
    /// Create a tracker with the default tap slop.
    pub fn new() -> Self {
        Self {
            press_pos: None,
            last_translation: Point::ZERO,
            dragging: false,
            tap_slop: DEFAULT_TAP_SLOP,
        }
    }

    /// Create a tracker with a custom tap slop.
    pub fn with_tap_slop(tap_slop: f32) -> Self {
        Self {
            tap_slop: tap_slop.max(0.0),
            ..Self::new()
        }
    }

    /// Whether a pointer is currently down.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.press_pos.is_some()
    }

    /// Whether the interaction has committed to being a drag.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The most recent drag translation, or zero before the drag starts.
    #[inline]
    pub fn last_translation(&self) -> Point {
        self.last_translation
    }

    /// Begin tracking at the press position.
    pub fn begin(&mut self, pos: Point) -> Option<DragGestureEvent> {
        self.press_pos = Some(pos);
        self.last_translation = Point::ZERO;
        self.dragging = false;
        Some(DragGestureEvent::started())
    }

    /// Feed a pointer movement. Returns a drag update once the movement
    /// leaves the tap slop, and for every subsequent sample.
    pub fn move_to(&mut self, pos: Point) -> Option<DragGestureEvent> {
        let press = self.press_pos?;
        let translation = Point::new(pos.x - press.x, pos.y - press.y);

        if !self.dragging {
            let distance = (translation.x * translation.x + translation.y * translation.y).sqrt();
            if distance <= self.tap_slop {
                return None;
            }
            self.dragging = true;
        }

        let delta = Point::new(
            translation.x - self.last_translation.x,
            translation.y - self.last_translation.y,
        );
        self.last_translation = translation;
        Some(DragGestureEvent::new(
            translation,
            delta,
            GestureState::Updated,
        ))
    }

    /// Release the pointer. Yields a tap if the movement never exceeded the
    /// slop, otherwise the final drag sample with [`GestureState::Ended`].
    pub fn end(&mut self, pos: Point) -> Option<DragEndOutcome> {
        let press = self.press_pos.take()?;
        let was_dragging = self.dragging;
        self.dragging = false;

        if !was_dragging {
            return Some(DragEndOutcome::Tap(TapGestureEvent::new(pos)));
        }

        let translation = Point::new(pos.x - press.x, pos.y - press.y);
        let delta = Point::new(
            translation.x - self.last_translation.x,
            translation.y - self.last_translation.y,
        );
        self.last_translation = translation;
        Some(DragEndOutcome::Drag(DragGestureEvent::new(
            translation,
            delta,
            GestureState::Ended,
        )))
    }

    /// Abort tracking, e.g. when the pointer grab is lost. Returns a
    /// cancellation event carrying the last known translation if a drag was
    /// in progress.
    pub fn cancel(&mut self) -> Option<DragGestureEvent> {
        let active = self.press_pos.take().is_some();
        let was_dragging = self.dragging;
        self.dragging = false;

        if active && was_dragging {
            Some(DragGestureEvent::new(
                self.last_translation,
                Point::ZERO,
                GestureState::Cancelled,
            ))
        } else {
            None
        }
    }
}
