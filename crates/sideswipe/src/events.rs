//! Widget events for input handling and lifecycle.
//!
//! Events carry an [`EventBase`] with an accepted flag. A widget that
//! handles an event calls [`WidgetEvent::accept`] so the dispatcher stops
//! propagating it.

use std::time::Instant;

use crate::geometry::Point;

/// Common state shared by all events.
#[derive(Debug, Clone, Copy)]
pub struct EventBase {
    /// Whether a widget has accepted (consumed) this event.
    pub accepted: bool,
    /// When the event was created.
    pub timestamp: Instant,
}

impl Default for EventBase {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBase {
    /// Create a new, unaccepted event base stamped with the current time.
    pub fn new() -> Self {
        Self {
            accepted: false,
            timestamp: Instant::now(),
        }
    }

    /// Mark the event as accepted.
    #[inline]
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Mark the event as not accepted.
    #[inline]
    pub fn ignore(&mut self) {
        self.accepted = false;
    }

    /// Check whether the event has been accepted.
    #[inline]
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Mouse button press.
#[derive(Debug, Clone, Copy)]
pub struct MousePressEvent {
    pub base: EventBase,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
    pub button: MouseButton,
}

impl MousePressEvent {
    pub fn new(local_pos: Point, button: MouseButton) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
            button,
        }
    }
}

/// Mouse movement.
#[derive(Debug, Clone, Copy)]
pub struct MouseMoveEvent {
    pub base: EventBase,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
}

impl MouseMoveEvent {
    pub fn new(local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
        }
    }
}

/// Mouse button release.
#[derive(Debug, Clone, Copy)]
pub struct MouseReleaseEvent {
    pub base: EventBase,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
    pub button: MouseButton,
}

impl MouseReleaseEvent {
    pub fn new(local_pos: Point, button: MouseButton) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
            button,
        }
    }
}

/// The widget became visible (entered the view).
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowEvent {
    pub base: EventBase,
}

impl ShowEvent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The widget was removed from view (scrolled out / unmounted).
#[derive(Debug, Clone, Copy, Default)]
pub struct HideEvent {
    pub base: EventBase,
}

impl HideEvent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Lifecycle state of a continuous gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    /// The gesture began; no translation has been delivered yet.
    Started,
    /// A new sample with an updated translation.
    Updated,
    /// The gesture completed normally.
    Ended,
    /// The gesture was interrupted by the system.
    Cancelled,
}

/// A continuous one-finger drag.
///
/// `translation` is the total displacement since the gesture began;
/// `delta` is the displacement since the previous sample.
#[derive(Debug, Clone, Copy)]
pub struct DragGestureEvent {
    pub base: EventBase,
    pub translation: Point,
    pub delta: Point,
    pub state: GestureState,
}

impl DragGestureEvent {
    pub fn new(translation: Point, delta: Point, state: GestureState) -> Self {
        Self {
            base: EventBase::new(),
            translation,
            delta,
            state,
        }
    }

    /// A start event with no translation.
    pub fn started() -> Self {
        Self::new(Point::ZERO, Point::ZERO, GestureState::Started)
    }
}

/// An instantaneous tap.
#[derive(Debug, Clone, Copy)]
pub struct TapGestureEvent {
    pub base: EventBase,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
}

impl TapGestureEvent {
    pub fn new(local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
        }
    }
}

/// All events a widget can receive.
#[derive(Debug)]
pub enum WidgetEvent {
    MousePress(MousePressEvent),
    MouseMove(MouseMoveEvent),
    MouseRelease(MouseReleaseEvent),
    DragGesture(DragGestureEvent),
    TapGesture(TapGestureEvent),
    Show(ShowEvent),
    Hide(HideEvent),
}

impl WidgetEvent {
    /// Mark the event as accepted.
    pub fn accept(&mut self) {
        self.base_mut().accept()
    }

    /// Mark the event as not accepted.
    pub fn ignore(&mut self) {
        self.base_mut().ignore()
    }

    /// Check whether the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.base().is_accepted()
    }

    fn base(&self) -> &EventBase {
        match self {
            Self::MousePress(e) => &e.base,
            Self::MouseMove(e) => &e.base,
            Self::MouseRelease(e) => &e.base,
            Self::DragGesture(e) => &e.base,
            Self::TapGesture(e) => &e.base,
            Self::Show(e) => &e.base,
            Self::Hide(e) => &e.base,
        }
    }

    fn base_mut(&mut self) -> &mut EventBase {
        match self {
            Self::MousePress(e) => &mut e.base,
            Self::MouseMove(e) => &mut e.base,
            Self::MouseRelease(e) => &mut e.base,
            Self::DragGesture(e) => &mut e.base,
            Self::TapGesture(e) => &mut e.base,
            Self::Show(e) => &mut e.base,
            Self::Hide(e) => &mut e.base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_protocol() {
        let mut event = WidgetEvent::Show(ShowEvent::new());
        assert!(!event.is_accepted());
        event.accept();
        assert!(event.is_accepted());
        event.ignore();
        assert!(!event.is_accepted());
    }

    #[test]
    fn test_drag_started_has_zero_translation() {
        let event = DragGestureEvent::started();
        assert_eq!(event.state, GestureState::Started);
        assert_eq!(event.translation, Point::ZERO);
        assert_eq!(event.delta, Point::ZERO);
    }
}
