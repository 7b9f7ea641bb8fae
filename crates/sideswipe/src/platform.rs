//! Glue for feeding platform input into the widget layer.
//!
//! Hosts that drive Sideswipe from a winit event loop can use these
//! conversions instead of mapping input phases by hand.

use winit::event::TouchPhase;

use crate::events::GestureState;

/// Map a winit touch phase to the matching gesture lifecycle state.
pub fn gesture_state_from_touch_phase(phase: TouchPhase) -> GestureState {
    match phase {
        TouchPhase::Started => GestureState::Started,
        TouchPhase::Moved => GestureState::Updated,
        TouchPhase::Ended => GestureState::Ended,
        TouchPhase::Cancelled => GestureState::Cancelled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_phase_mapping() {
        assert_eq!(
            gesture_state_from_touch_phase(TouchPhase::Started),
            GestureState::Started
        );
        assert_eq!(
            gesture_state_from_touch_phase(TouchPhase::Moved),
            GestureState::Updated
        );
        assert_eq!(
            gesture_state_from_touch_phase(TouchPhase::Ended),
            GestureState::Ended
        );
        assert_eq!(
            gesture_state_from_touch_phase(TouchPhase::Cancelled),
            GestureState::Cancelled
        );
    }
}
