//! Drag-to-swipe recognition.
//!
//! A small two-state machine turns raw pointer events into a discrete page
//! intent at release time. Motion below the distance threshold is treated as
//! a tap or jitter and produces no intent, so a completed drag yields at most
//! one navigation. The logic is isolated here so it can be exercised without
//! a real pointer device.

/// Direction the user asked for by swiping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Swipe left, move forward one page.
    Next,
    /// Swipe right, move back one page.
    Previous,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Dragging { start_x: f32, last_x: f32 },
}

/// Pointer-drag recognizer over the page viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRecognizer {
    state: DragState,
}

impl Default for DragRecognizer {
    fn default() -> Self {
        DragRecognizer {
            state: DragState::Idle,
        }
    }
}

impl DragRecognizer {
    /// Begin a drag session at the given horizontal position. A press while
    /// already dragging restarts the session; the event loop serializes
    /// pointer input so this only happens after a missed release.
    pub fn press(&mut self, x: f32) {
        self.state = DragState::Dragging {
            start_x: x,
            last_x: x,
        };
    }

    /// Track pointer motion. Ignored while idle; navigation is never decided
    /// mid-drag, only at release.
    pub fn motion(&mut self, x: f32) {
        if let DragState::Dragging { last_x, .. } = &mut self.state {
            *last_x = x;
        }
    }

    /// End the drag session and convert accumulated motion into an intent.
    /// `threshold` is the minimum distance in logical pixels; anything below
    /// it is a tap.
    pub fn release(&mut self, threshold: f32) -> Option<Intent> {
        let DragState::Dragging { start_x, last_x } = self.state else {
            return None;
        };
        self.state = DragState::Idle;

        let delta = last_x - start_x;
        if delta <= -threshold {
            Some(Intent::Next)
        } else if delta >= threshold {
            Some(Intent::Previous)
        } else {
            None
        }
    }

    /// Abandon the session without producing an intent.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f32 = 72.0;

    #[test]
    fn leftward_drag_past_threshold_yields_next() {
        let mut drag = DragRecognizer::default();
        drag.press(300.0);
        drag.motion(250.0);
        drag.motion(120.0);
        assert_eq!(drag.release(THRESHOLD), Some(Intent::Next));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn rightward_drag_past_threshold_yields_previous() {
        let mut drag = DragRecognizer::default();
        drag.press(80.0);
        drag.motion(290.0);
        assert_eq!(drag.release(THRESHOLD), Some(Intent::Previous));
    }

    #[test]
    fn sub_threshold_motion_is_a_tap() {
        let mut drag = DragRecognizer::default();
        drag.press(200.0);
        drag.motion(195.0);
        drag.motion(185.0);
        assert_eq!(drag.release(THRESHOLD), None);
    }

    #[test]
    fn only_final_position_counts_not_intermediate_moves() {
        // Wander far left, then return close to the start: no intent.
        let mut drag = DragRecognizer::default();
        drag.press(200.0);
        drag.motion(20.0);
        drag.motion(190.0);
        assert_eq!(drag.release(THRESHOLD), None);
    }

    #[test]
    fn one_intent_per_completed_drag() {
        let mut drag = DragRecognizer::default();
        drag.press(300.0);
        drag.motion(100.0);
        assert_eq!(drag.release(THRESHOLD), Some(Intent::Next));
        // Releasing again without a press is a no-op.
        assert_eq!(drag.release(THRESHOLD), None);
    }

    #[test]
    fn motion_without_press_is_ignored() {
        let mut drag = DragRecognizer::default();
        drag.motion(10.0);
        drag.motion(500.0);
        assert_eq!(drag.release(THRESHOLD), None);
    }

    #[test]
    fn cancel_drops_the_session() {
        let mut drag = DragRecognizer::default();
        drag.press(300.0);
        drag.motion(50.0);
        drag.cancel();
        assert_eq!(drag.release(THRESHOLD), None);
    }
}
