use super::Effect;
use super::super::state::{App, NavState};
use crate::gesture::Intent;
use crate::track::{PAGE_WIDTH, Transition, page_offset};
use iced::Point;
use std::time::{Duration, Instant};
use tracing::{debug, info};

impl App {
    pub(super) fn handle_dot_pressed(&mut self, index: usize, effects: &mut Vec<Effect>) {
        self.go_to_page(index, effects);
    }

    pub(super) fn handle_next_page(&mut self, effects: &mut Vec<Effect>) {
        self.go_to_page(self.nav.current_page() + 1, effects);
    }

    pub(super) fn handle_previous_page(&mut self, effects: &mut Vec<Effect>) {
        self.go_to_page(self.nav.current_page().saturating_sub(1), effects);
    }

    pub(super) fn handle_viewport_pressed(&mut self) {
        self.drag.press(self.cursor_x);
    }

    pub(super) fn handle_viewport_moved(&mut self, point: Point) {
        self.cursor_x = point.x;
        self.drag.motion(point.x);
    }

    pub(super) fn handle_viewport_released(&mut self, effects: &mut Vec<Effect>) {
        let threshold = self.config.drag_threshold_fraction * PAGE_WIDTH;
        match self.drag.release(threshold) {
            Some(Intent::Next) => self.handle_next_page(effects),
            Some(Intent::Previous) => self.handle_previous_page(effects),
            None => debug!("Drag released below threshold; treated as tap"),
        }
    }

    pub(super) fn handle_viewport_exited(&mut self) {
        if self.drag.is_dragging() {
            debug!("Pointer left the viewport mid-drag; gesture cancelled");
            self.drag.cancel();
        }
    }

    /// Navigate to the given page. Out-of-range targets clamp silently;
    /// repeating the current page re-asserts the track offset without
    /// animating; a call while a transition is in flight retargets it from
    /// the currently sampled offset (last writer wins, nothing queued).
    pub(super) fn go_to_page(&mut self, target: usize, effects: &mut Vec<Effect>) {
        let target = NavState::clamp_target(target);
        let target_offset = page_offset(target, PAGE_WIDTH);

        if target == self.nav.current_page && !self.nav.in_transition() {
            effects.push(Effect::ScrollTrack(target_offset));
            return;
        }

        let now = Instant::now();
        let duration = Duration::from_millis(self.config.transition_ms);
        let transition = match self.nav.transition.take() {
            Some(in_flight) => in_flight.retarget(target_offset, now, duration),
            None => Transition::new(
                page_offset(self.nav.current_page, PAGE_WIDTH),
                target_offset,
                now,
                duration,
            ),
        };

        let (offset, settled) = transition.sample(now);
        // The index commits to the target immediately; only the track offset
        // is still catching up.
        self.nav.current_page = target;
        self.nav.transition = (!settled).then_some(transition);
        effects.push(Effect::ScrollTrack(offset));
        info!(page = target + 1, "Navigated to page");
    }

    pub(super) fn handle_animation_tick(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        let Some(transition) = self.nav.transition else {
            return;
        };
        let (offset, settled) = transition.sample(now);
        effects.push(Effect::ScrollTrack(offset));
        if settled {
            self.nav.transition = None;
            debug!(page = self.nav.current_page() + 1, "Transition settled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::pages::PAGE_COUNT;

    fn build_test_app() -> App {
        let (app, _task) = App::bootstrap(AppConfig::default());
        app
    }

    /// Drive the in-flight transition to completion, as the animation
    /// subscription would.
    fn settle(app: &mut App) {
        let deadline = Instant::now() + Duration::from_millis(app.config.transition_ms);
        let mut effects = Vec::new();
        app.handle_animation_tick(deadline, &mut effects);
        assert!(!app.nav.in_transition());
    }

    #[test]
    fn dot_press_navigates_to_that_page() {
        for target in 0..PAGE_COUNT {
            let mut app = build_test_app();
            let mut effects = Vec::new();
            app.handle_dot_pressed(target, &mut effects);
            assert_eq!(app.nav.current_page(), target);
            if target > 0 {
                settle(&mut app);
                let mut effects = Vec::new();
                app.handle_animation_tick(Instant::now(), &mut effects);
                assert!(effects.is_empty(), "no ticks expected after settling");
            }
        }
    }

    #[test]
    fn settled_track_lands_on_the_target_offset() {
        let mut app = build_test_app();
        let mut effects = Vec::new();
        app.handle_dot_pressed(2, &mut effects);
        let deadline = Instant::now() + Duration::from_millis(app.config.transition_ms);
        let mut effects = Vec::new();
        app.handle_animation_tick(deadline, &mut effects);
        assert_eq!(effects, vec![Effect::ScrollTrack(2.0 * PAGE_WIDTH)]);
    }

    #[test]
    fn previous_at_first_page_stays_put() {
        let mut app = build_test_app();
        let mut effects = Vec::new();
        app.handle_previous_page(&mut effects);
        assert_eq!(app.nav.current_page(), 0);
        assert!(!app.nav.in_transition());
        // The offset is re-asserted, not animated.
        assert_eq!(effects, vec![Effect::ScrollTrack(0.0)]);
    }

    #[test]
    fn next_at_last_page_stays_put() {
        let mut app = build_test_app();
        let mut effects = Vec::new();
        app.go_to_page(PAGE_COUNT - 1, &mut effects);
        settle(&mut app);

        let mut effects = Vec::new();
        app.handle_next_page(&mut effects);
        assert_eq!(app.nav.current_page(), PAGE_COUNT - 1);
        assert!(!app.nav.in_transition());
    }

    #[test]
    fn out_of_range_target_clamps_silently() {
        let mut app = build_test_app();
        let mut effects = Vec::new();
        app.go_to_page(99, &mut effects);
        assert_eq!(app.nav.current_page(), PAGE_COUNT - 1);
    }

    #[test]
    fn repeat_navigation_is_idempotent() {
        let mut app = build_test_app();
        let mut effects = Vec::new();
        app.go_to_page(1, &mut effects);
        settle(&mut app);

        let mut effects = Vec::new();
        app.go_to_page(1, &mut effects);
        assert_eq!(app.nav.current_page(), 1);
        assert!(!app.nav.in_transition());
        assert_eq!(effects, vec![Effect::ScrollTrack(PAGE_WIDTH)]);
    }

    #[test]
    fn retarget_mid_flight_is_last_writer_wins() {
        let mut app = build_test_app();
        let mut effects = Vec::new();
        app.go_to_page(2, &mut effects);
        assert!(app.nav.in_transition());

        // A dot click lands while the swipe transition is still settling.
        let mut effects = Vec::new();
        app.go_to_page(0, &mut effects);
        assert_eq!(app.nav.current_page(), 0);

        settle(&mut app);
        assert_eq!(app.nav.current_page(), 0);
    }

    #[test]
    fn swipe_left_crossing_threshold_advances_one_page() {
        let mut app = build_test_app();
        let mut effects = Vec::new();
        // 60% of the page width, right to left.
        app.handle_viewport_moved(Point::new(PAGE_WIDTH * 0.8, 200.0));
        app.handle_viewport_pressed();
        app.handle_viewport_moved(Point::new(PAGE_WIDTH * 0.2, 200.0));
        app.handle_viewport_released(&mut effects);
        assert_eq!(app.nav.current_page(), 1);
    }

    #[test]
    fn swipe_right_on_first_page_does_not_underflow() {
        let mut app = build_test_app();
        let mut effects = Vec::new();
        app.handle_viewport_moved(Point::new(PAGE_WIDTH * 0.2, 200.0));
        app.handle_viewport_pressed();
        app.handle_viewport_moved(Point::new(PAGE_WIDTH * 0.8, 200.0));
        app.handle_viewport_released(&mut effects);
        assert_eq!(app.nav.current_page(), 0);
    }

    #[test]
    fn two_forward_swipes_reach_the_third_page() {
        let mut app = build_test_app();
        for _ in 0..2 {
            let mut effects = Vec::new();
            app.handle_viewport_moved(Point::new(PAGE_WIDTH * 0.8, 200.0));
            app.handle_viewport_pressed();
            app.handle_viewport_moved(Point::new(PAGE_WIDTH * 0.2, 200.0));
            app.handle_viewport_released(&mut effects);
            settle(&mut app);
        }
        assert_eq!(app.nav.current_page(), 2);
    }

    #[test]
    fn sub_threshold_drag_is_a_tap() {
        let mut app = build_test_app();
        let mut effects = Vec::new();
        app.handle_viewport_moved(Point::new(200.0, 200.0));
        app.handle_viewport_pressed();
        // 5% of the page width.
        app.handle_viewport_moved(Point::new(200.0 - PAGE_WIDTH * 0.05, 200.0));
        app.handle_viewport_released(&mut effects);
        assert_eq!(app.nav.current_page(), 0);
        assert!(effects.is_empty());
    }

    #[test]
    fn exiting_the_viewport_cancels_the_drag() {
        let mut app = build_test_app();
        let mut effects = Vec::new();
        app.handle_viewport_moved(Point::new(PAGE_WIDTH * 0.8, 200.0));
        app.handle_viewport_pressed();
        app.handle_viewport_moved(Point::new(PAGE_WIDTH * 0.1, 200.0));
        app.handle_viewport_exited();
        app.handle_viewport_released(&mut effects);
        assert_eq!(app.nav.current_page(), 0);
        assert!(effects.is_empty());
    }
}
