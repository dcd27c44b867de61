//! Track geometry and the page-to-page transition animation.
//!
//! The track is a horizontal strip of fixed-width pages; showing page `i`
//! means scrolling the strip to `i * page_width`. Transitions are sampled on
//! animation ticks with a cubic ease-out so they settle at the exact target
//! offset within a bounded duration. The math is isolated here so retarget
//! and settle behavior can be tested without a running event loop.

use std::time::{Duration, Instant};

/// Logical width of one page in the track, in pixels.
pub const PAGE_WIDTH: f32 = 360.0;

/// Horizontal offset of the given page within the track.
pub fn page_offset(index: usize, page_width: f32) -> f32 {
    index as f32 * page_width
}

/// One in-flight animated move of the track.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl Transition {
    pub fn new(from: f32, to: f32, started_at: Instant, duration: Duration) -> Self {
        Transition {
            from,
            to,
            started_at,
            duration,
        }
    }

    /// Offset at `now`, and whether the transition has settled. Once settled
    /// the offset is exactly the target.
    pub fn sample(&self, now: Instant) -> (f32, bool) {
        if self.duration.is_zero() {
            return (self.to, true);
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            return (self.to, true);
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let progress = ease_out_cubic(t);
        (self.from + (self.to - self.from) * progress, false)
    }

    /// Replace the target mid-flight, animating from wherever the track
    /// currently sits. Last writer wins; nothing is queued.
    pub fn retarget(&self, to: f32, now: Instant, duration: Duration) -> Transition {
        let (current, _) = self.sample(now);
        Transition::new(current, to, now, duration)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}
