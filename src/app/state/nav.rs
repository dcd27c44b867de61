use crate::pages::PAGE_COUNT;
use crate::track::Transition;

/// Paging model; the single source of truth for which page is active.
///
/// `current_page` always holds a valid index and commits atomically to the
/// navigation target — never an intermediate value while the track is still
/// animating. The dot row derives from it at render time, so "exactly one
/// active dot" holds by construction.
pub struct NavState {
    pub(in crate::app) current_page: usize,
    pub(in crate::app) transition: Option<Transition>,
}

impl NavState {
    pub(in crate::app) fn new() -> Self {
        NavState {
            current_page: 0,
            transition: None,
        }
    }

    /// Read-only view of the active page for collaborators.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn in_transition(&self) -> bool {
        self.transition.is_some()
    }

    /// Clamp a requested index into the fixed page range. Out-of-range input
    /// is not an error; a swipe past either edge simply stays put.
    pub(in crate::app) fn clamp_target(target: usize) -> usize {
        target.min(PAGE_COUNT - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_clamp_to_the_last_page() {
        assert_eq!(NavState::clamp_target(0), 0);
        assert_eq!(NavState::clamp_target(2), 2);
        assert_eq!(NavState::clamp_target(3), 2);
        assert_eq!(NavState::clamp_target(usize::MAX), 2);
    }

    #[test]
    fn starts_on_the_first_page_with_no_transition() {
        let nav = NavState::new();
        assert_eq!(nav.current_page(), 0);
        assert!(!nav.in_transition());
    }
}
