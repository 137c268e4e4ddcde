//! The entrance animation trigger.
//!
//! Each section flips to "revealed" the first time it crosses the viewport
//! threshold and stays revealed forever after, so scrolling back does not
//! replay (or flicker) the animation. The two-state machine lives here so
//! the no-revert invariant is testable away from the DOM; the site crate
//! feeds it IntersectionObserver callbacks.

/// Hidden -> Revealed, one way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Hidden,
    Revealed,
}

impl Reveal {
    /// Feeds one intersection callback. Entering the viewport reveals;
    /// leaving it changes nothing.
    pub fn on_intersection(&mut self, is_intersecting: bool) {
        if is_intersecting {
            *self = Reveal::Revealed;
        }
    }

    pub fn is_revealed(self) -> bool {
        matches!(self, Reveal::Revealed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert!(!Reveal::default().is_revealed());
    }

    #[test]
    fn first_entry_reveals() {
        let mut state = Reveal::default();
        state.on_intersection(true);
        assert!(state.is_revealed());
    }

    #[test]
    fn leaving_the_viewport_never_reverts() {
        let mut state = Reveal::default();
        state.on_intersection(true);
        state.on_intersection(false);
        assert!(state.is_revealed());
    }

    #[test]
    fn non_intersecting_callbacks_keep_it_hidden() {
        let mut state = Reveal::default();
        state.on_intersection(false);
        state.on_intersection(false);
        assert!(!state.is_revealed());
    }
}
