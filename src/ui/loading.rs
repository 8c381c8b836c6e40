// SPDX-License-Identifier: MPL-2.0
//! Loading state sub-component with animated spinner.
//!
//! Stuck fetches are bounded by the HTTP client's request timeout, so this
//! state only tracks visibility and the spinner animation.

/// Spinner rotation advance per tick, in radians.
const SPINNER_SPEED: f32 = 0.12;

/// Loading state for the search view.
#[derive(Debug, Clone, Default)]
pub struct State {
    is_loading: bool,
    /// Current spinner rotation angle in radians.
    spinner_rotation: f32,
}

impl State {
    /// Mark a fetch as in flight.
    pub fn start(&mut self) {
        self.is_loading = true;
    }

    /// Mark the fetch as finished (success or failure).
    pub fn stop(&mut self) {
        self.is_loading = false;
        self.spinner_rotation = 0.0;
    }

    /// Advance the spinner animation by one tick.
    pub fn tick(&mut self) {
        if self.is_loading {
            self.spinner_rotation += SPINNER_SPEED;
            if self.spinner_rotation > std::f32::consts::TAU {
                self.spinner_rotation -= std::f32::consts::TAU;
            }
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Get the current spinner rotation angle in radians.
    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_and_stop_toggle_the_flag() {
        let mut state = State::default();
        assert!(!state.is_loading());
        state.start();
        assert!(state.is_loading());
        state.stop();
        assert!(!state.is_loading());
    }

    #[test]
    fn ticks_advance_rotation_only_while_loading() {
        let mut state = State::default();
        state.tick();
        assert_eq!(state.spinner_rotation(), 0.0);

        state.start();
        state.tick();
        assert!(state.spinner_rotation() > 0.0);
    }

    #[test]
    fn stop_resets_rotation() {
        let mut state = State::default();
        state.start();
        state.tick();
        state.stop();
        assert_eq!(state.spinner_rotation(), 0.0);
    }
}
