//! Keyboard input state.
//!
//! The [`Input`] resource tracks which keys are currently pressed, just
//! pressed this frame, or just released this frame.
//!
//! Updated by the window event handler each frame. Held-key motion polls
//! `pressed()` every frame, so a held key applies its increment on every
//! frame until released.

use std::collections::HashSet;
use std::hash::Hash;

pub use winit::keyboard::KeyCode;

/// Tracks the state of a set of inputs.
///
/// - `pressed`: currently held down
/// - `just_pressed`: pressed this frame (not held last frame)
/// - `just_released`: released this frame
pub struct Input<T: Eq + Hash + Copy> {
    pressed: HashSet<T>,
    just_pressed: HashSet<T>,
    just_released: HashSet<T>,
}

impl<T: Eq + Hash + Copy> Input<T> {
    pub fn new() -> Self {
        Self {
            pressed: HashSet::new(),
            just_pressed: HashSet::new(),
            just_released: HashSet::new(),
        }
    }

    /// Returns `true` if the input is currently held down.
    pub fn pressed(&self, input: T) -> bool {
        self.pressed.contains(&input)
    }

    /// Returns `true` if the input was pressed this frame.
    pub fn just_pressed(&self, input: T) -> bool {
        self.just_pressed.contains(&input)
    }

    /// Returns `true` if the input was released this frame.
    pub fn just_released(&self, input: T) -> bool {
        self.just_released.contains(&input)
    }

    /// Call when an input is pressed (from the event handler).
    pub(crate) fn press(&mut self, input: T) {
        if self.pressed.insert(input) {
            self.just_pressed.insert(input);
        }
    }

    /// Call when an input is released (from the event handler).
    pub(crate) fn release(&mut self, input: T) {
        if self.pressed.remove(&input) {
            self.just_released.insert(input);
        }
    }

    /// Clear per-frame state. Called at the end of each frame's update.
    pub(crate) fn clear_just(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }
}

impl<T: Eq + Hash + Copy> Default for Input<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_sets_pressed_and_just_pressed() {
        let mut input = Input::new();
        input.press(KeyCode::KeyW);
        assert!(input.pressed(KeyCode::KeyW));
        assert!(input.just_pressed(KeyCode::KeyW));
    }

    #[test]
    fn held_key_survives_clear_just() {
        let mut input = Input::new();
        input.press(KeyCode::ArrowUp);
        input.clear_just();
        assert!(input.pressed(KeyCode::ArrowUp));
        assert!(!input.just_pressed(KeyCode::ArrowUp));
    }

    #[test]
    fn repeat_press_is_not_just_pressed_again() {
        let mut input = Input::new();
        input.press(KeyCode::KeyA);
        input.clear_just();
        // OS key-repeat delivers Pressed again while still held.
        input.press(KeyCode::KeyA);
        assert!(!input.just_pressed(KeyCode::KeyA));
    }

    #[test]
    fn release_clears_pressed() {
        let mut input = Input::new();
        input.press(KeyCode::KeyS);
        input.release(KeyCode::KeyS);
        assert!(!input.pressed(KeyCode::KeyS));
        assert!(input.just_released(KeyCode::KeyS));
    }

    #[test]
    fn release_without_press_is_a_noop() {
        let mut input: Input<KeyCode> = Input::new();
        input.release(KeyCode::KeyZ);
        assert!(!input.just_released(KeyCode::KeyZ));
    }
}
