//! Keyboard input adapter
//!
//! Movement keys are level-triggered: they hold a flag until released. Fire is
//! edge-triggered: every key-down (including key-repeat) raises a one-shot
//! request that is consumed by the next tick.

use crate::sim::TickInput;

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Fire,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            " " => Some(Key::Fire),
            _ => None,
        }
    }
}

/// Accumulated input between two frames
#[derive(Debug, Clone, Default)]
pub struct InputState {
    left: bool,
    right: bool,
    fire: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key-down event. Returns true if the key is one of ours.
    pub fn key_down(&mut self, key: &str) -> bool {
        match Key::from_dom(key) {
            Some(Key::Left) => self.left = true,
            Some(Key::Right) => self.right = true,
            Some(Key::Fire) => self.fire = true,
            None => return false,
        }
        true
    }

    /// Handle a key-up event. Returns true if the key is one of ours.
    pub fn key_up(&mut self, key: &str) -> bool {
        match Key::from_dom(key) {
            Some(Key::Left) => self.left = false,
            Some(Key::Right) => self.right = false,
            Some(Key::Fire) => {}
            None => return false,
        }
        true
    }

    /// Snapshot for the next tick; clears the one-shot fire request
    pub fn take_tick_input(&mut self) -> TickInput {
        let input = TickInput {
            move_left: self.left,
            move_right: self.right,
            fire: self.fire,
        };
        self.fire = false;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from_dom("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_dom("ArrowRight"), Some(Key::Right));
        assert_eq!(Key::from_dom(" "), Some(Key::Fire));
        assert_eq!(Key::from_dom("Enter"), None);
        assert_eq!(Key::from_dom("a"), None);
    }

    #[test]
    fn test_movement_is_level_triggered() {
        let mut input = InputState::new();
        assert!(input.key_down("ArrowLeft"));
        assert!(input.take_tick_input().move_left);
        // Still held on the next frame
        assert!(input.take_tick_input().move_left);
        assert!(input.key_up("ArrowLeft"));
        assert!(!input.take_tick_input().move_left);
    }

    #[test]
    fn test_fire_is_one_shot() {
        let mut input = InputState::new();
        input.key_down(" ");
        input.key_down(" ");
        let first = input.take_tick_input();
        assert!(first.fire);
        assert!(!input.take_tick_input().fire);
        // Releasing space does nothing to the request
        input.key_down(" ");
        input.key_up(" ");
        assert!(input.take_tick_input().fire);
    }

    #[test]
    fn test_both_directions_held() {
        let mut input = InputState::new();
        input.key_down("ArrowLeft");
        input.key_down("ArrowRight");
        let t = input.take_tick_input();
        assert!(t.move_left && t.move_right);
        input.key_up("ArrowRight");
        let t = input.take_tick_input();
        assert!(t.move_left && !t.move_right);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut input = InputState::new();
        assert!(!input.key_down("Shift"));
        assert!(!input.key_up("Shift"));
        assert_eq!(input.take_tick_input(), TickInput::default());
    }
}
