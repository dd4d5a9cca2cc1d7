//! Keyboard intents
//!
//! Keys are identified by their DOM `KeyboardEvent.key` names. Movement is a
//! held level; pause, mute and restart are edges latched until the next tick
//! takes them.

use std::collections::HashMap;

use crate::sim::TickInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    Pause,
    Mute,
    Restart,
}

/// Key name → intent table
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: HashMap<String, Intent>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut map = Self {
            bindings: HashMap::new(),
        };
        for key in ["ArrowLeft", "a", "A"] {
            map.bind(key, Intent::MoveLeft);
        }
        for key in ["ArrowRight", "d", "D"] {
            map.bind(key, Intent::MoveRight);
        }
        for key in ["p", "P", "Escape"] {
            map.bind(key, Intent::Pause);
        }
        for key in ["m", "M"] {
            map.bind(key, Intent::Mute);
        }
        for key in ["Enter", "r", "R", " "] {
            map.bind(key, Intent::Restart);
        }
        map
    }
}

impl KeyMap {
    pub fn bind(&mut self, key: &str, intent: Intent) {
        self.bindings.insert(key.to_string(), intent);
    }

    pub fn lookup(&self, key: &str) -> Option<Intent> {
        self.bindings.get(key).copied()
    }
}

/// Accumulated input between ticks
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keymap: KeyMap,
    left: bool,
    right: bool,
    pause: bool,
    mute: bool,
    restart: bool,
}

impl InputState {
    pub fn new(keymap: KeyMap) -> Self {
        Self {
            keymap,
            ..Default::default()
        }
    }

    /// Returns true if the key is bound (the host should swallow it)
    pub fn key_down(&mut self, key: &str, repeat: bool) -> bool {
        let Some(intent) = self.keymap.lookup(key) else {
            return false;
        };
        match intent {
            Intent::MoveLeft => self.left = true,
            Intent::MoveRight => self.right = true,
            // Auto-repeat must not re-trigger edges
            _ if repeat => {}
            Intent::Pause => self.pause = true,
            Intent::Mute => self.mute = true,
            Intent::Restart => self.restart = true,
        }
        true
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        match self.keymap.lookup(key) {
            Some(Intent::MoveLeft) => self.left = false,
            Some(Intent::MoveRight) => self.right = false,
            Some(_) => {}
            None => return false,
        }
        true
    }

    /// Window lost focus: release held keys
    pub fn release_all(&mut self) {
        self.left = false;
        self.right = false;
    }

    pub fn request_pause(&mut self) {
        self.pause = true;
    }

    /// Build this tick's input and clear the latched edges
    pub fn take(&mut self) -> TickInput {
        let input = TickInput {
            move_left: self.left,
            move_right: self.right,
            toggle_pause: self.pause,
            toggle_mute: self.mute,
            restart: self.restart,
            autopilot: false,
        };
        self.pause = false;
        self.mute = false;
        self.restart = false;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let map = KeyMap::default();
        assert_eq!(map.lookup("ArrowLeft"), Some(Intent::MoveLeft));
        assert_eq!(map.lookup("D"), Some(Intent::MoveRight));
        assert_eq!(map.lookup("Escape"), Some(Intent::Pause));
        assert_eq!(map.lookup("m"), Some(Intent::Mute));
        assert_eq!(map.lookup("Enter"), Some(Intent::Restart));
        assert_eq!(map.lookup("q"), None);
    }

    #[test]
    fn test_movement_is_held() {
        let mut input = InputState::default();
        assert!(input.key_down("a", false));
        assert!(input.take().move_left);
        assert!(input.take().move_left);
        input.key_up("a");
        assert!(!input.take().move_left);
    }

    #[test]
    fn test_edges_fire_once() {
        let mut input = InputState::default();
        input.key_down("p", false);
        input.key_down("m", false);
        let first = input.take();
        assert!(first.toggle_pause && first.toggle_mute);
        let second = input.take();
        assert!(!second.toggle_pause && !second.toggle_mute);
    }

    #[test]
    fn test_repeat_does_not_retrigger() {
        let mut input = InputState::default();
        input.key_down("p", true);
        assert!(!input.take().toggle_pause);
        input.key_down("ArrowRight", true);
        assert!(input.take().move_right);
    }

    #[test]
    fn test_unbound_keys_pass_through() {
        let mut input = InputState::default();
        assert!(!input.key_down("F5", false));
        assert!(!input.key_up("F5"));
    }

    #[test]
    fn test_release_all() {
        let mut input = InputState::default();
        input.key_down("ArrowLeft", false);
        input.key_down("ArrowRight", false);
        input.release_all();
        let tick = input.take();
        assert!(!tick.move_left && !tick.move_right);
    }
}
