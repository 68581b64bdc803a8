//! Keyboard state with held and edge-triggered queries.
//!
//! `just_pressed` is set on the key-down transition only, so OS key repeat
//! does not retrigger a jump. The main loop clears edges with `end_frame`
//! after each simulated frame.

use std::collections::HashSet;
use winit::event::VirtualKeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Jump,
    Restart,
}

impl Key {
    pub fn from_keycode(keycode: VirtualKeyCode) -> Option<Self> {
        match keycode {
            VirtualKeyCode::Space => Some(Key::Jump),
            VirtualKeyCode::Return | VirtualKeyCode::NumpadEnter => Some(Key::Restart),
            _ => None,
        }
    }
}

#[derive(Default)]
pub struct InputState {
    held: HashSet<Key>,
    just_pressed: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        if self.held.insert(key) {
            self.just_pressed.insert(key);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn on_key(&mut self, keycode: VirtualKeyCode, pressed: bool) {
        if let Some(key) = Key::from_keycode(keycode) {
            if pressed {
                self.key_down(key);
            } else {
                self.key_up(key);
            }
        }
    }

    pub fn is_just_pressed(&self, key: Key) -> bool {
        self.just_pressed.contains(&key)
    }

    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
    }
}
