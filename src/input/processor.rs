//! Converts raw platform events into view commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! drag detection, modifier keys) and the key-binding map. It is the only
//! thing that sits between raw window events and
//! [`ViewEngine::execute`](crate::ViewEngine::execute).

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::event::{InputEvent, MouseButton};
use crate::engine::ViewCommand;

/// Cursor travel (physical pixels) after which a press counts as a drag
/// rather than a click.
const DRAG_THRESHOLD: f32 = 4.0;

/// Maps physical key strings to [`ViewCommand`] variants.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyR"`, `"Digit1"`, `"Escape"`, etc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: HashMap<String, KeyCommandTag>,
}

/// Serializable tag for the parameterless commands that can be key-bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Animate back to the overview pose.
    ResetCamera,
    /// Flip the interior reveal toggle.
    ToggleElements,
    /// Focus the next entity.
    CycleFocus,
    /// Zoom to the first floor.
    Floor1,
    /// Zoom to the second floor.
    Floor2,
    /// Zoom to the third floor.
    Floor3,
    /// Zoom to the fourth floor.
    Floor4,
    /// Zoom to the fifth floor.
    Floor5,
}

impl KeyCommandTag {
    fn to_command(self) -> ViewCommand {
        match self {
            Self::ResetCamera => ViewCommand::ResetCamera,
            Self::ToggleElements => ViewCommand::ToggleElements,
            Self::CycleFocus => ViewCommand::CycleFocus,
            Self::Floor1 => ViewCommand::SelectFloor(0),
            Self::Floor2 => ViewCommand::SelectFloor(1),
            Self::Floor3 => ViewCommand::SelectFloor(2),
            Self::Floor4 => ViewCommand::SelectFloor(3),
            Self::Floor5 => ViewCommand::SelectFloor(4),
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyR".into(), KeyCommandTag::ResetCamera),
            ("Escape".into(), KeyCommandTag::ResetCamera),
            ("KeyT".into(), KeyCommandTag::ToggleElements),
            ("Tab".into(), KeyCommandTag::CycleFocus),
            ("Digit1".into(), KeyCommandTag::Floor1),
            ("Digit2".into(), KeyCommandTag::Floor2),
            ("Digit3".into(), KeyCommandTag::Floor3),
            ("Digit4".into(), KeyCommandTag::Floor4),
            ("Digit5".into(), KeyCommandTag::Floor5),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<ViewCommand> {
        self.bindings.get(key).map(|tag| tag.to_command())
    }

    /// Bind `key` to `tag`, replacing any previous binding for that key.
    pub fn bind(&mut self, key: impl Into<String>, tag: KeyCommandTag) {
        let _ = self.bindings.insert(key.into(), tag);
    }
}

/// Converts raw window events into [`ViewCommand`]s.
///
/// Left-drag orbits, right-drag or shift+left-drag pans, the wheel zooms,
/// and a left press released without dragging becomes a
/// [`ViewCommand::Pick`] at the cursor.
pub struct InputProcessor {
    mouse_pos: Vec2,
    /// Cursor position at the last left/right press.
    press_pos: Option<Vec2>,
    left_pressed: bool,
    right_pressed: bool,
    /// Set once the cursor travels past [`DRAG_THRESHOLD`] while pressed.
    dragged: bool,
    shift_pressed: bool,
    key_bindings: KeyBindings,
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeyBindings::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            mouse_pos: Vec2::ZERO,
            press_pos: None,
            left_pressed: false,
            right_pressed: false,
            dragged: false,
            shift_pressed: false,
            key_bindings,
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> Vec2 {
        self.mouse_pos
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<ViewCommand> {
        self.key_bindings.lookup(key)
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<ViewCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Scroll { delta } => Some(ViewCommand::Zoom { delta }),
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                None
            }
        }
    }

    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<ViewCommand> {
        let pos = Vec2::new(x, y);
        let delta = pos - self.mouse_pos;
        self.mouse_pos = pos;

        if let Some(press) = self.press_pos {
            if pos.distance(press) > DRAG_THRESHOLD {
                self.dragged = true;
            }
        }

        if self.right_pressed || (self.left_pressed && self.shift_pressed) {
            Some(ViewCommand::PanCamera { delta })
        } else if self.left_pressed {
            Some(ViewCommand::RotateCamera { delta })
        } else {
            None
        }
    }

    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<ViewCommand> {
        match (button, pressed) {
            (MouseButton::Left, true) => {
                self.left_pressed = true;
                self.begin_press();
                None
            }
            (MouseButton::Left, false) => {
                let was_click = self.left_pressed && !self.dragged;
                self.left_pressed = false;
                self.end_press();
                was_click.then_some(ViewCommand::Pick {
                    x: self.mouse_pos.x,
                    y: self.mouse_pos.y,
                })
            }
            (MouseButton::Right, true) => {
                self.right_pressed = true;
                self.begin_press();
                None
            }
            (MouseButton::Right, false) => {
                self.right_pressed = false;
                self.end_press();
                None
            }
            (MouseButton::Middle, _) => None,
        }
    }

    fn begin_press(&mut self) {
        self.press_pos = Some(self.mouse_pos);
        self.dragged = false;
    }

    fn end_press(&mut self) {
        if !self.left_pressed && !self.right_pressed {
            self.press_pos = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(p: &mut InputProcessor, button: MouseButton) -> Option<ViewCommand> {
        p.handle_event(InputEvent::MouseButton {
            button,
            pressed: true,
        })
    }

    fn release(
        p: &mut InputProcessor,
        button: MouseButton,
    ) -> Option<ViewCommand> {
        p.handle_event(InputEvent::MouseButton {
            button,
            pressed: false,
        })
    }

    fn move_to(p: &mut InputProcessor, x: f32, y: f32) -> Option<ViewCommand> {
        p.handle_event(InputEvent::CursorMoved { x, y })
    }

    #[test]
    fn click_without_drag_picks() {
        let mut p = InputProcessor::new();
        let _ = move_to(&mut p, 100.0, 50.0);
        assert_eq!(press(&mut p, MouseButton::Left), None);
        let _ = move_to(&mut p, 101.0, 51.0);
        assert_eq!(
            release(&mut p, MouseButton::Left),
            Some(ViewCommand::Pick { x: 101.0, y: 51.0 })
        );
    }

    #[test]
    fn drag_rotates_and_suppresses_pick() {
        let mut p = InputProcessor::new();
        let _ = move_to(&mut p, 10.0, 10.0);
        let _ = press(&mut p, MouseButton::Left);
        assert_eq!(
            move_to(&mut p, 30.0, 15.0),
            Some(ViewCommand::RotateCamera {
                delta: Vec2::new(20.0, 5.0)
            })
        );
        assert_eq!(release(&mut p, MouseButton::Left), None);
    }

    #[test]
    fn shift_drag_and_right_drag_pan() {
        let mut p = InputProcessor::new();
        let _ = p.handle_event(InputEvent::ModifiersChanged { shift: true });
        let _ = press(&mut p, MouseButton::Left);
        assert!(matches!(
            move_to(&mut p, 5.0, 0.0),
            Some(ViewCommand::PanCamera { .. })
        ));
        let _ = release(&mut p, MouseButton::Left);
        let _ = p.handle_event(InputEvent::ModifiersChanged { shift: false });

        let _ = press(&mut p, MouseButton::Right);
        assert!(matches!(
            move_to(&mut p, 9.0, 3.0),
            Some(ViewCommand::PanCamera { .. })
        ));
        assert_eq!(release(&mut p, MouseButton::Right), None);
    }

    #[test]
    fn hover_produces_nothing() {
        let mut p = InputProcessor::new();
        assert_eq!(move_to(&mut p, 3.0, 4.0), None);
    }

    #[test]
    fn scroll_zooms() {
        let mut p = InputProcessor::new();
        assert_eq!(
            p.handle_event(InputEvent::Scroll { delta: 1.5 }),
            Some(ViewCommand::Zoom { delta: 1.5 })
        );
    }

    #[test]
    fn rebinding_replaces_previous_action() {
        let mut bindings = KeyBindings::default();
        bindings.bind("KeyT", KeyCommandTag::CycleFocus);
        let p = InputProcessor::with_key_bindings(bindings);
        assert_eq!(p.handle_key_press("KeyT"), Some(ViewCommand::CycleFocus));
        assert_eq!(
            p.handle_key_press("Escape"),
            Some(ViewCommand::ResetCamera)
        );
    }
}
