//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a mouse
//! gesture or a programmatic call, is represented as a `ViewCommand`.
//! Consumers construct commands and pass them to
//! [`ViewEngine::execute`](super::ViewEngine::execute).

use glam::Vec2;

use crate::focus::Transition;

/// A single user-level operation on the viewer.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCommand {
    /// Animate back to the overview pose, releasing any focus.
    ResetCamera,
    /// Flip the interior reveal toggle.
    ToggleElements,
    /// Focus the entity with this label.
    Focus(String),
    /// Focus the next entity; after the last one, return to the overview.
    CycleFocus,
    /// Zoom to floor `n` (0 = bottom). Floors layout only.
    SelectFloor(usize),
    /// Orbit by a cursor delta in pixels.
    RotateCamera {
        /// Cursor travel since the last event.
        delta: Vec2,
    },
    /// Pan by a cursor delta in pixels.
    PanCamera {
        /// Cursor travel since the last event.
        delta: Vec2,
    },
    /// Dolly toward (positive) or away from the target.
    Zoom {
        /// Scroll amount.
        delta: f32,
    },
    /// Click at a cursor position in physical pixels.
    Pick {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
}

impl ViewCommand {
    /// Short name for logs and errors.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::ResetCamera => "reset camera",
            Self::ToggleElements => "toggle elements",
            Self::Focus(_) => "focus",
            Self::CycleFocus => "cycle focus",
            Self::SelectFloor(_) => "select floor",
            Self::RotateCamera { .. } => "rotate camera",
            Self::PanCamera { .. } => "pan camera",
            Self::Zoom { .. } => "zoom",
            Self::Pick { .. } => "pick",
        }
    }
}

/// What executing a command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// State changed or a camera move started.
    Applied,
    /// The request matched the current state.
    Unchanged,
    /// Nothing to act on: no camera, a camera move in flight, or a click
    /// that hit nothing focusable.
    Ignored,
}

impl<K> From<Transition<K>> for CommandOutcome {
    fn from(transition: Transition<K>) -> Self {
        match transition {
            Transition::Started | Transition::Settled(_) => Self::Applied,
            Transition::Unchanged => Self::Unchanged,
            Transition::RigUnavailable => Self::Ignored,
        }
    }
}
