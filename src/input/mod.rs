//! Input handling: platform-agnostic event types and the processor that
//! converts them into view commands.

/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into view commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::{InputProcessor, KeyBindings, KeyCommandTag};
