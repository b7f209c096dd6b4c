//! Crate-level error types.

use std::fmt;

use crate::gpu::render_context::RenderContextError;

/// Errors produced by the campus-view crate.
///
/// Camera/controls handles that are missing at call time are not errors:
/// commands report [`CommandOutcome::Ignored`](crate::CommandOutcome) and
/// leave state untouched. Non-positive tween durations are likewise not
/// errors; they complete instantly.
#[derive(Debug)]
pub enum ViewError {
    /// A focus or floor request named a target outside the known set.
    UnknownTarget(String),
    /// The command is not supported by the active layout.
    UnsupportedCommand(&'static str),
    /// A layout name did not match any known layout.
    UnknownLayout(String),
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTarget(name) => write!(f, "unknown target: {name}"),
            Self::UnsupportedCommand(cmd) => {
                write!(f, "command not supported by this layout: {cmd}")
            }
            Self::UnknownLayout(name) => write!(
                f,
                "unknown layout: {name} (expected campus, floors or boxes)"
            ),
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for ViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for ViewError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for ViewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_target_names_the_label() {
        let err = ViewError::UnknownTarget("box-3".into());
        assert_eq!(err.to_string(), "unknown target: box-3");
    }

    #[test]
    fn io_error_exposes_source() {
        use std::error::Error;
        let err: ViewError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.source().is_some());
        assert!(ViewError::OptionsParse("bad".into()).source().is_none());
    }
}
