use glam::IVec2;
use thiserror::Error;

/// Contract violations raised by the engine.
///
/// A push stopped by a wall is not an error; see [`crate::core::GameUpdate::Blocked`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("position ({}, {}) is outside the {width}x{height} grid", .position.x, .position.y)]
    OutOfBounds {
        position: IVec2,
        width: i32,
        height: i32,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl EngineError {
    pub fn invalid(message: impl Into<String>) -> Self {
        EngineError::InvalidInput(message.into())
    }
}
