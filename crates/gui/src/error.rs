//! Error types for scene operations

use thiserror::Error;

/// Recoverable errors raised by scene, factory and link operations.
///
/// None of these abort the render loop; the session logs them and carries on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    /// A third object was offered to a registry that holds at most `capacity`.
    #[error("scene already holds {capacity} objects")]
    CapacityExceeded { capacity: usize },

    /// Connect with fewer than two objects, to itself, or to an unknown object.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// A primitive dimension that is not a finite number greater than zero.
    #[error("invalid parameter `{name}`: {value} (must be a finite number > 0)")]
    InvalidParameter { name: &'static str, value: f64 },
}

pub type SceneResult<T> = Result<T, SceneError>;
