/// Error types for scene operations
use std::fmt;

/// Failures surfaced by scene operations.
///
/// Degenerate per-object math (NaN/Infinity from a zero-sized viewport)
/// is deliberately not represented here: it propagates as a visual
/// artifact so the animation never stops.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    /// An operation was requested before the scene was constructed.
    Uninitialized,
    /// A resize or initialization carried non-positive dimensions.
    InvalidViewport { width: f64, height: f64 },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::Uninitialized => {
                write!(f, "scene operation requested before INIT")
            }
            SceneError::InvalidViewport { width, height } => {
                write!(f, "invalid viewport dimensions {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for SceneError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            SceneError::Uninitialized.to_string(),
            "scene operation requested before INIT"
        );
        let err = SceneError::InvalidViewport {
            width: 0.0,
            height: 300.0,
        };
        assert_eq!(err.to_string(), "invalid viewport dimensions 0x300");
    }
}
