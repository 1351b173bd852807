use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct StoryError {
    pub code: String,
    pub message: String,
}

impl StoryError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn graph_invalid(violations: &[String]) -> Self {
        Self::new(
            "GRAPH_INVALID",
            format!("scene graph validation failed:\n  - {}", violations.join("\n  - ")),
        )
    }
}
