use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompleteErrorKind {
    /// The assembled text still failed to parse after every repair step.
    /// Carries the assembled (invalid) output so the caller can decide
    /// whether to drop the chunk or surface it with a warning.
    #[error("completed text failed validation: {message}")]
    Validation { assembled: String, message: String },
    #[error("write error: {0}")]
    Write(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at position {position}")]
pub struct CompleteError {
    pub kind: CompleteErrorKind,
    pub position: usize,
}

impl CompleteError {
    pub fn new(kind: CompleteErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    pub(crate) fn write(err: std::io::Error) -> Self {
        Self::new(CompleteErrorKind::Write(err.to_string()), 0)
    }

    #[cfg(feature = "serde")]
    pub(crate) fn validation(assembled: String, err: &serde_json::Error) -> Self {
        let position = err.column();
        Self::new(
            CompleteErrorKind::Validation {
                assembled,
                message: err.to_string(),
            },
            position,
        )
    }
}
