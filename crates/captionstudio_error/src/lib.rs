//! Error types for the Caption Studio workspace.
//!
//! Every error struct records where it was created. Condition enums describe
//! what went wrong; [`CaptionStudioError`] aggregates them for callers that
//! just want `?` to work.

mod config;
mod generation;
mod json;
mod storage;
mod studio;

pub use config::{ConfigError, ConfigErrorKind};
pub use generation::{
    GENERATION_FAILED_MESSAGE, GenerationError, GenerationErrorKind, GenerationFailed,
};
pub use json::JsonError;
pub use storage::{StorageError, StorageErrorKind};
pub use studio::{StudioError, StudioErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum CaptionStudioErrorKind {
    /// Configuration error
    Config(ConfigError),
    /// Opaque generation failure (user-facing)
    GenerationFailed(GenerationFailed),
    /// JSON serialization/deserialization error
    Json(JsonError),
    /// Plan-state storage error
    Storage(StorageError),
    /// Request rejected before generation
    Studio(StudioError),
}

impl std::fmt::Display for CaptionStudioErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaptionStudioErrorKind::Config(e) => write!(f, "{}", e),
            CaptionStudioErrorKind::GenerationFailed(e) => write!(f, "{}", e),
            CaptionStudioErrorKind::Json(e) => write!(f, "{}", e),
            CaptionStudioErrorKind::Storage(e) => write!(f, "{}", e),
            CaptionStudioErrorKind::Studio(e) => write!(f, "{}", e),
        }
    }
}

/// Caption Studio error with kind discrimination.
#[derive(Debug)]
pub struct CaptionStudioError(Box<CaptionStudioErrorKind>);

impl CaptionStudioError {
    /// Create a new error from a kind.
    pub fn new(kind: CaptionStudioErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CaptionStudioErrorKind {
        &self.0
    }

    /// Message suitable for showing to an end user.
    ///
    /// Rejections and generation failures have fixed wording; anything else
    /// is an operator problem and gets the generic generation message.
    pub fn user_message(&self) -> String {
        match self.kind() {
            CaptionStudioErrorKind::Studio(e) => e.kind.to_string(),
            _ => GENERATION_FAILED_MESSAGE.to_string(),
        }
    }
}

impl std::fmt::Display for CaptionStudioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Caption Studio Error: {}", self.0)
    }
}

impl std::error::Error for CaptionStudioError {}

// Generic From implementation for any type that converts to CaptionStudioErrorKind
impl<T> From<T> for CaptionStudioError
where
    T: Into<CaptionStudioErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Caption Studio operations.
pub type CaptionStudioResult<T> = std::result::Result<T, CaptionStudioError>;
