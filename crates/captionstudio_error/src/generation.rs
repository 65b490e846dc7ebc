//! Generation error types and the opaque boundary failure.

/// Message shown to end users when a generation fails for any reason.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate content from AI.";

/// Conditions under which a call to the generation service can fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GenerationErrorKind {
    /// The outbound request could not be sent or the body could not be read
    Transport(String),
    /// The service answered with a non-success status
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Response body or reason phrase
        message: String,
    },
    /// The response body does not satisfy the requested schema
    MalformedResponse(String),
}

impl std::fmt::Display for GenerationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationErrorKind::Transport(msg) => write!(f, "Transport failure: {}", msg),
            GenerationErrorKind::HttpStatus {
                status_code,
                message,
            } => write!(f, "HTTP {} error: {}", status_code, message),
            GenerationErrorKind::MalformedResponse(msg) => {
                write!(f, "Malformed response: {}", msg)
            }
        }
    }
}

impl GenerationErrorKind {
    /// True for failures of the exchange itself (network or status).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            GenerationErrorKind::Transport(_) | GenerationErrorKind::HttpStatus { .. }
        )
    }

    /// True when the service answered but the payload broke the contract.
    pub fn is_malformed(&self) -> bool {
        matches!(self, GenerationErrorKind::MalformedResponse(_))
    }
}

/// Detailed generation error with source location tracking.
///
/// These carry operator-facing detail and are logged, never shown to end
/// users. The generator collapses them into [`GenerationFailed`].
///
/// # Examples
///
/// ```
/// use captionstudio_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::MalformedResponse(
///     "missing field `hashtags`".to_string(),
/// ));
/// assert!(err.kind.is_malformed());
/// assert!(format!("{}", err).contains("hashtags"));
/// ```
#[derive(Debug, Clone)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Generation Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for GenerationError {}

/// Opaque failure returned across the generator boundary.
///
/// Displays only [`GENERATION_FAILED_MESSAGE`]; the underlying cause has
/// already been logged where it was caught.
///
/// # Examples
///
/// ```
/// use captionstudio_error::{GenerationFailed, GENERATION_FAILED_MESSAGE};
///
/// let err = GenerationFailed::new();
/// assert_eq!(err.to_string(), GENERATION_FAILED_MESSAGE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationFailed {
    /// Line number where the failure was signaled
    pub line: u32,
    /// File where the failure was signaled
    pub file: &'static str,
}

impl GenerationFailed {
    /// Signal a generation failure at the current location.
    #[track_caller]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let location = std::panic::Location::caller();
        Self {
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for GenerationFailed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(GENERATION_FAILED_MESSAGE)
    }
}

impl std::error::Error for GenerationFailed {}
