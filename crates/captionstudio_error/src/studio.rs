//! Caller-side rejection types.

/// Reasons a generation is refused before any request is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StudioErrorKind {
    /// Topic is empty or whitespace
    EmptyTopic,
    /// Free plan has used its daily allowance
    QuotaExhausted {
        /// Generations already used today
        used: u32,
        /// Daily allowance
        limit: u32,
    },
}

impl std::fmt::Display for StudioErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StudioErrorKind::EmptyTopic => {
                write!(f, "Please enter a topic to generate captions.")
            }
            StudioErrorKind::QuotaExhausted { used, limit } => write!(
                f,
                "Daily limit reached ({} of {} generations used). Upgrade to Pro for unlimited captions.",
                used, limit
            ),
        }
    }
}

/// Error type for requests rejected by the caller.
///
/// # Examples
///
/// ```
/// use captionstudio_error::{StudioError, StudioErrorKind};
///
/// let err = StudioError::new(StudioErrorKind::QuotaExhausted { used: 10, limit: 10 });
/// assert!(format!("{}", err).contains("10 of 10"));
/// ```
#[derive(Debug, Clone)]
pub struct StudioError {
    /// The specific error condition
    pub kind: StudioErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StudioError {
    /// Create a new StudioError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StudioErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for StudioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Studio Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for StudioError {}
