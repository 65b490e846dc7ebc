//! Plan-state storage error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// I/O error while reading or writing the state file
    #[display("I/O error: {}", _0)]
    Io(String),
    /// State file exists but could not be decoded
    #[display("Corrupt state file: {}", _0)]
    Corrupt(String),
    /// No usable location for the state file
    #[display("No data directory available for {}", _0)]
    NoDataDir(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use captionstudio_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::Corrupt("expected value".to_string()));
/// assert!(format!("{}", err).contains("Corrupt state file"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
