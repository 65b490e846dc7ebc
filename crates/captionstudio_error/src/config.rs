//! Configuration error types.

/// Configuration failures detected at startup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConfigErrorKind {
    /// None of the accepted API key variables is set
    MissingApiKey(Vec<&'static str>),
    /// Settings sources could not be read or merged
    Load(String),
    /// A setting holds a value outside its valid range
    Invalid {
        /// Dotted settings key
        key: String,
        /// What is wrong with it
        message: String,
    },
    /// HTTP client could not be constructed
    HttpClient(String),
}

impl std::fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigErrorKind::MissingApiKey(vars) => {
                write!(f, "API key not set (checked {})", vars.join(", "))
            }
            ConfigErrorKind::Load(msg) => write!(f, "Failed to load settings: {}", msg),
            ConfigErrorKind::Invalid { key, message } => {
                write!(f, "Invalid setting '{}': {}", key, message)
            }
            ConfigErrorKind::HttpClient(msg) => {
                write!(f, "Failed to build HTTP client: {}", msg)
            }
        }
    }
}

/// Configuration error with source location.
///
/// Configuration errors are fatal: they are raised while the generator is
/// being assembled, never per call.
///
/// # Examples
///
/// ```
/// use captionstudio_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::MissingApiKey(vec!["GEMINI_API_KEY", "API_KEY"]));
/// assert!(format!("{}", err).contains("GEMINI_API_KEY, API_KEY"));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// What went wrong
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError at the current location.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Configuration Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ConfigError {}
