//! Request validation errors.

/// The incoming request cannot be processed at all.
///
/// This is the only error class surfaced to HTTP callers (as `400`).
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Caller-facing message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// The `prompt` field was missing or not a string.
    #[track_caller]
    pub fn prompt_required() -> Self {
        Self::new("prompt string required")
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Validation Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for ValidationError {}
