//! Listener errors.

/// The HTTP listener could not start or stopped abnormally.
#[derive(Debug, Clone)]
pub struct HttpError {
    /// Address involved, when the failure happened while binding
    pub address: Option<String>,
    /// Underlying I/O error text
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Binding `address` failed.
    ///
    /// ```
    /// use greeter_error::HttpError;
    ///
    /// let err = HttpError::bind("0.0.0.0:3000", "Address already in use");
    /// assert!(err.to_string().contains("Cannot listen on 0.0.0.0:3000"));
    /// ```
    #[track_caller]
    pub fn bind(address: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::at(Some(address.into()), reason.to_string())
    }

    /// The server loop returned an error after startup.
    #[track_caller]
    pub fn serve(reason: impl std::fmt::Display) -> Self {
        Self::at(None, reason.to_string())
    }

    #[track_caller]
    fn at(address: Option<String>, message: String) -> Self {
        let location = std::panic::Location::caller();
        Self {
            address,
            message,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.address {
            Some(address) => write!(f, "Cannot listen on {}: {}", address, self.message)?,
            None => write!(f, "Server stopped: {}", self.message)?,
        }
        write!(f, " ({}:{})", self.file, self.line)
    }
}

impl std::error::Error for HttpError {}
