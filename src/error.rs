use thiserror::Error;

/// Error type for command execution
///
/// Every failure surfaces as a single generic execution error carrying
/// descriptive text: either the external tool's captured output, or the
/// failing command plus its output on the sequential path.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Execution error: {0}")]
    Execution(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an execution error
    pub fn execution<S: Into<String>>(msg: S) -> Self {
        Self::Execution(msg.into())
    }
}

/// Convenient result type for this crate
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_execution_helper() {
        let err = Error::execution("parallel exited non-zero");
        match err {
            Error::Execution(msg) => assert_eq!(msg, "parallel exited non-zero"),
            _ => panic!("Expected Execution error"),
        }
    }

    #[test]
    fn test_error_display_messages() {
        let err = Error::Execution("Failed to run: false".to_string());
        assert_eq!(err.to_string(), "Execution error: Failed to run: false");
    }

    #[test]
    fn test_io_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "job file missing");
        let err: Error = io_error.into();
        match err {
            Error::Io(_) => {}
            _ => panic!("Expected Io error"),
        }
    }
}
