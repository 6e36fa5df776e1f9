/// Structured error types for dreamlog-core library.
///
/// Uses `thiserror` for better API surface and error composition.
/// The binary crate (dreamlog-cli) can still use `anyhow` for convenience,
/// but library consumers get structured, composable errors.

use thiserror::Error;

/// Main error type for dreamlog-core operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// A date field did not match the expected format
    #[error("Invalid date '{value}': expected {expected}")]
    InvalidDate { value: String, expected: &'static str },
}

/// Result type alias for dreamlog-core operations
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Create an invalid date error
    pub fn invalid_date(value: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidDate {
            value: value.into(),
            expected,
        }
    }
}
