use thiserror::Error;

/// Convenient alias for fallible results returned by the mediator surface.
pub type Result<T> = std::result::Result<T, HrError>;

/// Error type covering the failure cases a caller of the mediator can see.
#[derive(Debug, Error)]
pub enum HrError {
    /// Raised when a record fails validation before any backend is touched.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Raised when an update targets an identifier no backend holds.
    #[error("employee with id '{0}' not found in any system")]
    NotFound(String),

    /// Raised when a write fan-out ends with no backend accepting it.
    #[error("no system accepted the write ({attempted} backends attempted)")]
    AllWritesRejected {
        /// Number of backends the write was offered to.
        attempted: usize,
    },

    /// Raised when JSON serialization of CLI output fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation failures for a single employee record. Checked on the write
/// path only; records already resident in a backend are trusted as-is.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is absent or empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The email does not match the expected `local@domain.tld` shape.
    #[error("invalid email format: '{0}'")]
    InvalidEmailFormat(String),

    /// The salary is negative or not a finite number.
    #[error("invalid salary: {0}")]
    InvalidSalary(f64),

    /// The start date is not a valid ISO-8601 calendar date.
    #[error("invalid start date: '{0}'")]
    InvalidDate(String),
}

/// Failures local to one backend adapter. These never cross the mediator
/// boundary as errors; the mediator logs them with the adapter identity and
/// folds them into the per-leg outcome counting.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// A native row could not be translated into the common record model.
    #[error("malformed native row: {0}")]
    MalformedRow(String),

    /// The backend refused the write.
    #[error("write rejected: {0}")]
    Rejected(String),
}
