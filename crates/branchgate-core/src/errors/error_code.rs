//! ErrorCode trait for structured log fields.

/// Trait giving every branchgate error a stable code string.
/// The code is attached to log events as the `error_code` field.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "DETACHED_HEAD").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted log string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const REPOSITORY_NOT_FOUND: &str = "REPOSITORY_NOT_FOUND";
pub const BRANCH_READ_ERROR: &str = "BRANCH_READ_ERROR";
pub const DETACHED_HEAD: &str = "DETACHED_HEAD";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
