//! Branch resolution errors.
//!
//! None of these abort a test run. The selector turns every variant into a
//! fail-open verdict and logs it.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that can occur while resolving the current branch name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("No git repository found from {}: {message}", start_dir.display())]
    RepositoryNotFound { start_dir: PathBuf, message: String },

    #[error("Unable to read current branch: {message}")]
    BranchRead { message: String },

    #[error("HEAD is detached; no branch is checked out")]
    DetachedHead,
}

impl ResolveError {
    /// Shorthand for a [`ResolveError::BranchRead`] with the given message.
    pub fn branch_read(message: impl Into<String>) -> Self {
        Self::BranchRead {
            message: message.into(),
        }
    }
}

impl ErrorCode for ResolveError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RepositoryNotFound { .. } => error_code::REPOSITORY_NOT_FOUND,
            Self::BranchRead { .. } => error_code::BRANCH_READ_ERROR,
            Self::DetachedHead => error_code::DETACHED_HEAD,
        }
    }
}
