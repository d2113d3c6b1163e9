//! BranchContext — the outcome of one branch resolution.

use std::fmt;

use crate::errors::ResolveError;

/// Where a resolved branch name came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchOrigin {
    /// The `current_branch` configuration override.
    Config,
    /// The `HEAD` of the enclosing git repository.
    Repository,
}

impl BranchOrigin {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Repository => "repository",
        }
    }
}

impl fmt::Display for BranchOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved branch name, or the reason it is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchContext {
    Resolved { name: String, origin: BranchOrigin },
    Unavailable { error: ResolveError },
}

impl BranchContext {
    pub fn from_config(name: impl Into<String>) -> Self {
        Self::Resolved {
            name: name.into(),
            origin: BranchOrigin::Config,
        }
    }

    /// Wrap the result of a repository read.
    pub fn from_repository(result: Result<String, ResolveError>) -> Self {
        match result {
            Ok(name) => Self::Resolved {
                name,
                origin: BranchOrigin::Repository,
            },
            Err(error) => Self::Unavailable { error },
        }
    }

    /// The branch name, if resolution succeeded.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Resolved { name, .. } => Some(name),
            Self::Unavailable { .. } => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }
}
