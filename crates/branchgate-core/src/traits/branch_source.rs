//! BranchSource trait — the narrow view of version control the selector needs.
//!
//! The git-backed implementation lives in the `branchgate` crate. Tests plug
//! in fakes without touching real repository metadata.

use std::sync::Arc;

use crate::errors::ResolveError;

/// Something that can name the currently checked-out branch.
pub trait BranchSource: Send + Sync {
    /// Returns the name of the active branch, or why it could not be read.
    fn current_branch(&self) -> Result<String, ResolveError>;
}

impl<S: BranchSource + ?Sized> BranchSource for &S {
    fn current_branch(&self) -> Result<String, ResolveError> {
        (**self).current_branch()
    }
}

impl<S: BranchSource + ?Sized> BranchSource for Box<S> {
    fn current_branch(&self) -> Result<String, ResolveError> {
        (**self).current_branch()
    }
}

impl<S: BranchSource + ?Sized> BranchSource for Arc<S> {
    fn current_branch(&self) -> Result<String, ResolveError> {
        (**self).current_branch()
    }
}
