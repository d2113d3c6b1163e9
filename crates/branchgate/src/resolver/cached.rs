//! Process-wide branch cache.

use std::sync::OnceLock;

use branchgate_core::{BranchSource, ResolveError};

/// Wraps a source and remembers its first successful answer.
///
/// The checked-out branch does not change during a test run, so later calls
/// are served from memory. Failures are not cached; the next call asks the
/// inner source again.
#[derive(Debug)]
pub struct CachedBranchSource<S> {
    inner: S,
    cached: OnceLock<String>,
}

impl<S> CachedBranchSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cached: OnceLock::new(),
        }
    }

    /// The cached branch name, if a resolution has succeeded.
    pub fn cached(&self) -> Option<&str> {
        self.cached.get().map(String::as_str)
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: BranchSource> BranchSource for CachedBranchSource<S> {
    fn current_branch(&self) -> Result<String, ResolveError> {
        if let Some(name) = self.cached.get() {
            return Ok(name.clone());
        }
        let name = self.inner.current_branch()?;
        Ok(self.cached.get_or_init(|| name).clone())
    }
}
