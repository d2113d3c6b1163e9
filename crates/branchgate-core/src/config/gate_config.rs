//! Branch gate configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CACHE_BRANCH;
use crate::types::BranchSet;

/// Configuration consumed by the selector.
///
/// Passed explicitly into every decision; nothing in the decision path reads
/// process-wide state on its own.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GateConfig {
    /// Branches on which every test runs, regardless of group labels.
    pub it_branches: BranchSet,
    /// Branch name to use instead of reading the repository.
    pub current_branch: Option<String>,
    /// Directory repository discovery starts from. Default: working directory.
    pub start_dir: Option<PathBuf>,
    /// Cache the resolved branch for the rest of the process. Default: true.
    pub cache_branch: Option<bool>,
}

impl GateConfig {
    /// Returns the branch override, ignoring an empty value.
    pub fn effective_current_branch(&self) -> Option<&str> {
        self.current_branch.as_deref().filter(|name| !name.is_empty())
    }

    /// Returns the discovery start directory, if one is configured.
    pub fn effective_start_dir(&self) -> Option<&Path> {
        self.start_dir.as_deref()
    }

    /// Returns whether branch caching is on, defaulting to true.
    pub fn effective_cache_branch(&self) -> bool {
        self.cache_branch.unwrap_or(DEFAULT_CACHE_BRANCH)
    }

    /// Builder: set the it-branches.
    pub fn with_it_branches<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.it_branches = names.into_iter().collect();
        self
    }

    /// Builder: set the branch override.
    pub fn with_current_branch(mut self, name: impl Into<String>) -> Self {
        self.current_branch = Some(name.into());
        self
    }

    /// Builder: set the discovery start directory.
    pub fn with_start_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.start_dir = Some(dir.into());
        self
    }
}
