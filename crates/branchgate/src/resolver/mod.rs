//! Branch resolution: configuration override first, then the git repository.

pub mod cached;
pub mod git;
pub mod resolve;

pub use cached::CachedBranchSource;
pub use git::GitBranchSource;
pub use resolve::resolve_branch;

use branchgate_core::{BranchSource, GateConfig};

/// Build the git-backed source described by `config`, cached when enabled.
pub fn git_source(config: &GateConfig) -> Box<dyn BranchSource> {
    let git = GitBranchSource::from_config(config);
    if config.effective_cache_branch() {
        Box::new(CachedBranchSource::new(git))
    } else {
        Box::new(git)
    }
}
