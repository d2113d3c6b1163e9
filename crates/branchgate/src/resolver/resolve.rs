//! Branch resolution in priority order.

use branchgate_core::{BranchContext, BranchSource, GateConfig};

/// Resolve the current branch.
///
/// A non-empty `current_branch` in `config` wins and the repository is not
/// consulted at all. Otherwise `source` is asked. Failures come back as
/// [`BranchContext::Unavailable`], never as a panic.
pub fn resolve_branch<S>(config: &GateConfig, source: &S) -> BranchContext
where
    S: BranchSource + ?Sized,
{
    if let Some(name) = config.effective_current_branch() {
        tracing::debug!(branch = name, "using configured branch; repository not inspected");
        return BranchContext::from_config(name);
    }
    BranchContext::from_repository(source.current_branch())
}
