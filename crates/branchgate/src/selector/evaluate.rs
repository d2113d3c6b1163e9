//! The selection decision.

use branchgate_core::{BranchContext, BranchSource, ErrorCode, GateConfig, TestDescriptor};

use super::verdict::{MatchSource, Verdict};
use crate::resolver::resolve_branch;

/// Decide whether `test` runs on the current branch.
///
/// 1. A test disabled by its own declaration stays disabled and no branch is
///    resolved.
/// 2. If the branch cannot be resolved the test keeps its enabled state.
/// 3. Otherwise it runs only if the branch is one of its group labels or one
///    of `config.it_branches`.
pub fn evaluate<S>(test: &TestDescriptor, config: &GateConfig, source: &S) -> Verdict
where
    S: BranchSource + ?Sized,
{
    let test_name = test.name();

    if !test.is_enabled() {
        tracing::info!(test_name, "test is already disabled; not inspecting branch");
        return Verdict::AlreadyDisabled;
    }

    let (branch, origin) = match resolve_branch(config, source) {
        BranchContext::Resolved { name, origin } => (name, origin),
        BranchContext::Unavailable { error } => {
            tracing::error!(
                test_name,
                error_code = error.error_code(),
                error = %error,
                "unable to read current branch; leaving test enabled"
            );
            return Verdict::BranchUnavailable { error };
        }
    };

    let valid = config.it_branches.union(test.group_labels());
    let verdict = if !valid.contains(&branch) {
        Verdict::NotMatched { branch }
    } else if test.has_group(&branch) {
        Verdict::Matched {
            branch,
            via: MatchSource::GroupLabel,
        }
    } else {
        Verdict::Matched {
            branch,
            via: MatchSource::ItBranch,
        }
    };

    tracing::info!(
        test_name,
        branch = verdict.branch(),
        branch_origin = %origin,
        groups = ?test.group_labels(),
        valid = %valid,
        verdict = %verdict,
        "evaluated branch gate"
    );
    verdict
}

/// Boolean form of [`evaluate`].
pub fn should_run<S>(test: &TestDescriptor, config: &GateConfig, source: &S) -> bool
where
    S: BranchSource + ?Sized,
{
    evaluate(test, config, source).should_run()
}
