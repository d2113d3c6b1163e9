//! Verdict — the outcome of one selection decision.

use std::fmt;

use branchgate_core::ResolveError;

/// Which set the current branch was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource {
    /// One of the test's own group labels.
    GroupLabel,
    /// One of the configured it-branches.
    ItBranch,
}

/// Why a test runs or is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The test was disabled by its own declaration; no branch was read.
    AlreadyDisabled,
    /// The branch could not be resolved; the test keeps running.
    BranchUnavailable { error: ResolveError },
    /// The branch is a group label or an it-branch.
    Matched { branch: String, via: MatchSource },
    /// The branch is neither a group label nor an it-branch.
    NotMatched { branch: String },
}

impl Verdict {
    pub fn should_run(&self) -> bool {
        match self {
            Self::AlreadyDisabled | Self::NotMatched { .. } => false,
            Self::BranchUnavailable { .. } | Self::Matched { .. } => true,
        }
    }

    /// The branch the decision was made against, when one was resolved.
    pub fn branch(&self) -> Option<&str> {
        match self {
            Self::Matched { branch, .. } | Self::NotMatched { branch } => Some(branch),
            Self::AlreadyDisabled | Self::BranchUnavailable { .. } => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AlreadyDisabled => "already_disabled",
            Self::BranchUnavailable { .. } => "branch_unavailable",
            Self::Matched {
                via: MatchSource::GroupLabel,
                ..
            } => "matched_group",
            Self::Matched {
                via: MatchSource::ItBranch,
                ..
            } => "matched_it_branch",
            Self::NotMatched { .. } => "not_matched",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
