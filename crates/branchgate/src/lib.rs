//! Enable or skip tests based on the currently checked-out git branch.
//!
//! A test declares group labels naming the branches it belongs to. When the
//! active branch is one of those labels, or one of the configured
//! it-branches, the test runs; otherwise it is skipped. When the branch cannot
//! be determined the test runs (fail-open).
//!
//! ```no_run
//! #[test]
//! fn checkout_flow() {
//!     branchgate::skip_unless_branch!("feature-checkout");
//!     // test body
//! }
//! ```

pub mod harness;
pub mod resolver;
pub mod selector;

pub use branchgate_core::{
    BranchContext, BranchOrigin, BranchSet, BranchSource, ConfigError, ConfigOverrides, ErrorCode,
    GateConfig, ResolveError, TestDescriptor,
};
pub use resolver::{resolve_branch, CachedBranchSource, GitBranchSource};
pub use selector::{evaluate, should_run, BranchGate, MatchSource, Verdict};
