//! Adapter for the standard `#[test]` harness.
//!
//! libtest has no hook that runs before a test body, so the gate is checked
//! at the top of the body and the test returns early when skipped. One gate
//! is built per test binary, on first use.

use std::path::Path;
use std::sync::OnceLock;

use branchgate_core::tracing::init_tracing;
use branchgate_core::{ErrorCode, GateConfig};

use crate::selector::BranchGate;

static GLOBAL: OnceLock<BranchGate> = OnceLock::new();

impl BranchGate {
    /// The process-wide gate used by [`skip_unless_branch!`](crate::skip_unless_branch).
    ///
    /// Configuration is loaded from the working directory with
    /// [`load_config_from`], so a bad file never aborts the run.
    pub fn global() -> &'static BranchGate {
        GLOBAL.get_or_init(|| {
            init_tracing();
            BranchGate::from_config(load_config())
        })
    }
}

fn load_config() -> GateConfig {
    match std::env::current_dir() {
        Ok(root) => load_config_from(&root),
        Err(e) => {
            tracing::warn!(error = %e, "cannot read working directory; using environment config");
            GateConfig::from_env()
        }
    }
}

/// Load the gate configuration rooted at `root`.
///
/// Problems are logged and skipped layer by layer, so a broken file or an
/// invalid field never discards the it-branches from the layers that loaded.
pub fn load_config_from(root: &Path) -> GateConfig {
    let (config, errors) = GateConfig::load_lenient(root, None);
    for e in &errors {
        tracing::warn!(
            error_code = e.error_code(),
            error = %e,
            "ignoring invalid branchgate config"
        );
    }
    config
}

/// Name of the running test.
///
/// libtest names each test thread after its test. Falls back to `fallback`
/// (usually the module path) when the thread is unnamed or is the main thread.
pub fn current_test_name(fallback: &str) -> String {
    match std::thread::current().name() {
        Some(name) if name != "main" => name.to_string(),
        _ => fallback.to_string(),
    }
}

/// Return early from the enclosing test unless the current branch is one of
/// the given labels or a configured it-branch.
///
/// ```no_run
/// #[test]
/// fn only_on_release_branches() {
///     branchgate::skip_unless_branch!("release", "hotfix");
///     // test body
/// }
/// ```
///
/// With no labels the test runs only on it-branches, or when the branch
/// cannot be determined.
#[macro_export]
macro_rules! skip_unless_branch {
    ($($label:expr),* $(,)?) => {
        let __branchgate_labels: &[&str] = &[$($label),*];
        if !$crate::BranchGate::global().check(
            &$crate::harness::current_test_name(module_path!()),
            __branchgate_labels,
        ) {
            return;
        }
    };
}
