//! BranchGate — configuration and branch source bundled for repeated use.

use branchgate_core::{BranchSource, GateConfig, TestDescriptor};

use super::evaluate::evaluate;
use super::verdict::Verdict;
use crate::resolver::git_source;

/// A selector bound to one configuration and one branch source.
pub struct BranchGate {
    config: GateConfig,
    source: Box<dyn BranchSource>,
}

impl BranchGate {
    pub fn new(config: GateConfig, source: impl BranchSource + 'static) -> Self {
        Self {
            config,
            source: Box::new(source),
        }
    }

    /// Gate reading the git repository described by `config`.
    pub fn from_config(config: GateConfig) -> Self {
        let source = git_source(&config);
        Self { config, source }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    pub fn evaluate(&self, test: &TestDescriptor) -> Verdict {
        evaluate(test, &self.config, self.source.as_ref())
    }

    pub fn should_run(&self, test: &TestDescriptor) -> bool {
        self.evaluate(test).should_run()
    }

    /// Apply the decision to `test`, disabling it when it should not run.
    /// Never enables a test.
    pub fn transform(&self, test: &mut TestDescriptor) -> Verdict {
        let verdict = self.evaluate(test);
        if !verdict.should_run() && test.is_enabled() {
            tracing::info!(test_name = test.name(), "disabled test");
            test.disable();
        }
        verdict
    }

    /// Decide for an enabled test named `name` carrying `labels`.
    pub fn check(&self, name: &str, labels: &[&str]) -> bool {
        let test = TestDescriptor::new(name).with_groups(labels.iter().copied());
        self.should_run(&test)
    }
}

impl std::fmt::Debug for BranchGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BranchGate")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
