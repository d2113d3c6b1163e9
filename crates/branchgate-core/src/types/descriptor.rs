//! TestDescriptor — what the host framework tells us about one test.

use std::collections::BTreeSet;

/// Identifies one test: its name, its group labels and whether it is enabled.
///
/// The enabled flag starts at the test's declared default. The only mutator
/// is [`TestDescriptor::disable`], so a descriptor can be narrowed but never
/// re-enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestDescriptor {
    name: String,
    group_labels: BTreeSet<String>,
    enabled: bool,
}

impl TestDescriptor {
    /// Create an enabled descriptor with no group labels.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group_labels: BTreeSet::new(),
            enabled: true,
        }
    }

    /// Add group labels. Labels are kept verbatim.
    pub fn with_groups<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_labels.extend(labels.into_iter().map(Into::into));
        self
    }

    /// Mark the test as disabled by its own declaration.
    pub fn declared_disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group_labels(&self) -> &BTreeSet<String> {
        &self.group_labels
    }

    pub fn has_group(&self, label: &str) -> bool {
        self.group_labels.contains(label)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disable the test. Descriptors are never re-enabled.
    pub fn disable(&mut self) {
        self.enabled = false;
    }
}
