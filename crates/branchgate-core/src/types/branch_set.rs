//! BranchSet — an ordered set of branch names.

use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::BRANCH_LIST_SEPARATOR;

/// Set of branch names, compared exactly and case-sensitively.
///
/// Built either from explicit names or by parsing a comma-separated list
/// such as `"release,hotfix"`. Parsing trims each entry and drops empty ones,
/// so it cannot fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BranchSet(BTreeSet<String>);

impl BranchSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated branch list.
    pub fn parse(list: &str) -> Self {
        list.split(BRANCH_LIST_SEPARATOR)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Returns a new set holding every name in `self` or `other`.
    pub fn union<'a, I>(&self, other: I) -> BranchSet
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut union = self.clone();
        union.extend(other.into_iter().cloned());
        union
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.0.iter()
    }
}

impl fmt::Display for BranchSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{BRANCH_LIST_SEPARATOR}")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for BranchSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for BranchSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a BranchSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Accepts either a TOML/JSON array of names or one comma-separated string.
impl<'de> Deserialize<'de> for BranchSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            List(Vec<String>),
            Joined(String),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::List(names) => names
                .iter()
                .map(|name| name.trim())
                .filter(|name| !name.is_empty())
                .collect(),
            Repr::Joined(list) => Self::parse(&list),
        })
    }
}
