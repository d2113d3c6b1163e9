//! Branch-gated test selection.

pub mod evaluate;
pub mod gate;
pub mod verdict;

pub use evaluate::{evaluate, should_run};
pub use gate::BranchGate;
pub use verdict::{MatchSource, Verdict};
