//! Data model for branch-gated test selection.

pub mod branch_context;
pub mod branch_set;
pub mod descriptor;

pub use branch_context::{BranchContext, BranchOrigin};
pub use branch_set::BranchSet;
pub use descriptor::TestDescriptor;
