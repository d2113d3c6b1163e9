//! Trait seams between the selector and its collaborators.

pub mod branch_source;

pub use branch_source::BranchSource;
