//! Core types, traits, errors, configuration and tracing for branchgate.
//!
//! This crate has no version-control dependency. The git-backed resolver and
//! the test selector live in the `branchgate` crate and build on the
//! [`BranchSource`](traits::BranchSource) seam defined here.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

pub use config::{ConfigOverrides, GateConfig};
pub use errors::{ConfigError, ErrorCode, ResolveError};
pub use traits::BranchSource;
pub use types::{BranchContext, BranchOrigin, BranchSet, TestDescriptor};
