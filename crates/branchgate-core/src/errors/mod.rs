//! Error handling for branchgate.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod resolve_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use resolve_error::ResolveError;
