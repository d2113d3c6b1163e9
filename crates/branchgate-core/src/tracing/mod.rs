//! Observability for branchgate.
//! `tracing` crate with `EnvFilter`, configured through `BRANCHGATE_LOG`.

pub mod setup;

pub use setup::init_tracing;
