//! Observability for eta.
//! `tracing` crate with `EnvFilter` and per-operation span macros.

pub mod setup;
pub mod spans;

pub use setup::init_tracing;
