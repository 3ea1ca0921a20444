//! # eta-core
//!
//! Foundation crate for the eta progress tracker.
//! Defines the data model, traits at the subsystem seams, errors, config,
//! the clock abstraction, and tracing setup. Every other crate in the
//! workspace depends on this.

pub mod clock;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod observability;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::EtaConfig;
pub use errors::{EtaError, EtaResult, FetchError, ParseFailure, StoreError};
pub use models::{Observation, Prediction, Series, Snapshot, UnavailableReason};
pub use traits::{HistoryStore, SampleSource};
