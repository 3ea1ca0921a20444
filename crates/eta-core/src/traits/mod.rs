//! Traits at the subsystem seams.

pub mod history_store;
pub mod sample_source;

pub use history_store::HistoryStore;
pub use sample_source::SampleSource;
