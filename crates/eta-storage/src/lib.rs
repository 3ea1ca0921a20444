//! # eta-storage
//!
//! Durable history for the eta tracker: a plain-text, append-only log with
//! one `timestamp:value` record per line.
//!
//! The log is never rewritten. Duplicates and disorder are resolved at load
//! time by `Series::from_observations`, so a log that has been appended to by
//! several process lifetimes (or edited by hand) still loads as a valid series.

pub mod file_store;
pub mod line;

pub use file_store::{FileHistoryStore, LoadPolicy};
pub use line::{format_line, parse_line};
