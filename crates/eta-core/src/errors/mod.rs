//! Error handling for eta.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod eta_error;
pub mod fetch_error;
pub mod store_error;

pub use config_error::ConfigError;
pub use error_code::EtaErrorCode;
pub use eta_error::{EtaError, EtaResult};
pub use fetch_error::{FetchError, ParseFailure};
pub use store_error::StoreError;
