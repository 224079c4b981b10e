//! # Error Types
//!
//! Error handling for baggage operations.
//!
//! The error surface here is deliberately narrow: the wire codec never
//! fails (malformed input is skipped, over-limit output is truncated on a
//! member boundary), so the only checked error reachable from the data
//! path is [`BaggageError::CapacityExceeded`], raised by the explicit
//! single-entry `set` family when a new key would push the store over its
//! entry-count cap.
//!
//! ## Error Categories
//! - **Capacity Errors**: explicit mutations rejected by the entry cap
//! - **Configuration Errors**: TOML parse and validation failures
//! - **I/O Errors**: configuration file access
//!
//! All errors implement `std::error::Error` for interoperability.
//!
//! ## Example Usage
//! ```rust
//! use baggage_protocol::error::{BaggageError, Result};
//! use baggage_protocol::{Baggage, Limits};
//!
//! fn add_tenant(baggage: &Baggage, tenant: &str) -> Result<Baggage> {
//!     baggage.set("tenant", tenant)
//! }
//!
//! let baggage = Baggage::with_limits(Limits { max_entries: 1, max_bytes: 8192 });
//! let baggage = add_tenant(&baggage, "acme").unwrap();
//! match baggage.set("region", "eu-west-1") {
//!     Err(BaggageError::CapacityExceeded { limit }) => assert_eq!(limit, 1),
//!     other => panic!("expected capacity error, got {other:?}"),
//! }
//! ```

use std::io;
use thiserror::Error;

/// Error message constants to reduce allocations in error paths.
/// Static strings are borrowed, avoiding heap allocations for common error cases.
pub mod constants {
    /// Capacity errors
    pub const ERR_CAPACITY_EXCEEDED: &str = "Baggage entry count cap exceeded";

    /// Configuration errors
    pub const ERR_CONFIG_OPEN: &str = "Failed to open config file";
    pub const ERR_CONFIG_PARSE: &str = "Failed to parse TOML";
    pub const ERR_CONFIG_INVALID: &str = "Configuration validation failed";

    /// Logging errors
    pub const ERR_LOGGING_INIT: &str = "Failed to initialize logging";
}

// BaggageError is the primary error type for all baggage operations
#[derive(Error, Debug)]
pub enum BaggageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Raised only by the explicit `set` family; bulk construction and
    /// decode saturate silently instead.
    #[error("Baggage entry count cap exceeded: {limit}")]
    CapacityExceeded { limit: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),
}

/// Type alias for Results using BaggageError
pub type Result<T> = std::result::Result<T, BaggageError>;
