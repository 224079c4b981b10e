//! # Utility Modules
//!
//! Supporting utilities for value escaping and logging.
//!
//! ## Components
//! - **Encoding**: percent-encoding/decoding of baggage values
//! - **Logging**: structured logging configuration

pub mod encoding;
pub mod logging;
