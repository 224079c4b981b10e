//! # Limit Policy
//!
//! Capacity limits for baggage stores and their wire representation.
//!
//! Both caps are configuration, not hard-coded constants: deployments with
//! larger header ceilings can raise them, conformance testing uses the
//! defaults below. The predicates in this module are pure and stateless;
//! the store and codec decide *what* to do on overflow (reject, saturate,
//! or truncate), this module only answers *whether* something fits.

use serde::{Deserialize, Serialize};

/// Default maximum number of entries in a store (reference conformance limit)
pub const DEFAULT_MAX_ENTRIES: usize = 180;

/// Default maximum serialized length in bytes, matching common header-size ceilings
pub const DEFAULT_MAX_BYTES: usize = 8192;

/// Capacity limits applied by the store and the wire codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Limits {
    /// Maximum number of entries a store may hold
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,

    /// Maximum serialized length in bytes emitted by the encoder
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

fn default_max_entries() -> usize {
    DEFAULT_MAX_ENTRIES
}

fn default_max_bytes() -> usize {
    DEFAULT_MAX_BYTES
}

/// Returns true when a store of `n` entries is within the entry cap.
#[inline]
pub fn fits_count(n: usize, max: usize) -> bool {
    n <= max
}

/// Returns true when a serialization of `bytes` length is within the byte cap.
#[inline]
pub fn fits_length(bytes: usize, max: usize) -> bool {
    bytes <= max
}
