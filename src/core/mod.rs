//! # Core Baggage Components
//!
//! The baggage data model and its wire codec.
//!
//! This module provides the foundation of the crate: the immutable
//! key/value store and the textual encoding used to carry it across
//! process boundaries inside a single header value.
//!
//! ## Components
//! - **Entry**: a value plus opaque metadata properties
//! - **Baggage**: immutable, insertion-ordered, capacity-bounded store
//! - **Codec**: decode/encode between the store and the wire string
//!
//! ## Wire Format
//! ```text
//! list-member ("," list-member)*
//! list-member := OWS key OWS "=" OWS value OWS (";" OWS property OWS)*
//! ```
//!
//! ## Limits
//! - Entry count cap (default 180) enforced on construction and decode
//! - Serialized byte cap (default 8192) enforced on encode, truncating
//!   only on member boundaries

pub mod codec;
pub mod entry;
pub mod store;
