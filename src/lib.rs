//! # Baggage Protocol
//!
//! Context-propagation baggage core: an immutable, ordered collection of
//! string key/value pairs (each optionally carrying metadata properties)
//! that round-trips through a single compact header value under strict
//! size and count limits.
//!
//! Distributed tracing systems use baggage to pass arbitrary application
//! data across process boundaries. This crate owns the data model, the
//! wire codec (percent-encoding, optional-whitespace tolerance, delimiter
//! parsing), and the limit policy. It does not touch the network: carrier
//! adapters place the encoded string into their transport's header field
//! and hand inbound header values to [`decode`].
//!
//! ## Components
//! - [`Baggage`]: immutable key/value store; every mutation returns a new
//!   store, so instances are freely shareable across threads
//! - [`core::codec`]: [`decode`] (never fails; skips malformed members,
//!   saturates at the entry cap) and [`encode`] (never fails; truncates
//!   only on member boundaries, output bounded by the byte cap)
//! - [`Limits`]: configurable entry-count and byte-length caps
//!
//! ## Example
//! ```rust
//! use baggage_protocol::{decode, encode, Baggage};
//!
//! let baggage = Baggage::new()
//!     .set("tenant", "acme")
//!     .unwrap()
//!     .set("feature-flags", "a=1,b=2")
//!     .unwrap();
//!
//! let header = encode(&baggage);
//! assert_eq!(header, "tenant=acme,feature-flags=a%3D1%2Cb%3D2");
//! assert_eq!(decode(&header), baggage);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod limits;
pub mod utils;

pub use crate::core::codec::{decode, decode_with_limits, encode};
pub use crate::core::entry::Entry;
pub use crate::core::store::Baggage;
pub use crate::error::{BaggageError, Result};
pub use crate::limits::Limits;
