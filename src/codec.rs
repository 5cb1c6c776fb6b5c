//! Bidirectional codecs between host measurements and external values.
//!
//! - [`quantity`]: converts between a [`Measurement`](crate::measurement::Measurement)
//!   and an [`ExternalQuantity`](crate::external::ExternalQuantity), in
//!   either unit system.
//! - [`time`]: converts between a UTC [`jiff::Timestamp`] and an
//!   [`ExternalTimePoint`](crate::external::ExternalTimePoint), rejecting
//!   anything not safely convertible.
//!
//! Every function here is a pure computation over immutable tables: no I/O,
//! no shared mutable state, safe to call from any number of threads. Every
//! failure is returned to the caller; the codecs never log, never substitute
//! defaults, and never guess. Physical units and absolute time are
//! safety-relevant to the surrounding engineering application, so ambiguous
//! input is always an error.

mod convert;
mod error;
pub mod quantity;
mod ratio;
pub mod time;

pub use error::{QuantityCodecError, TimeCodecError};
