//! Host-side mirrors of the interop bridge's data contracts.
//!
//! The external domain model is reached through an opaque cross-runtime
//! bridge. These types mirror the shapes the bridge marshals: a quantity is
//! either a magnitude with a single unit identifier or, for the two ratio
//! quantities, a magnitude with a numerator/denominator identifier pair; a
//! time point is a civil-field tuple tagged with a time zone kind.
//!
//! Nothing in this module talks to the bridge. The adapter layer owns the
//! bridge; this crate only converts values it is handed.

mod quantity;
mod time;

pub use quantity::{ExternalMagnitude, ExternalQuantity, ExternalUnitId};
pub use time::{ExternalTimePoint, TimePointKind};
