//! # Fracdiag Units
//!
//! The measurement and time-point conversion core of a scripting layer over
//! an external fracture-diagnostics domain model. The domain model lives
//! behind a cross-runtime interop bridge and speaks two incompatible unit
//! systems (US-oilfield and metric); this crate translates between its
//! quantity and time representations and host-side, unit-tagged values.
//!
//! ## Crate layout
//!
//! - [`physical_quantity`]: the closed taxonomy of quantity kinds.
//! - [`unit_system`]: unit systems and the canonical unit tables.
//! - [`measurement`]: the host-side unit-tagged value.
//! - [`external`]: mirrors of the bridge's data contracts.
//! - [`codec`]: the bidirectional quantity and time-point codecs.
//!
//! ## The quantity tag
//!
//! Certain ratio-valued quantities (density, proppant concentration, slurry
//! rate) share identical dimensional units in the metric system, so a unit
//! alone cannot determine which physical quantity a raw external value
//! represents. Every codec operation therefore takes the caller's declared
//! [`PhysicalQuantity`](physical_quantity::PhysicalQuantity) (or a target
//! unit that carries one) and never infers it from unit shape.
//!
//! ## Example
//!
//! ```
//! use fracdiag_units::codec::quantity::{to_measurement, to_measurement_in_unit};
//! use fracdiag_units::external::{ExternalQuantity, ExternalUnitId};
//! use fracdiag_units::physical_quantity::PhysicalQuantity;
//! use fracdiag_units::unit_system::{UnitSystem, unit_for};
//!
//! let external = ExternalQuantity::simple(44.49, ExternalUnitId::Foot);
//!
//! let depth = to_measurement(PhysicalQuantity::Length, &external)?;
//! assert_eq!(depth.to_string(), "44.49 ft");
//!
//! let meters = unit_for(UnitSystem::Metric, PhysicalQuantity::Length)?;
//! let depth_m = to_measurement_in_unit(meters, &external)?;
//! assert!((depth_m.magnitude - 13.56).abs() < 0.01);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! This crate never initiates calls to the bridge; the adapter layer owns
//! I/O and hands values in. Every function here is a pure computation and
//! is safe to call concurrently.

pub mod codec;
pub mod external;
pub mod measurement;
pub mod physical_quantity;
pub mod unit_system;
