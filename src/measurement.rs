//! A unit-tagged numeric measurement.

use std::fmt;

use crate::unit_system::Unit;

/// A magnitude paired with its canonical unit.
///
/// `Measurement` is the host-side value the codecs produce and consume.
/// Two measurements are equal when they carry the same unit and the same
/// magnitude at `f64` precision; no cross-unit comparison happens here.
///
/// # Example
///
/// ```
/// use fracdiag_units::measurement::Measurement;
/// use fracdiag_units::physical_quantity::PhysicalQuantity;
/// use fracdiag_units::unit_system::{UnitSystem, unit_for};
///
/// let unit = unit_for(UnitSystem::UsOilfield, PhysicalQuantity::Length).unwrap();
/// let depth = Measurement::new(8_945.0, unit);
/// assert_eq!(depth.to_string(), "8945 ft");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub magnitude: f64,
    pub unit: Unit,
}

impl Measurement {
    #[must_use]
    pub fn new(magnitude: f64, unit: Unit) -> Self {
        Self { magnitude, unit }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}
