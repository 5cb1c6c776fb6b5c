use std::fmt;

use rust_decimal::Decimal;

/// A unit identifier as the external domain model emits it.
///
/// The identifiers are namespaced per quantity family on the external side
/// (mass units, volume units, and so on); flattening them into one enum is
/// safe because identifier names do not collide across families. Note there
/// is no identifier for the ratio units (lb/gal, bbl/min): the external
/// model encodes those as a pair of these identifiers instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExternalUnitId {
    CubicMeter,
    Degree,
    DegreeCelsius,
    DegreeFahrenheit,
    Foot,
    FootPound,
    Joule,
    Kilogram,
    KilogramPerCubicMeter,
    Kilopascal,
    MechanicalHorsepower,
    Meter,
    Minute,
    Newton,
    OilBarrel,
    Pound,
    PoundForce,
    PoundForcePerSquareInch,
    PoundPerCubicFoot,
    UsGallon,
    Watt,
}

impl fmt::Display for ExternalUnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // External identifier names, as the bridge reports them.
        fmt::Debug::fmt(self, f)
    }
}

/// The numeric payload of a simple external quantity.
///
/// The external platform stores almost every magnitude as a native float.
/// The power quantity is the exception: its magnitude crosses the bridge as
/// an arbitrary-precision decimal, an artifact of the platform's own type
/// system rather than anything this crate controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExternalMagnitude {
    Float(f64),
    Decimal(Decimal),
}

/// An external quantity value, as marshaled by the bridge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExternalQuantity {
    /// A magnitude with a single unit identifier.
    Simple {
        magnitude: ExternalMagnitude,
        unit: ExternalUnitId,
    },
    /// A magnitude with a numerator/denominator identifier pair.
    ///
    /// Only the ratio quantities (proppant concentration, slurry rate) use
    /// this shape.
    Ratio {
        magnitude: f64,
        numerator: ExternalUnitId,
        denominator: ExternalUnitId,
    },
}

impl ExternalQuantity {
    #[must_use]
    pub fn simple(magnitude: f64, unit: ExternalUnitId) -> Self {
        Self::Simple {
            magnitude: ExternalMagnitude::Float(magnitude),
            unit,
        }
    }

    #[must_use]
    pub fn decimal(magnitude: Decimal, unit: ExternalUnitId) -> Self {
        Self::Simple {
            magnitude: ExternalMagnitude::Decimal(magnitude),
            unit,
        }
    }

    #[must_use]
    pub fn ratio(magnitude: f64, numerator: ExternalUnitId, denominator: ExternalUnitId) -> Self {
        Self::Ratio {
            magnitude,
            numerator,
            denominator,
        }
    }
}
