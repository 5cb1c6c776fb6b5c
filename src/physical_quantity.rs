//! The closed taxonomy of physical quantities handled by the codecs.
//!
//! Every conversion in this crate is tagged with a [`PhysicalQuantity`].
//! The tag is load-bearing: in the metric system, density and proppant
//! concentration share the same dimensional unit (kg/m³), so a raw external
//! value plus its unit is not enough to identify what was measured. Callers
//! always declare the quantity; the codecs never infer it from unit shape.

use std::fmt;

/// A dimensional category of measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalQuantity {
    Angle,
    Density,
    Duration,
    Energy,
    Force,
    Length,
    Mass,
    Power,
    Pressure,
    ProppantConcentration,
    SlurryRate,
    Temperature,
    Volume,
}

impl PhysicalQuantity {
    /// Every quantity, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Angle,
        Self::Density,
        Self::Duration,
        Self::Energy,
        Self::Force,
        Self::Length,
        Self::Mass,
        Self::Power,
        Self::Pressure,
        Self::ProppantConcentration,
        Self::SlurryRate,
        Self::Temperature,
        Self::Volume,
    ];

    /// Whether the external representation of this quantity is a
    /// numerator/denominator unit pair rather than a single unit.
    #[must_use]
    pub fn is_ratio(self) -> bool {
        matches!(self, Self::ProppantConcentration | Self::SlurryRate)
    }
}

impl fmt::Display for PhysicalQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Angle => "angle",
            Self::Density => "density",
            Self::Duration => "duration",
            Self::Energy => "energy",
            Self::Force => "force",
            Self::Length => "length",
            Self::Mass => "mass",
            Self::Power => "power",
            Self::Pressure => "pressure",
            Self::ProppantConcentration => "proppant concentration",
            Self::SlurryRate => "slurry rate",
            Self::Temperature => "temperature",
            Self::Volume => "volume",
        };
        f.write_str(name)
    }
}
