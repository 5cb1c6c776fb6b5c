//! Cross-system magnitude conversion, backed by [`uom`].
//!
//! Each physical quantity has exactly one canonical unit per system, so a
//! conversion is fully determined by (quantity, source system, target
//! system). The factors come from `uom`'s typed quantities rather than
//! hand-kept constants; the one domain constant is the oil barrel, which is
//! exactly 42 US gallons.

use uom::si::{
    energy::{foot_pound, joule},
    f64::{
        Energy, Force, Length, Mass, MassDensity, Power, Pressure, ThermodynamicTemperature,
        Volume,
    },
    force::{newton, pound_force},
    length::{foot, meter},
    mass::{kilogram, pound},
    mass_density::{kilogram_per_cubic_meter, pound_per_cubic_foot},
    power::{horsepower, watt},
    pressure::{kilopascal, psi},
    thermodynamic_temperature::{degree_celsius, degree_fahrenheit},
    volume::{cubic_meter, gallon},
};

use crate::physical_quantity::PhysicalQuantity;
use crate::unit_system::UnitSystem;

/// An oil barrel is exactly 42 US gallons.
const GALLONS_PER_OIL_BARREL: f64 = 42.0;

/// Converts a magnitude between the canonical units of two systems.
///
/// Callers pass systems taken from valid [`Unit`](crate::unit_system::Unit)
/// values of the same quantity, so distinct systems are always the
/// US-oilfield/metric pair and common-system quantities always convert
/// trivially.
pub(super) fn convert(
    magnitude: f64,
    quantity: PhysicalQuantity,
    from: UnitSystem,
    to: UnitSystem,
) -> f64 {
    if from == to {
        return magnitude;
    }
    let to_metric = from == UnitSystem::UsOilfield;

    match quantity {
        PhysicalQuantity::Angle | PhysicalQuantity::Duration => magnitude,
        PhysicalQuantity::Density => {
            if to_metric {
                MassDensity::new::<pound_per_cubic_foot>(magnitude)
                    .get::<kilogram_per_cubic_meter>()
            } else {
                MassDensity::new::<kilogram_per_cubic_meter>(magnitude)
                    .get::<pound_per_cubic_foot>()
            }
        }
        PhysicalQuantity::Energy => {
            if to_metric {
                Energy::new::<foot_pound>(magnitude).get::<joule>()
            } else {
                Energy::new::<joule>(magnitude).get::<foot_pound>()
            }
        }
        PhysicalQuantity::Force => {
            if to_metric {
                Force::new::<pound_force>(magnitude).get::<newton>()
            } else {
                Force::new::<newton>(magnitude).get::<pound_force>()
            }
        }
        PhysicalQuantity::Length => {
            if to_metric {
                Length::new::<foot>(magnitude).get::<meter>()
            } else {
                Length::new::<meter>(magnitude).get::<foot>()
            }
        }
        PhysicalQuantity::Mass => {
            if to_metric {
                Mass::new::<pound>(magnitude).get::<kilogram>()
            } else {
                Mass::new::<kilogram>(magnitude).get::<pound>()
            }
        }
        PhysicalQuantity::Power => {
            if to_metric {
                Power::new::<horsepower>(magnitude).get::<watt>()
            } else {
                Power::new::<watt>(magnitude).get::<horsepower>()
            }
        }
        PhysicalQuantity::Pressure => {
            if to_metric {
                Pressure::new::<psi>(magnitude).get::<kilopascal>()
            } else {
                Pressure::new::<kilopascal>(magnitude).get::<psi>()
            }
        }
        PhysicalQuantity::ProppantConcentration => {
            // lb/gal ↔ kg/m³ through the mass and volume factors.
            let kilograms_per_pound = Mass::new::<pound>(1.0).get::<kilogram>();
            let cubic_meters_per_gallon = Volume::new::<gallon>(1.0).get::<cubic_meter>();
            let factor = kilograms_per_pound / cubic_meters_per_gallon;
            if to_metric { magnitude * factor } else { magnitude / factor }
        }
        PhysicalQuantity::SlurryRate => {
            // bbl/min ↔ m³/min; the denominator is a minute on both sides.
            let cubic_meters_per_barrel =
                Volume::new::<gallon>(GALLONS_PER_OIL_BARREL).get::<cubic_meter>();
            if to_metric {
                magnitude * cubic_meters_per_barrel
            } else {
                magnitude / cubic_meters_per_barrel
            }
        }
        PhysicalQuantity::Temperature => {
            // Affine, not linear: uom handles the origin shift.
            if to_metric {
                ThermodynamicTemperature::new::<degree_fahrenheit>(magnitude)
                    .get::<degree_celsius>()
            } else {
                ThermodynamicTemperature::new::<degree_celsius>(magnitude)
                    .get::<degree_fahrenheit>()
            }
        }
        PhysicalQuantity::Volume => {
            let cubic_meters_per_barrel =
                Volume::new::<gallon>(GALLONS_PER_OIL_BARREL).get::<cubic_meter>();
            if to_metric {
                magnitude * cubic_meters_per_barrel
            } else {
                magnitude / cubic_meters_per_barrel
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::physical_quantity::PhysicalQuantity as Q;
    use crate::unit_system::UnitSystem::{Metric, UsOilfield};

    #[test]
    fn same_system_is_identity() {
        assert_relative_eq!(convert(44.49, Q::Length, UsOilfield, UsOilfield), 44.49);
        assert_relative_eq!(convert(306.1, Q::Angle, UnitSystem::Common, UnitSystem::Common), 306.1);
    }

    #[test]
    fn length_feet_to_meters() {
        assert_relative_eq!(
            convert(44.49, Q::Length, UsOilfield, Metric),
            13.56,
            epsilon = 0.01
        );
        assert_relative_eq!(
            convert(13.56, Q::Length, Metric, UsOilfield),
            44.49,
            epsilon = 0.01
        );
    }

    #[test]
    fn pressure_psi_to_kilopascals() {
        assert_relative_eq!(
            convert(49.70, Q::Pressure, UsOilfield, Metric),
            342.67,
            epsilon = 0.01
        );
        let back = convert(convert(49.70, Q::Pressure, UsOilfield, Metric), Q::Pressure, Metric, UsOilfield);
        assert!(back >= 49.69 && back <= 49.71);
    }

    #[test]
    fn density_pounds_per_cubic_foot_to_kilograms_per_cubic_meter() {
        assert_relative_eq!(
            convert(70.13e-3, Q::Density, UsOilfield, Metric),
            1.123,
            epsilon = 0.001
        );
    }

    #[test]
    fn temperature_is_affine() {
        assert_relative_eq!(convert(32.0, Q::Temperature, UsOilfield, Metric), 0.0, epsilon = 1e-9);
        assert_relative_eq!(convert(212.0, Q::Temperature, UsOilfield, Metric), 100.0, epsilon = 1e-9);
        assert_relative_eq!(convert(100.0, Q::Temperature, Metric, UsOilfield), 212.0, epsilon = 1e-9);
    }

    #[test]
    fn volume_barrels_to_cubic_meters() {
        // 1 bbl = 42 US gal = 0.158987294928 m³ exactly.
        assert_relative_eq!(
            convert(1.0, Q::Volume, UsOilfield, Metric),
            0.158987294928,
            epsilon = 1e-12
        );
    }

    #[test]
    fn proppant_concentration_pounds_per_gallon_to_kilograms_per_cubic_meter() {
        // 1 lb/gal = 119.826427... kg/m³.
        assert_relative_eq!(
            convert(1.0, Q::ProppantConcentration, UsOilfield, Metric),
            119.826,
            epsilon = 0.001
        );
    }

    #[test]
    fn slurry_rate_shares_the_barrel_factor() {
        assert_relative_eq!(
            convert(10.0, Q::SlurryRate, UsOilfield, Metric),
            1.58987294928,
            epsilon = 1e-11
        );
    }

    #[test]
    fn round_trips_return_to_the_original_magnitude() {
        for quantity in [
            Q::Density,
            Q::Energy,
            Q::Force,
            Q::Length,
            Q::Mass,
            Q::Power,
            Q::Pressure,
            Q::ProppantConcentration,
            Q::SlurryRate,
            Q::Temperature,
            Q::Volume,
        ] {
            let out = convert(123.456, quantity, UsOilfield, Metric);
            let back = convert(out, quantity, Metric, UsOilfield);
            assert_relative_eq!(back, 123.456, epsilon = 1e-9);
        }
    }
}
