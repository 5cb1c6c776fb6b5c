//! Disambiguation of ratio-encoded external units.
//!
//! The external model encodes proppant concentration and slurry rate as a
//! numerator/denominator unit pair. The metric proppant pair
//! (kilogram, cubic meter) is dimensionally identical to the metric density
//! unit, so unit shape alone cannot identify the quantity. The caller's
//! declared quantity is authoritative: resolution is an exact-pair lookup
//! keyed by that quantity, and nothing is ever inferred from the pair when
//! two readings are plausible.

use crate::codec::QuantityCodecError;
use crate::external::ExternalUnitId;
use crate::physical_quantity::PhysicalQuantity;
use crate::unit_system::{Unit, UnitSystem};

/// Resolves the unit for a ratio-encoded external quantity.
///
/// # Errors
///
/// Returns [`QuantityCodecError::UnrecognizedRatioUnit`] when the pair has
/// no entry for the declared quantity.
pub(super) fn resolve(
    quantity: PhysicalQuantity,
    numerator: ExternalUnitId,
    denominator: ExternalUnitId,
) -> Result<Unit, QuantityCodecError> {
    use ExternalUnitId as Id;
    use PhysicalQuantity as Q;

    let system = match (quantity, numerator, denominator) {
        (Q::ProppantConcentration, Id::Pound, Id::UsGallon) => UnitSystem::UsOilfield,
        (Q::ProppantConcentration, Id::Kilogram, Id::CubicMeter) => UnitSystem::Metric,
        (Q::SlurryRate, Id::OilBarrel, Id::Minute) => UnitSystem::UsOilfield,
        (Q::SlurryRate, Id::CubicMeter, Id::Minute) => UnitSystem::Metric,
        _ => {
            return Err(QuantityCodecError::UnrecognizedRatioUnit {
                quantity,
                numerator,
                denominator,
            });
        }
    };

    // The matched pairs are valid (system, quantity) combinations.
    Unit::new(system, quantity).map_err(|_| QuantityCodecError::UnrecognizedRatioUnit {
        quantity,
        numerator,
        denominator,
    })
}

/// The external numerator/denominator pair for a ratio unit.
///
/// Returns `None` for units of non-ratio quantities.
pub(super) fn pair_for(unit: Unit) -> Option<(ExternalUnitId, ExternalUnitId)> {
    use ExternalUnitId as Id;
    use PhysicalQuantity as Q;
    use UnitSystem as S;

    match (unit.system(), unit.quantity()) {
        (S::UsOilfield, Q::ProppantConcentration) => Some((Id::Pound, Id::UsGallon)),
        (S::Metric, Q::ProppantConcentration) => Some((Id::Kilogram, Id::CubicMeter)),
        (S::UsOilfield, Q::SlurryRate) => Some((Id::OilBarrel, Id::Minute)),
        (S::Metric, Q::SlurryRate) => Some((Id::CubicMeter, Id::Minute)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::unit_system::unit_for;

    #[test]
    fn resolves_all_four_defined_pairs() {
        let cases = [
            (
                PhysicalQuantity::ProppantConcentration,
                ExternalUnitId::Pound,
                ExternalUnitId::UsGallon,
                UnitSystem::UsOilfield,
            ),
            (
                PhysicalQuantity::ProppantConcentration,
                ExternalUnitId::Kilogram,
                ExternalUnitId::CubicMeter,
                UnitSystem::Metric,
            ),
            (
                PhysicalQuantity::SlurryRate,
                ExternalUnitId::OilBarrel,
                ExternalUnitId::Minute,
                UnitSystem::UsOilfield,
            ),
            (
                PhysicalQuantity::SlurryRate,
                ExternalUnitId::CubicMeter,
                ExternalUnitId::Minute,
                UnitSystem::Metric,
            ),
        ];

        for (quantity, numerator, denominator, system) in cases {
            let unit = resolve(quantity, numerator, denominator).unwrap();
            assert_eq!(unit, unit_for(system, quantity).unwrap());
            assert_eq!(pair_for(unit), Some((numerator, denominator)));
        }
    }

    #[test]
    fn the_declared_quantity_is_authoritative() {
        // (kilogram, cubic meter) is also the metric density unit; declaring
        // density must not resolve it as proppant concentration.
        let err = resolve(
            PhysicalQuantity::Density,
            ExternalUnitId::Kilogram,
            ExternalUnitId::CubicMeter,
        )
        .unwrap_err();

        assert_eq!(
            err,
            QuantityCodecError::UnrecognizedRatioUnit {
                quantity: PhysicalQuantity::Density,
                numerator: ExternalUnitId::Kilogram,
                denominator: ExternalUnitId::CubicMeter,
            }
        );
    }

    #[test]
    fn rejects_pairs_outside_the_table() {
        let err = resolve(
            PhysicalQuantity::SlurryRate,
            ExternalUnitId::UsGallon,
            ExternalUnitId::Minute,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            QuantityCodecError::UnrecognizedRatioUnit { .. }
        ));
    }

    #[test]
    fn simple_units_have_no_pair() {
        let meter = unit_for(UnitSystem::Metric, PhysicalQuantity::Length).unwrap();
        assert_eq!(pair_for(meter), None);
    }
}
