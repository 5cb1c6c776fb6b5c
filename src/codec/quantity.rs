//! Conversion between host [`Measurement`]s and [`ExternalQuantity`] values.
//!
//! Every operation takes the caller's declared [`PhysicalQuantity`] (or a
//! target [`Unit`], which carries one). The declaration is required even
//! when the unit looks unambiguous: the metric kg/m³ unit is shared by
//! density and proppant concentration, so a lookup keyed by the external
//! unit alone would have to guess.
//!
//! ## Decimal magnitudes
//!
//! The external platform sources the power quantity's magnitude from an
//! arbitrary-precision decimal field rather than a native float. Decoding
//! converts that decimal to `f64`, which is lossy beyond 53 bits of
//! significand. The loss is intrinsic to the boundary and is accepted here
//! rather than worked around; encoding converts back and rejects non-finite
//! magnitudes.

use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::codec::{QuantityCodecError, convert::convert, ratio};
use crate::external::{ExternalMagnitude, ExternalQuantity, ExternalUnitId};
use crate::measurement::Measurement;
use crate::physical_quantity::PhysicalQuantity;
use crate::unit_system::{Unit, UnitSystem};

/// Decodes an external quantity into a measurement, keeping its unit.
///
/// Simple payloads resolve through the external-identifier table; ratio
/// payloads resolve through the pair table keyed by the declared quantity.
/// Temperature magnitudes are carried as-is: °F and °C are distinct units
/// and no origin shift happens during decode.
///
/// # Errors
///
/// Returns [`QuantityCodecError::UnrecognizedUnit`] or
/// [`QuantityCodecError::UnrecognizedRatioUnit`] when the payload's unit(s)
/// cannot be resolved for `quantity`.
pub fn to_measurement(
    quantity: PhysicalQuantity,
    external: &ExternalQuantity,
) -> Result<Measurement, QuantityCodecError> {
    match *external {
        ExternalQuantity::Simple { magnitude, unit } => {
            let resolved = unit_from_external_id(unit, quantity)
                .ok_or(QuantityCodecError::UnrecognizedUnit { quantity, unit })?;
            let magnitude = match magnitude {
                ExternalMagnitude::Float(value) => value,
                ExternalMagnitude::Decimal(value) => decimal_to_float(value)?,
            };
            Ok(Measurement::new(magnitude, resolved))
        }
        ExternalQuantity::Ratio {
            magnitude,
            numerator,
            denominator,
        } => {
            let resolved = ratio::resolve(quantity, numerator, denominator)?;
            Ok(Measurement::new(magnitude, resolved))
        }
    }
}

/// Decodes an external quantity into a measurement in `target`'s unit.
///
/// The physical quantity is derived from `target` first, because a single
/// external unit identifier does not select a quantity for the ratio
/// quantities. The external value is decoded in its own unit and the
/// magnitude then converted into `target`'s system.
///
/// # Errors
///
/// Propagates the errors of [`to_measurement`].
pub fn to_measurement_in_unit(
    target: Unit,
    external: &ExternalQuantity,
) -> Result<Measurement, QuantityCodecError> {
    let quantity = target.quantity();
    let decoded = to_measurement(quantity, external)?;
    let magnitude = convert(
        decoded.magnitude,
        quantity,
        decoded.unit.system(),
        target.system(),
    );
    Ok(Measurement::new(magnitude, target))
}

/// Encodes a measurement as an external quantity in the same unit.
///
/// Ratio quantities encode as their numerator/denominator pair; power
/// encodes its magnitude through the external decimal representation;
/// everything else encodes as a float with a single unit identifier.
///
/// # Errors
///
/// Returns [`QuantityCodecError::QuantityMismatch`] when the measurement's
/// unit does not measure `quantity`, and
/// [`QuantityCodecError::UnrepresentableMagnitude`] for a non-finite power
/// magnitude.
pub fn to_external_quantity(
    quantity: PhysicalQuantity,
    measurement: Measurement,
) -> Result<ExternalQuantity, QuantityCodecError> {
    let unit = measurement.unit;
    if unit.quantity() != quantity {
        return Err(QuantityCodecError::QuantityMismatch { quantity, unit });
    }

    if let Some((numerator, denominator)) = ratio::pair_for(unit) {
        return Ok(ExternalQuantity::ratio(
            measurement.magnitude,
            numerator,
            denominator,
        ));
    }

    let id = match simple_external_id(unit) {
        Some(id) => id,
        // Ratio units were handled above.
        None => unreachable!("non-ratio unit without an external identifier"),
    };
    if quantity == PhysicalQuantity::Power {
        let decimal = float_to_decimal(measurement.magnitude)?;
        Ok(ExternalQuantity::decimal(decimal, id))
    } else {
        Ok(ExternalQuantity::simple(measurement.magnitude, id))
    }
}

/// Encodes a measurement as an external quantity in `target`'s unit.
///
/// The magnitude is converted into `target`'s system before encoding.
/// Quantities with a single universal unit convert trivially.
///
/// # Errors
///
/// Returns [`QuantityCodecError::QuantityMismatch`] when the measurement
/// and `target` measure different quantities; otherwise propagates the
/// errors of [`to_external_quantity`].
pub fn to_external_quantity_in_unit(
    target: Unit,
    measurement: Measurement,
) -> Result<ExternalQuantity, QuantityCodecError> {
    let quantity = target.quantity();
    if measurement.unit.quantity() != quantity {
        return Err(QuantityCodecError::QuantityMismatch {
            quantity,
            unit: measurement.unit,
        });
    }
    let magnitude = convert(
        measurement.magnitude,
        quantity,
        measurement.unit.system(),
        target.system(),
    );
    to_external_quantity(quantity, Measurement::new(magnitude, target))
}

/// Re-expresses an external quantity in another unit of the same quantity.
///
/// Decodes, converts, and re-encodes in one step; the declared quantity is
/// taken from `target`.
///
/// # Errors
///
/// Propagates the errors of [`to_measurement_in_unit`] and
/// [`to_external_quantity`].
pub fn convert_external_quantity(
    external: &ExternalQuantity,
    target: Unit,
) -> Result<ExternalQuantity, QuantityCodecError> {
    let measurement = to_measurement_in_unit(target, external)?;
    to_external_quantity(target.quantity(), measurement)
}

fn decimal_to_float(value: Decimal) -> Result<f64, QuantityCodecError> {
    value
        .to_f64()
        .ok_or_else(|| QuantityCodecError::UnrepresentableMagnitude {
            text: value.to_string(),
        })
}

fn float_to_decimal(value: f64) -> Result<Decimal, QuantityCodecError> {
    Decimal::from_f64(value).ok_or_else(|| QuantityCodecError::UnrepresentableMagnitude {
        text: value.to_string(),
    })
}

/// Resolves an external unit identifier against the declared quantity.
///
/// This table is partial by design: the ratio quantities have no simple
/// identifier and resolve through [`ratio::resolve`] instead, and an
/// identifier paired with a quantity it does not measure has no entry.
fn unit_from_external_id(id: ExternalUnitId, quantity: PhysicalQuantity) -> Option<Unit> {
    use ExternalUnitId as Id;
    use PhysicalQuantity as Q;

    let system = match (id, quantity) {
        (Id::Degree, Q::Angle) | (Id::Minute, Q::Duration) => UnitSystem::Common,
        (Id::PoundPerCubicFoot, Q::Density)
        | (Id::FootPound, Q::Energy)
        | (Id::PoundForce, Q::Force)
        | (Id::Foot, Q::Length)
        | (Id::Pound, Q::Mass)
        | (Id::MechanicalHorsepower, Q::Power)
        | (Id::PoundForcePerSquareInch, Q::Pressure)
        | (Id::DegreeFahrenheit, Q::Temperature)
        | (Id::OilBarrel, Q::Volume) => UnitSystem::UsOilfield,
        (Id::KilogramPerCubicMeter, Q::Density)
        | (Id::Joule, Q::Energy)
        | (Id::Newton, Q::Force)
        | (Id::Meter, Q::Length)
        | (Id::Kilogram, Q::Mass)
        | (Id::Watt, Q::Power)
        | (Id::Kilopascal, Q::Pressure)
        | (Id::DegreeCelsius, Q::Temperature)
        | (Id::CubicMeter, Q::Volume) => UnitSystem::Metric,
        _ => return None,
    };

    Unit::new(system, quantity).ok()
}

/// The external identifier for a simple (non-ratio) unit.
fn simple_external_id(unit: Unit) -> Option<ExternalUnitId> {
    use ExternalUnitId as Id;
    use PhysicalQuantity as Q;
    use UnitSystem as S;

    let id = match (unit.system(), unit.quantity()) {
        (S::Common, Q::Angle) => Id::Degree,
        (S::Common, Q::Duration) => Id::Minute,
        (S::UsOilfield, Q::Density) => Id::PoundPerCubicFoot,
        (S::Metric, Q::Density) => Id::KilogramPerCubicMeter,
        (S::UsOilfield, Q::Energy) => Id::FootPound,
        (S::Metric, Q::Energy) => Id::Joule,
        (S::UsOilfield, Q::Force) => Id::PoundForce,
        (S::Metric, Q::Force) => Id::Newton,
        (S::UsOilfield, Q::Length) => Id::Foot,
        (S::Metric, Q::Length) => Id::Meter,
        (S::UsOilfield, Q::Mass) => Id::Pound,
        (S::Metric, Q::Mass) => Id::Kilogram,
        (S::UsOilfield, Q::Power) => Id::MechanicalHorsepower,
        (S::Metric, Q::Power) => Id::Watt,
        (S::UsOilfield, Q::Pressure) => Id::PoundForcePerSquareInch,
        (S::Metric, Q::Pressure) => Id::Kilopascal,
        (S::UsOilfield, Q::Temperature) => Id::DegreeFahrenheit,
        (S::Metric, Q::Temperature) => Id::DegreeCelsius,
        (S::UsOilfield, Q::Volume) => Id::OilBarrel,
        (S::Metric, Q::Volume) => Id::CubicMeter,
        _ => return None,
    };
    Some(id)
}
