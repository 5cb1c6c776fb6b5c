use thiserror::Error;

use crate::external::{ExternalTimePoint, ExternalUnitId};
use crate::physical_quantity::PhysicalQuantity;
use crate::unit_system::Unit;

/// Errors that may occur while converting quantities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityCodecError {
    /// The external unit identifier has no entry for the declared quantity.
    #[error("unrecognized unit {unit} for {quantity}")]
    UnrecognizedUnit {
        quantity: PhysicalQuantity,
        unit: ExternalUnitId,
    },

    /// The numerator/denominator pair has no entry for the declared quantity.
    #[error("unrecognized ratio unit {numerator}/{denominator} for {quantity}")]
    UnrecognizedRatioUnit {
        quantity: PhysicalQuantity,
        numerator: ExternalUnitId,
        denominator: ExternalUnitId,
    },

    /// The measurement's unit does not measure the requested quantity.
    #[error("unit {unit} does not measure {quantity}")]
    QuantityMismatch {
        quantity: PhysicalQuantity,
        unit: Unit,
    },

    /// The magnitude cannot cross the float/decimal boundary.
    ///
    /// Raised when encoding a non-finite power magnitude as the external
    /// decimal representation.
    #[error("magnitude {text} cannot cross the float/decimal boundary")]
    UnrepresentableMagnitude { text: String },
}

/// Errors that may occur while converting time points.
#[derive(Debug, Error)]
pub enum TimeCodecError {
    /// The external time point is tagged with the local time zone kind.
    ///
    /// A locally-zoned point carries unrecoverable ambiguity about its
    /// offset and is never accepted.
    #[error("time point carries a local time zone designation: {time_point}")]
    LocalKind { time_point: ExternalTimePoint },

    /// The external time point's time zone kind is unspecified.
    ///
    /// Upstream should never emit this; it is surfaced as a hard error
    /// rather than coerced to UTC.
    #[error("time point has no time zone designation: {time_point}")]
    UnspecifiedKind { time_point: ExternalTimePoint },

    /// The external time point's kind tag is outside the defined encoding.
    #[error("unknown time zone kind tag {raw}: {time_point}")]
    UnknownKind {
        raw: i32,
        time_point: ExternalTimePoint,
    },

    /// The civil fields do not form a valid instant.
    #[error("calendar fields do not form a valid UTC instant")]
    InvalidFields(#[from] jiff::Error),

    /// Encoding was requested for an instant without an explicit UTC
    /// designation.
    #[error("time point is not explicitly UTC: {zoned}")]
    NotUtc { zoned: Box<jiff::Zoned> },
}
