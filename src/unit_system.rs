//! Unit systems and the canonical unit tables.
//!
//! The external domain model works in two incompatible unit systems, the
//! US-oilfield system and the metric system, plus a handful of quantities
//! (angle, duration) whose unit is the same everywhere. Within a system,
//! each [`PhysicalQuantity`] has exactly one canonical unit, so a [`Unit`]
//! is the validated pair of the two.
//!
//! Keeping the quantity inside the unit's identity is what keeps the two
//! metric kg/m³ units apart: `Unit` for metric density and `Unit` for metric
//! proppant concentration print the same symbol but never compare equal.

use std::fmt;

use thiserror::Error;

use crate::physical_quantity::PhysicalQuantity;

/// A coherent set of canonical units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitSystem {
    /// Quantities with a single universal unit (angle, duration).
    Common,
    Metric,
    UsOilfield,
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Common => "common",
            Self::Metric => "metric",
            Self::UsOilfield => "US oilfield",
        };
        f.write_str(name)
    }
}

/// Errors raised when resolving or parsing units.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// The requested (system, quantity) pair has no canonical unit.
    ///
    /// Angle and duration exist only in the common system; every other
    /// quantity exists only in the US-oilfield and metric systems.
    #[error("no canonical {quantity} unit in the {system} system")]
    UnsupportedCombination {
        system: UnitSystem,
        quantity: PhysicalQuantity,
    },

    /// The text is not a recognized unit symbol for the declared quantity.
    #[error("unknown {quantity} unit symbol: {text:?}")]
    UnknownSymbol {
        quantity: PhysicalQuantity,
        text: String,
    },
}

/// The canonical unit for a physical quantity within a unit system.
///
/// A `Unit` can only be constructed for valid combinations, so holding one
/// is proof that the pair has a canonical external unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unit {
    system: UnitSystem,
    quantity: PhysicalQuantity,
}

impl Unit {
    /// Resolves the canonical unit for a quantity within a system.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::UnsupportedCombination`] when the pair has no
    /// canonical unit (see [`UnitError`]).
    pub fn new(system: UnitSystem, quantity: PhysicalQuantity) -> Result<Self, UnitError> {
        let common_only = matches!(
            quantity,
            PhysicalQuantity::Angle | PhysicalQuantity::Duration
        );
        let valid = match system {
            UnitSystem::Common => common_only,
            UnitSystem::Metric | UnitSystem::UsOilfield => !common_only,
        };
        if valid {
            Ok(Self { system, quantity })
        } else {
            Err(UnitError::UnsupportedCombination { system, quantity })
        }
    }

    #[must_use]
    pub fn system(self) -> UnitSystem {
        self.system
    }

    #[must_use]
    pub fn quantity(self) -> PhysicalQuantity {
        self.quantity
    }

    /// The canonical symbol for this unit.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        use PhysicalQuantity as Q;
        use UnitSystem as S;

        match (self.system, self.quantity) {
            (S::Common, Q::Angle) => "\u{b0}",
            (S::Common, Q::Duration) => "min",
            (S::UsOilfield, Q::Density) => "lb/ft\u{b3}",
            (S::Metric, Q::Density) => "kg/m\u{b3}",
            (S::UsOilfield, Q::Energy) => "ft\u{b7}lb",
            (S::Metric, Q::Energy) => "J",
            (S::UsOilfield, Q::Force) => "lbf",
            (S::Metric, Q::Force) => "N",
            (S::UsOilfield, Q::Length) => "ft",
            (S::Metric, Q::Length) => "m",
            (S::UsOilfield, Q::Mass) => "lb",
            (S::Metric, Q::Mass) => "kg",
            (S::UsOilfield, Q::Power) => "hp",
            (S::Metric, Q::Power) => "W",
            (S::UsOilfield, Q::Pressure) => "psi",
            (S::Metric, Q::Pressure) => "kPa",
            (S::UsOilfield, Q::ProppantConcentration) => "lb/gal",
            (S::Metric, Q::ProppantConcentration) => "kg/m\u{b3}",
            (S::UsOilfield, Q::SlurryRate) => "bbl/min",
            (S::Metric, Q::SlurryRate) => "m\u{b3}/min",
            (S::UsOilfield, Q::Temperature) => "\u{b0}F",
            (S::Metric, Q::Temperature) => "\u{b0}C",
            (S::UsOilfield, Q::Volume) => "bbl",
            (S::Metric, Q::Volume) => "m\u{b3}",
            // `Unit::new` rejects every other combination.
            _ => unreachable!("unit constructed for an unsupported combination"),
        }
    }

    /// Parses a unit symbol for the declared quantity.
    ///
    /// Accepts the canonical symbol of each system the quantity exists in,
    /// ASCII spellings of superscripted symbols (`kg/m^3`, `m^3/min`), and
    /// the historical US-oilfield density synonym `lb/cu ft`. Parsing
    /// accepts synonyms; [`Unit::symbol`] always emits the canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::UnknownSymbol`] when the text matches no symbol
    /// for the quantity.
    pub fn parse(quantity: PhysicalQuantity, text: &str) -> Result<Self, UnitError> {
        let text = text.trim();
        let systems: &[UnitSystem] = if quantity_is_common(quantity) {
            &[UnitSystem::Common]
        } else {
            &[UnitSystem::UsOilfield, UnitSystem::Metric]
        };

        for &system in systems {
            // Valid by construction of `systems`.
            let unit = Self::new(system, quantity)?;
            if text == unit.symbol() || unit.synonyms().contains(&text) {
                return Ok(unit);
            }
        }

        Err(UnitError::UnknownSymbol {
            quantity,
            text: text.to_owned(),
        })
    }

    /// Accepted non-canonical spellings of this unit.
    fn synonyms(self) -> &'static [&'static str] {
        use PhysicalQuantity as Q;
        use UnitSystem as S;

        match (self.system, self.quantity) {
            (S::UsOilfield, Q::Density) => &["lb/cu ft", "lb/cu_ft", "lb/ft^3"],
            (S::Metric, Q::Density | Q::ProppantConcentration) => &["kg/m^3"],
            (S::Metric, Q::SlurryRate) => &["m^3/min"],
            (S::Metric, Q::Volume) => &["m^3"],
            (S::Common, Q::Angle) => &["deg"],
            _ => &[],
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Resolves the canonical unit for a quantity within a system.
///
/// Convenience alias for [`Unit::new`].
///
/// # Errors
///
/// Returns [`UnitError::UnsupportedCombination`] for pairs with no
/// canonical unit.
pub fn unit_for(system: UnitSystem, quantity: PhysicalQuantity) -> Result<Unit, UnitError> {
    Unit::new(system, quantity)
}

fn quantity_is_common(quantity: PhysicalQuantity) -> bool {
    matches!(
        quantity,
        PhysicalQuantity::Angle | PhysicalQuantity::Duration
    )
}
