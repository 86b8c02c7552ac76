use indexmap::IndexMap;
use serde::Serialize;
use std::sync::LazyLock;
use thiserror::Error;

/// Reference unit that every conversion factor is expressed against.
pub const BASE_UNIT: &str = "Metre";

/// Built-in length units, in the order they are offered to the user.
///
/// Each factor is the length of one of that unit in Metres.
pub const STANDARD_FACTORS: [(&str, f64); 4] = [
    ("Metre", 1.0),
    ("Millimetre", 0.001),
    ("Mile", 1609.34),
    ("Foot", 0.3048),
];

static STANDARD_TABLE: LazyLock<UnitTable> = LazyLock::new(|| UnitTable {
    factors: STANDARD_FACTORS
        .iter()
        .map(|(name, factor)| (name.to_string(), *factor))
        .collect(),
});

/// Errors raised when building a [`UnitTable`] from caller-supplied entries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("Unit table has no entry for the base unit Metre")]
    MissingBaseUnit,

    #[error("Base unit Metre must have factor 1.0, got {0}")]
    BaseFactorNotOne(f64),

    #[error("Unit {unit} has invalid factor {factor} (must be positive and finite)")]
    InvalidFactor { unit: String, factor: f64 },

    #[error("Unit {0} is listed more than once")]
    DuplicateUnit(String),
}

/// Immutable mapping from unit name to its factor relative to [`BASE_UNIT`].
///
/// Every factor is positive and finite and the base unit maps to exactly 1.0.
/// The process-wide table is obtained with [`UnitTable::standard`]; custom
/// tables go through [`UnitTable::from_entries`], which enforces the same
/// invariants.
///
/// Iteration order is insertion order, which is also the order the GUI lists
/// the units in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitTable {
    factors: IndexMap<String, f64>,
}

impl UnitTable {
    /// The shared table of built-in length units.
    pub fn standard() -> &'static UnitTable {
        &STANDARD_TABLE
    }

    /// Build a table from `(name, factor)` pairs, validating every invariant.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut factors = IndexMap::new();

        for (name, factor) in entries {
            let name = name.into();

            if !factor.is_finite() || factor <= 0.0 {
                return Err(TableError::InvalidFactor { unit: name, factor });
            }

            if factors.contains_key(&name) {
                return Err(TableError::DuplicateUnit(name));
            }

            factors.insert(name, factor);
        }

        match factors.get(BASE_UNIT) {
            None => Err(TableError::MissingBaseUnit),
            Some(&factor) if factor != 1.0 => Err(TableError::BaseFactorNotOne(factor)),
            Some(_) => Ok(Self { factors }),
        }
    }

    /// Factor for `unit`, or `None` if the table doesn't know it.
    pub fn factor(&self, unit: &str) -> Option<f64> {
        self.factors.get(unit).copied()
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.factors.contains_key(unit)
    }

    /// Unit names in display order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factors.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}
