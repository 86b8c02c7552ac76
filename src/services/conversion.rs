use crate::models::UnitTable;
use crate::services::format::format_decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Why a conversion request was rejected.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("Please enter a value to convert")]
    EmptyInput,

    #[error("Invalid number. Please enter a numeric value")]
    InvalidNumber,

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
}

/// Fieldless tag for a [`ConversionError`], used for counting failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    EmptyInput,
    InvalidNumber,
    UnknownUnit,
}

impl ConversionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConversionError::EmptyInput => ErrorKind::EmptyInput,
            ConversionError::InvalidNumber => ErrorKind::InvalidNumber,
            ConversionError::UnknownUnit(_) => ErrorKind::UnknownUnit,
        }
    }
}

/// A successful conversion: the formatted value and the unit it is expressed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub value: String,
    pub unit: String,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

pub type ConversionResult = Result<Conversion, ConversionError>;

/// One conversion as entered by the user: raw text plus the two selected units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub raw_input: String,
    pub from_unit: String,
    pub to_unit: String,
}

impl ConversionRequest {
    pub fn new(
        raw_input: impl Into<String>,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
    ) -> Self {
        Self {
            raw_input: raw_input.into(),
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
        }
    }
}

/// Converts lengths between the units of a [`UnitTable`].
///
/// The converter is a thin, copyable handle onto a `'static` table, so it can
/// be stored in UI callbacks or shared between threads freely. Every call is
/// a pure function of its arguments and the table.
///
/// # Example
/// ```
/// use lenconv::services::UnitConverter;
///
/// let converter = UnitConverter::default();
/// let result = converter.convert("1", "Metre", "Millimetre").unwrap();
/// assert_eq!(result.value, "1000");
/// assert_eq!(result.unit, "Millimetre");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UnitConverter {
    table: &'static UnitTable,
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self::new(UnitTable::standard())
    }
}

impl UnitConverter {
    pub fn new(table: &'static UnitTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'static UnitTable {
        self.table
    }

    /// Unit names in display order.
    pub fn units(&self) -> impl Iterator<Item = &'static str> {
        self.table.names()
    }

    /// Convert `raw_input`, measured in `from_unit`, into `to_unit`.
    ///
    /// Checks run in this order: empty input, number parsing, unit lookup.
    /// Surrounding whitespace is ignored when parsing, but only a truly empty
    /// string is [`ConversionError::EmptyInput`]. NaN and infinities (typed
    /// literally or reached by overflow) are rejected as
    /// [`ConversionError::InvalidNumber`].
    ///
    /// When both units are the same the parsed value is formatted directly,
    /// without going through the factors.
    pub fn convert(&self, raw_input: &str, from_unit: &str, to_unit: &str) -> ConversionResult {
        if raw_input.is_empty() {
            return Err(ConversionError::EmptyInput);
        }

        let value = parse_finite(raw_input)?;
        let from_factor = self.lookup(from_unit)?;
        let to_factor = self.lookup(to_unit)?;

        let result = if from_unit == to_unit {
            value
        } else {
            let value_in_base = value * from_factor;
            value_in_base / to_factor
        };

        if !result.is_finite() {
            tracing::debug!(
                "Conversion of {} {} to {} overflowed",
                raw_input,
                from_unit,
                to_unit
            );
            return Err(ConversionError::InvalidNumber);
        }

        let conversion = Conversion {
            value: format_decimal(result),
            unit: to_unit.to_string(),
        };

        tracing::debug!("Converted {} {} -> {}", raw_input, from_unit, conversion);
        Ok(conversion)
    }

    pub fn execute(&self, request: &ConversionRequest) -> ConversionResult {
        self.convert(&request.raw_input, &request.from_unit, &request.to_unit)
    }

    fn lookup(&self, unit: &str) -> Result<f64, ConversionError> {
        self.table.factor(unit).ok_or_else(|| {
            tracing::warn!("Conversion requested for unknown unit: {}", unit);
            ConversionError::UnknownUnit(unit.to_string())
        })
    }
}

fn parse_finite(raw_input: &str) -> Result<f64, ConversionError> {
    match raw_input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ConversionError::InvalidNumber),
    }
}

/// Convert using the built-in unit table.
pub fn convert(raw_input: &str, from_unit: &str, to_unit: &str) -> ConversionResult {
    UnitConverter::default().convert(raw_input, from_unit, to_unit)
}
