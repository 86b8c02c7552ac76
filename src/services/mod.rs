//! Services module - Pure conversion logic.
//!
//! Everything here is **framework-agnostic**: no Slint, no I/O, no shared mutable
//! state. The GUI layer supplies raw strings and receives either a formatted
//! result or a [`ConversionError`].
//!
//! # Components
//!
//! - [`UnitConverter`]: validates a raw input string and two unit names against a
//!   [`UnitTable`](crate::models::UnitTable) and performs the conversion:
//!   1. Empty input is rejected ([`ConversionError::EmptyInput`])
//!   2. The text is parsed as a finite `f64` ([`ConversionError::InvalidNumber`])
//!   3. Both units must be in the table ([`ConversionError::UnknownUnit`])
//!   4. The value is scaled into Metres and then out into the target unit
//!
//! - [`format_decimal`]: renders the result with at most four fractional digits
//!   and no trailing zeros.
//!
//! # Usage Example
//!
//! ```
//! use lenconv::services::{ConversionError, convert};
//!
//! let result = convert("1", "Mile", "Metre").unwrap();
//! assert_eq!(result.to_string(), "1609.34 Metre");
//!
//! assert_eq!(convert("abc", "Mile", "Metre"), Err(ConversionError::InvalidNumber));
//! ```

pub mod conversion;
pub mod format;

pub use conversion::{
    Conversion, ConversionError, ConversionRequest, ConversionResult, ErrorKind, UnitConverter,
    convert,
};
pub use format::{MAX_FRACTION_DIGITS, format_decimal};
