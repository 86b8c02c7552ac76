//! Data models for the unit converter.
//!
//! - [`UnitTable`]: the immutable unit-name → factor mapping, relative to [`BASE_UNIT`]
//! - [`AppState`]: what the converter screen currently displays
//! - [`UserConfig`]: user preferences loaded from `Unit Converter.yaml`
//!
//! # Architecture Note
//!
//! - **Serializable**: config structs derive `Serialize`/`Deserialize` for YAML persistence
//! - **Immutable table**: [`UnitTable::standard`] is built once per process and only ever read
//! - **Managed state**: `AppState` changes go through [`StateManager`](crate::state::StateManager)

pub mod app_state;
pub mod config;
pub mod units;

pub use app_state::{AppState, RESULT_PREFIX};
pub use config::{ConverterSettings, DEFAULT_FROM_UNIT, DEFAULT_TO_UNIT, UserConfig};
pub use units::{BASE_UNIT, STANDARD_FACTORS, TableError, UnitTable};
