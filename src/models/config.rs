use crate::models::UnitTable;
use serde::{Deserialize, Serialize};

/// Source unit selected when the window opens, unless configured otherwise.
pub const DEFAULT_FROM_UNIT: &str = "Metre";
/// Target unit selected when the window opens, unless configured otherwise.
pub const DEFAULT_TO_UNIT: &str = "Millimetre";

/// User configuration from `Unit Converter.yaml`
///
/// Contains the unit selections shown when the window opens and logging options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(rename = "Converter_Settings", default)]
    pub converter_settings: ConverterSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConverterSettings {
    #[serde(rename = "Default From Unit", default = "default_from_unit")]
    pub default_from_unit: String,

    #[serde(rename = "Default To Unit", default = "default_to_unit")]
    pub default_to_unit: String,

    #[serde(rename = "Debug Mode", default)]
    pub debug_mode: bool,

    #[serde(rename = "Console Logging", default = "default_console_logging")]
    pub console_logging: bool,

    #[serde(rename = "Log Directory", default = "default_log_directory")]
    pub log_directory: String,
}

impl Default for ConverterSettings {
    fn default() -> Self {
        Self {
            default_from_unit: default_from_unit(),
            default_to_unit: default_to_unit(),
            debug_mode: false,
            console_logging: default_console_logging(),
            log_directory: default_log_directory(),
        }
    }
}

fn default_from_unit() -> String {
    DEFAULT_FROM_UNIT.to_string()
}

fn default_to_unit() -> String {
    DEFAULT_TO_UNIT.to_string()
}

fn default_console_logging() -> bool {
    true
}

fn default_log_directory() -> String {
    "logs".to_string()
}

impl UserConfig {
    /// Initial `(from, to)` unit selections, checked against `table`.
    ///
    /// A configured unit the table doesn't contain is replaced by the built-in
    /// default, so the GUI never starts with a selection the converter would
    /// reject.
    pub fn resolved_units(&self, table: &UnitTable) -> (String, String) {
        let settings = &self.converter_settings;
        (
            resolve_unit(table, &settings.default_from_unit, default_from_unit),
            resolve_unit(table, &settings.default_to_unit, default_to_unit),
        )
    }
}

fn resolve_unit(table: &UnitTable, configured: &str, fallback: fn() -> String) -> String {
    if table.contains(configured) {
        configured.to_string()
    } else {
        let fallback = fallback();
        tracing::warn!(
            "Configured unit '{}' is not available, using {}",
            configured,
            fallback
        );
        fallback
    }
}
