use crate::models::config::{DEFAULT_FROM_UNIT, DEFAULT_TO_UNIT};
use crate::services::Conversion;

/// Text shown on the result line before any successful conversion.
pub const RESULT_PREFIX: &str = "Result:";

/// Everything the converter screen displays.
///
/// # Thread Safety
///
/// `AppState` is held by [`crate::state::StateManager`], which applies all
/// mutations and reports what changed. Never mutate it directly from the GUI:
/// - [`read()`](crate::state::StateManager::read) for read-only access
/// - [`update()`](crate::state::StateManager::update) for mutations with change detection
///
/// Only the latest result is kept; there is no conversion history.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    // Inputs
    pub input_text: String,
    pub from_unit: String,
    pub to_unit: String,

    // Outputs (at most one of these is set after a conversion)
    pub result_text: Option<String>,
    pub error_text: Option<String>,
    pub last_conversion: Option<Conversion>,

    pub conversions_performed: u64,
}

impl AppState {
    /// Fresh screen with the given unit selections and nothing converted yet.
    pub fn with_units(from_unit: impl Into<String>, to_unit: impl Into<String>) -> Self {
        Self {
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
            ..Self::default()
        }
    }

    /// The result line as displayed, `"Result:"` when nothing has been converted.
    pub fn result_line(&self) -> &str {
        self.result_text.as_deref().unwrap_or(RESULT_PREFIX)
    }

    /// The error line as displayed, empty when there is no error.
    pub fn error_line(&self) -> &str {
        self.error_text.as_deref().unwrap_or_default()
    }

    /// Drop any displayed result or error ahead of a new attempt.
    pub fn clear_outputs(&mut self) {
        self.result_text = None;
        self.error_text = None;
        self.last_conversion = None;
    }

    pub fn has_error(&self) -> bool {
        self.error_text.is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            input_text: String::new(),
            from_unit: DEFAULT_FROM_UNIT.to_string(),
            to_unit: DEFAULT_TO_UNIT.to_string(),
            result_text: None,
            error_text: None,
            last_conversion: None,
            conversions_performed: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert!(state.input_text.is_empty());
        assert_eq!(state.from_unit, "Metre");
        assert_eq!(state.to_unit, "Millimetre");
        assert_eq!(state.result_line(), "Result:");
        assert_eq!(state.error_line(), "");
        assert!(!state.has_error());
    }

    #[test]
    fn test_default_units_match_settings() {
        let state = AppState::default();
        let settings = crate::models::ConverterSettings::default();
        assert_eq!(state.from_unit, settings.default_from_unit);
        assert_eq!(state.to_unit, settings.default_to_unit);
    }

    #[test]
    fn test_with_units() {
        let state = AppState::with_units("Mile", "Foot");
        assert_eq!(state.from_unit, "Mile");
        assert_eq!(state.to_unit, "Foot");
        assert_eq!(state.conversions_performed, 0);
    }

    #[test]
    fn test_clear_outputs() {
        let mut state = AppState {
            result_text: Some("Result: 1000 Millimetre".to_string()),
            error_text: Some("stale".to_string()),
            last_conversion: Some(Conversion {
                value: "1000".to_string(),
                unit: "Millimetre".to_string(),
            }),
            ..AppState::default()
        };

        state.clear_outputs();

        assert_eq!(state.result_line(), RESULT_PREFIX);
        assert_eq!(state.error_line(), "");
        assert!(state.last_conversion.is_none());
    }
}
