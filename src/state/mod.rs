// State management module
//
// This module provides the StateManager which owns the converter screen's AppState
// and reports which parts of it changed on every update.

use crate::models::{AppState, DEFAULT_FROM_UNIT, DEFAULT_TO_UNIT, RESULT_PREFIX};
use crate::services::{ConversionRequest, ConversionResult, UnitConverter};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Change events produced when state is modified
///
/// The GUI uses these to decide which widgets need refreshing without
/// comparing the whole state itself.
#[derive(Clone, Debug, PartialEq)]
pub enum StateChange {
    /// The raw input text was edited
    InputChanged { text: String },

    /// Either unit selector changed
    SelectionChanged { from_unit: String, to_unit: String },

    /// The result line changed (`None` means it was cleared)
    ResultChanged { text: Option<String> },

    /// The error line changed (`None` means it was cleared)
    ErrorChanged { text: Option<String> },

    /// State has been reset
    StateReset,
}

/// State manager with change detection
///
/// - [`read()`](Self::read) for reading state through a closure
/// - [`update()`](Self::update) for mutations with automatic change detection
/// - [`convert()`](Self::convert) to run the current inputs through a [`UnitConverter`]
///
/// The lock only exists so the manager can sit behind an `Arc` shared by the
/// GUI callbacks; all access happens on the GUI thread.
pub struct StateManager {
    state: RwLock<AppState>,
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new(DEFAULT_FROM_UNIT, DEFAULT_TO_UNIT)
    }
}

impl StateManager {
    /// Create a StateManager with the given initial unit selections
    pub fn new(from_unit: impl Into<String>, to_unit: impl Into<String>) -> Self {
        Self {
            state: RwLock::new(AppState::with_units(from_unit, to_unit)),
        }
    }

    fn read_guard(&self) -> RwLockReadGuard<'_, AppState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, AppState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get a copy of the current state
    pub fn snapshot(&self) -> AppState {
        self.read_guard().clone()
    }

    /// Execute a function with read access to the state
    ///
    /// # Example
    /// ```ignore
    /// let has_error = state_manager.read(|state| state.has_error());
    /// ```
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&AppState) -> R,
    {
        let state = self.read_guard();
        f(&state)
    }

    /// Update the state and report what changed
    ///
    /// # Returns
    /// The StateChange events describing the difference between the old and new state
    pub fn update<F>(&self, update_fn: F) -> Vec<StateChange>
    where
        F: FnOnce(&mut AppState),
    {
        let mut state = self.write_guard();
        let old_state = state.clone();

        update_fn(&mut state);

        let changes = Self::detect_changes(&old_state, &state);
        if !changes.is_empty() {
            tracing::trace!("State changes: {:?}", changes);
        }
        changes
    }

    fn detect_changes(old: &AppState, new: &AppState) -> Vec<StateChange> {
        let mut changes = Vec::new();

        if old.input_text != new.input_text {
            changes.push(StateChange::InputChanged {
                text: new.input_text.clone(),
            });
        }

        if old.from_unit != new.from_unit || old.to_unit != new.to_unit {
            changes.push(StateChange::SelectionChanged {
                from_unit: new.from_unit.clone(),
                to_unit: new.to_unit.clone(),
            });
        }

        if old.result_text != new.result_text {
            changes.push(StateChange::ResultChanged {
                text: new.result_text.clone(),
            });
        }

        if old.error_text != new.error_text {
            changes.push(StateChange::ErrorChanged {
                text: new.error_text.clone(),
            });
        }

        changes
    }

    // Convenience methods for common state updates

    /// Set the raw input text
    pub fn set_input(&self, text: impl Into<String>) -> Vec<StateChange> {
        let text = text.into();
        self.update(|state| state.input_text = text)
    }

    /// Set both unit selections
    pub fn set_selection(
        &self,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
    ) -> Vec<StateChange> {
        let (from_unit, to_unit) = (from_unit.into(), to_unit.into());
        self.update(|state| {
            state.from_unit = from_unit;
            state.to_unit = to_unit;
        })
    }

    /// The request the current inputs describe
    pub fn current_request(&self) -> ConversionRequest {
        self.read(|state| {
            ConversionRequest::new(&state.input_text, &state.from_unit, &state.to_unit)
        })
    }

    /// Convert the current input and selections, replacing the displayed outcome
    ///
    /// Any previous result or error is cleared before the new outcome is stored.
    ///
    /// # Returns
    /// The conversion outcome and the StateChange events it caused
    pub fn convert(&self, converter: &UnitConverter) -> (ConversionResult, Vec<StateChange>) {
        let request = self.current_request();
        let outcome = converter.execute(&request);

        let changes = self.update(|state| {
            state.clear_outputs();
            state.conversions_performed += 1;

            match &outcome {
                Ok(conversion) => {
                    state.result_text = Some(format!("{} {}", RESULT_PREFIX, conversion));
                    state.last_conversion = Some(conversion.clone());
                }
                Err(e) => {
                    state.error_text = Some(e.to_string());
                }
            }
        });

        (outcome, changes)
    }

    /// Clear input and outputs, keeping the unit selections
    pub fn reset(&self) -> Vec<StateChange> {
        let mut changes = self.update(|state| {
            let from_unit = std::mem::take(&mut state.from_unit);
            let to_unit = std::mem::take(&mut state.to_unit);
            *state = AppState::with_units(from_unit, to_unit);
        });

        changes.push(StateChange::StateReset);
        changes
    }
}
