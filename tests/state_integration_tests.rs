//! Integration tests for StateManager driving the converter
//!
//! These tests verify that the StateManager correctly:
//! - Reports change events on mutations
//! - Clears the previous result or error before every conversion
//! - Keeps only the latest outcome (no history)
//! - Works with Metrics the way the GUI uses them

use lenconv::{ConversionError, Metrics, StateChange, StateManager, UnitConverter};
use std::sync::Arc;

/// What the GUI does on a Convert click.
fn click_convert(
    state: &StateManager,
    metrics: &Metrics,
    input: &str,
    from_unit: &str,
    to_unit: &str,
) -> Vec<StateChange> {
    state.set_input(input);
    state.set_selection(from_unit, to_unit);
    let (outcome, changes) = state.convert(&UnitConverter::default());
    metrics.record(&outcome);
    changes
}

#[test]
fn test_conversion_sequence() {
    let state = StateManager::default();
    let metrics = Metrics::new();

    let changes = click_convert(&state, &metrics, "1", "Mile", "Metre");
    assert_eq!(
        changes,
        vec![StateChange::ResultChanged {
            text: Some("Result: 1609.34 Metre".to_string())
        }]
    );

    let changes = click_convert(&state, &metrics, "", "Mile", "Metre");
    assert_eq!(
        changes,
        vec![
            StateChange::ResultChanged { text: None },
            StateChange::ErrorChanged {
                text: Some("Please enter a value to convert".to_string())
            },
        ]
    );

    let changes = click_convert(&state, &metrics, "3.28084", "Metre", "Foot");
    assert_eq!(
        changes,
        vec![
            StateChange::ResultChanged {
                text: Some("Result: 10.7639 Foot".to_string())
            },
            StateChange::ErrorChanged { text: None },
        ]
    );

    assert_eq!(metrics.total(), 3);
    assert_eq!(metrics.failures(), 1);
    assert_eq!(state.read(|s| s.conversions_performed), 3);
}

#[test]
fn test_only_latest_outcome_is_kept() {
    let state = StateManager::default();
    let metrics = Metrics::new();

    click_convert(&state, &metrics, "1", "Metre", "Millimetre");
    click_convert(&state, &metrics, "2", "Metre", "Millimetre");

    let snapshot = state.snapshot();
    let last = snapshot.last_conversion.as_ref().unwrap();
    assert_eq!(last.value, "2000");
    assert_eq!(snapshot.result_line(), "Result: 2000 Millimetre");
}

#[test]
fn test_unknown_unit_from_selection() {
    let state = StateManager::default();
    let metrics = Metrics::new();

    click_convert(&state, &metrics, "1", "Metre", "Cubit");

    let snapshot = state.snapshot();
    assert_eq!(snapshot.error_line(), "Unknown unit: Cubit");
    assert_eq!(snapshot.result_line(), "Result:");
    assert_eq!(
        UnitConverter::default().execute(&state.current_request()),
        Err(ConversionError::UnknownUnit("Cubit".to_string()))
    );
}

#[test]
fn test_shared_state_manager() {
    let state = Arc::new(StateManager::new("Foot", "Metre"));
    let clone = Arc::clone(&state);

    clone.set_input("10");
    state.convert(&UnitConverter::default());

    assert_eq!(clone.read(|s| s.result_line().to_string()), "Result: 3.048 Metre");
}

#[test]
fn test_reset_clears_outputs() {
    let state = StateManager::default();
    let metrics = Metrics::new();
    click_convert(&state, &metrics, "abc", "Metre", "Foot");

    let changes = state.reset();

    assert!(changes.contains(&StateChange::InputChanged {
        text: String::new()
    }));
    assert!(changes.contains(&StateChange::ErrorChanged { text: None }));
    assert_eq!(changes.last(), Some(&StateChange::StateReset));
    assert_eq!(state.read(|s| s.from_unit.clone()), "Metre");
}
