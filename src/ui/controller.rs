// GUI Controller - Bridges the Slint window with the converter
//
// It handles:
// - Populating the unit selectors from the unit table
// - Turning the Convert and Clear buttons into StateManager calls
// - Pushing state changes back into the window

use crate::metrics::Metrics;
use crate::models::RESULT_PREFIX;
use crate::services::UnitConverter;
use crate::state::{StateChange, StateManager};
use anyhow::{Context, Result};
use slint::{ComponentHandle, ModelRc, SharedString, VecModel};
use std::sync::Arc;

// Include the generated Slint code
slint::include_modules!();

/// GUI Controller that wires up the Slint UI with state and conversion logic
///
/// # Example
/// ```ignore
/// let state_manager = Arc::new(StateManager::new("Metre", "Foot"));
/// let metrics = Arc::new(Metrics::new());
///
/// let controller = GuiController::new(state_manager, metrics)?;
/// controller.run()?;  // Blocks until window is closed
/// ```
pub struct GuiController {
    /// The Slint UI window
    ui: MainWindow,

    /// Shared state manager
    state_manager: Arc<StateManager>,
}

impl GuiController {
    /// Create a new GUI controller
    ///
    /// # Arguments
    /// * `state_manager` - Screen state, already holding the initial unit selections
    /// * `metrics` - Session counters updated on every conversion attempt
    pub fn new(state_manager: Arc<StateManager>, metrics: Arc<Metrics>) -> Result<Self> {
        let ui = MainWindow::new().context("Failed to create Slint UI")?;
        let converter = UnitConverter::default();

        let units: Vec<SharedString> = converter.units().map(SharedString::from).collect();
        ui.set_units(ModelRc::new(VecModel::from(units)));

        Self::sync_ui_with_state(&ui, &state_manager);
        Self::setup_callbacks(&ui, converter, &state_manager, &metrics);

        tracing::info!("GUI controller initialized");

        Ok(Self { ui, state_manager })
    }

    /// Run the GUI (blocks until window is closed)
    pub fn run(self) -> Result<(), slint::PlatformError> {
        tracing::info!("Starting GUI event loop");
        let result = self.ui.run();

        let conversions = self.state_manager.read(|s| s.conversions_performed);
        tracing::info!("GUI event loop finished after {} conversions", conversions);

        result
    }

    /// Copy the whole state into the window
    fn sync_ui_with_state(ui: &MainWindow, state_manager: &StateManager) {
        let state = state_manager.snapshot();

        ui.set_input_text(state.input_text.as_str().into());
        ui.set_from_unit(state.from_unit.as_str().into());
        ui.set_to_unit(state.to_unit.as_str().into());
        ui.set_result_text(state.result_line().into());
        ui.set_error_text(state.error_line().into());
    }

    fn setup_callbacks(
        ui: &MainWindow,
        converter: UnitConverter,
        state_manager: &Arc<StateManager>,
        metrics: &Arc<Metrics>,
    ) {
        let ui_weak = ui.as_weak();
        let convert_state = Arc::clone(state_manager);
        let metrics = Arc::clone(metrics);

        ui.on_convert(move || {
            let Some(ui) = ui_weak.upgrade() else {
                tracing::warn!("Convert requested after the window was dropped");
                return;
            };

            convert_state.set_input(ui.get_input_text().as_str());
            convert_state.set_selection(ui.get_from_unit().as_str(), ui.get_to_unit().as_str());

            let (outcome, changes) = convert_state.convert(&converter);
            metrics.record(&outcome);

            if let Err(e) = &outcome {
                tracing::info!("Conversion rejected: {}", e);
            }

            Self::apply_changes(&ui, &changes);
        });

        let ui_weak = ui.as_weak();
        let clear_state = Arc::clone(state_manager);

        ui.on_clear(move || {
            let Some(ui) = ui_weak.upgrade() else {
                return;
            };

            let changes = clear_state.reset();
            Self::apply_changes(&ui, &changes);
        });
    }

    /// Update only the widgets affected by `changes`
    fn apply_changes(ui: &MainWindow, changes: &[StateChange]) {
        for change in changes {
            match change {
                StateChange::ResultChanged { text } => {
                    let line = text.as_deref().unwrap_or(RESULT_PREFIX);
                    ui.set_result_text(line.into());
                }
                StateChange::ErrorChanged { text } => {
                    ui.set_error_text(text.as_deref().unwrap_or_default().into());
                }
                StateChange::InputChanged { text } => {
                    ui.set_input_text(text.as_str().into());
                }
                StateChange::SelectionChanged { from_unit, to_unit } => {
                    ui.set_from_unit(from_unit.as_str().into());
                    ui.set_to_unit(to_unit.as_str().into());
                }
                StateChange::StateReset => {}
            }
        }
    }
}
