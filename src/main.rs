//! Length unit converter
//!
//! Main entry point for the GUI application.
//!
//! # Overview
//!
//! This binary crate provides the Slint GUI frontend. It initializes:
//! - Configuration loading ([`ConfigManager`])
//! - Logging infrastructure (file rotation + optional console output)
//! - State management ([`StateManager`])
//! - GUI controller ([`GuiController`] - bridges Slint UI with the converter)
//!
//! Everything runs on the main thread; conversions are synchronous and instant.
//!
//! # Execution Flow
//!
//! 1. Load `Unit Converter Data/Unit Converter.yaml` (defaults if missing)
//! 2. Initialize logging → `<Log Directory>/lenconv.<date>`
//! 3. Create StateManager with the configured default units
//! 4. Create GuiController and run the Slint event loop (blocks until window closed)
//! 5. Log the session's conversion metrics

use anyhow::Result;
use lenconv::ui::GuiController;
use lenconv::{APP_NAME, ConfigManager, Metrics, StateManager, UnitTable, VERSION};
use std::sync::Arc;

/// Directory holding the user settings file.
const CONFIG_DIR: &str = "Unit Converter Data";

fn main() -> Result<()> {
    let config_manager = ConfigManager::new(CONFIG_DIR)?;
    let user_config = config_manager.load_user_config()?;
    let settings = &user_config.converter_settings;

    // Keep the guard alive until exit so buffered log lines are flushed
    let _log_guard = lenconv::logging::setup_logging(
        &settings.log_directory,
        APP_NAME,
        settings.debug_mode,
        settings.console_logging,
    )?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);
    tracing::info!("Using settings from {}", config_manager.user_config_path());

    let (from_unit, to_unit) = user_config.resolved_units(UnitTable::standard());
    tracing::info!("Initial units: {} -> {}", from_unit, to_unit);

    let state_manager = Arc::new(StateManager::new(from_unit, to_unit));
    let metrics = Arc::new(Metrics::new());

    let gui_controller = GuiController::new(Arc::clone(&state_manager), Arc::clone(&metrics))?;

    tracing::info!("GUI controller initialized, launching window");

    let result = gui_controller.run();

    tracing::info!("GUI closed, shutting down");
    metrics.log_summary();

    result.map_err(|e| {
        tracing::error!("GUI error: {}", e);
        anyhow::anyhow!("GUI error: {}", e)
    })
}
