// UI module - Slint window wiring
//
// GuiController owns the MainWindow generated from ui/main_window.slint and
// connects its callbacks to the StateManager.

pub mod controller;

pub use controller::GuiController;
