pub mod config;
pub mod model;
pub mod remote;
pub mod sync;
pub mod telemetry;
pub mod tui;

mod tui_shell;
