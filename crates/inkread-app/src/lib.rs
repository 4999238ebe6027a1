//! InkRead Application
//!
//! The application shell: recognition client, recognize control, user
//! actions, scripted replay and output writing.

mod app;
pub mod client;
pub mod config;
mod control;
mod output;
pub mod script;
mod ui;

pub use app::{App, AppError};
pub use client::{HttpRecognitionClient, RecognitionClient, RecognitionError};
pub use config::{AppConfig, ConfigError};
pub use control::{ControlState, RecognizeControl};
pub use output::{DRAWING_FILE, SHAPES_FILE, WrittenFiles, write_outputs};
pub use script::{ReplaySummary, Script, ScriptAction, ScriptError};
pub use ui::{NO_TEXT_PLACEHOLDER, ResultPanel, UiAction, UiState};
