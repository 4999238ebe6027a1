//! Action scripts: recorded user input replayed against an [`App`].
//!
//! ```json
//! { "actions": [
//!     { "action": "down", "x": 10, "y": 10 },
//!     { "action": "move", "x": 50, "y": 40 },
//!     { "action": "up" },
//!     { "action": "mode", "mode": "shape" },
//!     { "action": "recognize" }
//! ] }
//! ```

use crate::app::App;
use crate::ui::UiAction;
use inkread_core::input::PointerEvent;
use inkread_core::protocol::RecognitionMode;
use inkread_core::SerializableColor;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Script loading errors.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid script: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Action {index}: invalid color '{color}'")]
    InvalidColor { index: usize, color: String },
}

/// One scripted action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ScriptAction {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
    Leave,
    Undo,
    Redo,
    Clear,
    Color { color: String },
    Width { width: u32 },
    Mode { mode: RecognitionMode },
    Recognize,
}

impl ScriptAction {
    fn to_ui_action(&self, index: usize) -> Result<UiAction, ScriptError> {
        Ok(match self {
            ScriptAction::Down { x, y } => UiAction::Pointer(PointerEvent::Down {
                position: Point::new(*x, *y),
            }),
            ScriptAction::Move { x, y } => UiAction::Pointer(PointerEvent::Move {
                position: Point::new(*x, *y),
            }),
            ScriptAction::Up => UiAction::Pointer(PointerEvent::Up),
            ScriptAction::Leave => UiAction::Pointer(PointerEvent::Leave),
            ScriptAction::Undo => UiAction::Undo,
            ScriptAction::Redo => UiAction::Redo,
            ScriptAction::Clear => UiAction::Clear,
            ScriptAction::Color { color } => UiAction::SetColor(
                SerializableColor::from_hex(color).ok_or_else(|| ScriptError::InvalidColor {
                    index,
                    color: color.clone(),
                })?,
            ),
            ScriptAction::Width { width } => UiAction::SetWidth(*width),
            ScriptAction::Mode { mode } => UiAction::SetMode(*mode),
            ScriptAction::Recognize => UiAction::Recognize,
        })
    }
}

/// A sequence of actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub actions: Vec<ScriptAction>,
}

/// What a replay did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    /// Recognize actions skipped in offline mode.
    pub skipped_recognitions: usize,
}

impl Script {
    pub fn from_json(source: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let source = std::fs::read_to_string(path)?;
        let script = Self::from_json(&source)?;
        log::info!("Loaded {} actions from {}", script.actions.len(), path.display());
        Ok(script)
    }

    /// Convert every action up front so a bad entry fails before anything runs.
    pub fn to_ui_actions(&self) -> Result<Vec<UiAction>, ScriptError> {
        self.actions
            .iter()
            .enumerate()
            .map(|(index, action)| action.to_ui_action(index))
            .collect()
    }

    /// Apply the script to `app` in order. With `offline`, recognize actions are skipped.
    pub fn replay(&self, app: &mut App, offline: bool) -> Result<ReplaySummary, ScriptError> {
        let mut summary = ReplaySummary::default();
        for action in self.to_ui_actions()? {
            if offline && action == UiAction::Recognize {
                log::info!("Offline, skipping recognize");
                summary.skipped_recognitions += 1;
                continue;
            }
            app.handle_action(action);
            summary.applied += 1;
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{RecognitionClient, RecognitionError};
    use crate::config::AppConfig;
    use inkread_core::protocol::{RecognitionRequest, RecognitionResult};

    struct Unreachable;

    impl RecognitionClient for Unreachable {
        fn recognize(&self, _: &RecognitionRequest) -> Result<RecognitionResult, RecognitionError> {
            panic!("offline replay must not call the recognizer");
        }
    }

    const SCRIPT: &str = r##"{ "actions": [
        { "action": "color", "color": "#ff0000" },
        { "action": "width", "width": 6 },
        { "action": "down", "x": 10, "y": 10 },
        { "action": "move", "x": 50, "y": 40 },
        { "action": "up" },
        { "action": "mode", "mode": "shape" },
        { "action": "recognize" }
    ] }"##;

    #[test]
    fn test_parse_script() {
        let script = Script::from_json(SCRIPT).unwrap();
        assert_eq!(script.actions.len(), 7);
        assert_eq!(script.actions[2], ScriptAction::Down { x: 10.0, y: 10.0 });
        assert_eq!(
            script.actions[5],
            ScriptAction::Mode {
                mode: RecognitionMode::Shape
            }
        );
    }

    #[test]
    fn test_unknown_action_rejected() {
        let err = Script::from_json(r#"{ "actions": [{ "action": "fly" }] }"#).unwrap_err();
        assert!(matches!(err, ScriptError::Json(_)));
    }

    #[test]
    fn test_bad_color_reports_index() {
        let script = Script::from_json(r#"{ "actions": [{ "action": "up" }, { "action": "color", "color": "red" }] }"#)
            .unwrap();
        let err = script.to_ui_actions().unwrap_err();
        assert!(matches!(err, ScriptError::InvalidColor { index: 1, .. }));
    }

    #[test]
    fn test_offline_replay() {
        let mut app = App::new(
            AppConfig {
                canvas_width: 64,
                canvas_height: 64,
                ..AppConfig::default()
            },
            Box::new(Unreachable),
        );
        app.init().unwrap();

        let summary = Script::from_json(SCRIPT).unwrap().replay(&mut app, true).unwrap();
        assert_eq!(summary.applied, 6);
        assert_eq!(summary.skipped_recognitions, 1);
        assert_eq!(app.mode(), RecognitionMode::Shape);

        let surface = app.surface().unwrap();
        assert_eq!(surface.history_len(), 2);
        assert_eq!(surface.brush().width, 6);
    }
}
