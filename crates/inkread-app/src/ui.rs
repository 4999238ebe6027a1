//! User actions and the state of the result panels.

use inkread_core::input::{PointerEvent, TouchPhase};
use inkread_core::protocol::{RecognitionMode, TextResult};
use inkread_core::SerializableColor;
use kurbo::Point;
use serde_json::Value;

/// Placeholder shown when the recognizer returns empty text.
pub const NO_TEXT_PLACEHOLDER: &str = "No text recognized";

/// Actions that can be triggered by the user.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    /// Mouse/pen input, positions in client coordinates.
    Pointer(PointerEvent),
    /// Touch input; only the first touch point is used.
    Touch {
        phase: TouchPhase,
        first_touch: Option<Point>,
    },
    Undo,
    Redo,
    Clear,
    SetColor(SerializableColor),
    SetWidth(u32),
    SetMode(RecognitionMode),
    Recognize,
}

/// Which result panel is showing. Follows the recognition mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultPanel {
    #[default]
    Text,
    Shapes,
}

impl From<RecognitionMode> for ResultPanel {
    fn from(mode: RecognitionMode) -> Self {
        match mode {
            RecognitionMode::Text => ResultPanel::Text,
            RecognitionMode::Shape => ResultPanel::Shapes,
        }
    }
}

/// Displayed results and the last notification.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub panel: ResultPanel,
    pub text: String,
    pub latex: String,
    /// Pretty-printed shape batch as received.
    pub shapes_json: String,
    /// Last user-visible notification.
    pub notification: Option<String>,
}

impl UiState {
    pub fn show_text(&mut self, result: &TextResult) {
        self.text = if result.text.is_empty() {
            NO_TEXT_PLACEHOLDER.to_string()
        } else {
            result.text.clone()
        };
        self.latex = result.latex.clone();
    }

    pub fn show_shapes(&mut self, raw: &[Value]) {
        self.shapes_json = serde_json::to_string_pretty(raw).unwrap_or_default();
    }

    pub fn set_mode(&mut self, mode: RecognitionMode) {
        self.panel = mode.into();
    }

    pub fn notify_failure(&mut self, message: impl std::fmt::Display) {
        self.notification = Some(format!("Recognition failed: {message}"));
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }
}
