//! Wire types exchanged with the remote recognizer.
//!
//! ## Protocol
//!
//! Request:
//! ```json
//! { "image": "data:image/png;base64,...", "mode": "text" }
//! ```
//! Success responses are `{ "text": "...", "latex": "..." }` in text mode and
//! `{ "shapes": [ { "type": "circle", ... } ] }` in shape mode. Failures carry
//! `{ "error": "..." }`.

use crate::shapes::{ShapeEntry, parse_shapes};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Protocol errors.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Response is missing '{0}'")]
    MissingField(&'static str),
}

/// What the recognizer should look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecognitionMode {
    /// Handwritten text and math.
    #[default]
    Text,
    /// Geometric shapes.
    Shape,
}

impl RecognitionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RecognitionMode::Text => "text",
            RecognitionMode::Shape => "shape",
        }
    }
}

impl fmt::Display for RecognitionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecognitionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(RecognitionMode::Text),
            "shape" | "shapes" => Ok(RecognitionMode::Shape),
            other => Err(format!("Invalid mode: {other}")),
        }
    }
}

/// Body of a recognition request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionRequest {
    /// Data-URI encoded PNG.
    pub image: String,
    pub mode: RecognitionMode,
}

impl RecognitionRequest {
    pub fn new(image: String, mode: RecognitionMode) -> Self {
        Self { image, mode }
    }
}

/// Text-mode result.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextResult {
    pub text: String,
    #[serde(default)]
    pub latex: String,
}

/// Body of a non-success response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A parsed recognition response.
#[derive(Debug, Clone, PartialEq)]
pub enum RecognitionResult {
    Text(TextResult),
    Shapes {
        /// The batch as received, for display.
        raw: Vec<Value>,
        /// The batch after normalization, in the same order.
        entries: Vec<ShapeEntry>,
    },
}

/// Parse a success body for `mode`.
pub fn parse_response(mode: RecognitionMode, body: &str) -> Result<RecognitionResult, ProtocolError> {
    let value: Value = serde_json::from_str(body)?;
    match mode {
        RecognitionMode::Text => {
            let text = value
                .get("text")
                .and_then(Value::as_str)
                .ok_or(ProtocolError::MissingField("text"))?;
            let latex = value.get("latex").and_then(Value::as_str).unwrap_or_default();
            Ok(RecognitionResult::Text(TextResult {
                text: text.to_string(),
                latex: latex.to_string(),
            }))
        }
        RecognitionMode::Shape => {
            let raw = value
                .get("shapes")
                .and_then(Value::as_array)
                .ok_or(ProtocolError::MissingField("shapes"))?
                .clone();
            let entries = parse_shapes(&raw);
            Ok(RecognitionResult::Shapes { raw, entries })
        }
    }
}

/// Extract the `error` message from a failure body, if it has one.
pub fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .map(|e| e.error)
        .filter(|message| !message.is_empty())
}
