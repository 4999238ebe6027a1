//! Recognition service client.

use inkread_core::protocol::{
    ProtocolError, RecognitionRequest, RecognitionResult, parse_error_message, parse_response,
};
use inkread_core::raster::RasterError;
use thiserror::Error;

/// Message used when a failure response carries no `error` field.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Recognition failed";

/// Recognition errors.
#[derive(Debug, Error)]
pub enum RecognitionError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{message} (status {status})")]
    Service { status: u16, message: String },
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    #[error("Could not export drawing: {0}")]
    Raster(#[from] RasterError),
    #[error("Drawing surface is not initialized")]
    SurfaceUnavailable,
}

/// Anything that can turn a recognition request into a result.
pub trait RecognitionClient {
    fn recognize(&self, request: &RecognitionRequest) -> Result<RecognitionResult, RecognitionError>;
}

/// Client for the HTTP recognition service (`POST {api_url}/recognize`).
pub struct HttpRecognitionClient {
    api_url: String,
    http: reqwest::blocking::Client,
}

impl HttpRecognitionClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            http: reqwest::blocking::Client::new(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/recognize", self.api_url)
    }
}

impl RecognitionClient for HttpRecognitionClient {
    fn recognize(&self, request: &RecognitionRequest) -> Result<RecognitionResult, RecognitionError> {
        let endpoint = self.endpoint();
        log::info!("Sending {} recognition request to {}", request.mode, endpoint);

        let response = self.http.post(&endpoint).json(request).send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            let message =
                parse_error_message(&body).unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
            return Err(RecognitionError::Service {
                status: status.as_u16(),
                message,
            });
        }

        Ok(parse_response(request.mode, &body)?)
    }
}
