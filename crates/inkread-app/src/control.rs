//! The recognize control and its ready/processing state.

use crate::client::{RecognitionClient, RecognitionError};
use inkread_core::protocol::{RecognitionMode, RecognitionRequest, RecognitionResult};
use inkread_core::raster::RasterTarget;
use inkread_core::surface::DrawingSurface;

/// Whether the recognize control accepts input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlState {
    #[default]
    Ready,
    Processing,
}

/// The recognize button.
#[derive(Debug, Default)]
pub struct RecognizeControl {
    state: ControlState,
}

impl RecognizeControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ControlState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.state == ControlState::Ready
    }

    /// Button caption for the current state.
    pub fn label(&self) -> &'static str {
        match self.state {
            ControlState::Ready => "Recognize",
            ControlState::Processing => "Processing...",
        }
    }

    /// Export the surface, send it and return the result.
    ///
    /// The control is back in `Ready` when this returns, whatever the outcome.
    pub fn run<C, R>(
        &mut self,
        client: &C,
        surface: Option<&DrawingSurface<R>>,
        mode: RecognitionMode,
    ) -> Result<RecognitionResult, RecognitionError>
    where
        C: RecognitionClient + ?Sized,
        R: RasterTarget,
    {
        self.state = ControlState::Processing;
        let result = recognize(client, surface, mode);
        self.state = ControlState::Ready;
        result
    }
}

fn recognize<C, R>(
    client: &C,
    surface: Option<&DrawingSurface<R>>,
    mode: RecognitionMode,
) -> Result<RecognitionResult, RecognitionError>
where
    C: RecognitionClient + ?Sized,
    R: RasterTarget,
{
    let surface = surface.ok_or(RecognitionError::SurfaceUnavailable)?;
    let image = surface.export_snapshot()?;
    client.recognize(&RecognitionRequest::new(image, mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkread_core::protocol::TextResult;
    use inkread_core::raster::RecordingTarget;
    use inkread_render::PixmapTarget;
    use std::cell::RefCell;

    /// Records requests and replies with a canned outcome.
    struct FakeClient {
        requests: RefCell<Vec<RecognitionRequest>>,
        fail: bool,
    }

    impl FakeClient {
        fn new(fail: bool) -> Self {
            Self {
                requests: RefCell::new(Vec::new()),
                fail,
            }
        }
    }

    impl RecognitionClient for FakeClient {
        fn recognize(&self, request: &RecognitionRequest) -> Result<RecognitionResult, RecognitionError> {
            self.requests.borrow_mut().push(request.clone());
            if self.fail {
                Err(RecognitionError::Service {
                    status: 500,
                    message: "boom".into(),
                })
            } else {
                Ok(RecognitionResult::Text(TextResult {
                    text: "2+2".into(),
                    latex: "2+2".into(),
                }))
            }
        }
    }

    fn surface() -> DrawingSurface<PixmapTarget> {
        DrawingSurface::new(PixmapTarget::new(16, 16).unwrap())
    }

    #[test]
    fn test_success_returns_to_ready() {
        let client = FakeClient::new(false);
        let surface = surface();
        let mut control = RecognizeControl::new();

        let result = control.run(&client, Some(&surface), RecognitionMode::Text);
        assert!(result.is_ok());
        assert_eq!(control.state(), ControlState::Ready);
        assert_eq!(control.label(), "Recognize");

        let requests = client.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].mode, RecognitionMode::Text);
        assert!(requests[0].image.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_failure_returns_to_ready() {
        let client = FakeClient::new(true);
        let surface = surface();
        let mut control = RecognizeControl::new();

        let result = control.run(&client, Some(&surface), RecognitionMode::Shape);
        assert!(matches!(result, Err(RecognitionError::Service { status: 500, .. })));
        assert!(control.is_enabled());
    }

    #[test]
    fn test_missing_surface_fails_fast() {
        let client = FakeClient::new(false);
        let mut control = RecognizeControl::new();

        let result = control.run::<_, PixmapTarget>(&client, None, RecognitionMode::Text);
        assert!(matches!(result, Err(RecognitionError::SurfaceUnavailable)));
        assert!(client.requests.borrow().is_empty());
        assert!(control.is_enabled());
    }

    #[test]
    fn test_export_failure_is_reported() {
        let client = FakeClient::new(false);
        let surface = DrawingSurface::new(RecordingTarget::new(16, 16));
        let mut control = RecognizeControl::new();

        let result = control.run(&client, Some(&surface), RecognitionMode::Text);
        assert!(matches!(result, Err(RecognitionError::Raster(_))));
        assert!(client.requests.borrow().is_empty());
        assert!(control.is_enabled());
    }
}
