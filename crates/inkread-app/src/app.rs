//! Core application state and lifecycle.

use crate::client::RecognitionClient;
use crate::config::{AppConfig, ConfigError};
use crate::control::RecognizeControl;
use crate::script::ScriptError;
use crate::ui::{UiAction, UiState};
use inkread_core::input::{PointerEvent, to_surface_coords};
use inkread_core::protocol::{RecognitionMode, RecognitionResult};
use inkread_core::raster::{RasterError, RasterTarget};
use inkread_core::{DrawingSurface, SerializableColor};
use inkread_render::{PixmapTarget, RenderReport, ShapeRenderer};
use kurbo::Point;
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error("Raster error: {0}")]
    Raster(#[from] RasterError),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Main application.
pub struct App {
    config: AppConfig,
    client: Box<dyn RecognitionClient>,
    mode: RecognitionMode,
    /// Created by [`App::init`].
    surface: Option<DrawingSurface<PixmapTarget>>,
    output: Option<ShapeRenderer<PixmapTarget>>,
    control: RecognizeControl,
    ui: UiState,
    /// Top-left corner of the surface in client coordinates.
    surface_origin: Point,
    last_render: Option<RenderReport>,
}

impl App {
    pub fn new(config: AppConfig, client: Box<dyn RecognitionClient>) -> Self {
        Self {
            config,
            client,
            mode: RecognitionMode::default(),
            surface: None,
            output: None,
            control: RecognizeControl::new(),
            ui: UiState::default(),
            surface_origin: Point::ZERO,
            last_render: None,
        }
    }

    /// Create the drawing surface and the shape output target.
    pub fn init(&mut self) -> Result<(), AppError> {
        if self.surface.is_some() {
            log::warn!("App already initialized");
            return Ok(());
        }

        let brush_color = SerializableColor::from_hex(&self.config.brush_color)
            .ok_or_else(|| AppError::InvalidColor(self.config.brush_color.clone()))?;

        let target = PixmapTarget::new(self.config.canvas_width, self.config.canvas_height)?;
        let mut surface = DrawingSurface::with_history_capacity(target, self.config.history_capacity);
        surface.set_brush_color(brush_color);
        if !surface.set_brush_width(self.config.brush_width) {
            log::warn!("Ignoring configured brush width {}", self.config.brush_width);
        }

        let output = PixmapTarget::new(self.config.output_width, self.config.output_height)?;

        log::info!(
            "Initialized {}x{} drawing surface",
            self.config.canvas_width,
            self.config.canvas_height
        );
        self.surface = Some(surface);
        self.output = Some(ShapeRenderer::new(output));
        Ok(())
    }

    pub fn set_surface_origin(&mut self, origin: Point) {
        self.surface_origin = origin;
    }

    /// Apply one user action.
    pub fn handle_action(&mut self, action: UiAction) {
        match action {
            UiAction::Pointer(event) => self.pointer(event),
            UiAction::Touch { phase, first_touch } => {
                if let Some(event) = PointerEvent::from_touch(phase, first_touch) {
                    self.pointer(event);
                }
            }
            UiAction::Undo => {
                if let Some(surface) = self.surface_mut() {
                    surface.undo();
                }
            }
            UiAction::Redo => {
                if let Some(surface) = self.surface_mut() {
                    surface.redo();
                }
            }
            UiAction::Clear => {
                if let Some(surface) = self.surface_mut() {
                    surface.clear();
                }
            }
            UiAction::SetColor(color) => {
                if let Some(surface) = self.surface_mut() {
                    surface.set_brush_color(color);
                }
            }
            UiAction::SetWidth(width) => {
                if let Some(surface) = self.surface_mut() {
                    surface.set_brush_width(width);
                }
            }
            UiAction::SetMode(mode) => {
                log::info!("Recognition mode: {mode}");
                self.mode = mode;
                self.ui.set_mode(mode);
            }
            UiAction::Recognize => self.recognize(),
        }
    }

    fn pointer(&mut self, event: PointerEvent) {
        let origin = self.surface_origin;
        let event = match event {
            PointerEvent::Down { position } => PointerEvent::Down {
                position: to_surface_coords(position, origin),
            },
            PointerEvent::Move { position } => PointerEvent::Move {
                position: to_surface_coords(position, origin),
            },
            other => other,
        };
        if let Some(surface) = self.surface_mut() {
            surface.handle_pointer_event(event);
        }
    }

    /// Send the current drawing to the recognizer and display the result.
    ///
    /// Failures become a notification, which the next attempt dismisses.
    /// The control is always left ready.
    pub fn recognize(&mut self) {
        self.ui.dismiss_notification();
        let result = self
            .control
            .run(self.client.as_ref(), self.surface.as_ref(), self.mode);

        match result {
            Ok(RecognitionResult::Text(text)) => {
                log::info!("Recognized text: {:?}", text.text);
                self.ui.show_text(&text);
            }
            Ok(RecognitionResult::Shapes { raw, entries }) => {
                self.ui.show_shapes(&raw);
                if let Some(output) = self.output.as_mut() {
                    self.last_render = Some(output.render(&entries));
                }
            }
            Err(e) => {
                log::error!("Recognition failed: {e}");
                self.ui.notify_failure(&e);
            }
        }
    }

    fn surface_mut(&mut self) -> Option<&mut DrawingSurface<PixmapTarget>> {
        if self.surface.is_none() {
            log::warn!("Drawing surface not initialized, ignoring input");
        }
        self.surface.as_mut()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn mode(&self) -> RecognitionMode {
        self.mode
    }

    pub fn surface(&self) -> Option<&DrawingSurface<PixmapTarget>> {
        self.surface.as_ref()
    }

    pub fn output(&self) -> Option<&PixmapTarget> {
        self.output.as_ref().map(ShapeRenderer::target)
    }

    pub fn control(&self) -> &RecognizeControl {
        &self.control
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Report of the most recent shape render, if any.
    pub fn last_render(&self) -> Option<&RenderReport> {
        self.last_render.as_ref()
    }

    /// PNG of the drawing surface.
    pub fn drawing_png(&self) -> Option<Result<Vec<u8>, RasterError>> {
        self.surface.as_ref().map(DrawingSurface::export_png)
    }

    /// PNG of the shape output, once shapes have been rendered.
    pub fn shapes_png(&self) -> Option<Result<Vec<u8>, RasterError>> {
        self.last_render.as_ref()?;
        self.output().map(|target| target.encode_png())
    }
}
