//! Writing the drawing and shape output to disk.

use crate::app::{App, AppError};
use std::path::{Path, PathBuf};

pub const DRAWING_FILE: &str = "drawing.png";
pub const SHAPES_FILE: &str = "shapes.png";

/// Files written by [`write_outputs`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrittenFiles {
    pub drawing: Option<PathBuf>,
    pub shapes: Option<PathBuf>,
}

/// Write `drawing.png` and, once shapes have been rendered, `shapes.png` into `dir`.
pub fn write_outputs(app: &App, dir: &Path) -> Result<WrittenFiles, AppError> {
    std::fs::create_dir_all(dir)?;
    let mut written = WrittenFiles::default();

    if let Some(png) = app.drawing_png() {
        let path = dir.join(DRAWING_FILE);
        std::fs::write(&path, png?)?;
        log::info!("Wrote {}", path.display());
        written.drawing = Some(path);
    }

    if let Some(png) = app.shapes_png() {
        let path = dir.join(SHAPES_FILE);
        std::fs::write(&path, png?)?;
        log::info!("Wrote {}", path.display());
        written.shapes = Some(path);
    }

    Ok(written)
}
