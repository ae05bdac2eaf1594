//! Editing surface contract.
//!
//! The surface owns the raster and every pixel-level transform. The kernel only drives it
//! through this trait and reads back two things: the exported data URL and the pending crop
//! rectangle.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::runtime::LocalBoxFuture;

/// Free-form filter options, e.g. `{"blur": 0.1}`.
pub type FilterOptions = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    #[error("surface operation `{op}` failed: {message}")]
    Failed { op: &'static str, message: String },
    #[error("cannot load image from `{uri}`: {message}")]
    Load { uri: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceMode {
    Cropper,
    FreeDrawing,
    LineDrawing,
}

impl SurfaceMode {
    pub fn name(self) -> &'static str {
        match self {
            Self::Cropper => "CROPPER",
            Self::FreeDrawing => "FREE_DRAWING",
            Self::LineDrawing => "LINE_DRAWING",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrushOptions {
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CropRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CropRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

pub trait EditingSurface {
    fn rotate(&mut self, degrees: i32);

    fn start_drawing_mode(&mut self, mode: SurfaceMode, brush: Option<&BrushOptions>);

    fn stop_drawing_mode(&mut self);

    /// Rectangle currently selected by the cropper. Without a user selection this is the
    /// surface's default zone.
    fn crop_zone_rect(&self) -> CropRect;

    fn crop(&mut self, rect: CropRect) -> LocalBoxFuture<'_, Result<(), SurfaceError>>;

    fn apply_filter(&mut self, name: &str, options: Option<&FilterOptions>);

    fn flip_x(&mut self);

    fn flip_y(&mut self);

    fn reset_flip(&mut self);

    fn clear_objects(&mut self);

    /// Current raster as `data:<mime>;base64,<payload>`.
    fn to_data_url(&self) -> String;

    fn load_image_from_url<'a>(
        &'a mut self,
        uri: &'a str,
        name: &'a str,
    ) -> LocalBoxFuture<'a, Result<(), SurfaceError>>;

    /// Re-applies the container's max-height to the surface root element. The surface caches
    /// its layout, and the cache is stale after a crop.
    fn set_root_max_height(&mut self, px: u32);
}
