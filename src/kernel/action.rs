use crate::core::{DrawMode, FlipKind, RotateDirection};

use super::panel::{FilterPreset, Operator};

/// User interactions with the side panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    Select(Operator),
    ApplyCrop,
    CancelCrop,
    ApplyFilter(FilterPreset),
    ApplyFlip(FlipKind),
    ApplyRotate(RotateDirection),
    SelectDrawMode(DrawMode),
    PickColor(String),
    Clear,
}
