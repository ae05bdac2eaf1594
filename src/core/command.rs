//! Command grammar: stable ids, JSON arguments, and palette labels.

use serde_json::{json, Value};

use crate::kernel::services::ports::{FilterOptions, SurfaceMode};

pub const COMMAND_PREFIX: &str = "image-editor:";
pub const PALETTE_CATEGORY: &str = "Image Editor Operations";

pub const COMMAND_NAMES: [&str; 13] = [
    "open-rotate",
    "apply-rotate",
    "crop",
    "apply-crop",
    "cancel-crop",
    "open-filter",
    "apply-filter",
    "open-flip",
    "apply-flip",
    "open-draw",
    "apply-draw",
    "open-clear",
    "apply-clear",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("invalid arguments for `{command}`: {message}")]
    InvalidArgument {
        command: &'static str,
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotateDirection {
    Clockwise,
    CounterClockwise,
}

impl RotateDirection {
    pub fn arg(self) -> &'static str {
        match self {
            Self::Clockwise => "clock",
            Self::CounterClockwise => "counter",
        }
    }

    pub fn from_arg(value: &str) -> Option<Self> {
        match value {
            "clock" => Some(Self::Clockwise),
            "counter" => Some(Self::CounterClockwise),
            _ => None,
        }
    }

    pub fn degrees(self, step: i32) -> i32 {
        match self {
            Self::Clockwise => step,
            Self::CounterClockwise => -step,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlipKind {
    X,
    Y,
    Reset,
}

impl FlipKind {
    pub fn arg(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Reset => "reset",
        }
    }

    pub fn from_arg(value: &str) -> Option<Self> {
        match value {
            "X" => Some(Self::X),
            "Y" => Some(Self::Y),
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawMode {
    FreeDrawing,
    StraightLine,
}

impl DrawMode {
    pub fn arg(self) -> &'static str {
        match self {
            Self::FreeDrawing => "freeDrawing",
            Self::StraightLine => "straightLine",
        }
    }

    pub fn from_arg(value: &str) -> Option<Self> {
        match value {
            "freeDrawing" => Some(Self::FreeDrawing),
            "straightLine" => Some(Self::StraightLine),
            _ => None,
        }
    }

    pub fn surface_mode(self) -> SurfaceMode {
        match self {
            Self::FreeDrawing => SurfaceMode::FreeDrawing,
            Self::StraightLine => SurfaceMode::LineDrawing,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    OpenRotate,
    ApplyRotate(RotateDirection),
    Crop,
    ApplyCrop,
    CancelCrop,
    OpenFilter,
    ApplyFilter {
        name: String,
        options: Option<FilterOptions>,
    },
    OpenFlip,
    ApplyFlip(FlipKind),
    OpenDraw,
    ApplyDraw {
        mode: DrawMode,
        color: String,
    },
    OpenClear,
    ApplyClear,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::OpenRotate => "open-rotate",
            Command::ApplyRotate(_) => "apply-rotate",
            Command::Crop => "crop",
            Command::ApplyCrop => "apply-crop",
            Command::CancelCrop => "cancel-crop",
            Command::OpenFilter => "open-filter",
            Command::ApplyFilter { .. } => "apply-filter",
            Command::OpenFlip => "open-flip",
            Command::ApplyFlip(_) => "apply-flip",
            Command::OpenDraw => "open-draw",
            Command::ApplyDraw { .. } => "apply-draw",
            Command::OpenClear => "open-clear",
            Command::ApplyClear => "apply-clear",
        }
    }

    pub fn id(&self) -> String {
        format!("{COMMAND_PREFIX}{}", self.name())
    }

    /// Parses a command id (with or without the `image-editor:` prefix) and its JSON
    /// arguments. Commands without arguments ignore `args`.
    pub fn from_id(id: &str, args: &Value) -> Result<Self, CommandError> {
        let name = id.strip_prefix(COMMAND_PREFIX).unwrap_or(id);
        let command = match name {
            "open-rotate" => Command::OpenRotate,
            "apply-rotate" => {
                let ty = str_arg("apply-rotate", args, "type")?;
                let dir = RotateDirection::from_arg(ty)
                    .ok_or_else(|| invalid("apply-rotate", format!("unknown type `{ty}`")))?;
                Command::ApplyRotate(dir)
            }
            "crop" => Command::Crop,
            "apply-crop" => Command::ApplyCrop,
            "cancel-crop" => Command::CancelCrop,
            "open-filter" => Command::OpenFilter,
            "apply-filter" => {
                let ty = str_arg("apply-filter", args, "type")?;
                if ty.is_empty() {
                    return Err(invalid("apply-filter", "empty filter type".to_string()));
                }
                let options = match args.get("options") {
                    None | Some(Value::Null) => None,
                    Some(Value::Object(map)) => Some(map.clone()),
                    Some(other) => {
                        return Err(invalid(
                            "apply-filter",
                            format!("options must be an object or null, got {other}"),
                        ))
                    }
                };
                Command::ApplyFilter {
                    name: ty.to_string(),
                    options,
                }
            }
            "open-flip" => Command::OpenFlip,
            "apply-flip" => {
                let ty = str_arg("apply-flip", args, "type")?;
                let kind = FlipKind::from_arg(ty)
                    .ok_or_else(|| invalid("apply-flip", format!("unknown type `{ty}`")))?;
                Command::ApplyFlip(kind)
            }
            "open-draw" => Command::OpenDraw,
            "apply-draw" => {
                let ty = str_arg("apply-draw", args, "type")?;
                let mode = DrawMode::from_arg(ty)
                    .ok_or_else(|| invalid("apply-draw", format!("unknown type `{ty}`")))?;
                let color = str_arg("apply-draw", args, "color")?;
                if !is_hex_color(color) {
                    return Err(invalid("apply-draw", format!("`{color}` is not a hex color")));
                }
                Command::ApplyDraw {
                    mode,
                    color: color.to_string(),
                }
            }
            "open-clear" => Command::OpenClear,
            "apply-clear" => Command::ApplyClear,
            _ => return Err(CommandError::Unknown(id.to_string())),
        };
        Ok(command)
    }

    pub fn args(&self) -> Value {
        match self {
            Command::ApplyRotate(dir) => json!({ "type": dir.arg() }),
            Command::ApplyFilter { name, options } => json!({
                "type": name,
                "options": options.clone().map(Value::Object).unwrap_or(Value::Null),
            }),
            Command::ApplyFlip(kind) => json!({ "type": kind.arg() }),
            Command::ApplyDraw { mode, color } => json!({ "type": mode.arg(), "color": color }),
            _ => Value::Null,
        }
    }

    pub fn label(&self, toolbar: bool) -> &'static str {
        let (short, long) = match self {
            Command::OpenRotate => ("Rotate", "Open Rotate Options"),
            Command::ApplyRotate(_) => ("Rotate", "Apply Rotation"),
            Command::Crop => ("Crop", "Crop"),
            Command::ApplyCrop => ("Apply", "Apply Crop"),
            Command::CancelCrop => ("Cancel", "Cancel Crop"),
            Command::OpenFilter => ("Filter", "Open Filter Options"),
            Command::ApplyFilter { .. } => ("Apply", "Apply Filter"),
            Command::OpenFlip => ("Flip", "Open Flip Options"),
            Command::ApplyFlip(_) => ("Flip", "Apply Flip"),
            Command::OpenDraw => ("Draw", "Open Draw Options"),
            Command::ApplyDraw { .. } => ("Draw", "Apply Drawing Mode"),
            Command::OpenClear => ("Clear", "Open Clear Options"),
            Command::ApplyClear => ("Clear", "Clear Objects"),
        };
        if toolbar {
            short
        } else {
            long
        }
    }

    /// Whether the command changes the raster and therefore resyncs the document model.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::ApplyRotate(_)
                | Command::ApplyCrop
                | Command::ApplyFilter { .. }
                | Command::ApplyFlip(_)
                | Command::ApplyDraw { .. }
                | Command::ApplyClear
        )
    }
}

pub fn is_hex_color(value: &str) -> bool {
    let Some(hex) = value.strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

fn str_arg<'a>(command: &'static str, args: &'a Value, key: &str) -> Result<&'a str, CommandError> {
    args.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| invalid(command, format!("missing string field `{key}`")))
}

fn invalid(command: &'static str, message: String) -> CommandError {
    CommandError::InvalidArgument { command, message }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
