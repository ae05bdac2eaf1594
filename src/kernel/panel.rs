//! Operator panel: which operator is active, its draw sub-state, and the control set it
//! renders.

use serde_json::Value;

use crate::core::{is_hex_color, Command, DrawMode, FlipKind, RotateDirection};
use crate::kernel::services::ports::{EditorConfig, FilterOptions};

use super::action::PanelAction;
use super::effect::Effect;
use super::view::{Appearance, Control, PanelBody, PanelView, PLACEHOLDER};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operator {
    #[default]
    None,
    Crop,
    Filter,
    Flip,
    Rotate,
    Draw,
    Clear,
}

impl Operator {
    pub const ALL: [Operator; 7] = [
        Operator::None,
        Operator::Crop,
        Operator::Filter,
        Operator::Flip,
        Operator::Rotate,
        Operator::Draw,
        Operator::Clear,
    ];

    /// Command that opens this operator's panel.
    pub fn open_command(self) -> Option<Command> {
        match self {
            Operator::None => None,
            Operator::Crop => Some(Command::Crop),
            Operator::Filter => Some(Command::OpenFilter),
            Operator::Flip => Some(Command::OpenFlip),
            Operator::Rotate => Some(Command::OpenRotate),
            Operator::Draw => Some(Command::OpenDraw),
            Operator::Clear => Some(Command::OpenClear),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterPreset {
    Grayscale,
    Invert,
    Sepia,
    Sepia2,
    Blur,
    Sharpen,
    Emboss,
}

impl FilterPreset {
    pub const ALL: [FilterPreset; 7] = [
        FilterPreset::Grayscale,
        FilterPreset::Invert,
        FilterPreset::Sepia,
        FilterPreset::Sepia2,
        FilterPreset::Blur,
        FilterPreset::Sharpen,
        FilterPreset::Emboss,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Grayscale => "Grayscale",
            Self::Invert => "Invert",
            Self::Sepia => "Sepia",
            Self::Sepia2 => "Sepia2",
            Self::Blur => "Blur",
            Self::Sharpen => "Sharpen",
            Self::Emboss => "Emboss",
        }
    }

    /// Filter name understood by the surface.
    pub fn filter_name(self) -> &'static str {
        match self {
            Self::Sepia2 => "vintage",
            other => other.label(),
        }
    }

    pub fn options(self) -> Option<FilterOptions> {
        match self {
            Self::Blur => {
                let mut options = FilterOptions::new();
                options.insert("blur".to_string(), Value::from(0.1));
                Some(options)
            }
            _ => None,
        }
    }

    pub fn command(self) -> Command {
        Command::ApplyFilter {
            name: self.filter_name().to_string(),
            options: self.options(),
        }
    }
}

/// Drawing mode and brush color; only meaningful while the operator is `Draw`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawState {
    pub mode: Option<DrawMode>,
    pub color: String,
}

impl DrawState {
    fn new(color: &str) -> Self {
        Self {
            mode: None,
            color: color.to_string(),
        }
    }
}

pub struct PanelResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl PanelResult {
    fn none() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }
}

pub struct OperatorPanelController {
    operator: Operator,
    draw: DrawState,
    default_brush_color: String,
    revision: u64,
}

impl OperatorPanelController {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            operator: Operator::None,
            draw: DrawState::new(&config.default_brush_color),
            default_brush_color: config.default_brush_color.clone(),
            revision: 0,
        }
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn draw(&self) -> &DrawState {
        &self.draw
    }

    /// Bumped on every state change; renderers use it to detect stale views.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the active operator and requests a render. Switching to a different operator
    /// discards the draw sub-state.
    pub fn set_state(&mut self, operator: Operator) -> PanelResult {
        if operator != self.operator {
            self.draw = DrawState::new(&self.default_brush_color);
        }
        self.operator = operator;
        self.revision += 1;
        PanelResult {
            effects: vec![Effect::Render],
            state_changed: true,
        }
    }

    pub fn handle(&mut self, action: PanelAction) -> PanelResult {
        if !self.accepts(&action) {
            tracing::debug!(operator = ?self.operator, ?action, "panel action not offered by active operator");
            return PanelResult::none();
        }

        match action {
            PanelAction::Select(operator) => self.select(operator),
            PanelAction::ApplyCrop => run(Command::ApplyCrop),
            PanelAction::CancelCrop => run(Command::CancelCrop),
            PanelAction::ApplyFilter(preset) => run(preset.command()),
            PanelAction::ApplyFlip(kind) => run(Command::ApplyFlip(kind)),
            PanelAction::ApplyRotate(dir) => run(Command::ApplyRotate(dir)),
            PanelAction::SelectDrawMode(mode) => run(Command::ApplyDraw {
                mode,
                color: self.draw.color.clone(),
            }),
            PanelAction::PickColor(color) => {
                if !is_hex_color(&color) {
                    tracing::debug!(%color, "ignoring non-hex brush color");
                    return PanelResult::none();
                }
                self.draw.color = color;
                self.revision += 1;
                let mut effects = vec![Effect::Render];
                if let Some(mode) = self.draw.mode {
                    effects.push(Effect::RunCommand(Command::ApplyDraw {
                        mode,
                        color: self.draw.color.clone(),
                    }));
                }
                PanelResult {
                    effects,
                    state_changed: true,
                }
            }
            PanelAction::Clear => run(Command::ApplyClear),
        }
    }

    /// Panel bookkeeping after the dispatcher applied `command` to the current session.
    pub fn on_command(&mut self, command: &Command) -> PanelResult {
        match command {
            Command::Crop => {
                let mut result = self.set_state(Operator::Crop);
                result.effects.push(Effect::ToggleAuxiliaryArea);
                result.effects.push(Effect::RevealPanel);
                result
            }
            Command::ApplyCrop | Command::CancelCrop => {
                let mut result = self.set_state(Operator::None);
                result.effects.push(Effect::ToggleAuxiliaryArea);
                result
            }
            Command::OpenRotate => self.open(Operator::Rotate),
            Command::OpenFilter => self.open(Operator::Filter),
            Command::OpenFlip => self.open(Operator::Flip),
            Command::OpenDraw => self.open(Operator::Draw),
            Command::OpenClear => self.open(Operator::Clear),
            Command::ApplyDraw { mode, color } => {
                if self.operator != Operator::Draw {
                    return PanelResult::none();
                }
                let next = DrawState {
                    mode: Some(*mode),
                    color: color.clone(),
                };
                if next == self.draw {
                    return PanelResult::none();
                }
                self.draw = next;
                self.revision += 1;
                PanelResult {
                    effects: vec![Effect::Render],
                    state_changed: true,
                }
            }
            Command::ApplyRotate(_)
            | Command::ApplyFilter { .. }
            | Command::ApplyFlip(_)
            | Command::ApplyClear => PanelResult::none(),
        }
    }

    pub fn view(&self) -> PanelView {
        use Appearance::{Accent, Neutral};

        let controls = match self.operator {
            Operator::None => {
                return PanelView {
                    operator: Operator::None,
                    body: PanelBody::Placeholder(PLACEHOLDER),
                }
            }
            Operator::Crop => vec![
                Control::button("Apply", Accent, PanelAction::ApplyCrop),
                Control::button("Cancel", Neutral, PanelAction::CancelCrop),
            ],
            Operator::Filter => FilterPreset::ALL
                .iter()
                .map(|p| Control::button(p.label(), Neutral, PanelAction::ApplyFilter(*p)))
                .collect(),
            Operator::Flip => vec![
                Control::button("FlipX", Neutral, PanelAction::ApplyFlip(FlipKind::X)),
                Control::button("FlipY", Neutral, PanelAction::ApplyFlip(FlipKind::Y)),
                Control::button("Reset", Neutral, PanelAction::ApplyFlip(FlipKind::Reset)),
            ],
            Operator::Rotate => vec![
                Control::button(
                    "Clockwise",
                    Neutral,
                    PanelAction::ApplyRotate(RotateDirection::Clockwise),
                ),
                Control::button(
                    "Counter-Clockwise",
                    Neutral,
                    PanelAction::ApplyRotate(RotateDirection::CounterClockwise),
                ),
            ],
            Operator::Draw => {
                let appearance = |mode: DrawMode| {
                    if self.draw.mode == Some(mode) {
                        Accent
                    } else {
                        Neutral
                    }
                };
                vec![
                    Control::button(
                        "Free Drawing",
                        appearance(DrawMode::FreeDrawing),
                        PanelAction::SelectDrawMode(DrawMode::FreeDrawing),
                    ),
                    Control::button(
                        "Straight Line",
                        appearance(DrawMode::StraightLine),
                        PanelAction::SelectDrawMode(DrawMode::StraightLine),
                    ),
                    Control::color_picker("Pick Color", &self.draw.color),
                ]
            }
            Operator::Clear => vec![Control::button("Clear", Neutral, PanelAction::Clear)],
        };

        PanelView {
            operator: self.operator,
            body: PanelBody::Controls(controls),
        }
    }

    fn open(&mut self, operator: Operator) -> PanelResult {
        let mut result = self.set_state(operator);
        result.effects.push(Effect::RevealPanel);
        result
    }

    fn select(&mut self, operator: Operator) -> PanelResult {
        let mut effects = Vec::new();
        // Leaving the cropper goes through cancel-crop so the surface exits crop mode.
        if self.operator == Operator::Crop && operator != Operator::Crop {
            effects.push(Effect::RunCommand(Command::CancelCrop));
        }
        match operator.open_command() {
            Some(command) => effects.push(Effect::RunCommand(command)),
            None => {
                if effects.is_empty() {
                    return self.set_state(Operator::None);
                }
            }
        }
        PanelResult {
            effects,
            state_changed: false,
        }
    }

    fn accepts(&self, action: &PanelAction) -> bool {
        matches!(
            (self.operator, action),
            (_, PanelAction::Select(_))
                | (Operator::Crop, PanelAction::ApplyCrop | PanelAction::CancelCrop)
                | (Operator::Filter, PanelAction::ApplyFilter(_))
                | (Operator::Flip, PanelAction::ApplyFlip(_))
                | (Operator::Rotate, PanelAction::ApplyRotate(_))
                | (
                    Operator::Draw,
                    PanelAction::SelectDrawMode(_) | PanelAction::PickColor(_)
                )
                | (Operator::Clear, PanelAction::Clear)
        )
    }
}

fn run(command: Command) -> PanelResult {
    PanelResult {
        effects: vec![Effect::RunCommand(command)],
        state_changed: false,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/panel.rs"]
mod tests;
