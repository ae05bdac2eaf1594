//! Render output of the operator panel.

use super::action::PanelAction;
use super::panel::Operator;

pub const PLACEHOLDER: &str = "No advanced options to show.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Accent,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlKind {
    Button(Appearance),
    /// Carries the current color; picking a new one is `PanelAction::PickColor`.
    ColorPicker(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub label: &'static str,
    pub kind: ControlKind,
    pub action: Option<PanelAction>,
}

impl Control {
    pub fn button(label: &'static str, appearance: Appearance, action: PanelAction) -> Self {
        Self {
            label,
            kind: ControlKind::Button(appearance),
            action: Some(action),
        }
    }

    pub fn color_picker(label: &'static str, value: &str) -> Self {
        Self {
            label,
            kind: ControlKind::ColorPicker(value.to_string()),
            action: None,
        }
    }

    pub fn is_accent(&self) -> bool {
        matches!(self.kind, ControlKind::Button(Appearance::Accent))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelBody {
    Placeholder(&'static str),
    Controls(Vec<Control>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub operator: Operator,
    pub body: PanelBody,
}

impl PanelView {
    pub fn controls(&self) -> &[Control] {
        match &self.body {
            PanelBody::Placeholder(_) => &[],
            PanelBody::Controls(controls) => controls,
        }
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.controls().iter().map(|c| c.label).collect()
    }

    pub fn control(&self, label: &str) -> Option<&Control> {
        self.controls().iter().find(|c| c.label == label)
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self.body {
            PanelBody::Placeholder(text) => Some(text),
            PanelBody::Controls(_) => None,
        }
    }
}
