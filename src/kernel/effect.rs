use crate::core::Command;

/// Side effects requested by the panel controller, executed by the workbench.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    RunCommand(Command),
    ToggleAuxiliaryArea,
    RevealPanel,
    Render,
}
