pub const PANEL_ID: &str = "imageEditorPanel";

/// Application shell hosting the side panel.
pub trait HostShell {
    /// Collapses or restores the auxiliary area so the canvas can use the freed space.
    fn toggle_auxiliary_area(&mut self);

    fn reveal_panel(&mut self, panel_id: &str);

    /// Hosts without an error surface still get the failure in the log.
    fn report_error(&mut self, message: &str) {
        tracing::warn!(%message, "editor error not shown by host");
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/host.rs"]
mod tests;
