//! Ties sessions, dispatcher, panel and lifecycle to a host shell.

use std::path::Path;

use crate::core::Command;
use crate::kernel::services::ports::{DocumentContext, EditorConfig, HostShell, PANEL_ID};

use super::action::PanelAction;
use super::binding::{BindingError, LoadOutcome};
use super::dispatcher::{DispatchError, DispatchOutcome, OperationDispatcher};
use super::effect::Effect;
use super::lifecycle::WidgetLifecycleManager;
use super::panel::{Operator, OperatorPanelController};
use super::session::{CropState, Session, SessionRegistry};
use super::view::PanelView;

pub struct Workbench<H: HostShell> {
    sessions: SessionRegistry,
    dispatcher: OperationDispatcher,
    panel: OperatorPanelController,
    lifecycle: WidgetLifecycleManager,
    host: H,
}

impl<H: HostShell> Workbench<H> {
    pub fn new(config: &EditorConfig, host: H) -> Self {
        Self::with_lifecycle(config, host, WidgetLifecycleManager::new())
    }

    pub fn with_lifecycle(
        config: &EditorConfig,
        host: H,
        lifecycle: WidgetLifecycleManager,
    ) -> Self {
        Self {
            sessions: SessionRegistry::new(),
            dispatcher: OperationDispatcher::new(config),
            panel: OperatorPanelController::new(config),
            lifecycle,
            host,
        }
    }

    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    /// The current session's document, e.g. for a host revert followed by `reload_current`.
    pub fn current_document_mut(&mut self) -> Option<&mut DocumentContext> {
        self.sessions.current_mut().map(Session::document_mut)
    }

    pub fn panel(&self) -> &OperatorPanelController {
        &self.panel
    }

    pub fn lifecycle(&self) -> &WidgetLifecycleManager {
        &self.lifecycle
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Mounted panel view, if the panel is attached and visible.
    pub fn view(&self) -> Option<&PanelView> {
        self.lifecycle.mounted().map(|m| m.view())
    }

    /// Registers the session, makes it current and loads its document into the surface.
    pub async fn open(&mut self, session: Session) -> Result<LoadOutcome, BindingError> {
        self.leave_crop();
        let session = self.sessions.open(session);
        let path = session.path().to_path_buf();
        let outcome = session.load().await;
        self.report_load(&path, &outcome, "session opened");
        outcome
    }

    /// Re-reads the current document into the surface, e.g. after a revert.
    pub async fn reload_current(&mut self) -> Result<Option<LoadOutcome>, BindingError> {
        let Some(session) = self.sessions.current_mut() else {
            return Ok(None);
        };
        let path = session.path().to_path_buf();
        let outcome = session.load().await;
        self.report_load(&path, &outcome, "session reloaded");
        outcome.map(Some)
    }

    pub fn activate(&mut self, path: &Path) -> bool {
        if self.sessions.get(path).is_none() {
            return false;
        }
        if self.sessions.current_path() != Some(path) {
            self.leave_crop();
        }
        self.sessions.activate(path)
    }

    pub fn close(&mut self, path: &Path) -> Option<Session> {
        let was_current = self.sessions.current_path() == Some(path);
        let session = self.sessions.close(path)?;
        if was_current && self.panel.operator() != Operator::None {
            let mut effects = self.panel.set_state(Operator::None).effects;
            if session.crop_state() == CropState::Cropping {
                effects.push(Effect::ToggleAuxiliaryArea);
            }
            self.apply_effects(effects);
        }
        tracing::debug!(path = %path.display(), "session closed");
        Some(session)
    }

    pub async fn run_command(
        &mut self,
        command: Command,
    ) -> Result<DispatchOutcome, DispatchError> {
        let outcome = self
            .dispatcher
            .execute(self.sessions.current_mut(), &command)
            .await;

        match &outcome {
            Ok(DispatchOutcome::Applied { .. }) => {
                let effects = self.panel.on_command(&command).effects;
                self.apply_effects(effects);
            }
            // The crop panel outlived its crop, e.g. the session was replaced underneath it.
            Ok(DispatchOutcome::Ignored | DispatchOutcome::NoSession)
                if matches!(command, Command::ApplyCrop | Command::CancelCrop)
                    && self.panel.operator() == Operator::Crop =>
            {
                tracing::debug!(command = command.name(), "closing stale crop panel");
                let effects = self.panel.on_command(&Command::CancelCrop).effects;
                self.apply_effects(effects);
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(command = command.name(), error = %e, "command failed");
                self.host.report_error(&e.to_string());
            }
        }
        outcome
    }

    pub async fn handle_panel(&mut self, action: PanelAction) -> Result<(), DispatchError> {
        let effects = self.panel.handle(action).effects;
        for effect in effects {
            match effect {
                Effect::RunCommand(command) => {
                    self.run_command(command).await?;
                }
                other => self.apply_effect(other),
            }
        }
        Ok(())
    }

    pub fn on_after_attach(&mut self) {
        self.lifecycle.on_after_attach(&self.panel);
    }

    pub fn on_before_detach(&mut self) {
        self.lifecycle.on_before_detach(&self.panel);
    }

    pub fn on_show(&mut self) {
        self.lifecycle.on_show(&self.panel);
    }

    pub fn on_hide(&mut self) {
        self.lifecycle.on_hide(&self.panel);
    }

    /// Cancels the current session's crop before focus moves to another session.
    fn leave_crop(&mut self) {
        let Some(session) = self.sessions.current_mut() else {
            return;
        };
        if self.dispatcher.cancel_crop(session) == DispatchOutcome::Ignored {
            return;
        }
        let effects = self.panel.on_command(&Command::CancelCrop).effects;
        self.apply_effects(effects);
    }

    fn report_load(
        &mut self,
        path: &Path,
        outcome: &Result<LoadOutcome, BindingError>,
        action: &str,
    ) {
        match outcome {
            Ok(outcome) => tracing::debug!(path = %path.display(), ?outcome, "{action}"),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "document load failed");
                self.host.report_error(&e.to_string());
            }
        }
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            self.apply_effect(effect);
        }
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::ToggleAuxiliaryArea => self.host.toggle_auxiliary_area(),
            Effect::RevealPanel => self.host.reveal_panel(PANEL_ID),
            Effect::Render => self.lifecycle.update(&self.panel),
            Effect::RunCommand(command) => {
                tracing::warn!(command = command.name(), "nested command dropped");
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/workbench.rs"]
mod tests;
