//! Routes commands to the current session's surface and resyncs the model after edits.

use crate::core::{Command, FlipKind};
use crate::kernel::services::ports::{BrushOptions, EditorConfig, SurfaceError, SurfaceMode};

use super::binding::BindingError;
use super::session::{CropState, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No session was active; nothing happened.
    NoSession,
    /// The command does not apply in the session's current state.
    Ignored,
    Applied { synced: bool },
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    #[error(transparent)]
    Binding(#[from] BindingError),
}

pub struct OperationDispatcher {
    rotate_step: i32,
}

impl OperationDispatcher {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            rotate_step: config.rotate_step_degrees,
        }
    }

    pub async fn execute(
        &self,
        session: Option<&mut Session>,
        command: &Command,
    ) -> Result<DispatchOutcome, DispatchError> {
        let Some(session) = session else {
            tracing::debug!(command = command.name(), "no active session");
            return Ok(DispatchOutcome::NoSession);
        };

        match command {
            Command::OpenRotate
            | Command::OpenFilter
            | Command::OpenFlip
            | Command::OpenDraw
            | Command::OpenClear => Ok(DispatchOutcome::Applied { synced: false }),
            Command::Crop => Ok(self.open_crop(session)),
            Command::ApplyCrop => self.apply_crop(session).await,
            Command::CancelCrop => Ok(self.cancel_crop(session)),
            Command::ApplyRotate(dir) => {
                session.surface_mut().rotate(dir.degrees(self.rotate_step));
                self.sync(session).await
            }
            Command::ApplyFilter { name, options } => {
                session.surface_mut().apply_filter(name, options.as_ref());
                self.sync(session).await
            }
            Command::ApplyFlip(kind) => {
                let surface = session.surface_mut();
                match kind {
                    FlipKind::X => surface.flip_x(),
                    FlipKind::Y => surface.flip_y(),
                    FlipKind::Reset => surface.reset_flip(),
                }
                self.sync(session).await
            }
            Command::ApplyDraw { mode, color } => {
                let surface = session.surface_mut();
                surface.stop_drawing_mode();
                let brush = BrushOptions {
                    color: color.clone(),
                };
                surface.start_drawing_mode(mode.surface_mode(), Some(&brush));
                self.sync(session).await
            }
            Command::ApplyClear => {
                session.surface_mut().clear_objects();
                self.sync(session).await
            }
        }
    }

    fn open_crop(&self, session: &mut Session) -> DispatchOutcome {
        if session.crop_state() == CropState::Cropping {
            tracing::debug!(path = %session.path().display(), "already cropping");
            return DispatchOutcome::Ignored;
        }
        session
            .surface_mut()
            .start_drawing_mode(SurfaceMode::Cropper, None);
        session.set_crop_state(CropState::Cropping);
        tracing::info!(path = %session.path().display(), "crop started");
        DispatchOutcome::Applied { synced: false }
    }

    async fn apply_crop(&self, session: &mut Session) -> Result<DispatchOutcome, DispatchError> {
        if session.crop_state() != CropState::Cropping {
            tracing::debug!(path = %session.path().display(), "apply-crop outside cropping");
            return Ok(DispatchOutcome::Ignored);
        }

        let rect = session.surface().crop_zone_rect();
        // On failure the session stays in Cropping so the user can retry or cancel.
        session.surface_mut().crop(rect).await?;
        session.surface_mut().stop_drawing_mode();
        session.set_crop_state(CropState::Idle);
        session.correct_container_size();
        tracing::info!(
            path = %session.path().display(),
            width = rect.width,
            height = rect.height,
            "crop applied"
        );
        self.sync(session).await
    }

    /// Leaves crop mode without committing. `Ignored` if the session was not cropping.
    pub fn cancel_crop(&self, session: &mut Session) -> DispatchOutcome {
        if session.crop_state() != CropState::Cropping {
            tracing::debug!(path = %session.path().display(), "cancel-crop outside cropping");
            return DispatchOutcome::Ignored;
        }
        session.surface_mut().stop_drawing_mode();
        session.set_crop_state(CropState::Idle);
        tracing::info!(path = %session.path().display(), "crop cancelled");
        DispatchOutcome::Applied { synced: false }
    }

    async fn sync(&self, session: &mut Session) -> Result<DispatchOutcome, DispatchError> {
        session.update_model().await?;
        Ok(DispatchOutcome::Applied { synced: true })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/dispatcher.rs"]
mod tests;
