//! Open document sessions.

use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::kernel::services::ports::{
    DocumentContext, EditingSurface, ReadySignal,
};

use super::binding::{BindingError, DocumentBinding, LoadOutcome};

pub const FACTORY_NAME: &str = "ImageEditor";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CropState {
    #[default]
    Idle,
    Cropping,
}

/// One open document paired with its surface.
pub struct Session {
    document: DocumentContext,
    surface: Box<dyn EditingSurface>,
    surface_ready: ReadySignal,
    binding: DocumentBinding,
    crop: CropState,
    container_max_height: u32,
}

impl Session {
    pub fn new(
        document: DocumentContext,
        surface: Box<dyn EditingSurface>,
        surface_ready: ReadySignal,
        binding: DocumentBinding,
        container_max_height: u32,
    ) -> Self {
        Self {
            document,
            surface,
            surface_ready,
            binding,
            crop: CropState::Idle,
            container_max_height,
        }
    }

    pub fn path(&self) -> &Path {
        self.document.path()
    }

    pub fn document(&self) -> &DocumentContext {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut DocumentContext {
        &mut self.document
    }

    pub fn surface(&self) -> &dyn EditingSurface {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> &mut dyn EditingSurface {
        self.surface.as_mut()
    }

    pub fn binding(&self) -> &DocumentBinding {
        &self.binding
    }

    pub fn crop_state(&self) -> CropState {
        self.crop
    }

    pub(crate) fn set_crop_state(&mut self, state: CropState) {
        self.crop = state;
    }

    pub fn container_max_height(&self) -> u32 {
        self.container_max_height
    }

    /// Called by the host when the container's max-height style changes.
    pub fn set_container_max_height(&mut self, px: u32) {
        self.container_max_height = px;
    }

    /// Pushes the container max-height back onto the surface after a crop.
    pub fn correct_container_size(&mut self) {
        self.surface.set_root_max_height(self.container_max_height);
    }

    pub async fn load(&mut self) -> Result<LoadOutcome, BindingError> {
        self.binding
            .load(&self.document, &self.surface_ready, self.surface.as_mut())
            .await
    }

    pub async fn update_model(&mut self) -> Result<(), BindingError> {
        self.binding
            .update_model(self.surface.as_ref(), &mut self.document)
            .await
    }

    fn set_path(&mut self, path: PathBuf) {
        self.document.set_path(path);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoreEntry {
    pub path: PathBuf,
    pub factory: String,
}

/// Sessions keyed by path, plus the one the dispatcher acts on.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: FxHashMap<PathBuf, Session>,
    order: Vec<PathBuf>,
    current: Option<PathBuf>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Registers `session` and makes it current. A session already open at the same path is
    /// replaced.
    pub fn open(&mut self, session: Session) -> &mut Session {
        let path = session.path().to_path_buf();
        if !self.order.contains(&path) {
            self.order.push(path.clone());
        }
        self.current = Some(path.clone());
        match self.sessions.entry(path) {
            Entry::Occupied(mut entry) => {
                tracing::debug!(path = %entry.key().display(), "replacing open session");
                entry.insert(session);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(session),
        }
    }

    pub fn close(&mut self, path: &Path) -> Option<Session> {
        let session = self.sessions.remove(path)?;
        self.order.retain(|p| p != path);
        if self.current.as_deref() == Some(path) {
            self.current = None;
        }
        Some(session)
    }

    pub fn activate(&mut self, path: &Path) -> bool {
        if !self.sessions.contains_key(path) {
            return false;
        }
        self.current = Some(path.to_path_buf());
        true
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current.as_deref()
    }

    pub fn current(&self) -> Option<&Session> {
        self.sessions.get(self.current.as_deref()?)
    }

    pub fn current_mut(&mut self) -> Option<&mut Session> {
        let path = self.current.as_deref()?;
        self.sessions.get_mut(path)
    }

    pub fn get(&self, path: &Path) -> Option<&Session> {
        self.sessions.get(path)
    }

    pub fn get_mut(&mut self, path: &Path) -> Option<&mut Session> {
        self.sessions.get_mut(path)
    }

    /// Moves a session to a new path after the document was renamed.
    pub fn rename(&mut self, from: &Path, to: PathBuf) -> bool {
        if from == to || self.sessions.contains_key(&to) {
            return false;
        }
        let Some(mut session) = self.sessions.remove(from) else {
            return false;
        };
        session.set_path(to.clone());
        self.sessions.insert(to.clone(), session);
        if let Some(slot) = self.order.iter_mut().find(|p| p.as_path() == from) {
            *slot = to.clone();
        }
        if self.current.as_deref() == Some(from) {
            self.current = Some(to);
        }
        true
    }

    /// Paths in open order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.order
    }

    pub fn restore_entries(&self) -> Vec<RestoreEntry> {
        self.order
            .iter()
            .map(|path| RestoreEntry {
                path: path.clone(),
                factory: FACTORY_NAME.to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/session.rs"]
mod tests;
