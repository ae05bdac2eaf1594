//! Document <-> surface synchronization.
//!
//! Load copies the document's base64 text into the surface once both sides are ready.
//! `update_model` is the only writer of the document model: it waits one frame, exports
//! the surface and stores the bare base64 payload.

use std::rc::Rc;

use crate::kernel::services::ports::{
    Blob, BlobStore, DocumentContext, EditingSurface, FrameClock, ReadySignal, SurfaceError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    SkippedEmpty,
    SkippedUnchanged,
}

#[derive(Debug, thiserror::Error)]
pub enum BindingError {
    #[error("{0} never became ready")]
    NotReady(&'static str),
    #[error("document content is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("surface export is not a base64 data URL")]
    MalformedDataUrl,
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

pub struct DocumentBinding {
    blobs: Rc<dyn BlobStore>,
    frames: Rc<dyn FrameClock>,
    /// Payload last exchanged with the surface, in either direction.
    last_synced: Option<String>,
    loads: u64,
    syncs: u64,
}

impl DocumentBinding {
    pub fn new(blobs: Rc<dyn BlobStore>, frames: Rc<dyn FrameClock>) -> Self {
        Self {
            blobs,
            frames,
            last_synced: None,
            loads: 0,
            syncs: 0,
        }
    }

    pub fn load_count(&self) -> u64 {
        self.loads
    }

    pub fn sync_count(&self) -> u64 {
        self.syncs
    }

    pub fn last_synced(&self) -> Option<&str> {
        self.last_synced.as_deref()
    }

    pub async fn load(
        &mut self,
        document: &DocumentContext,
        surface_ready: &ReadySignal,
        surface: &mut dyn EditingSurface,
    ) -> Result<LoadOutcome, BindingError> {
        let (doc_ready, surface_ready) = tokio::join!(document.ready().wait(), surface_ready.wait());
        doc_ready.map_err(|_| BindingError::NotReady("document"))?;
        surface_ready.map_err(|_| BindingError::NotReady("surface"))?;

        let path = document.path();
        let payload = normalize_payload(&document.model().content());
        if payload.is_empty() {
            tracing::debug!(path = %path.display(), "document is empty, surface left blank");
            return Ok(LoadOutcome::SkippedEmpty);
        }
        if self.last_synced.as_deref() == Some(payload.as_str()) {
            tracing::debug!(path = %path.display(), "surface already shows document content");
            return Ok(LoadOutcome::SkippedUnchanged);
        }

        let blob = Blob::from_base64(&payload, document.mime_subtype())?;
        let bytes = blob.len();
        let url = self.blobs.create_object_url(blob);
        let name = path.to_string_lossy().into_owned();
        let result = surface.load_image_from_url(&url, &name).await;
        self.blobs.revoke_object_url(&url);
        result?;

        self.last_synced = Some(payload);
        self.loads += 1;
        tracing::info!(path = %path.display(), bytes, "image loaded into surface");
        Ok(LoadOutcome::Loaded)
    }

    pub async fn update_model(
        &mut self,
        surface: &dyn EditingSurface,
        document: &mut DocumentContext,
    ) -> Result<(), BindingError> {
        // Let the surface finish its pending re-render before exporting.
        self.frames.next_frame().await;

        let data_url = surface.to_data_url();
        let payload = strip_data_url(&data_url).ok_or(BindingError::MalformedDataUrl)?;
        document.model_mut().set_content(payload);
        self.last_synced = Some(payload.to_string());
        self.syncs += 1;
        tracing::debug!(
            path = %document.path().display(),
            bytes = payload.len(),
            syncs = self.syncs,
            "model synced from surface"
        );
        Ok(())
    }
}

/// Returns the base64 payload of a `data:<mime>;base64,<payload>` URL.
pub fn strip_data_url(url: &str) -> Option<&str> {
    let rest = url.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    meta.ends_with(";base64").then_some(payload)
}

/// Stored payloads may be line-wrapped; the decoder and comparisons work on the bare text.
fn normalize_payload(content: &str) -> String {
    content.chars().filter(|c| !c.is_ascii_whitespace()).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/binding.rs"]
mod tests;
