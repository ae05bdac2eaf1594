use std::path::{Path, PathBuf};

use super::ready::ReadySignal;

/// Text content of a persisted document. For images the text is the bare base64 payload,
/// without a `data:` prefix.
pub trait DocumentModel {
    fn content(&self) -> String;

    fn set_content(&mut self, text: &str);
}

/// Host-owned view of one open document.
pub struct DocumentContext {
    path: PathBuf,
    mime_subtype: String,
    model: Box<dyn DocumentModel>,
    ready: ReadySignal,
}

impl DocumentContext {
    pub fn new(
        path: impl Into<PathBuf>,
        mime_subtype: impl Into<String>,
        model: Box<dyn DocumentModel>,
        ready: ReadySignal,
    ) -> Self {
        Self {
            path: path.into(),
            mime_subtype: mime_subtype.into(),
            model,
            ready,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn set_path(&mut self, path: PathBuf) {
        self.path = path;
    }

    pub fn mime_subtype(&self) -> &str {
        &self.mime_subtype
    }

    pub fn model(&self) -> &dyn DocumentModel {
        self.model.as_ref()
    }

    pub fn model_mut(&mut self) -> &mut dyn DocumentModel {
        self.model.as_mut()
    }

    pub fn ready(&self) -> &ReadySignal {
        &self.ready
    }
}

/// Mime subtype for an image path, based on its extension.
pub fn mime_subtype_for_path(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("jpeg".to_string()),
        "" => None,
        _ => Some(ext),
    }
}
