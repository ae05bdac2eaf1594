use crate::kernel::services::ports::DocumentModel;

/// In-memory document model.
#[derive(Debug, Clone, Default)]
pub struct TextDocumentModel {
    text: String,
    revision: u64,
    dirty: bool,
}

impl TextDocumentModel {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            revision: 0,
            dirty: false,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }
}

impl DocumentModel for TextDocumentModel {
    fn content(&self) -> String {
        self.text.clone()
    }

    fn set_content(&mut self, text: &str) {
        if self.text == text {
            return;
        }
        self.text.clear();
        self.text.push_str(text);
        self.revision += 1;
        self.dirty = true;
    }
}
