use std::cell::{Cell, RefCell};

use rustc_hash::FxHashMap;

use crate::kernel::services::ports::{Blob, BlobStore};

const URL_SCHEME: &str = "blob:image-editor/";

/// In-process object URL table.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: RefCell<FxHashMap<String, Blob>>,
    next_id: Cell<u64>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_urls(&self) -> usize {
        self.blobs.borrow().len()
    }
}

impl BlobStore for MemoryBlobStore {
    fn create_object_url(&self, blob: Blob) -> String {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let url = format!("{URL_SCHEME}{id}");
        self.blobs.borrow_mut().insert(url.clone(), blob);
        url
    }

    fn resolve(&self, url: &str) -> Option<Blob> {
        self.blobs.borrow().get(url).cloned()
    }

    fn revoke_object_url(&self, url: &str) -> bool {
        self.blobs.borrow_mut().remove(url).is_some()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/blob.rs"]
mod tests;
