//! Service adapters: local implementations of the ports.

pub mod blob;
pub mod document;
pub mod frame;
pub mod settings;

pub use blob::MemoryBlobStore;
pub use document::TextDocumentModel;
pub use frame::YieldFrameClock;
pub use settings::{
    ensure_log_dir, ensure_settings_file, get_log_dir, get_settings_path, load_settings,
    load_settings_from, save_settings_to, SettingsError,
};
