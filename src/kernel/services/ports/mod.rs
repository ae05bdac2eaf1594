//! Service ports: traits + data contracts.

pub mod blob;
pub mod config;
pub mod document;
pub mod frame;
pub mod host;
pub mod ready;
pub mod runtime;
pub mod settings;
pub mod surface;

pub use blob::{Blob, BlobStore};
pub use config::EditorConfig;
pub use document::{mime_subtype_for_path, DocumentContext, DocumentModel};
pub use frame::FrameClock;
pub use host::{HostShell, PANEL_ID};
pub use ready::{ready_pair, ReadyError, ReadyResolver, ReadySignal};
pub use runtime::LocalBoxFuture;
pub use settings::Settings;
pub use surface::{
    BrushOptions, CropRect, EditingSurface, FilterOptions, SurfaceError, SurfaceMode,
};
