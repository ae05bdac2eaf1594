//! image-editor: headless core for an embedded bitmap-editing panel.
//!
//! Modules:
//! - core: command grammar (ids, arguments, labels)
//! - kernel: document binding, command dispatch, operator panel, view lifecycle, sessions
//! - kernel::services: collaborator ports and local adapters
//! - logging: tracing setup
//! - ui: terminal rendering of the panel view (feature `tui`)

pub mod core;
pub mod kernel;
pub mod logging;
#[cfg(feature = "tui")]
pub mod ui;

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
pub(crate) mod test_support;
