//! Terminal rendering for the panel view.

pub mod panel;

pub use panel::panel_lines;
