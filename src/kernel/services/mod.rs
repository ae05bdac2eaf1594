//! Services layer (ports + adapters).
//!
//! - `ports`: collaborator contracts and data types used by the kernel.
//! - `adapters`: in-process implementations (blob table, frame clock, settings files).

pub mod adapters;
pub mod ports;
