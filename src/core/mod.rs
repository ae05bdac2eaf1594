//! Command grammar shared by the panel, the dispatcher and the host palette.

pub mod command;

pub use command::{
    is_hex_color, Command, CommandError, DrawMode, FlipKind, RotateDirection, COMMAND_NAMES,
    COMMAND_PREFIX, PALETTE_CATEGORY,
};
