//! View components for the carousel screen.

pub mod tile;

pub use tile::{pulse_scale, tile};
