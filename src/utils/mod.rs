//! Utility modules.

pub mod size;
