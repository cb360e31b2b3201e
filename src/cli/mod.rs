//! Command-line interface module.

mod args;
pub mod common;
pub mod presets;
pub mod size;
pub mod uri;

pub use args::{Cli, Commands};
