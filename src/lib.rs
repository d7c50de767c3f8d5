//! Grid Drive (workspace facade crate).
//!
//! Re-exports the workspace crates as `grid_drive::{core,input,term,types}` and
//! hosts the pieces only the binary needs: environment config and log setup.

pub mod config;
pub mod logging;

pub use grid_drive_core as core;
pub use grid_drive_input as input;
pub use grid_drive_term as term;
pub use grid_drive_types as types;
