//! meteomap-rs
//!
//! Workspace root. Re-exports [`meteomap_core`] so the demos in `demos/`
//! can be run with `cargo run --example <name>` from the repository root.
pub use meteomap_core::*;
