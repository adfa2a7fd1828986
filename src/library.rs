//! Library module: turns a scan root and its section manifest into a
//! catalog of sections and tracks.
//!
//! Stages run in order: `manifest` -> `scan` + `sidecar` -> `build` ->
//! `aggregate`.

mod aggregate;
mod build;
mod manifest;
mod model;
mod scan;
mod sidecar;

pub use aggregate::aggregate;
pub use manifest::load_manifest;
pub use model::*;
