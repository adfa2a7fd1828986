//! Output module: shapes the catalog for the configured target and writes
//! it under the scan root.

mod emit;
mod model;

pub use emit::emit;
pub use model::{OutputModel, assemble};
