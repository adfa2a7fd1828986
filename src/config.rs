//! Configuration loader and schema types.
//!
//! Settings choose the pipeline policy (section association, timestamp
//! source, output target) and scanning behavior. The section manifest itself
//! is not configuration; it lives in `library::manifest`.

mod load;
mod schema;

pub use schema::*;
