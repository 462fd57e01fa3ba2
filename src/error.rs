//! Catalog error taxonomy
//!
//! Intentionally narrow: the catalog is a controlled benchmark input, not a
//! user-facing tool. A bad invocation is fatal; kernels themselves never
//! fail for any non-negative `n`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unknown kernel: {0} (run with --list to see the catalog)")]
    UnknownKernel(String),

    #[error("Invalid size argument: {0} (expected a non-negative base-10 integer)")]
    InvalidSize(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),
}
