//! lockstep_bench - Deterministic Cross-Language Benchmark Catalog
//!
//! A fixed catalog of 32 CPU-bound benchmark kernels. Every kernel derives
//! its own input from a documented LCG (seed 42), runs a fully specified
//! algorithm, and prints an exact result line — so a port in any language
//! can be verified byte for byte against this reference.
//!
//! # Modules
//!
//! - [`lcg`] - the shared deterministic input generator (variants A and B)
//! - [`kernels`] - the catalog: registry plus one module per family
//! - [`config`] - runner configuration (observability knobs only)
//! - [`logging`] - tracing setup; stdout stays reserved for results
//! - [`error`] - fatal invocation errors

pub mod config;
pub mod error;
pub mod kernels;
pub mod lcg;
pub mod logging;

// Convenient re-exports at crate root
pub use error::CatalogError;
pub use kernels::{CHECKSUM_MOD, Family, KERNELS, Kernel};
pub use lcg::Lcg;
