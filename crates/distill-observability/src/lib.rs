//! # distill-observability
//!
//! Tracing subscriber setup and per-operation span macros shared by the
//! algorithmic crates.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_with_filter};
