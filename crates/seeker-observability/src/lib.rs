//! # seeker-observability
//!
//! Tracing subscriber setup and the structured events emitted by search
//! and model components.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_from_config, init_tracing_with_filter};
