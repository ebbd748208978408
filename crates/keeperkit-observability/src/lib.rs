//! # keeperkit-observability
//!
//! Structured logging setup for applications built on keeperkit.
//!
//! The library crates only emit through `tracing`; call [`init_tracing`] once
//! at startup to see their output. Levels are configurable per component and
//! output can be human-readable text or JSON (ELK, Loki, CloudWatch).

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, try_init_tracing, LogConfig};
