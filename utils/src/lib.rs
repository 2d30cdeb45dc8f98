//! Shared utilities for addrcheck.

pub mod logging;

pub use logging::{init_tracing, LogFormat};
