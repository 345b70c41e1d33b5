//! Development-time diagnostics.
//!
//! Layout passes report through `tracing`; this module wires a subscriber so
//! hosts and demos can see those events without setting one up themselves.

pub mod logging;

pub use logging::{install_panic_hook, install_tracing};
