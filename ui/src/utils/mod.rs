//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: WASM-compatible logging macros for browser console
//!   output, with a tracing fallback for native test runs.
//! - **timers**: cooperative delays across wasm and native targets.

pub mod console_macros;
pub mod timers;

pub use timers::sleep_ms;
