//! # Arena Telemetry
//!
//! Observability for Agent Arena using structured logging and distributed tracing.
//!
//! ## Features
//! - Structured logging with `tracing`, as human-readable text or JSON
//! - Optional OpenTelemetry OTLP export
//! - Span helpers for comparisons and per-agent invocations
//!
//! ## Usage
//!
//! ```rust
//! use arena_telemetry::{init_telemetry, info};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     init_telemetry("agent-arena")?;
//!     info!("ready");
//!     Ok(())
//! }
//! ```

pub mod init;
pub mod spans;

// Re-export tracing macros for convenience
pub use tracing::{Instrument, Span, debug, error, info, instrument, trace, warn};

pub use init::{
    LogFormat, TelemetryError, init_telemetry, init_with_format, init_with_otlp,
    shutdown_telemetry,
};
pub use spans::{comparison_span, invocation_span};
