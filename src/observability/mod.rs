//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! startup, resolver, tower-http TraceLayer
//!     → tracing events inside a per-request span (method, uri, request_id)
//!     → logging.rs subscriber (text or JSON to stdout)
//! ```
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - `RUST_LOG` overrides the configured level
//! - No metrics endpoint

pub mod logging;
