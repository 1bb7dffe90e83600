//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Read + decode redirects → Build server → Bind
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then mappings, then listener
//! - Fail fast: a bad redirects document aborts startup

pub mod signals;
pub mod startup;

pub use signals::shutdown_signal;
pub use startup::{load_mapping, StartupError};
