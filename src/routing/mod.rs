//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path)
//!     → resolver.rs (percent-decode, exact lookup in Mapping)
//!     → hit:  302 Found, Location = mapped URL
//!     → miss: fallback service
//! ```
//!
//! # Design Decisions
//! - Mapping compiled at startup, immutable at runtime
//! - Path percent-decoded, otherwise compared as received
//! - Lookup is total: every request either redirects or falls back

pub mod resolver;

pub use resolver::{
    handler, json_handler, lookup_path, map_handler, yaml_handler, HitPolicy, Resolver,
};
