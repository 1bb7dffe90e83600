//! URL shortener: redirect mapped request paths, fall back for the rest.
//!
//! # Architecture Overview
//!
//! ```text
//!     redirects.yaml / redirects.json
//!              │
//!              ▼
//!     ┌─────────────────┐    ┌──────────────┐
//!     │ mapping::decode │───▶│   Mapping    │  (last write wins)
//!     └─────────────────┘    └──────┬───────┘
//!                                   │ Arc
//!     Client Request                ▼
//!     ─────────────▶ http::HttpServer ─▶ routing::Resolver ─┬─▶ 302 Found + Location
//!                    (trace, timeout,                       │
//!                     request id)                           └─▶ fallback (404)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use axum::Router;
//! use urlshort::{http::response::not_found, yaml_handler};
//!
//! # fn main() -> Result<(), urlshort::DecodeError> {
//! let yaml = b"- path: /slack\n  url: https://slack.com\n";
//! let fallback = Router::new().fallback(not_found);
//! let app: Router = Router::new().fallback_service(yaml_handler(yaml, fallback)?);
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod mapping;
pub mod routing;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use mapping::{decode, DecodeError, Format, Mapping, PathUrlRecord};
pub use routing::{handler, json_handler, map_handler, yaml_handler, HitPolicy, Resolver};
