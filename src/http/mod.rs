//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → routing::Resolver (redirect or fallback)
//!     → response.rs (302 Found / 404 Not Found)
//!     → Send to client
//! ```

pub mod response;
pub mod server;

pub use server::{HttpServer, X_REQUEST_ID};
