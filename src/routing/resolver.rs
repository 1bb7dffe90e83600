//! Redirect resolution.
//!
//! # Responsibilities
//! - Look up the percent-decoded request path in the mapping (exact)
//! - Answer hits with `302 Found`
//! - Hand misses to the fallback service untouched
//!
//! # Design Decisions
//! - Implemented as a `tower::Service` so it plugs in anywhere axum accepts
//!   a fallback or a nested service
//! - Paths are percent-decoded once, like a Go `URL.Path`; no trailing-slash
//!   or case normalisation. Invalid UTF-8 after decoding keeps the raw path
//! - Mapping shared via `Arc`, read-only (thread-safe without locks)
//! - Fallback cloned per call, so the resolver is always ready

use std::borrow::Cow;
use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::{body::Body, http::Request, response::Response};
use futures_util::future::BoxFuture;
use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use tower::{Service, ServiceExt};

use crate::http::response;
use crate::mapping::{decode, DecodeError, Format, Mapping};

/// What the resolver does once a path is found in the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HitPolicy {
    /// Respond with the redirect and stop.
    #[default]
    Redirect,

    /// Respond with the redirect, but still run the fallback on the same
    /// request. Status and `Location` stay those of the redirect; the
    /// fallback's body is carried along and its status and headers are
    /// dropped. Kept for compatibility with deployments that relied on it.
    RedirectThenFallback,
}

/// Request handler that redirects mapped paths and delegates the rest.
#[derive(Debug, Clone)]
pub struct Resolver<F> {
    mapping: Arc<Mapping>,
    fallback: F,
    hit_policy: HitPolicy,
}

impl<F> Resolver<F> {
    pub fn new(mapping: Mapping, fallback: F) -> Self {
        Self::from_shared(Arc::new(mapping), fallback)
    }

    /// Build a resolver over a mapping that is already shared.
    pub fn from_shared(mapping: Arc<Mapping>, fallback: F) -> Self {
        Self {
            mapping,
            fallback,
            hit_policy: HitPolicy::default(),
        }
    }

    pub fn with_hit_policy(mut self, hit_policy: HitPolicy) -> Self {
        self.hit_policy = hit_policy;
        self
    }

    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    pub fn hit_policy(&self) -> HitPolicy {
        self.hit_policy
    }
}

impl<F> Service<Request<Body>> for Resolver<F>
where
    F: Service<Request<Body>, Response = Response, Error = Infallible> + Clone + Send + 'static,
    F::Future: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let fallback = self.fallback.clone();
        let path = lookup_path(request.uri().path()).into_owned();

        let location = match self.mapping.get(&path) {
            Some(url) => url.to_owned(),
            None => {
                tracing::debug!(path = %path, "No redirect mapped, delegating to fallback");
                return Box::pin(fallback.oneshot(request));
            }
        };

        tracing::debug!(path = %path, location = %location, "Redirecting");

        match self.hit_policy {
            HitPolicy::Redirect => Box::pin(async move { Ok(response::found(&location)) }),
            HitPolicy::RedirectThenFallback => Box::pin(async move {
                let fallback_response = fallback.oneshot(request).await?;
                Ok(response::found_with_body(
                    &location,
                    fallback_response.into_body(),
                ))
            }),
        }
    }
}

/// The key a request path is looked up under: percent-decoded, or the raw
/// path when the decoded bytes are not UTF-8.
pub fn lookup_path(raw: &str) -> Cow<'_, str> {
    percent_decode_str(raw)
        .decode_utf8()
        .unwrap_or(Cow::Borrowed(raw))
}

/// Resolver over an in-memory mapping.
pub fn map_handler<F>(mapping: Mapping, fallback: F) -> Resolver<F> {
    Resolver::new(mapping, fallback)
}

/// Decode a YAML redirects document and build a resolver from it.
pub fn yaml_handler<F>(bytes: &[u8], fallback: F) -> Result<Resolver<F>, DecodeError> {
    handler(Format::Yaml, bytes, fallback)
}

/// Decode a JSON redirects document and build a resolver from it.
pub fn json_handler<F>(bytes: &[u8], fallback: F) -> Result<Resolver<F>, DecodeError> {
    handler(Format::Json, bytes, fallback)
}

/// Decode a redirects document in `format` and build a resolver from it.
pub fn handler<F>(format: Format, bytes: &[u8], fallback: F) -> Result<Resolver<F>, DecodeError> {
    let records = decode(format, bytes)?;
    Ok(map_handler(Mapping::from_records(records), fallback))
}
