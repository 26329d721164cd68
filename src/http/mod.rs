//! HTTP request/response plumbing
//!
//! This module provides the thin HTTP layer under the resource modules: a
//! request builder that assembles URL, query string, headers, and JSON body,
//! and a response wrapper that dispatches to a parsed value or an
//! [`crate::Error`].

pub use request::RequestBuilder;
pub use response::Response;

mod request;
mod response;

// Re-export HTTP types from the http crate for convenience
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
