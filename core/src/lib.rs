//! Synchronous client core for the greeting/calculator service.
//!
//! # Overview
//! Builds `HttpRequest` values and interprets `HttpResponse` values without
//! touching the network (host-does-IO pattern). The host executes the actual
//! round-trip, which keeps everything here deterministic and testable.
//!
//! # Design
//! - `ApiClient` is stateless and holds only `base_url`.
//! - Generic calls go through `build_get` / `build_post` and `evaluate`, which
//!   folds any response into a `RequestResult` with exactly one of
//!   `content` / `error` set.
//! - Typed calls pair a `build_*` with a `parse_*` per endpoint.
//! - `CheckRecord` renders the per-call summary printed by the checker.
//! - DTOs are defined independently from the server crate; integration tests
//!   catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod report;
pub mod types;

pub use client::{evaluate, params, ApiClient};
pub use error::ClientError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Params};
pub use report::CheckRecord;
pub use types::{ApiOptions, Concatenation, ErrorBody, Greeting, RequestResult, SquareResult, UserName};
