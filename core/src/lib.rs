//! Synchronous client for a remote comment service.
//!
//! # Overview
//! Lists, creates, and updates comments over HTTP and validates every
//! response body into typed `Comment` values or a precise `ApiError`.
//!
//! # Design
//! - `CommentClient` holds only an injected `Transport`; it owns no base URL,
//!   timeout, or retry policy.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so hosts that do their own I/O can skip
//!   the transport entirely.
//! - Response bodies are decoded into `serde_json::Value` and then shaped by
//!   the `reader` module, which reports the first failed structural check.
//! - `UreqTransport` (feature `ureq`) is the bundled blocking transport.

pub mod client;
pub mod error;
pub mod http;
pub mod reader;
#[cfg(feature = "ureq")]
pub mod transport;
pub mod types;

pub use client::CommentClient;
pub use error::{ApiError, ApiResult, StructureError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
pub use types::{Comment, NewComment, UpdateComment};
