//! HTTP transport types and the `Transport` seam.
//!
//! # Design
//! Requests and responses are plain data. `CommentClient` builds an
//! `HttpRequest`, hands it to an injected `Transport`, and interprets the
//! `HttpResponse` it gets back. Base URL, TLS, timeouts and connection reuse
//! all belong to the transport; paths in `HttpRequest` are relative to
//! whatever base the transport resolves them against.

use std::fmt;

/// Error type a `Transport` reports when it cannot produce a response.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// `body` holds the raw bytes as received; the client decodes them only
/// after the status check passes.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// Sends one request and returns the server's response.
///
/// Implementations must return every status code as data; interpreting the
/// status is the client's job. Errors are reserved for failures to obtain a
/// response at all.
pub trait Transport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request)
    }
}
