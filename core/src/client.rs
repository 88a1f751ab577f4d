//! Request builder, transport driver, and response parser for the comment API.
//!
//! # Design
//! Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`. The
//! high-level methods (`list_comments`, `add_comment`, `update_comment`) glue
//! the two halves together with exactly one call to the injected `Transport`.
//! Hosts that do their own I/O can call the halves directly.
//!
//! Every `parse_*` method checks the status code first, then decodes JSON,
//! then hands the value to the `reader` module.

use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::reader::{read_comment, read_comment_list};
use crate::types::{Comment, NewComment, UpdateComment};

const STATUS_OK: u16 = 200;
const STATUS_CREATED: u16 = 201;

/// Synchronous client for the comment API.
///
/// Holds nothing but the transport, so calls share no state. Concurrent use
/// is as safe as the transport is.
#[derive(Debug, Clone)]
pub struct CommentClient<T> {
    transport: T,
}

impl<T> CommentClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn build_list_comments(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: "comments".to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_add_comment(&self, input: &NewComment) -> ApiResult<HttpRequest> {
        json_request(HttpMethod::Post, "comment".to_string(), input)
    }

    /// Fails with `ApiError::NothingToUpdate` when `input` carries no field.
    pub fn build_update_comment(&self, id: u64, input: &UpdateComment) -> ApiResult<HttpRequest> {
        if input.is_empty() {
            return Err(ApiError::NothingToUpdate);
        }
        json_request(HttpMethod::Put, format!("comment/{id}"), input)
    }

    pub fn parse_list_comments(&self, response: HttpResponse) -> ApiResult<Vec<Comment>> {
        let value = decode_body(&response, STATUS_OK)?;
        read_comment_list(&value).map_err(|e| rejected(e.into()))
    }

    pub fn parse_add_comment(&self, response: HttpResponse) -> ApiResult<Comment> {
        let value = decode_body(&response, STATUS_CREATED)?;
        read_comment(&value).map_err(|e| rejected(e.into()))
    }

    pub fn parse_update_comment(&self, response: HttpResponse) -> ApiResult<Comment> {
        let value = decode_body(&response, STATUS_OK)?;
        read_comment(&value).map_err(|e| rejected(e.into()))
    }
}

impl<T: Transport> CommentClient<T> {
    /// `GET comments`, expecting 200 and an array of comments.
    pub fn list_comments(&self) -> ApiResult<Vec<Comment>> {
        let request = self.build_list_comments();
        let response = self.send(&request)?;
        self.parse_list_comments(response)
    }

    /// `POST comment`, expecting 201 and the created comment.
    pub fn add_comment(&self, name: &str, text: &str) -> ApiResult<Comment> {
        let input = NewComment {
            name: name.to_string(),
            text: text.to_string(),
        };
        let request = self.build_add_comment(&input)?;
        let response = self.send(&request)?;
        self.parse_add_comment(response)
    }

    /// `PUT comment/{id}`, expecting 200 and the updated comment.
    ///
    /// No request is sent when `input` is empty.
    pub fn update_comment(&self, id: u64, input: &UpdateComment) -> ApiResult<Comment> {
        let request = self.build_update_comment(id, input)?;
        let response = self.send(&request)?;
        self.parse_update_comment(response)
    }

    fn send(&self, request: &HttpRequest) -> ApiResult<HttpResponse> {
        debug!(method = %request.method, path = %request.path, "sending request");
        let response = self.transport.send(request).map_err(ApiError::Transport)?;
        debug!(status = response.status, "received response");
        Ok(response)
    }
}

fn json_request<B: serde::Serialize>(method: HttpMethod, path: String, body: &B) -> ApiResult<HttpRequest> {
    let body = serde_json::to_string(body).map_err(ApiError::Serialization)?;
    Ok(HttpRequest {
        method,
        path,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

/// Status check followed by JSON decode. Any status other than `expected`
/// is an error, including other 2xx codes.
fn decode_body(response: &HttpResponse, expected: u16) -> ApiResult<Value> {
    if response.status != expected {
        return Err(rejected(ApiError::BadStatus {
            expected,
            actual: response.status,
        }));
    }
    serde_json::from_slice(&response.body).map_err(|e| rejected(ApiError::BadJson(e)))
}

fn rejected(err: ApiError) -> ApiError {
    debug!(error = %err, "rejecting response");
    err
}
