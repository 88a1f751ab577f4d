//! Domain types for the comment API.
//!
//! # Design
//! The client never decodes a response into `Comment` through serde: bodies
//! go through the `reader` module so every structural failure maps to a
//! precise `StructureError`. The types are defined independently from the
//! mock-server crate; integration tests catch any schema drift between the
//! two.

use serde::{Deserialize, Serialize};

/// A single comment returned by the API.
///
/// Only built by the `reader` module or by callers through `Comment::new`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Comment {
    pub id: u64,
    pub name: String,
    pub text: String,
}

impl Comment {
    pub fn new(id: u64, name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Request payload for creating a new comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComment {
    pub name: String,
    pub text: String,
}

/// Request payload for updating an existing comment. Only the fields present
/// are sent; omitted fields remain unchanged on the server.
///
/// An update with both fields absent is rejected by the client before any
/// request is built.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateComment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl UpdateComment {
    /// An update that only changes the name.
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            text: None,
        }
    }

    /// An update that only changes the text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            name: None,
            text: Some(text.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.text.is_none()
    }
}
