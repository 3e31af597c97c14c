//! Response DTOs and the evaluated result of a call.
//!
//! The DTOs mirror the server's schema but are defined here on their own so
//! the client never links against axum.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiOptions {
    pub api_methods: BTreeMap<String, String>,
    pub errors: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub greeting: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareResult {
    pub result: i128,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concatenation {
    pub concatenation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserName {
    pub user: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Outcome of an evaluated call. Exactly one of `content` and `error` is set
/// once the call completes; the constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestResult {
    content: Option<Value>,
    error: Option<Value>,
}

impl RequestResult {
    pub fn content(value: Value) -> Self {
        Self {
            content: Some(value),
            error: None,
        }
    }

    pub fn error(value: Value) -> Self {
        Self {
            content: None,
            error: Some(value),
        }
    }

    /// An error shaped like the server's envelope, for failures that never
    /// produced a response.
    pub fn error_message(message: impl Into<String>) -> Self {
        Self::error(json!({ "message": message.into() }))
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn content_value(&self) -> Option<&Value> {
        self.content.as_ref()
    }

    pub fn error_value(&self) -> Option<&Value> {
        self.error.as_ref()
    }

    /// The `message` of an enveloped error, if there is one.
    pub fn error_text(&self) -> Option<&str> {
        self.error.as_ref()?.get("message")?.as_str()
    }
}
