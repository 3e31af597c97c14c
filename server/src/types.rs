//! Response bodies, one struct per endpoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

const API_METHODS: [(&str, &str); 4] = [
    ("GET", "return the information"),
    ("POST", "create a resource"),
    ("DELETE", "delete some information"),
    ("PUT", "update some information"),
];

const API_ERRORS: [(&str, &str); 4] = [
    ("Error 400", "Bad Request"),
    ("Error 404", "Not Found"),
    ("Error 405", "Method Not Allowed"),
    ("Error 500", "Internal Server Error"),
];

/// `GET /options/`: common REST verbs and the errors this service returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiOptions {
    pub api_methods: BTreeMap<String, String>,
    pub errors: BTreeMap<String, String>,
}

impl ApiOptions {
    pub fn describe() -> Self {
        fn to_map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        }
        Self {
            api_methods: to_map(&API_METHODS),
            errors: to_map(&API_ERRORS),
        }
    }
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

/// The single error envelope: `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Decoded query string in arrival order. Empty values are kept; a key that
/// appears more than once resolves to its first value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryArgs(Vec<(String, String)>);

impl QueryArgs {
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl From<Vec<(String, String)>> for QueryArgs {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }
}
