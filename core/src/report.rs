//! Per-call summary printed by the checker.

use std::fmt;

use serde_json::Value;

use crate::http::{HttpMethod, Params};
use crate::types::RequestResult;

/// One issued call and its evaluated outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckRecord {
    pub method: HttpMethod,
    pub url: String,
    pub params: Option<Params>,
    pub data: Option<Params>,
    pub result: RequestResult,
}

impl fmt::Display for CheckRecord {
    /// Renders a fixed-layout block. Keys inside params/data are sorted so the
    /// output is stable across runs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "When")?;
        writeln!(f, "\t -Method: {}", self.method)?;
        writeln!(f, "\t -Url: {}", self.url)?;
        writeln!(f, "\t -Params: {}", render_params(self.params.as_ref()))?;
        writeln!(f, "\t -Data: {}", render_params(self.data.as_ref()))?;
        match (self.result.error_value(), self.result.content_value()) {
            (Some(error), _) => write!(f, "\t -Error: {error}"),
            (None, Some(content)) => write!(f, "\t -Result: {content}"),
            (None, None) => write!(f, "\t -Result: None"),
        }
    }
}

fn render_params(params: Option<&Params>) -> String {
    match params {
        None => "None".to_string(),
        Some(params) => {
            // Stable sort: repeated keys keep the order they are sent in.
            let mut sorted: Vec<&(String, String)> = params.iter().collect();
            sorted.sort_by(|a, b| a.0.cmp(&b.0));
            let fields: Vec<String> = sorted
                .into_iter()
                .map(|(k, v)| format!("{}:{}", Value::from(k.as_str()), Value::from(v.as_str())))
                .collect();
            format!("{{{}}}", fields.join(","))
        }
    }
}
