//! Batch driver that issues calls in order and reports each outcome.

use std::io::Write;

use api_core::{CheckRecord, HttpMethod, Params};
use tracing::info;

use crate::client::HttpClient;
use crate::error::CheckError;
use crate::transport::Transport;

/// Issues one call per `(url, params)` pair, strictly sequentially, and
/// writes a summary block for each to `out`.
pub struct ApiChecker<T, W> {
    client: HttpClient<T>,
    out: W,
}

impl<T: Transport, W: Write> ApiChecker<T, W> {
    pub fn new(client: HttpClient<T>, out: W) -> Self {
        Self { client, out }
    }

    /// GET every url with the params at the same index. `None` sends no
    /// query string.
    pub fn check_get_requests(
        &mut self,
        urls: &[&str],
        params: &[Option<Params>],
    ) -> Result<Vec<CheckRecord>, CheckError> {
        self.check(HttpMethod::Get, urls, params)
    }

    /// POST every url with the form data at the same index. Query parameters
    /// for a POST must be encoded in the url itself.
    pub fn check_post_requests(
        &mut self,
        urls: &[&str],
        data: &[Option<Params>],
    ) -> Result<Vec<CheckRecord>, CheckError> {
        self.check(HttpMethod::Post, urls, data)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn check(
        &mut self,
        method: HttpMethod,
        urls: &[&str],
        inputs: &[Option<Params>],
    ) -> Result<Vec<CheckRecord>, CheckError> {
        if urls.len() != inputs.len() {
            return Err(CheckError::LengthMismatch {
                urls: urls.len(),
                inputs: inputs.len(),
            });
        }

        let mut records = Vec::with_capacity(urls.len());
        for (url, input) in urls.iter().zip(inputs) {
            let record = match method {
                HttpMethod::Get => CheckRecord {
                    method,
                    url: url.to_string(),
                    result: self.client.get(url, input.as_ref()),
                    params: input.clone(),
                    data: None,
                },
                HttpMethod::Post => CheckRecord {
                    method,
                    url: url.to_string(),
                    result: self.client.post(url, input.as_ref()),
                    params: None,
                    data: input.clone(),
                },
            };
            writeln!(self.out, "{record}\n")?;
            records.push(record);
        }

        let failed = records.iter().filter(|r| r.result.is_error()).count();
        info!(%method, calls = records.len(), failed, "batch finished");
        Ok(records)
    }
}
