//! Executes `HttpRequest` values built by `api-core`.

use std::time::Duration;

use api_core::{HttpMethod, HttpRequest, HttpResponse};
use tracing::debug;
use ureq::{Agent, RequestBuilder};

use crate::error::TransportError;

/// Performs one blocking HTTP round-trip.
///
/// A non-2xx status is a successful round-trip: implementations return it as
/// an `HttpResponse`, never as an error.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<F> Transport for F
where
    F: Fn(&HttpRequest) -> Result<HttpResponse, TransportError>,
{
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self(request)
    }
}

/// `Transport` backed by a ureq agent.
#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    /// `timeout` bounds each whole call; `None` keeps ureq's defaults.
    pub fn new(timeout: Option<Duration>) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        debug!(method = %request.method, url = %request.url, "sending request");
        let mut response = match request.method {
            HttpMethod::Get => prepare(self.agent.get(&request.url), request).call()?,
            HttpMethod::Post => {
                let builder = prepare(self.agent.post(&request.url), request);
                if request.form.is_empty() {
                    builder.send_empty()?
                } else {
                    builder.send_form(request.form.iter().map(|(k, v)| (k.as_str(), v.as_str())))?
                }
            }
        };

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_string()?;
        debug!(status, bytes = body.len(), "received response");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Apply the request's headers and query string, whatever the body type.
fn prepare<B>(mut builder: RequestBuilder<B>, request: &HttpRequest) -> RequestBuilder<B> {
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    for (name, value) in &request.query {
        builder = builder.query(name, value);
    }
    builder
}
