//! HTTP wrapper with an evaluated mode and a raw mode.
//!
//! `get` / `post` always return a `RequestResult`; a refused connection or a
//! timeout becomes an `error` just like a 4xx does, so a batch of
//! heterogeneous calls never needs error handling. `get_raw` / `post_raw`
//! hand back the untouched response for callers that want the status code
//! and headers.

use api_core::{evaluate, ApiClient, HttpRequest, HttpResponse, Params, RequestResult};
use tracing::warn;

use crate::error::TransportError;
use crate::transport::Transport;

pub struct HttpClient<T> {
    api: ApiClient,
    transport: T,
}

impl<T: Transport> HttpClient<T> {
    pub fn new(server_url: &str, transport: T) -> Self {
        Self {
            api: ApiClient::new(server_url),
            transport,
        }
    }

    pub fn server_url(&self) -> &str {
        self.api.base_url()
    }

    pub fn get(&self, endpoint: &str, params: Option<&Params>) -> RequestResult {
        self.evaluated(self.api.build_get(endpoint, params))
    }

    pub fn post(&self, endpoint: &str, data: Option<&Params>) -> RequestResult {
        self.evaluated(self.api.build_post(endpoint, data))
    }

    pub fn get_raw(&self, endpoint: &str, params: Option<&Params>) -> Result<HttpResponse, TransportError> {
        self.transport.execute(&self.api.build_get(endpoint, params))
    }

    pub fn post_raw(&self, endpoint: &str, data: Option<&Params>) -> Result<HttpResponse, TransportError> {
        self.transport.execute(&self.api.build_post(endpoint, data))
    }

    fn evaluated(&self, request: HttpRequest) -> RequestResult {
        match self.transport.execute(&request) {
            Ok(response) => evaluate(&response),
            Err(e) => {
                warn!(method = %request.method, url = %request.url, error = %e, "request failed");
                RequestResult::error_message(format!("transport error: {e}"))
            }
        }
    }
}
