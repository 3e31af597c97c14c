//! Stateless request builder and response interpreter.
//!
//! # Design
//! `ApiClient` holds only a `base_url`. Generic calls are built with
//! `build_get` / `build_post` and folded into a `RequestResult` by
//! [`evaluate`]. Each endpoint also gets a typed `build_*` / `parse_*` pair
//! for callers that want Rust values instead of JSON.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Params};
use crate::types::{ApiOptions, Concatenation, ErrorBody, Greeting, RequestResult, SquareResult, UserName};

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `endpoint` (for example `/sayhello/`) with optional query params.
    pub fn build_get(&self, endpoint: &str, params: Option<&Params>) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.url(endpoint),
            query: params.cloned().unwrap_or_default(),
            form: Vec::new(),
            headers: vec![accept_json()],
        }
    }

    /// POST `endpoint` with optional form data.
    pub fn build_post(&self, endpoint: &str, data: Option<&Params>) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            url: self.url(endpoint),
            query: Vec::new(),
            form: data.cloned().unwrap_or_default(),
            headers: vec![accept_json()],
        }
    }

    pub fn build_options(&self) -> HttpRequest {
        self.build_get("/options/", None)
    }

    pub fn build_say_hello(&self) -> HttpRequest {
        self.build_get("/sayhello/", None)
    }

    pub fn build_calculate(&self, num: i64) -> HttpRequest {
        self.build_get(&format!("/calculate/{num}"), None)
    }

    pub fn build_calculate_query(&self, num: i64) -> HttpRequest {
        self.build_get("/calculate/", Some(&params([("num", num.to_string().as_str())])))
    }

    pub fn build_concatenate(&self, cad1: &str, cad2: &str) -> HttpRequest {
        self.build_get("/concatenate/", Some(&params([("cad1", cad1), ("cad2", cad2)])))
    }

    pub fn build_get_user(&self, id: i64) -> HttpRequest {
        self.build_get(&format!("/users/{id}"), None)
    }

    pub fn parse_options(&self, response: HttpResponse) -> Result<ApiOptions, ClientError> {
        parse_json(response)
    }

    pub fn parse_say_hello(&self, response: HttpResponse) -> Result<String, ClientError> {
        parse_json::<Greeting>(response).map(|g| g.greeting)
    }

    pub fn parse_calculate(&self, response: HttpResponse) -> Result<i128, ClientError> {
        parse_json::<SquareResult>(response).map(|r| r.result)
    }

    pub fn parse_concatenate(&self, response: HttpResponse) -> Result<String, ClientError> {
        parse_json::<Concatenation>(response).map(|c| c.concatenation)
    }

    pub fn parse_get_user(&self, response: HttpResponse) -> Result<String, ClientError> {
        parse_json::<UserName>(response).map(|u| u.user)
    }

    fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{endpoint}", self.base_url)
        } else {
            format!("{}/{endpoint}", self.base_url)
        }
    }
}

/// Build `Params` from borrowed pairs.
pub fn params<const N: usize>(pairs: [(&str, &str); N]) -> Params {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Fold a response into a `RequestResult`.
///
/// A 2xx body becomes `content`, anything else becomes `error`. Bodies that
/// are not JSON are kept as a JSON string on success; on failure they are
/// wrapped in the `{"message"}` envelope, falling back to the status line
/// when the body is empty.
pub fn evaluate(response: &HttpResponse) -> RequestResult {
    let parsed = serde_json::from_str::<Value>(&response.body).ok();
    if response.is_success() {
        return RequestResult::content(
            parsed.unwrap_or_else(|| Value::String(response.body.clone())),
        );
    }
    match parsed {
        Some(body) => RequestResult::error(body),
        None if response.body.trim().is_empty() => {
            RequestResult::error(json!({ "message": format!("HTTP {}", response.status) }))
        }
        None => RequestResult::error(json!({ "message": response.body })),
    }
}

fn accept_json() -> (String, String) {
    ("accept".to_string(), "application/json".to_string())
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ClientError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ClientError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the matching `ClientError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ClientError> {
    if response.is_success() {
        return Ok(());
    }
    let message = serde_json::from_str::<ErrorBody>(&response.body)
        .ok()
        .map(|b| b.message);
    match (response.status, message) {
        (400, Some(message)) => Err(ClientError::BadRequest { message }),
        (404, Some(message)) => Err(ClientError::NotFound { message }),
        (status, _) => Err(ClientError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new("http://127.0.0.1:5000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_get_without_params() {
        let req = client().build_get("/sayhello/", None);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://127.0.0.1:5000/sayhello/");
        assert!(req.query.is_empty());
        assert!(req.form.is_empty());
    }

    #[test]
    fn build_get_carries_query_in_order() {
        let p = params([("cad1", "Me llamo "), ("cad2", "")]);
        let req = client().build_get("/concatenate/", Some(&p));
        assert_eq!(
            req.query,
            vec![
                ("cad1".to_string(), "Me llamo ".to_string()),
                ("cad2".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn build_post_carries_form_data() {
        let p = params([("num", "5")]);
        let req = client().build_post("/calculate/", Some(&p));
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.form, p);
        assert!(req.query.is_empty());
    }

    #[test]
    fn trailing_slash_on_base_url_is_stripped() {
        let req = ApiClient::new("http://127.0.0.1:5000/").build_options();
        assert_eq!(req.url, "http://127.0.0.1:5000/options/");
    }

    #[test]
    fn endpoint_without_leading_slash_is_joined() {
        let req = client().build_get("sayhello/", None);
        assert_eq!(req.url, "http://127.0.0.1:5000/sayhello/");
    }

    #[test]
    fn typed_builders_target_expected_paths() {
        let c = client();
        assert_eq!(c.build_calculate(-3).url, "http://127.0.0.1:5000/calculate/-3");
        assert_eq!(c.build_get_user(2).url, "http://127.0.0.1:5000/users/2");
        let req = c.build_calculate_query(7);
        assert_eq!(req.url, "http://127.0.0.1:5000/calculate/");
        assert_eq!(req.query, params([("num", "7")]));
    }

    #[test]
    fn evaluate_success_sets_content_only() {
        let result = evaluate(&response(200, r#"{"greeting":"hola"}"#));
        assert!(!result.is_error());
        assert_eq!(result.content_value(), Some(&json!({"greeting": "hola"})));
        assert!(result.error_value().is_none());
    }

    #[test]
    fn evaluate_failure_sets_error_only() {
        let result = evaluate(&response(400, r#"{"message":"invalid number"}"#));
        assert!(result.is_error());
        assert!(result.content_value().is_none());
        assert_eq!(result.error_text(), Some("invalid number"));
    }

    #[test]
    fn evaluate_non_json_error_is_enveloped() {
        let result = evaluate(&response(502, "Bad Gateway"));
        assert_eq!(result.error_value(), Some(&json!({"message": "Bad Gateway"})));

        let result = evaluate(&response(503, ""));
        assert_eq!(result.error_text(), Some("HTTP 503"));
    }

    #[test]
    fn evaluate_non_json_success_is_kept_as_string() {
        let result = evaluate(&response(200, "plain"));
        assert_eq!(result.content_value(), Some(&json!("plain")));
    }

    #[test]
    fn parse_calculate_success() {
        let value = client().parse_calculate(response(200, r#"{"result":25}"#)).unwrap();
        assert_eq!(value, 25);
    }

    #[test]
    fn parse_calculate_bad_request_keeps_message() {
        let err = client()
            .parse_calculate(response(400, r#"{"message":"number not provided"}"#))
            .unwrap_err();
        assert!(matches!(err, ClientError::BadRequest { ref message } if message == "number not provided"));
    }

    #[test]
    fn parse_get_user_not_found() {
        let err = client()
            .parse_get_user(response(404, r#"{"message":"user not found"}"#))
            .unwrap_err();
        assert!(matches!(err, ClientError::NotFound { .. }));
    }

    #[test]
    fn parse_unexpected_status_is_http_error() {
        let err = client()
            .parse_say_hello(response(405, r#"{"message":"method not allowed"}"#))
            .unwrap_err();
        assert!(matches!(err, ClientError::HttpError { status: 405, .. }));
    }

    #[test]
    fn parse_bad_json_is_deserialization_error() {
        let err = client().parse_concatenate(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ClientError::Deserialization(_)));
    }

    #[test]
    fn parse_options_success() {
        let body = r#"{"api_methods":{"GET":"return the information"},"errors":{"Error 400":"Bad Request"}}"#;
        let options = client().parse_options(response(200, body)).unwrap();
        assert_eq!(options.api_methods["GET"], "return the information");
        assert_eq!(options.errors["Error 400"], "Bad Request");
    }
}
