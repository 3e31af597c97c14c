//! REST service exposing a greeting, a squaring calculator, string
//! concatenation and a read-only user lookup.
//!
//! Every handler returns `Result<Json<_>, ApiError>`; failures of any origin
//! (validation, extractor rejections, unknown routes, unsupported methods)
//! are rendered by [`ApiError`] as `{"message": "..."}`.

pub mod config;
pub mod error;
pub mod extract;
pub mod types;
pub mod users;
pub mod validation;

use std::{future::Future, sync::Arc, time::Instant};

use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tracing::info;

pub use config::ServerConfig;
pub use error::ApiError;
pub use types::{ApiOptions, Concatenation, ErrorBody, Greeting, SquareResult, UserName};
pub use users::UserDirectory;

use extract::{ApiPath, ApiQuery};
use types::QueryArgs;
use validation::{parse_number, square};

pub type Users = Arc<UserDirectory>;

pub fn app(users: UserDirectory) -> Router {
    Router::new()
        .route("/options/", get(options))
        .route("/sayhello/", get(say_hello))
        .route("/calculate/", get(calculate_from_query))
        .route("/calculate/{num}", get(calculate_from_path))
        .route("/concatenate/", get(concatenate))
        .route("/users/{id}", get(get_user))
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(middleware::from_fn(log_request))
        .with_state(Arc::new(users))
}

pub async fn run(listener: TcpListener, users: UserDirectory) -> Result<(), std::io::Error> {
    axum::serve(listener, app(users)).await
}

/// Like [`run`], but returns once `shutdown` resolves and in-flight requests
/// have drained.
pub async fn run_until<F>(
    listener: TcpListener,
    users: UserDirectory,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(users))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();
    let response = next.run(request).await;
    info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "request handled"
    );
    response
}

async fn options() -> Json<ApiOptions> {
    Json(ApiOptions::describe())
}

async fn say_hello() -> Json<Greeting> {
    Json(Greeting {
        greeting: "hola".to_string(),
    })
}

async fn calculate_from_path(ApiPath(num): ApiPath<String>) -> Result<Json<SquareResult>, ApiError> {
    let num = parse_number(Some(num.as_str()))?;
    Ok(Json(SquareResult { result: square(num) }))
}

async fn calculate_from_query(
    ApiQuery(pairs): ApiQuery<Vec<(String, String)>>,
) -> Result<Json<SquareResult>, ApiError> {
    let query = QueryArgs::from(pairs);
    let num = parse_number(query.first("num"))?;
    Ok(Json(SquareResult { result: square(num) }))
}

async fn concatenate(
    ApiQuery(pairs): ApiQuery<Vec<(String, String)>>,
) -> Result<Json<Concatenation>, ApiError> {
    let query = QueryArgs::from(pairs);
    let cad1 = query.first("cad1").ok_or(ApiError::MissingParameter("cad1"))?;
    let cad2 = query.first("cad2").ok_or(ApiError::MissingParameter("cad2"))?;
    Ok(Json(Concatenation {
        concatenation: format!("{cad1}{cad2}"),
    }))
}

async fn get_user(
    State(users): State<Users>,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<UserName>, ApiError> {
    let id = parse_number(Some(id.as_str()))?;
    let name = users
        .name(id)
        .ok_or_else(|| ApiError::NotFound("user not found".to_string()))?;
    Ok(Json(UserName {
        user: name.to_string(),
    }))
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("resource not found".to_string())
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
