//! Exercise every core operation against the live server.
//!
//! Starts the server on a random port and drives each endpoint over real HTTP
//! with ureq, checking that request building, evaluation and typed parsing
//! agree with what the server actually sends.

use api_core::{evaluate, params, ApiClient, ClientError, HttpMethod, HttpRequest, HttpResponse};
use api_server::UserDirectory;

/// Execute an `HttpRequest` with ureq and return an `HttpResponse`.
///
/// Status codes are never turned into `Err`, so 4xx/5xx arrive as data for
/// the core to interpret.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match req.method {
        HttpMethod::Get => {
            let mut builder = agent.get(&req.url);
            for (name, value) in &req.query {
                builder = builder.query(name, value);
            }
            builder.call()
        }
        HttpMethod::Post if req.form.is_empty() => agent.post(&req.url).send_empty(),
        HttpMethod::Post => agent
            .post(&req.url)
            .send_form(req.form.iter().map(|(k, v)| (k.as_str(), v.as_str()))),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

fn start_server() -> ApiClient {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            api_server::run(listener, UserDirectory::seeded()).await
        })
        .unwrap();
    });

    ApiClient::new(&format!("http://{addr}"))
}

#[test]
fn typed_calls_against_live_server() {
    let client = start_server();

    let options = client.parse_options(execute(client.build_options())).unwrap();
    assert_eq!(options.api_methods.len(), 4);
    assert_eq!(options.errors["Error 500"], "Internal Server Error");

    let greeting = client.parse_say_hello(execute(client.build_say_hello())).unwrap();
    assert_eq!(greeting, "hola");

    let square = client.parse_calculate(execute(client.build_calculate(5))).unwrap();
    assert_eq!(square, 25);

    let square = client.parse_calculate(execute(client.build_calculate_query(-4))).unwrap();
    assert_eq!(square, 16);

    let joined = client
        .parse_concatenate(execute(client.build_concatenate("Me llamo Marcos ", " Rivera Martínez")))
        .unwrap();
    assert_eq!(joined, "Me llamo Marcos  Rivera Martínez");

    let joined = client.parse_concatenate(execute(client.build_concatenate("", ""))).unwrap();
    assert_eq!(joined, "");

    let user = client.parse_get_user(execute(client.build_get_user(1))).unwrap();
    assert_eq!(user, "Marcos");

    let err = client.parse_get_user(execute(client.build_get_user(100))).unwrap_err();
    assert!(matches!(err, ClientError::NotFound { ref message } if message == "user not found"));
}

#[test]
fn evaluated_calls_against_live_server() {
    let client = start_server();

    let result = evaluate(&execute(client.build_get("/calculate/prueba", None)));
    assert_eq!(result.error_text(), Some("invalid number"));
    assert!(result.content_value().is_none());

    let result = evaluate(&execute(client.build_get("/calculate/", None)));
    assert_eq!(result.error_text(), Some("number not provided"));

    let result = evaluate(&execute(client.build_get("/concatenate/", Some(&params([("cad2", "x")])))));
    assert_eq!(result.error_text(), Some("cad1 not provided"));

    let result = evaluate(&execute(client.build_get("/users/prueba", None)));
    assert_eq!(result.error_text(), Some("invalid number"));

    let result = evaluate(&execute(client.build_post("/sayhello/", None)));
    assert_eq!(result.error_text(), Some("method not allowed"));

    let result = evaluate(&execute(client.build_post("/calculate/", Some(&params([("num", "5")])))));
    assert_eq!(result.error_text(), Some("method not allowed"));

    let result = evaluate(&execute(client.build_get("/sayhello/", None)));
    assert_eq!(result.content_value(), Some(&serde_json::json!({"greeting": "hola"})));
}
