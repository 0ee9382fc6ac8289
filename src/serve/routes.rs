//! Request routing for the demo service.

use bytes::Bytes;
use http::{header, HeaderValue, Method, Request, Response, StatusCode};
use http_body_util::Full;

use crate::cookies::request::cookie_value;
use crate::cookies::setcookie::{SameSite, SetCookie};
use crate::serve::config::ServeConfig;

/// Name of the cookie set by the index route.
pub const DEMO_COOKIE: &str = "hello";

/// Route a request to its handler. Pure over the request head; bodies
/// are never read, so the body type stays generic and tests need no
/// sockets.
pub fn route<B>(request: &Request<B>, config: &ServeConfig) -> Response<Full<Bytes>> {
    match (request.method(), request.uri().path()) {
        (&Method::GET, "/") => index(request),
        (&Method::GET, "/test") => text(StatusCode::OK, "Test success!"),
        (&Method::GET, "/env") => env_echo(request, config),
        _ => text(StatusCode::NOT_FOUND, "not found"),
    }
}

/// Set the demo cookie and echo the rendered header in the body.
/// `SameSite=None` is withheld from clients that mishandle it.
fn index<B>(request: &Request<B>) -> Response<Full<Bytes>> {
    let user_agent = header_str(request, header::USER_AGENT);
    let cookie = SetCookie::builder(DEMO_COOKIE, "world")
        .secure(true)
        .http_only(true)
        .same_site(SameSite::NoRestriction)
        .build();
    let header_value = cookie.header_value_for_agent(user_agent);

    let seen_before = cookie_value(header_str(request, header::COOKIE), DEMO_COOKIE).is_some();
    let greeting = if seen_before { "Hello again!" } else { "Hello, world!" };
    let body = format!("{greeting}\n{} header: {header_value}\n", cookie.header_name());

    let mut response = text(StatusCode::OK, &body);
    if let Ok(value) = HeaderValue::from_str(&header_value) {
        response.headers_mut().insert(header::SET_COOKIE, value);
    }
    response
}

/// JSON echo of the process environment and request host.
fn env_echo<B>(request: &Request<B>, config: &ServeConfig) -> Response<Full<Bytes>> {
    let body = serde_json::json!({
        "hostname": std::env::var("HOSTNAME").unwrap_or_else(|_| "unknown".to_string()),
        "host_header": header_str(request, header::HOST),
        "listen": config,
    });

    let mut response = Response::new(Full::new(Bytes::from(body.to_string())));
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}

fn text(status: StatusCode, body: &str) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(body.to_string())));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    response
}

fn header_str<B>(request: &Request<B>, name: header::HeaderName) -> &str {
    request
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
}
