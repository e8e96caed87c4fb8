//! Shared helpers for gateway integration tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)]

use axum::{body::Body, http::Request, response::Response, Router};
use tower::ServiceExt;

use echometer_gateway::{app_state::AppState, config};

pub fn state(yaml: &str) -> AppState {
    AppState::new(config::load_from_str(yaml).expect("test config must parse"))
}

pub fn default_state() -> AppState {
    state("version: 1\n")
}

pub fn request(method: &str, uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(body.into())
        .unwrap()
}

pub async fn send(app: &Router, req: Request<Body>) -> Response {
    app.clone().oneshot(req).await.unwrap()
}

pub async fn body_string(resp: Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
