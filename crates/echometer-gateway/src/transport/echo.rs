//! Echo responder: reflect method, headers and body back as an HTML page.

use axum::{
    body::Body,
    extract::{Request, State},
    response::Html,
};
use bytes::BytesMut;
use futures_util::StreamExt;

use echometer_core::error::{EchoError, Result};
use echometer_core::{render_page, RequestSnapshot};

use crate::app_state::AppState;
use crate::error::ApiError;

/// Buffer the request body (up to `limit` bytes) and snapshot the request.
///
/// The buffered bytes are put back as the request body, so anything after this
/// call can read it again from the start.
pub async fn capture_snapshot(req: &mut Request, limit: usize) -> Result<RequestSnapshot> {
    let mut stream = std::mem::take(req.body_mut()).into_data_stream();
    let mut buf = BytesMut::new();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| EchoError::Io(std::io::Error::other(e)))?;
        if buf.len() + chunk.len() > limit {
            return Err(EchoError::PayloadTooLarge);
        }
        buf.extend_from_slice(&chunk);
    }
    let body = buf.freeze();
    *req.body_mut() = Body::from(body.clone());

    let headers = req
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_owned(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();

    Ok(RequestSnapshot {
        method: req.method().as_str().to_owned(),
        headers,
        body,
    })
}

/// Fallback handler: any method, any path.
pub async fn echo(State(state): State<AppState>, mut req: Request) -> std::result::Result<Html<String>, ApiError> {
    let snap = capture_snapshot(&mut req, state.max_body_bytes()).await?;
    tracing::trace!(
        method = %snap.method,
        headers = snap.headers.len(),
        body_bytes = snap.body.len(),
        "echo"
    );
    Ok(Html(render_page(&snap, state.escape_mode())))
}
