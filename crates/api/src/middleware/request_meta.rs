//! Response post-processing: stamp the request id into the envelope.
//!
//! `SetRequestIdLayer` assigns an `x-request-id` UUID to every request and
//! `PropagateRequestIdLayer` copies it to the response headers. JSON bodies
//! additionally carry it in `metadata.requestId` so a support ticket can
//! quote the id straight from the payload, error responses included.

use axum::body::{to_bytes, Body};
use axum::extract::Request;
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::middleware::Next;
use axum::response::Response;

/// Upper bound on bodies buffered for rewriting.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Copy the request's `x-request-id` into `metadata.requestId` of JSON
/// response bodies. Non-JSON responses and bodies without a `metadata`
/// object pass through untouched.
pub async fn stamp_request_id(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned);

    let response = next.run(request).await;

    let Some(request_id) = request_id else {
        return response;
    };

    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));
    if !is_json {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        // Body already consumed or over the limit; nothing sane to restore.
        Err(_) => return Response::from_parts(parts, Body::empty()),
    };

    let stamped = serde_json::from_slice::<serde_json::Value>(&bytes)
        .ok()
        .and_then(|mut value| {
            let meta = value.get_mut("metadata")?.as_object_mut()?;
            meta.insert(
                "requestId".to_string(),
                serde_json::Value::String(request_id),
            );
            serde_json::to_vec(&value).ok()
        });

    match stamped {
        Some(body) => {
            parts.headers.remove(CONTENT_LENGTH);
            Response::from_parts(parts, Body::from(body))
        }
        None => Response::from_parts(parts, Body::from(bytes)),
    }
}
