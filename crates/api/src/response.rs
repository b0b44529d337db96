//! The response envelope shared by every endpoint.
//!
//! Success and failure responses alike serialize to
//! `{success, statusCode, message, data?, errors?, error?, metadata}`.
//! `metadata.requestId` is left unset here; the
//! [`stamp_request_id`](crate::middleware::request_meta::stamp_request_id)
//! layer fills it from the `x-request-id` header on the way out.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Serialize;

/// Timestamp + correlation id block attached to every envelope.
#[derive(Debug, Serialize)]
pub struct ResponseMetadata {
    /// ISO-8601 time the response was produced.
    pub timestamp: String,
    /// Correlation id; populated from `x-request-id` by middleware.
    #[serde(rename = "requestId")]
    pub request_id: Option<String>,
}

impl ResponseMetadata {
    fn now() -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            request_id: None,
        }
    }
}

/// Standard envelope around a serializable payload.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Structured validation details, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<serde_json::Value>,
    /// Stable machine-readable error code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub metadata: ResponseMetadata,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 envelope with a payload.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self::success(StatusCode::OK, Some(data), message)
    }

    /// 201 envelope with a payload.
    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self::success(StatusCode::CREATED, Some(data), message)
    }

    /// 200 envelope without a payload.
    pub fn message(message: impl Into<String>) -> Self {
        Self::success(StatusCode::OK, None, message)
    }

    fn success(status: StatusCode, data: Option<T>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            status_code: status.as_u16(),
            message: message.into(),
            data,
            errors: None,
            error: None,
            metadata: ResponseMetadata::now(),
        }
    }
}

impl ApiResponse<serde_json::Value> {
    /// Failure envelope. `code` lands in the `error` slot; optional
    /// structured details land in `errors`.
    pub fn failure(
        status: StatusCode,
        message: impl Into<String>,
        code: &str,
        errors: Option<serde_json::Value>,
    ) -> Self {
        Self {
            success: false,
            status_code: status.as_u16(),
            message: message.into(),
            data: None,
            errors,
            error: Some(code.to_string()),
            metadata: ResponseMetadata::now(),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
