use axum::{
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::errors::{ApiError, ServiceError};

/// Standard success response
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// Standard created response
pub fn created_response<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(data)).into_response()
}

/// Standard no content response
pub fn no_content_response() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// Validate request input, reporting violations as field-scoped errors.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), ApiError> {
    input
        .validate()
        .map_err(|e| ApiError::ValidationFailed(e.into()))
}

/// Map service errors to API errors
pub fn map_service_error(err: ServiceError) -> ApiError {
    ApiError::ServiceError(err)
}

/// Free-text search parameter shared by the list endpoints.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct SearchQuery {
    pub q: Option<String>,
    #[serde(default)]
    pub embed: Option<String>,
}

/// An embedded request wants a JSON acknowledgment instead of a redirect,
/// for use inside an overlay/modal UI. The flag travels as `embed=1` (query
/// or form field) or the XMLHttpRequest marker header.
pub fn is_embed(headers: &HeaderMap, query_embed: Option<&str>, form_embed: Option<&str>) -> bool {
    query_embed == Some("1")
        || form_embed == Some("1")
        || headers
            .get("x-requested-with")
            .and_then(|v| v.to_str().ok())
            == Some("XMLHttpRequest")
}

/// Acknowledge a successful mutation: JSON `{ok, url}` for embedded
/// requests, a see-other redirect to the list page otherwise. `id` rides
/// along on the JSON form so embedded clients can focus the saved record.
pub fn mutation_ack(embed: bool, url: &str, id: Option<i64>) -> Response {
    if embed {
        let mut body = json!({ "ok": true, "url": url });
        if let Some(id) = id {
            body["id"] = json!(id);
        }
        (StatusCode::OK, Json(body)).into_response()
    } else {
        Redirect::to(url).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn embed_flag_sources() {
        let mut headers = HeaderMap::new();
        assert!(!is_embed(&headers, None, None));
        assert!(is_embed(&headers, Some("1"), None));
        assert!(is_embed(&headers, None, Some("1")));
        assert!(!is_embed(&headers, Some("0"), None));

        headers.insert(
            "x-requested-with",
            HeaderValue::from_static("XMLHttpRequest"),
        );
        assert!(is_embed(&headers, None, None));
    }
}
