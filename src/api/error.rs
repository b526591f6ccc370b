/// HTTP error responses
///
/// Every failure leaves the service as `{"error": "<message>"}` with the
/// matching status code. Storage details are logged, never returned.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid workout ID")]
    InvalidId,

    /// Body did not parse into a workout; carries the parser's message
    #[error("{0}")]
    InvalidBody(String),

    #[error("Workout not found")]
    NotFound,

    #[error("Internal Server Error")]
    Storage(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Storage(e) = &self {
            tracing::error!("❌ Storage failure: {:#}", e);
        }

        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(err: ApiError) -> (StatusCode, serde_json::Value) {
        let resp = err.into_response();
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn storage_errors_are_opaque() {
        let (status, body) =
            render(ApiError::from(anyhow::anyhow!("disk I/O error at /var/db"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal Server Error" }));
    }

    #[tokio::test]
    async fn body_errors_carry_parser_message() {
        let (status, body) = render(ApiError::InvalidBody("EOF while parsing".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "EOF while parsing" }));
    }

    #[tokio::test]
    async fn lookup_errors_map_to_400_and_404() {
        assert_eq!(render(ApiError::InvalidId).await.0, StatusCode::BAD_REQUEST);
        assert_eq!(
            render(ApiError::NotFound).await,
            (StatusCode::NOT_FOUND, json!({ "error": "Workout not found" }))
        );
    }
}
