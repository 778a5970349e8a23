use crate::services::object_store::StoreError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Message returned to clients for every backend failure.
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// The only two ways a request can fail.
///
/// `Validation` carries a message meant for the client. `Backend` carries the
/// full cause for the log; clients only ever see [`SERVER_ERROR_MESSAGE`].
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl AppError {
    /// Shortcut for a 400 Bad Request
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Shortcut for a 500 built from a plain message
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(anyhow::anyhow!(msg.into()))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::Validation(message) => message,
            Self::Backend(_) => SERVER_ERROR_MESSAGE.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Backend(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn validation_error_keeps_its_message() {
        let response = AppError::validation("No word provided").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "No word provided" })
        );
    }

    #[tokio::test]
    async fn backend_error_hides_the_cause() {
        let response = AppError::backend("connection reset by peer").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({ "error": "Server error" }));
    }

    #[test]
    fn store_errors_become_backend_errors() {
        let err: AppError = StoreError::Put {
            key: "a.txt".into(),
            reason: "denied".into(),
        }
        .into();
        assert!(matches!(err, AppError::Backend(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
