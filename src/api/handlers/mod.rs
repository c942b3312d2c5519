use crate::application::{ServiceDependencies, ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::time::Duration;

pub mod catalog;
pub mod landing;
pub mod notifications;
pub mod profile;
pub mod requests;
pub mod tracking;

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
    /// 本の登録送信の模擬待ち時間
    pub submit_delay: Duration,
}

// ============================================================================
// Error types
// ============================================================================

/// クエリハンドラー（クエリ文字列付きのGET）用のエラー型
#[derive(Debug)]
pub enum QueryError {
    NotFound(String),
    BadRequest(String),
    InternalError(String),
}

impl From<ServiceError> for QueryError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Storage(e) => QueryError::InternalError(e.to_string()),
            not_found @ (ServiceError::BookNotFound
            | ServiceError::RequestNotFound
            | ServiceError::BorrowNotFound
            | ServiceError::NotificationNotFound
            | ServiceError::CollectionBookNotFound) => QueryError::NotFound(not_found.to_string()),
            other => QueryError::BadRequest(other.to_string()),
        }
    }
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            QueryError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            QueryError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            QueryError::InternalError(msg) => {
                // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
                tracing::error!("Internal error in query handler: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = Json(super::types::ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
