use crate::application::ServiceError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::{ErrorResponse, Feedback};

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub struct ApiError(ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.0.to_string();
        let (status, error_type, feedback) = match self.0 {
            // 404 Not Found - リクエストされたリソースが存在しない
            ServiceError::BookNotFound => (StatusCode::NOT_FOUND, "BOOK_NOT_FOUND", None),
            ServiceError::RequestNotFound => (StatusCode::NOT_FOUND, "REQUEST_NOT_FOUND", None),
            ServiceError::BorrowNotFound => (StatusCode::NOT_FOUND, "BORROW_NOT_FOUND", None),
            ServiceError::NotificationNotFound => {
                (StatusCode::NOT_FOUND, "NOTIFICATION_NOT_FOUND", None)
            }
            ServiceError::CollectionBookNotFound => {
                (StatusCode::NOT_FOUND, "COLLECTION_BOOK_NOT_FOUND", None)
            }

            // 422 Unprocessable Entity - バリデーション・状態遷移のルール違反
            ServiceError::MissingRequiredFields(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "MISSING_REQUIRED_FIELDS",
                Some(Feedback::warning(
                    "Missing information",
                    "Please fill in all required fields",
                )),
            ),
            ServiceError::SwapMessageRequired => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "SWAP_MESSAGE_REQUIRED",
                Some(Feedback::warning(
                    "Message required",
                    "Please add a message for swap requests",
                )),
            ),
            ServiceError::InvalidInput(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_INPUT", None)
            }
            ServiceError::BookUnavailable => {
                (StatusCode::UNPROCESSABLE_ENTITY, "BOOK_UNAVAILABLE", None)
            }
            ServiceError::BookAlreadyAvailable => {
                (StatusCode::UNPROCESSABLE_ENTITY, "BOOK_ALREADY_AVAILABLE", None)
            }
            ServiceError::ActionNotAvailable(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "ACTION_NOT_AVAILABLE", None)
            }
            ServiceError::InvalidExtension(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_EXTENSION", None)
            }

            // 409 Conflict - 読み込み後に別の更新が反映された
            ServiceError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT", None),

            // 500 Internal Server Error - システム障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            ServiceError::Storage(ref e) => {
                tracing::error!("Storage error: {}", e);
                let body = ErrorResponse::new("STORAGE_ERROR", "Failed to access storage");
                return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
            }
        };

        let mut body = ErrorResponse::new(error_type, message);
        if let Some(feedback) = feedback {
            body = body.with_feedback(feedback);
        }
        (status, Json(body)).into_response()
    }
}
