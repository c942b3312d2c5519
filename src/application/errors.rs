use thiserror::Error;

use crate::domain::{
    AddBookError, BorrowTransitionError, RequestBookError, RequestTransitionError,
};

/// アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Book not found")]
    BookNotFound,

    #[error("Request not found")]
    RequestNotFound,

    #[error("Borrow record not found")]
    BorrowNotFound,

    #[error("Notification not found")]
    NotificationNotFound,

    #[error("Book not found in collection")]
    CollectionBookNotFound,

    /// 必須項目が空欄のまま登録フォームが送信された
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<&'static str>),

    /// 選択肢にない値
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// メッセージなしの交換リクエスト
    #[error("Swap requests need a message")]
    SwapMessageRequired,

    /// 貸出中の本へのリクエスト
    #[error("Book is not available")]
    BookUnavailable,

    /// 貸出可能な本への「入荷通知」
    #[error("Book is already available")]
    BookAlreadyAvailable,

    /// 現在の状態ではそのアクションを実行できない
    #[error("Action not available: {0}")]
    ActionNotAvailable(String),

    /// 延長日数が1〜30日の範囲外
    #[error("Extension must be between 1 and 30 days, got {0}")]
    InvalidExtension(i64),

    /// 読み込み後に別の更新が先に反映された
    #[error("Conflict: {0}")]
    Conflict(String),

    /// ストレージポートの失敗
    #[error("Storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<AddBookError> for ServiceError {
    fn from(err: AddBookError) -> Self {
        match err {
            AddBookError::MissingRequiredFields(fields) => {
                ServiceError::MissingRequiredFields(fields)
            }
            AddBookError::InvalidField(msg) => ServiceError::InvalidInput(msg),
        }
    }
}

impl From<RequestBookError> for ServiceError {
    fn from(err: RequestBookError) -> Self {
        match err {
            RequestBookError::SwapMessageRequired => ServiceError::SwapMessageRequired,
            RequestBookError::BookUnavailable => ServiceError::BookUnavailable,
            RequestBookError::BookAlreadyAvailable => ServiceError::BookAlreadyAvailable,
        }
    }
}

impl From<RequestTransitionError> for ServiceError {
    fn from(err: RequestTransitionError) -> Self {
        ServiceError::ActionNotAvailable(err.to_string())
    }
}

impl From<BorrowTransitionError> for ServiceError {
    fn from(err: BorrowTransitionError) -> Self {
        match err {
            BorrowTransitionError::InvalidExtensionDays(days) => {
                ServiceError::InvalidExtension(days)
            }
            other => ServiceError::ActionNotAvailable(other.to_string()),
        }
    }
}

/// アプリケーション層のResult型
pub type Result<T> = std::result::Result<T, ServiceError>;
