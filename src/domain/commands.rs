use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AddBookForm, BookId, BorrowId, RequestAction, RequestId, RequestKind};

/// コマンド: 登録フォームから新しい本を掲載する
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddBook {
    pub form: AddBookForm,
    pub submitted_at: DateTime<Utc>,
}

/// コマンド: カタログの本をリクエストする
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestBook {
    pub book_id: BookId,
    pub kind: RequestKind,
    pub message: Option<String>,
    pub requested_at: DateTime<Utc>,
}

/// コマンド: 貸出中の本が空いたら通知してもらう
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchAvailability {
    pub book_id: BookId,
    pub watched_at: DateTime<Utc>,
}

/// コマンド: リクエストのアクションを一つ実行する（承認・却下・受け渡し・返却済み）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRequest {
    pub request_id: RequestId,
    pub action: RequestAction,
    pub at: DateTime<Utc>,
}

/// コマンド: 持ち主に延長を依頼する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestExtension {
    pub borrow_id: BorrowId,
    pub days: i64,
    pub requested_at: DateTime<Utc>,
}
