use crate::domain::{BookRequest, Direction, RequestId, RequestStatus};
use async_trait::async_trait;

use super::{GuardedWrite, Result};

/// 貸出・交換リクエストのストレージポート
#[async_trait]
pub trait RequestRepository: Send + Sync {
    /// 表示順のリクエスト一覧。方向で絞り込める。
    async fn list_requests(&self, direction: Option<Direction>) -> Result<Vec<BookRequest>>;

    async fn get_request(&self, request_id: RequestId) -> Result<Option<BookRequest>>;

    /// 新しいリクエストを末尾に追加する（同じIDがあれば置き換える）
    async fn save_request(&self, request: BookRequest) -> Result<()>;

    /// 保存済みの状態が `expected` のままの場合に限り置き換える
    ///
    /// 確認と書き込みは同じロックの中で行われる。
    /// 状態が変わっていれば何も書かずに `Stale` を返す。
    async fn update_request(
        &self,
        request: BookRequest,
        expected: RequestStatus,
    ) -> Result<GuardedWrite>;
}
