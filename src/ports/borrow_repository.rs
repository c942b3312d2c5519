use crate::domain::{BorrowId, BorrowRecord, BorrowStatus};
use async_trait::async_trait;

use super::{GuardedWrite, Result};

/// 借りている本の追跡用ストレージポート
#[async_trait]
pub trait BorrowRepository: Send + Sync {
    async fn list_borrows(&self) -> Result<Vec<BorrowRecord>>;

    async fn get_borrow(&self, borrow_id: BorrowId) -> Result<Option<BorrowRecord>>;

    /// 保存済みの状態が `expected` のままの場合に限り置き換える
    async fn update_borrow(
        &self,
        record: BorrowRecord,
        expected: BorrowStatus,
    ) -> Result<GuardedWrite>;
}
