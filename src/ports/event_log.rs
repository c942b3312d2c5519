use crate::domain::events::DomainEvent;
use async_trait::async_trait;

use super::Result;

/// ドメインイベントの追記専用ログ
///
/// すべての状態変更が発生順に記録される。
#[async_trait]
pub trait EventLog: Send + Sync {
    async fn append(&self, events: Vec<DomainEvent>) -> Result<()>;

    /// すべてのイベント（古い順）
    async fn list(&self) -> Result<Vec<DomainEvent>>;
}
