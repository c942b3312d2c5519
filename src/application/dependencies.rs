use crate::domain::DomainEvent;
use crate::ports::*;
use std::sync::Arc;

use super::errors::{Result, ServiceError};

/// サービスの依存関係
///
/// データ構造として定義し、ユースケースは `&ServiceDependencies` を受け取る
/// 自由関数とする。どのポートを使うかが呼び出し箇所で明示される。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub book_catalog: Arc<dyn BookCatalog>,
    pub requests: Arc<dyn RequestRepository>,
    pub borrows: Arc<dyn BorrowRepository>,
    pub notifications: Arc<dyn NotificationFeed>,
    pub profile: Arc<dyn ProfileRepository>,
    pub event_log: Arc<dyn EventLog>,
}

/// 条件付き書き込みの結果をサービスの結果に変換する
///
/// `Missing` は呼び出し側が指定した NotFound エラーになり、
/// `Stale` は `Conflict` になる。
pub(super) fn ensure_applied(
    write: GuardedWrite,
    missing: ServiceError,
    conflict: impl FnOnce() -> String,
) -> Result<()> {
    match write {
        GuardedWrite::Applied => Ok(()),
        GuardedWrite::Missing => Err(missing),
        GuardedWrite::Stale => {
            let message = conflict();
            tracing::warn!(%message, "stale write refused");
            Err(ServiceError::Conflict(message))
        }
    }
}

/// イベントをログ出力し、イベントログに追記する
pub(super) async fn publish(deps: &ServiceDependencies, events: Vec<DomainEvent>) -> Result<()> {
    for event in &events {
        tracing::info!(event = event.name(), ?event, "domain event");
    }

    deps.event_log
        .append(events)
        .await
        .map_err(ServiceError::Storage)
}
