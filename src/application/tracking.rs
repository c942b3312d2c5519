use crate::domain::{self, BorrowRecord, DomainEvent, commands::RequestExtension, value_objects::*};
use chrono::{DateTime, Utc};

use super::dependencies::{ServiceDependencies, ensure_applied, publish};
use super::errors::{Result, ServiceError};

pub async fn list_borrows(deps: &ServiceDependencies) -> Result<Vec<BorrowRecord>> {
    deps.borrows
        .list_borrows()
        .await
        .map_err(ServiceError::Storage)
}

pub async fn get_borrow(deps: &ServiceDependencies, borrow_id: BorrowId) -> Result<BorrowRecord> {
    deps.borrows
        .get_borrow(borrow_id)
        .await
        .map_err(ServiceError::Storage)?
        .ok_or(ServiceError::BorrowNotFound)
}

/// 読み込んだ時点の状態のままなら保存し、イベントを記録する
async fn commit(
    deps: &ServiceDependencies,
    loaded: &BorrowRecord,
    record: BorrowRecord,
    event: DomainEvent,
) -> Result<BorrowRecord> {
    let write = deps
        .borrows
        .update_borrow(record.clone(), loaded.status)
        .await
        .map_err(ServiceError::Storage)?;
    ensure_applied(write, ServiceError::BorrowNotFound, || {
        format!("Loan {} is no longer {}", loaded.id, loaded.status.as_str())
    })?;

    publish(deps, vec![event]).await?;
    Ok(record)
}

/// 本が持ち主に戻ったことを確認する（Active または Returning の貸出）
pub async fn confirm_return(
    deps: &ServiceDependencies,
    borrow_id: BorrowId,
    returned_at: DateTime<Utc>,
) -> Result<BorrowRecord> {
    let record = get_borrow(deps, borrow_id).await?;
    let (updated, event) = domain::borrow::confirm_return(&record, returned_at)?;

    if event.was_overdue {
        tracing::info!(borrow_id = %borrow_id, "late return confirmed");
    }

    commit(deps, &record, updated, DomainEvent::BorrowReturned(event)).await
}

/// 持ち主に貸出期間の延長を依頼する
///
/// 依頼は持ち主が応答するまで記録に残り、返却期限は動かない。
pub async fn request_extension(
    deps: &ServiceDependencies,
    cmd: RequestExtension,
) -> Result<BorrowRecord> {
    let record = get_borrow(deps, cmd.borrow_id).await?;
    let (updated, event) =
        domain::borrow::request_extension(&record, cmd.days, cmd.requested_at)?;

    commit(deps, &record, updated, DomainEvent::ExtensionRequested(event)).await
}

/// 延滞中の借り手がすぐに返却を手配する
pub async fn return_immediately(
    deps: &ServiceDependencies,
    borrow_id: BorrowId,
    scheduled_at: DateTime<Utc>,
) -> Result<BorrowRecord> {
    let record = get_borrow(deps, borrow_id).await?;
    let (updated, event) = domain::borrow::return_immediately(&record, scheduled_at)?;

    commit(deps, &record, updated, DomainEvent::ReturnScheduled(event)).await
}
