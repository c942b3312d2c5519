use crate::domain::{
    self, BookRequest, DomainEvent, RequestAction, commands::TransitionRequest,
    value_objects::*,
};

use super::dependencies::{ServiceDependencies, ensure_applied, publish};
use super::errors::{Result, ServiceError};

/// 受信・送信リクエストの一覧（方向で絞り込み可）
pub async fn list_requests(
    deps: &ServiceDependencies,
    direction: Option<Direction>,
) -> Result<Vec<BookRequest>> {
    deps.requests
        .list_requests(direction)
        .await
        .map_err(ServiceError::Storage)
}

pub async fn get_request(deps: &ServiceDependencies, request_id: RequestId) -> Result<BookRequest> {
    deps.requests
        .get_request(request_id)
        .await
        .map_err(ServiceError::Storage)?
        .ok_or(ServiceError::RequestNotFound)
}

/// リクエストを状態機械に沿って遷移させる
///
/// 強制されるビジネスルール:
/// - 行に表示されているアクションのみ実行できること
/// - 拒否されたアクションはリクエストを変更しないこと
/// - 遷移は一方向であること（読み込み後に状態が変わっていれば Conflict）
pub async fn transition_request(
    deps: &ServiceDependencies,
    cmd: TransitionRequest,
) -> Result<BookRequest> {
    // 1. リクエストを読み込む
    let request = get_request(deps, cmd.request_id).await?;

    // 2. 行にそのアクションが表示されていることを確認
    if !domain::request::available_actions(&request).contains(&cmd.action) {
        tracing::warn!(
            request_id = %request.id,
            action = cmd.action.as_str(),
            status = request.status.as_str(),
            "action not available"
        );
        return Err(ServiceError::ActionNotAvailable(format!(
            "Cannot {} a {} {} request",
            cmd.action.as_str(),
            request.status.as_str(),
            request.direction.as_str()
        )));
    }

    // 3. ドメイン層の純粋関数で遷移
    let (updated, event) = match cmd.action {
        RequestAction::Approve => {
            let (r, e) = domain::request::approve(&request, cmd.at)?;
            (r, DomainEvent::RequestApproved(e))
        }
        RequestAction::Reject => {
            let (r, e) = domain::request::reject(&request, cmd.at)?;
            (r, DomainEvent::RequestRejected(e))
        }
        RequestAction::HandOver => {
            let (r, e) = domain::request::hand_over(&request, cmd.at)?;
            (r, DomainEvent::RequestHandedOver(e))
        }
        RequestAction::MarkReturned => {
            let (r, e) = domain::request::mark_returned(&request, cmd.at)?;
            (r, DomainEvent::RequestCompleted(e))
        }
    };

    // 4. 読み込み時の状態のままなら保存
    let write = deps
        .requests
        .update_request(updated.clone(), request.status)
        .await
        .map_err(ServiceError::Storage)?;
    ensure_applied(write, ServiceError::RequestNotFound, || {
        format!(
            "Request {} is no longer {}",
            request.id,
            request.status.as_str()
        )
    })?;

    // 5. イベントを記録
    publish(deps, vec![event]).await?;

    Ok(updated)
}
