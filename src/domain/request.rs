use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    Direction, RequestApproved, RequestCompleted, RequestHandedOver, RequestId, RequestKind,
    RequestRejected, RequestTransitionError,
};

/// リクエストの状態
///
/// ```text
/// pending --approve--> approved --hand_over--> active --mark_returned--> completed
///    |                    |                      (swap: approved --hand_over--> completed)
///    +--reject--> rejected +--mark_returned--> completed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    Active,
    Completed,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
            RequestStatus::Active => "active",
            RequestStatus::Completed => "completed",
        }
    }

    /// 終端状態からはこれ以上遷移しない
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestStatus::Rejected | RequestStatus::Completed)
    }
}

/// 現在のユーザーから見た貸出・交換リクエスト
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRequest {
    pub id: RequestId,
    pub book_title: String,
    /// 受信なら依頼者、送信なら本の持ち主
    pub counterpart: String,
    pub direction: Direction,
    pub kind: RequestKind,
    pub requested_at: DateTime<Utc>,
    pub status: RequestStatus,
    /// 貸出期間のラベル（例: "2 weeks"）
    pub loan_period: Option<String>,
    /// 交換で提供される本のタイトル（交換のみ）
    pub swap_book: Option<String>,
    pub message: Option<String>,
}

/// リクエストの行に表示される変更アクション
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestAction {
    Approve,
    Reject,
    HandOver,
    MarkReturned,
}

impl RequestAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestAction::Approve => "approve",
            RequestAction::Reject => "reject",
            RequestAction::HandOver => "hand_over",
            RequestAction::MarkReturned => "mark_returned",
        }
    }
}

/// 純粋関数: 行に表示されるアクション
///
/// - 受信 + pending: 承認、却下
/// - 受信 + approved: 受け渡し
/// - active（どちらの方向でも）: 返却済み
/// - rejected, completed: なし
pub fn available_actions(request: &BookRequest) -> Vec<RequestAction> {
    match (request.direction, request.status) {
        (Direction::Incoming, RequestStatus::Pending) => {
            vec![RequestAction::Approve, RequestAction::Reject]
        }
        (Direction::Incoming, RequestStatus::Approved) => vec![RequestAction::HandOver],
        (_, RequestStatus::Active) => vec![RequestAction::MarkReturned],
        _ => Vec::new(),
    }
}

/// 純粋関数: pending のリクエストを承認する
pub fn approve(
    request: &BookRequest,
    approved_at: DateTime<Utc>,
) -> Result<(BookRequest, RequestApproved), RequestTransitionError> {
    if request.status != RequestStatus::Pending {
        return Err(RequestTransitionError::NotPending(request.status));
    }

    let updated = BookRequest {
        status: RequestStatus::Approved,
        ..request.clone()
    };
    let event = RequestApproved {
        request_id: request.id,
        approved_at,
    };

    Ok((updated, event))
}

/// 純粋関数: pending のリクエストを却下する（終端）
pub fn reject(
    request: &BookRequest,
    rejected_at: DateTime<Utc>,
) -> Result<(BookRequest, RequestRejected), RequestTransitionError> {
    if request.status != RequestStatus::Pending {
        return Err(RequestTransitionError::NotPending(request.status));
    }

    let updated = BookRequest {
        status: RequestStatus::Rejected,
        ..request.clone()
    };
    let event = RequestRejected {
        request_id: request.id,
        rejected_at,
    };

    Ok((updated, event))
}

/// 純粋関数: 承認後に本を受け渡す
///
/// 貸出は active になる。交換は戻ってくるものがないため、ここで完了する。
pub fn hand_over(
    request: &BookRequest,
    handed_over_at: DateTime<Utc>,
) -> Result<(BookRequest, RequestHandedOver), RequestTransitionError> {
    if request.status != RequestStatus::Approved {
        return Err(RequestTransitionError::NotApproved(request.status));
    }

    let status = match request.kind {
        RequestKind::Borrow => RequestStatus::Active,
        RequestKind::Swap => RequestStatus::Completed,
    };
    let updated = BookRequest {
        status,
        ..request.clone()
    };
    let event = RequestHandedOver {
        request_id: request.id,
        status,
        handed_over_at,
    };

    Ok((updated, event))
}

/// 純粋関数: approved または active のリクエストを完了する（終端）
pub fn mark_returned(
    request: &BookRequest,
    returned_at: DateTime<Utc>,
) -> Result<(BookRequest, RequestCompleted), RequestTransitionError> {
    match request.status {
        RequestStatus::Approved | RequestStatus::Active => {}
        other => return Err(RequestTransitionError::NotReturnable(other)),
    }

    let updated = BookRequest {
        status: RequestStatus::Completed,
        ..request.clone()
    };
    let event = RequestCompleted {
        request_id: request.id,
        completed_at: returned_at,
    };

    Ok((updated, event))
}
