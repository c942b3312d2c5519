use crate::application::requests as service;
use crate::domain::{
    RequestAction,
    commands::TransitionRequest,
    value_objects::{Direction, RequestId},
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use super::{AppState, QueryError};
use crate::api::{
    error::ApiError,
    types::{
        Feedback, FeedbackResponse, RequestItem, RequestListResponse, RequestUpdatedResponse,
        RequestsQuery,
    },
};

/// GET /requests - 受信・送信リクエスト
///
/// `?direction=incoming|outgoing` でその一覧のみを返す。
pub async fn list_requests(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RequestsQuery>,
) -> Result<Json<RequestListResponse>, QueryError> {
    let direction = query.direction().map_err(QueryError::BadRequest)?;
    let requests = service::list_requests(&state.service_deps, direction).await?;

    let now = Utc::now();
    let rows_for = |wanted: Direction| -> Option<Vec<RequestItem>> {
        if direction.is_some_and(|d| d != wanted) {
            return None;
        }
        Some(
            requests
                .iter()
                .filter(|r| r.direction == wanted)
                .cloned()
                .map(|r| RequestItem::new(r, now))
                .collect(),
        )
    };

    Ok(Json(RequestListResponse {
        incoming: rows_for(Direction::Incoming),
        outgoing: rows_for(Direction::Outgoing),
    }))
}

/// 状態変更後に表示するメッセージ
fn transition_feedback(action: RequestAction) -> Feedback {
    match action {
        RequestAction::Approve => {
            Feedback::success("Request approved!", "The requester has been notified")
        }
        RequestAction::Reject => Feedback::title_only("Request rejected"),
        RequestAction::HandOver => Feedback::title_only("Book handed over"),
        RequestAction::MarkReturned => {
            Feedback::success("Book marked as returned", "Thank you for returning the book!")
        }
    }
}

async fn transition(
    state: &AppState,
    request_id: Uuid,
    action: RequestAction,
) -> Result<Json<RequestUpdatedResponse>, ApiError> {
    let now = Utc::now();
    let cmd = TransitionRequest {
        request_id: RequestId::from_uuid(request_id),
        action,
        at: now,
    };

    let request = service::transition_request(&state.service_deps, cmd).await?;

    Ok(Json(RequestUpdatedResponse {
        request: RequestItem::new(request, now),
        feedback: transition_feedback(action),
    }))
}

/// POST /requests/:id/approve - 承認（受信の pending のみ）
pub async fn approve_request(
    State(state): State<Arc<AppState>>,
    Path(request_id): Path<Uuid>,
) -> Result<Json<RequestUpdatedResponse>, ApiError> {
    transition(&state, request_id, RequestAction::Approve).await
}

/// POST /requests/:id/reject - 却下（受信の pending のみ）
pub async fn reject_request(
    State(state): State<Arc<AppState>>,
    Path(request_id): Path<Uuid>,
) -> Result<Json<RequestUpdatedResponse>, ApiError> {
    transition(&state, request_id, RequestAction::Reject).await
}

/// POST /requests/:id/hand-over - 受け渡し（受信の approved のみ）
pub async fn hand_over_request(
    State(state): State<Arc<AppState>>,
    Path(request_id): Path<Uuid>,
) -> Result<Json<RequestUpdatedResponse>, ApiError> {
    transition(&state, request_id, RequestAction::HandOver).await
}

/// POST /requests/:id/return - 返却済みにする（active のみ）
pub async fn mark_request_returned(
    State(state): State<Arc<AppState>>,
    Path(request_id): Path<Uuid>,
) -> Result<Json<RequestUpdatedResponse>, ApiError> {
    transition(&state, request_id, RequestAction::MarkReturned).await
}

/// POST /requests/:id/message - 相手との会話を開始
pub async fn message_counterpart(
    State(state): State<Arc<AppState>>,
    Path(request_id): Path<Uuid>,
) -> Result<Json<FeedbackResponse>, ApiError> {
    let request =
        service::get_request(&state.service_deps, RequestId::from_uuid(request_id)).await?;

    let feedback = Feedback::success(
        "Message feature",
        format!("Opening chat with {}...", request.counterpart),
    );
    Ok(Json(feedback.into()))
}
