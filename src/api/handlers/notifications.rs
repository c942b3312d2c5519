use crate::application::notifications as service;
use crate::domain::value_objects::NotificationId;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use super::{AppState, QueryError};
use crate::api::{
    error::ApiError,
    types::{
        Feedback, FeedbackResponse, NotificationItem, NotificationListResponse,
        NotificationUpdatedResponse, NotificationsQuery,
    },
};

/// GET /notifications - フィードの1タブ
///
/// `?view=all|requests|approvals|returns`（既定は all）。
/// 未読数は常にフィード全体を対象とする。
pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NotificationsQuery>,
) -> Result<Json<NotificationListResponse>, QueryError> {
    let view = query.view().map_err(QueryError::BadRequest)?;
    let page = service::list_notifications(&state.service_deps, view).await?;

    Ok(Json(NotificationListResponse::new(view, page, Utc::now())))
}

/// POST /notifications/:id/read - 既読にする
pub async fn mark_read(
    State(state): State<Arc<AppState>>,
    Path(notification_id): Path<Uuid>,
) -> Result<Json<NotificationUpdatedResponse>, ApiError> {
    let now = Utc::now();
    let notification = service::mark_read(
        &state.service_deps,
        NotificationId::from_uuid(notification_id),
        now,
    )
    .await?;

    Ok(Json(NotificationUpdatedResponse {
        notification: NotificationItem::new(notification, now),
        feedback: Feedback::title_only("Marked as read"),
    }))
}

/// DELETE /notifications/:id - アーカイブ（すべてのタブから削除）
pub async fn archive(
    State(state): State<Arc<AppState>>,
    Path(notification_id): Path<Uuid>,
) -> Result<Json<FeedbackResponse>, ApiError> {
    service::archive(
        &state.service_deps,
        NotificationId::from_uuid(notification_id),
        Utc::now(),
    )
    .await?;

    Ok(Json(Feedback::title_only("Notification archived").into()))
}

/// GET /notifications/:id/open - リンク先へ遷移
///
/// リンク先があれば 303、なければ 204。
pub async fn open(
    State(state): State<Arc<AppState>>,
    Path(notification_id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let link =
        service::open_link(&state.service_deps, NotificationId::from_uuid(notification_id))
            .await?;

    Ok(match link {
        Some(url) => Redirect::to(&url).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}
