use crate::application::tracking as service;
use crate::domain::{commands::RequestExtension, value_objects::BorrowId};
use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use super::AppState;
use crate::api::{
    error::ApiError,
    types::{
        BorrowItem, BorrowListResponse, BorrowUpdatedResponse, ExtensionBody, Feedback,
        FeedbackResponse,
    },
};

/// GET /tracking - 現在のユーザーが借りている本
pub async fn list_borrows(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BorrowListResponse>, ApiError> {
    let borrows: Vec<BorrowItem> = service::list_borrows(&state.service_deps)
        .await?
        .into_iter()
        .map(BorrowItem::from)
        .collect();

    Ok(Json(BorrowListResponse {
        count: borrows.len(),
        borrows,
    }))
}

/// POST /tracking/:id/return - 返却を確認
pub async fn confirm_return(
    State(state): State<Arc<AppState>>,
    Path(borrow_id): Path<Uuid>,
) -> Result<Json<BorrowUpdatedResponse>, ApiError> {
    let record =
        service::confirm_return(&state.service_deps, BorrowId::from_uuid(borrow_id), Utc::now())
            .await?;

    let description = if record.is_past_due() {
        format!(
            "Thank you for returning the book. It came back {}.",
            record.remaining_label()
        )
    } else {
        "Thank you for returning the book on time!".to_string()
    };

    Ok(Json(BorrowUpdatedResponse {
        borrow: record.into(),
        feedback: Feedback::success("Book return confirmed", description),
    }))
}

/// POST /tracking/:id/extension - 持ち主に延長を依頼
///
/// ボディ: `{"days": N}`（N は 1〜30、既定は 7）。Active の貸出のみ。
/// 範囲外の値はすべて INVALID_EXTENSION になる。
pub async fn request_extension(
    State(state): State<Arc<AppState>>,
    Path(borrow_id): Path<Uuid>,
    Json(body): Json<ExtensionBody>,
) -> Result<Json<BorrowUpdatedResponse>, ApiError> {
    let cmd = RequestExtension {
        borrow_id: BorrowId::from_uuid(borrow_id),
        days: body.days,
        requested_at: Utc::now(),
    };

    let record = service::request_extension(&state.service_deps, cmd).await?;

    Ok(Json(BorrowUpdatedResponse {
        borrow: record.into(),
        feedback: Feedback::success(
            "Extension requested",
            format!(
                "Requested {} days extension. Waiting for owner approval.",
                body.days
            ),
        ),
    }))
}

/// POST /tracking/:id/return-now - すぐに返却を手配（延滞中のみ）
pub async fn return_immediately(
    State(state): State<Arc<AppState>>,
    Path(borrow_id): Path<Uuid>,
) -> Result<Json<BorrowUpdatedResponse>, ApiError> {
    let record = service::return_immediately(
        &state.service_deps,
        BorrowId::from_uuid(borrow_id),
        Utc::now(),
    )
    .await?;

    Ok(Json(BorrowUpdatedResponse {
        borrow: record.into(),
        feedback: Feedback::success(
            "Return scheduled",
            "The owner has been notified. Please arrange pickup/delivery.",
        ),
    }))
}

/// POST /tracking/:id/contact - 持ち主との会話を開始
pub async fn contact_owner(
    State(state): State<Arc<AppState>>,
    Path(borrow_id): Path<Uuid>,
) -> Result<Json<FeedbackResponse>, ApiError> {
    let record = service::get_borrow(&state.service_deps, BorrowId::from_uuid(borrow_id)).await?;

    let feedback = Feedback::success(
        "Opening chat",
        format!("Starting conversation with {}...", record.owner),
    );
    Ok(Json(feedback.into()))
}
