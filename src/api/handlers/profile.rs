use crate::application::profile as service;
use crate::domain::{
    ProfileSettings, UserProfile,
    notification::relative_label,
    profile::{CollectionBookEdit, ProfileEdit},
    value_objects::CollectionBookId,
};
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
        CollectionBookRemovedResponse, CollectionBookUpdatedResponse, CollectionItem,
        CollectionResponse, FavoriteResponse, Feedback, FeedbackResponse, ProfileUpdatedResponse,
        ReviewItem, ReviewListResponse, SettingsSavedResponse,
    },
};

// ============================================================================
// Profile
// ============================================================================

/// GET /profile
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
) -> Result<Json<UserProfile>, ApiError> {
    Ok(Json(service::get_profile(&state.service_deps).await?))
}

/// PUT /profile - 名前・所在地・自己紹介
///
/// 空欄の名前・所在地はそのまま。空欄の自己紹介は消去される。
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    Json(edit): Json<ProfileEdit>,
) -> Result<Json<ProfileUpdatedResponse>, ApiError> {
    let profile = service::update_profile(&state.service_deps, edit, Utc::now()).await?;

    Ok(Json(ProfileUpdatedResponse {
        profile,
        feedback: Feedback::success(
            "Profile updated",
            "Your profile has been saved successfully.",
        ),
    }))
}

// ============================================================================
// Collection
// ============================================================================

/// GET /profile/collection
pub async fn list_collection(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CollectionResponse>, ApiError> {
    let books: Vec<CollectionItem> = service::list_collection(&state.service_deps)
        .await?
        .into_iter()
        .map(CollectionItem::from)
        .collect();

    Ok(Json(CollectionResponse {
        count: books.len(),
        books,
    }))
}

/// POST /profile/collection/:id/favorite - お気に入りを切り替え
pub async fn toggle_favorite(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<Uuid>,
) -> Result<Json<FavoriteResponse>, ApiError> {
    let book_id = CollectionBookId::from_uuid(book_id);
    let favorite = service::toggle_favorite(&state.service_deps, book_id, Utc::now()).await?;

    Ok(Json(FavoriteResponse { book_id, favorite }))
}

/// POST /profile/collection/:id/share - 共有テキストを作成
pub async fn share_book(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<Uuid>,
) -> Result<Json<FeedbackResponse>, ApiError> {
    let text =
        service::share_collection_book(&state.service_deps, CollectionBookId::from_uuid(book_id))
            .await?;

    Ok(Json(Feedback::success("Share link copied!", text).into()))
}

/// PUT /profile/collection/:id - 本の編集ダイアログ
pub async fn edit_book(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<Uuid>,
    Json(edit): Json<CollectionBookEdit>,
) -> Result<Json<CollectionBookUpdatedResponse>, ApiError> {
    let book = service::edit_collection_book(
        &state.service_deps,
        CollectionBookId::from_uuid(book_id),
        edit,
        Utc::now(),
    )
    .await?;

    Ok(Json(CollectionBookUpdatedResponse {
        book,
        feedback: Feedback::success("Book updated", "Changes saved successfully."),
    }))
}

/// DELETE /profile/collection/:id - 即時削除（取り消し不可）
pub async fn remove_book(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<Uuid>,
) -> Result<Json<CollectionBookRemovedResponse>, ApiError> {
    let removed = service::remove_collection_book(
        &state.service_deps,
        CollectionBookId::from_uuid(book_id),
        Utc::now(),
    )
    .await?;

    Ok(Json(CollectionBookRemovedResponse {
        book_id: removed.id,
        feedback: Feedback::success(
            "Book removed",
            "The book has been removed from your collection.",
        ),
    }))
}

// ============================================================================
// Settings & reviews
// ============================================================================

/// GET /profile/settings
pub async fn get_settings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ProfileSettings>, ApiError> {
    Ok(Json(service::get_settings(&state.service_deps).await?))
}

/// PUT /profile/settings - 設定をまとめて保存
pub async fn save_settings(
    State(state): State<Arc<AppState>>,
    Json(settings): Json<ProfileSettings>,
) -> Result<Json<SettingsSavedResponse>, ApiError> {
    let settings = service::save_settings(&state.service_deps, settings, Utc::now()).await?;

    Ok(Json(SettingsSavedResponse {
        settings,
        feedback: Feedback::success(
            "Settings saved!",
            "Your preferences have been updated successfully.",
        ),
    }))
}

/// GET /profile/reviews
pub async fn list_reviews(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReviewListResponse>, ApiError> {
    let now = Utc::now();
    let reviews: Vec<ReviewItem> = service::list_reviews(&state.service_deps)
        .await?
        .into_iter()
        .map(|review| ReviewItem {
            time: relative_label(review.created_at, now),
            review,
        })
        .collect();

    Ok(Json(ReviewListResponse {
        count: reviews.len(),
        reviews,
    }))
}
