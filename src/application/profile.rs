use crate::domain::{
    self, CollectionBook, DomainEvent, ProfileSettings, Review, UserProfile,
    profile::{CollectionBookEdit, ProfileEdit},
    value_objects::CollectionBookId,
};
use chrono::{DateTime, Utc};

use super::dependencies::{ServiceDependencies, ensure_applied, publish};
use super::errors::{Result, ServiceError};

/// お気に入りマーク付きの蔵書エントリ
#[derive(Debug, Clone)]
pub struct ShelfEntry {
    pub book: CollectionBook,
    pub favorite: bool,
}

pub async fn get_profile(deps: &ServiceDependencies) -> Result<UserProfile> {
    deps.profile
        .get_profile()
        .await
        .map_err(ServiceError::Storage)
}

async fn save_profile(deps: &ServiceDependencies, profile: UserProfile) -> Result<()> {
    deps.profile
        .save_profile(profile)
        .await
        .map_err(ServiceError::Storage)
}

/// プロフィール編集ダイアログを適用する（集計値は読み取り専用）
pub async fn update_profile(
    deps: &ServiceDependencies,
    edit: ProfileEdit,
    updated_at: DateTime<Utc>,
) -> Result<UserProfile> {
    let profile = get_profile(deps).await?;
    let (updated, event) = domain::profile::update_profile(&profile, &edit, updated_at);

    save_profile(deps, updated.clone()).await?;
    publish(deps, vec![DomainEvent::ProfileUpdated(event)]).await?;

    Ok(updated)
}

pub async fn get_settings(deps: &ServiceDependencies) -> Result<ProfileSettings> {
    Ok(get_profile(deps).await?.settings)
}

pub async fn save_settings(
    deps: &ServiceDependencies,
    settings: ProfileSettings,
    saved_at: DateTime<Utc>,
) -> Result<ProfileSettings> {
    let profile = get_profile(deps).await?;
    let (updated, event) = domain::profile::save_settings(&profile, settings, saved_at);

    save_profile(deps, updated).await?;
    publish(deps, vec![DomainEvent::SettingsSaved(event)]).await?;

    Ok(settings)
}

// ============================================================================
// Collection
// ============================================================================

pub async fn list_collection(deps: &ServiceDependencies) -> Result<Vec<ShelfEntry>> {
    let books = deps
        .profile
        .list_collection()
        .await
        .map_err(ServiceError::Storage)?;
    let favorites = deps
        .profile
        .favorites()
        .await
        .map_err(ServiceError::Storage)?;

    Ok(books
        .into_iter()
        .map(|book| ShelfEntry {
            favorite: favorites.contains(&book.id),
            book,
        })
        .collect())
}

async fn get_collection_book(
    deps: &ServiceDependencies,
    book_id: CollectionBookId,
) -> Result<CollectionBook> {
    deps.profile
        .get_collection_book(book_id)
        .await
        .map_err(ServiceError::Storage)?
        .ok_or(ServiceError::CollectionBookNotFound)
}

/// お気に入りマークを反転し、反転後の状態を返す
///
/// 読み込み後に別の操作でマークが変わっていた場合は Conflict。
pub async fn toggle_favorite(
    deps: &ServiceDependencies,
    book_id: CollectionBookId,
    toggled_at: DateTime<Utc>,
) -> Result<bool> {
    // 1. 本と現在のマークを読み込む
    let book = get_collection_book(deps, book_id).await?;
    let was_favorite = deps
        .profile
        .favorites()
        .await
        .map_err(ServiceError::Storage)?
        .contains(&book.id);

    // 2. ドメイン層の純粋関数で反転
    let event = domain::profile::toggle_favorite(book.id, was_favorite, toggled_at);
    let favorite = event.favorite;

    // 3. マークが読み込み時のままなら書き込む
    let write = deps
        .profile
        .update_favorite(book.id, was_favorite, favorite)
        .await
        .map_err(ServiceError::Storage)?;
    ensure_applied(write, ServiceError::CollectionBookNotFound, || {
        format!("Favorite mark on \"{}\" changed", book.title)
    })?;

    // 4. イベントを記録
    publish(deps, vec![DomainEvent::FavoriteToggled(event)]).await?;

    Ok(favorite)
}

/// 共有用テキスト（現在のユーザー名で署名）
pub async fn share_collection_book(
    deps: &ServiceDependencies,
    book_id: CollectionBookId,
) -> Result<String> {
    let book = get_collection_book(deps, book_id).await?;
    let profile = get_profile(deps).await?;
    Ok(domain::profile::share_message(&book, &profile.name))
}

pub async fn edit_collection_book(
    deps: &ServiceDependencies,
    book_id: CollectionBookId,
    edit: CollectionBookEdit,
    edited_at: DateTime<Utc>,
) -> Result<CollectionBook> {
    let book = get_collection_book(deps, book_id).await?;
    let (updated, event) = domain::profile::edit_collection_book(&book, &edit, edited_at);

    let write = deps
        .profile
        .update_collection_book(updated.clone())
        .await
        .map_err(ServiceError::Storage)?;
    ensure_applied(write, ServiceError::CollectionBookNotFound, String::new)?;
    publish(deps, vec![DomainEvent::CollectionBookEdited(event)]).await?;

    Ok(updated)
}

/// 蔵書から本を即座に削除する（お気に入りマークも一緒に外れる）
///
/// 取り消しはできない。
pub async fn remove_collection_book(
    deps: &ServiceDependencies,
    book_id: CollectionBookId,
    removed_at: DateTime<Utc>,
) -> Result<CollectionBook> {
    // 1. 本を読み込む
    let book = get_collection_book(deps, book_id).await?;
    let event = domain::profile::remove_from_collection(&book, removed_at);

    // 2. 本とお気に入りマークをまとめて削除
    let removed = deps
        .profile
        .remove_collection_book(book.id)
        .await
        .map_err(ServiceError::Storage)?;
    if !removed {
        return Err(ServiceError::CollectionBookNotFound);
    }

    // 3. イベントを記録
    publish(deps, vec![DomainEvent::CollectionBookRemoved(event)]).await?;

    Ok(book)
}

// ============================================================================
// Reviews
// ============================================================================

pub async fn list_reviews(deps: &ServiceDependencies) -> Result<Vec<Review>> {
    deps.profile
        .list_reviews()
        .await
        .map_err(ServiceError::Storage)
}
