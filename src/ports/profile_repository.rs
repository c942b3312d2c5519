use crate::domain::{CollectionBook, CollectionBookId, Review, UserProfile};
use async_trait::async_trait;
use std::collections::HashSet;

use super::{GuardedWrite, Result};

/// 現在のユーザーのプロフィール・蔵書・お気に入り・レビューのストレージポート
///
/// 蔵書とお気に入りは一つの単位として更新される。
/// 本の削除とお気に入りの解除が別々に見えることはない。
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get_profile(&self) -> Result<UserProfile>;

    async fn save_profile(&self, profile: UserProfile) -> Result<()>;

    async fn list_collection(&self) -> Result<Vec<CollectionBook>>;

    async fn get_collection_book(&self, book_id: CollectionBookId)
    -> Result<Option<CollectionBook>>;

    /// 蔵書の本を置き換える。削除済みなら `Missing`。
    async fn update_collection_book(&self, book: CollectionBook) -> Result<GuardedWrite>;

    /// 本とそのお気に入りマークをまとめて削除する
    ///
    /// 本が蔵書になければ false を返す。
    async fn remove_collection_book(&self, book_id: CollectionBookId) -> Result<bool>;

    async fn favorites(&self) -> Result<HashSet<CollectionBookId>>;

    /// お気に入りマークを設定する
    ///
    /// 現在のマークが `was_favorite` と一致する場合のみ書き込む。
    /// 本が蔵書になければ `Missing`、マークが変わっていれば `Stale`。
    async fn update_favorite(
        &self,
        book_id: CollectionBookId,
        was_favorite: bool,
        favorite: bool,
    ) -> Result<GuardedWrite>;

    async fn list_reviews(&self) -> Result<Vec<Review>>;
}
