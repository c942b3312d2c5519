use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    CollectionBookEdited, CollectionBookId, CollectionBookRemoved, FavoriteToggled, LendingMode,
    ProfileUpdated, SettingsSaved,
};

// ============================================================================
// Profile
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LendingPreferences {
    /// 誰からのリクエストも受け付ける
    pub allow_anyone: bool,
    /// 交換のみ受け付ける
    pub allow_swap_only: bool,
    /// 認証済み会員からのリクエストのみ受け付ける
    pub verified_only: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub email: bool,
    pub push: bool,
    pub reminder_emails: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSettings {
    pub lending: LendingPreferences,
    pub notifications: NotificationPreferences,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            lending: LendingPreferences {
                allow_anyone: true,
                allow_swap_only: true,
                verified_only: false,
            },
            notifications: NotificationPreferences {
                email: true,
                push: true,
                reminder_emails: true,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub location: String,
    pub bio: Option<String>,
    /// e.g. "March 2023"
    pub joined: String,
    pub rating: f32,
    pub reviews: u32,
    pub books_lent: u32,
    pub books_shared: u32,
    pub active_swaps: u32,
    pub settings: ProfileSettings,
}

impl UserProfile {
    /// Neighbourhood part of the location ("Downtown, San Francisco, CA" → "Downtown")
    pub fn neighbourhood(&self) -> &str {
        self.location
            .split(',')
            .next()
            .map(str::trim)
            .unwrap_or_default()
    }
}

/// 編集ダイアログの内容
///
/// 未指定の項目はそのまま。`name`と`location`は空欄でも変わらないが、
/// `bio`を空欄にすると消去される。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileEdit {
    pub name: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
}

fn filled(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// 任意項目: 未指定なら現在の値、空欄なら消去
fn optional(value: &Option<String>, current: &Option<String>) -> Option<String> {
    match value {
        None => current.clone(),
        Some(_) => filled(value),
    }
}

/// 純粋関数: 編集ダイアログを適用する（集計値は変更しない）
pub fn update_profile(
    profile: &UserProfile,
    edit: &ProfileEdit,
    updated_at: DateTime<Utc>,
) -> (UserProfile, ProfileUpdated) {
    let updated = UserProfile {
        name: filled(&edit.name).unwrap_or_else(|| profile.name.clone()),
        location: filled(&edit.location).unwrap_or_else(|| profile.location.clone()),
        bio: optional(&edit.bio, &profile.bio),
        ..profile.clone()
    };
    let event = ProfileUpdated { updated_at };
    (updated, event)
}

/// 純粋関数: 設定をまとめて置き換える
pub fn save_settings(
    profile: &UserProfile,
    settings: ProfileSettings,
    saved_at: DateTime<Utc>,
) -> (UserProfile, SettingsSaved) {
    let updated = UserProfile {
        settings,
        ..profile.clone()
    };
    (updated, SettingsSaved { saved_at })
}

// ============================================================================
// Collection
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollectionCondition {
    LikeNew,
    Excellent,
    Good,
    Fair,
    Poor,
}

/// 所有している本の棚の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShelfStatus {
    Available,
    Borrowed,
}

/// 現在のユーザーの蔵書の本
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionBook {
    pub id: CollectionBookId,
    pub title: String,
    pub author: String,
    pub cover: Option<String>,
    pub status: ShelfStatus,
    pub condition: CollectionCondition,
    pub lending_mode: LendingMode,
    pub rating: f32,
    /// 貸し出された回数
    pub borrows: u32,
    pub notes: Option<String>,
}

/// 本の編集ダイアログの内容
///
/// 未指定の項目はそのまま。`notes`を空欄にすると消去される。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionBookEdit {
    pub title: Option<String>,
    pub author: Option<String>,
    pub condition: Option<CollectionCondition>,
    pub lending_mode: Option<LendingMode>,
    pub notes: Option<String>,
}

/// 純粋関数: 本の編集ダイアログを適用する
pub fn edit_collection_book(
    book: &CollectionBook,
    edit: &CollectionBookEdit,
    edited_at: DateTime<Utc>,
) -> (CollectionBook, CollectionBookEdited) {
    let updated = CollectionBook {
        title: filled(&edit.title).unwrap_or_else(|| book.title.clone()),
        author: filled(&edit.author).unwrap_or_else(|| book.author.clone()),
        condition: edit.condition.unwrap_or(book.condition),
        lending_mode: edit.lending_mode.unwrap_or(book.lending_mode),
        notes: optional(&edit.notes, &book.notes),
        ..book.clone()
    };
    let event = CollectionBookEdited {
        book_id: book.id,
        edited_at,
    };
    (updated, event)
}

/// 純粋関数: 蔵書から本を削除する
///
/// お気に入りマークは本と一緒にストア側で外される。
pub fn remove_from_collection(
    book: &CollectionBook,
    removed_at: DateTime<Utc>,
) -> CollectionBookRemoved {
    CollectionBookRemoved {
        book_id: book.id,
        title: book.title.clone(),
        removed_at,
    }
}

/// 純粋関数: お気に入りマークを反転する
pub fn toggle_favorite(
    id: CollectionBookId,
    was_favorite: bool,
    toggled_at: DateTime<Utc>,
) -> FavoriteToggled {
    FavoriteToggled {
        book_id: id,
        favorite: !was_favorite,
        toggled_at,
    }
}

/// 所有している本の共有テキスト
pub fn share_message(book: &CollectionBook, owner: &str) -> String {
    format!("Check out \"{}\" - shared by {}", book.title, owner)
}

// ============================================================================
// Reviews
// ============================================================================

/// 取引後に他の会員が残したレビュー
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub title: String,
    pub body: String,
    /// 1–5 stars
    pub stars: u8,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            name: "Sarah Martinez".to_string(),
            location: "Downtown, San Francisco, CA".to_string(),
            bio: None,
            joined: "March 2023".to_string(),
            rating: 4.8,
            reviews: 42,
            books_lent: 15,
            books_shared: 28,
            active_swaps: 3,
            settings: ProfileSettings::default(),
        }
    }

    fn owned(title: &str) -> CollectionBook {
        CollectionBook {
            id: CollectionBookId::new(),
            title: title.to_string(),
            author: "Frank Herbert".to_string(),
            cover: None,
            status: ShelfStatus::Available,
            condition: CollectionCondition::LikeNew,
            lending_mode: LendingMode::Borrow,
            rating: 4.7,
            borrows: 3,
            notes: None,
        }
    }

    #[test]
    fn test_neighbourhood() {
        assert_eq!(profile().neighbourhood(), "Downtown");
    }

    #[test]
    fn test_update_profile_keeps_counters_and_blank_fields() {
        let p = profile();
        let edit = ProfileEdit {
            name: Some("Sarah M.".to_string()),
            location: Some("  ".to_string()),
            bio: Some("Sci-fi lover".to_string()),
        };
        let (updated, _) = update_profile(&p, &edit, Utc::now());

        assert_eq!(updated.name, "Sarah M.");
        assert_eq!(updated.location, p.location);
        assert_eq!(updated.bio.as_deref(), Some("Sci-fi lover"));
        assert_eq!(updated.books_lent, p.books_lent);
        assert_eq!(updated.rating, p.rating);
    }

    #[test]
    fn test_save_settings_replaces_toggles() {
        let mut settings = ProfileSettings::default();
        settings.lending.verified_only = true;
        settings.notifications.push = false;

        let (updated, _) = save_settings(&profile(), settings, Utc::now());
        assert_eq!(updated.settings, settings);
    }

    #[test]
    fn test_toggle_favorite_flips_mark() {
        let id = CollectionBookId::new();
        let event = toggle_favorite(id, false, Utc::now());
        assert!(event.favorite);
        assert_eq!(event.book_id, id);

        assert!(!toggle_favorite(id, true, Utc::now()).favorite);
    }

    #[test]
    fn test_remove_from_collection_event() {
        let book = owned("Dune");
        let event = remove_from_collection(&book, Utc::now());

        assert_eq!(event.title, "Dune");
        assert_eq!(event.book_id, book.id);
    }

    #[test]
    fn test_blank_optional_fields_are_cleared() {
        let p = UserProfile {
            bio: Some("Sci-fi lover".to_string()),
            ..profile()
        };
        let (kept, _) = update_profile(&p, &ProfileEdit::default(), Utc::now());
        assert_eq!(kept.bio.as_deref(), Some("Sci-fi lover"));

        let edit = ProfileEdit {
            name: Some(" ".to_string()),
            bio: Some("  ".to_string()),
            ..Default::default()
        };
        let (cleared, _) = update_profile(&p, &edit, Utc::now());
        assert_eq!(cleared.bio, None);
        assert_eq!(cleared.name, p.name);

        let book = CollectionBook {
            notes: Some("Signed copy".to_string()),
            ..owned("Dune")
        };
        let edit = CollectionBookEdit {
            notes: Some(String::new()),
            ..Default::default()
        };
        let (updated, _) = edit_collection_book(&book, &edit, Utc::now());
        assert_eq!(updated.notes, None);
    }

    #[test]
    fn test_edit_collection_book() {
        let book = owned("Dune");
        let edit = CollectionBookEdit {
            condition: Some(CollectionCondition::Good),
            lending_mode: Some(LendingMode::Both),
            notes: Some("Signed copy".to_string()),
            ..Default::default()
        };
        let (updated, event) = edit_collection_book(&book, &edit, Utc::now());

        assert_eq!(updated.title, "Dune");
        assert_eq!(updated.condition, CollectionCondition::Good);
        assert_eq!(updated.lending_mode, LendingMode::Both);
        assert_eq!(updated.notes.as_deref(), Some("Signed copy"));
        assert_eq!(event.book_id, book.id);
    }

    #[test]
    fn test_share_message() {
        assert_eq!(
            share_message(&owned("Dune"), "Sarah Martinez"),
            "Check out \"Dune\" - shared by Sarah Martinez"
        );
    }
}
