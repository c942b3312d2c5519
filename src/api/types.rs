use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::{notifications::FeedPage, profile::ShelfEntry};
use crate::domain::{
    Book, BookRequest, BorrowRecord, CatalogFilter, CollectionBook, Notification,
    NotificationView, ProfileSettings, RequestAction, Review, UserProfile,
    book::{AvailabilityFilter, DEFAULT_LENDING_PERIOD_DAYS, LENDING_PERIOD_OPTIONS},
    notification::relative_label,
    request::available_actions,
    value_objects::*,
};

// ============================================================================
// Feedback & errors
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackVariant {
    Default,
    Destructive,
}

/// ユーザーに一時的に表示するメッセージ（タイトルと任意の説明）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub variant: FeedbackVariant,
}

impl Feedback {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            variant: FeedbackVariant::Default,
        }
    }

    pub fn title_only(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: FeedbackVariant::Default,
        }
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            variant: FeedbackVariant::Destructive,
        }
    }
}

/// 結果がメッセージだけのアクションのレスポンス
#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub feedback: Feedback,
}

impl From<Feedback> for FeedbackResponse {
    fn from(feedback: Feedback) -> Self {
        Self { feedback }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            feedback: None,
        }
    }

    pub fn with_feedback(mut self, feedback: Feedback) -> Self {
        self.feedback = Some(feedback);
        self
    }
}

/// 空のクエリパラメータは未指定として扱う
fn given(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

// ============================================================================
// Landing
// ============================================================================

#[derive(Debug, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LandingResponse {
    pub name: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
    pub features: Vec<Feature>,
    pub links: Vec<NavLink>,
}

// ============================================================================
// Catalog
// ============================================================================

/// 書籍検索のクエリパラメータ（GET /books）
#[derive(Debug, Default, Deserialize)]
pub struct BooksQuery {
    pub search: Option<String>,
    pub genre: Option<String>,
    /// all | available | unavailable
    pub availability: Option<String>,
    pub location: Option<String>,
    pub condition: Option<String>,
}

impl BooksQuery {
    pub fn to_filter(&self) -> Result<CatalogFilter, String> {
        let availability = match given(&self.availability) {
            None | Some("all") => AvailabilityFilter::All,
            Some(value) => {
                AvailabilityFilter::Only(value.parse().map_err(|e: UnknownVariant| e.to_string())?)
            }
        };

        Ok(CatalogFilter {
            search: self.search.clone().unwrap_or_default(),
            genre: given(&self.genre)
                .map(str::parse::<Genre>)
                .transpose()
                .map_err(|e| e.to_string())?,
            availability,
            location: given(&self.location).map(str::to_string),
            condition: given(&self.condition)
                .map(str::parse::<Condition>)
                .transpose()
                .map_err(|e| e.to_string())?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct BookListResponse {
    pub books: Vec<Book>,
    pub count: usize,
    /// "N books found"
    pub label: String,
}

/// リクエスト送信のボディ（POST /books/:id/request）
#[derive(Debug, Deserialize)]
pub struct BookRequestBody {
    #[serde(default = "default_request_kind")]
    pub kind: RequestKind,
    #[serde(default)]
    pub message: Option<String>,
}

fn default_request_kind() -> RequestKind {
    RequestKind::Borrow
}

#[derive(Debug, Serialize)]
pub struct RequestSentResponse {
    pub request: RequestItem,
    pub feedback: Feedback,
}

#[derive(Debug, Serialize)]
pub struct FormDefaults {
    pub condition: Condition,
    pub lending_mode: LendingMode,
    pub lending_period_days: u32,
}

/// 登録フォームの選択肢（GET /books/add）
#[derive(Debug, Serialize)]
pub struct AddBookOptions {
    pub genres: &'static [Genre],
    pub conditions: &'static [Condition],
    pub lending_modes: &'static [LendingMode],
    pub lending_periods: [u32; 4],
    pub required: [&'static str; 3],
    pub defaults: FormDefaults,
}

impl Default for AddBookOptions {
    fn default() -> Self {
        Self {
            genres: Genre::ALL,
            conditions: Condition::ALL,
            lending_modes: LendingMode::ALL,
            lending_periods: LENDING_PERIOD_OPTIONS,
            required: ["title", "author", "genre"],
            defaults: FormDefaults {
                condition: Condition::default(),
                lending_mode: LendingMode::default(),
                lending_period_days: DEFAULT_LENDING_PERIOD_DAYS,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookAddedResponse {
    pub book: Book,
    pub feedback: Feedback,
    pub redirect_to: &'static str,
}

// ============================================================================
// Requests
// ============================================================================

/// リクエスト一覧のクエリパラメータ（GET /requests）
#[derive(Debug, Default, Deserialize)]
pub struct RequestsQuery {
    pub direction: Option<String>,
}

impl RequestsQuery {
    pub fn direction(&self) -> Result<Option<Direction>, String> {
        given(&self.direction)
            .map(str::parse::<Direction>)
            .transpose()
            .map_err(|e| e.to_string())
    }
}

/// 相対時刻と表示アクション付きのリクエスト行
#[derive(Debug, Serialize)]
pub struct RequestItem {
    #[serde(flatten)]
    pub request: BookRequest,
    /// "2 hours ago"
    pub requested: String,
    pub actions: Vec<RequestAction>,
}

impl RequestItem {
    pub fn new(request: BookRequest, now: DateTime<Utc>) -> Self {
        Self {
            requested: relative_label(request.requested_at, now),
            actions: available_actions(&request),
            request,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RequestListResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incoming: Option<Vec<RequestItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outgoing: Option<Vec<RequestItem>>,
}

#[derive(Debug, Serialize)]
pub struct RequestUpdatedResponse {
    pub request: RequestItem,
    pub feedback: Feedback,
}

// ============================================================================
// Loan tracker
// ============================================================================

#[derive(Debug, Serialize)]
pub struct BorrowItem {
    #[serde(flatten)]
    pub record: BorrowRecord,
    pub displayed_progress: u32,
    pub status_label: &'static str,
    pub remaining_label: String,
}

impl From<BorrowRecord> for BorrowItem {
    fn from(record: BorrowRecord) -> Self {
        Self {
            displayed_progress: record.displayed_progress(),
            status_label: record.status_label(),
            remaining_label: record.remaining_label(),
            record,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BorrowListResponse {
    pub borrows: Vec<BorrowItem>,
    pub count: usize,
}

/// 延長依頼のボディ（POST /tracking/:id/extension）
#[derive(Debug, Deserialize)]
pub struct ExtensionBody {
    #[serde(default = "default_extension_days")]
    pub days: i64,
}

fn default_extension_days() -> i64 {
    7
}

#[derive(Debug, Serialize)]
pub struct BorrowUpdatedResponse {
    pub borrow: BorrowItem,
    pub feedback: Feedback,
}

// ============================================================================
// Notifications
// ============================================================================

/// 通知フィードのクエリパラメータ（GET /notifications）
#[derive(Debug, Default, Deserialize)]
pub struct NotificationsQuery {
    pub view: Option<String>,
}

impl NotificationsQuery {
    pub fn view(&self) -> Result<NotificationView, String> {
        given(&self.view).map_or(Ok(NotificationView::All), str::parse)
    }
}

#[derive(Debug, Serialize)]
pub struct NotificationItem {
    #[serde(flatten)]
    pub notification: Notification,
    /// "2 minutes ago"
    pub time: String,
}

impl NotificationItem {
    pub fn new(notification: Notification, now: DateTime<Utc>) -> Self {
        Self {
            time: relative_label(notification.created_at, now),
            notification,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NotificationListResponse {
    pub view: NotificationView,
    pub notifications: Vec<NotificationItem>,
    pub unread_count: usize,
}

impl NotificationListResponse {
    pub fn new(view: NotificationView, page: FeedPage, now: DateTime<Utc>) -> Self {
        Self {
            view,
            notifications: page
                .notifications
                .into_iter()
                .map(|n| NotificationItem::new(n, now))
                .collect(),
            unread_count: page.unread,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NotificationUpdatedResponse {
    pub notification: NotificationItem,
    pub feedback: Feedback,
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ProfileUpdatedResponse {
    pub profile: UserProfile,
    pub feedback: Feedback,
}

#[derive(Debug, Serialize)]
pub struct CollectionItem {
    #[serde(flatten)]
    pub book: CollectionBook,
    pub favorite: bool,
}

impl From<ShelfEntry> for CollectionItem {
    fn from(entry: ShelfEntry) -> Self {
        Self {
            book: entry.book,
            favorite: entry.favorite,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CollectionResponse {
    pub books: Vec<CollectionItem>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct FavoriteResponse {
    pub book_id: CollectionBookId,
    pub favorite: bool,
}

#[derive(Debug, Serialize)]
pub struct CollectionBookUpdatedResponse {
    pub book: CollectionBook,
    pub feedback: Feedback,
}

#[derive(Debug, Serialize)]
pub struct CollectionBookRemovedResponse {
    pub book_id: CollectionBookId,
    pub feedback: Feedback,
}

#[derive(Debug, Serialize)]
pub struct SettingsSavedResponse {
    pub settings: ProfileSettings,
    pub feedback: Feedback,
}

#[derive(Debug, Serialize)]
pub struct ReviewItem {
    #[serde(flatten)]
    pub review: Review,
    pub time: String,
}

#[derive(Debug, Serialize)]
pub struct ReviewListResponse {
    pub reviews: Vec<ReviewItem>,
    pub count: usize,
}
