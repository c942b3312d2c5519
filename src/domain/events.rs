use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    BookId, BorrowId, CollectionBookId, NotificationId, RequestId, RequestKind, RequestStatus,
};

// ============================================================================
// Catalog
// ============================================================================

/// イベント: 登録フォームから本が掲載された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAdded {
    pub book_id: BookId,
    pub title: String,
    pub added_at: DateTime<Utc>,
}

/// イベント: 現在のユーザーがカタログの本にリクエストを送った
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSubmitted {
    pub request_id: RequestId,
    pub book_id: BookId,
    pub kind: RequestKind,
    pub submitted_at: DateTime<Utc>,
}

/// イベント: 貸出中の本に「入荷通知」が登録された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWatched {
    pub book_id: BookId,
    pub watched_at: DateTime<Utc>,
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestApproved {
    pub request_id: RequestId,
    pub approved_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestRejected {
    pub request_id: RequestId,
    pub rejected_at: DateTime<Utc>,
}

/// イベント: 本が受け渡された（`status` は貸出なら active、交換なら completed）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestHandedOver {
    pub request_id: RequestId,
    pub status: RequestStatus,
    pub handed_over_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestCompleted {
    pub request_id: RequestId,
    pub completed_at: DateTime<Utc>,
}

// ============================================================================
// Loan tracker
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowReturned {
    pub borrow_id: BorrowId,
    pub returned_at: DateTime<Utc>,
    pub was_overdue: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionRequested {
    pub borrow_id: BorrowId,
    pub days: u8,
    pub requested_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnScheduled {
    pub borrow_id: BorrowId,
    pub scheduled_at: DateTime<Utc>,
}

// ============================================================================
// Notifications
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRead {
    pub notification_id: NotificationId,
    pub read_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationArchived {
    pub notification_id: NotificationId,
    pub archived_at: DateTime<Utc>,
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdated {
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsSaved {
    pub saved_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionBookEdited {
    pub book_id: CollectionBookId,
    pub edited_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionBookRemoved {
    pub book_id: CollectionBookId,
    pub title: String,
    pub removed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteToggled {
    pub book_id: CollectionBookId,
    pub favorite: bool,
    pub toggled_at: DateTime<Utc>,
}

/// すべてのドメインイベント
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DomainEvent {
    BookAdded(BookAdded),
    RequestSubmitted(RequestSubmitted),
    AvailabilityWatched(AvailabilityWatched),
    RequestApproved(RequestApproved),
    RequestRejected(RequestRejected),
    RequestHandedOver(RequestHandedOver),
    RequestCompleted(RequestCompleted),
    BorrowReturned(BorrowReturned),
    ExtensionRequested(ExtensionRequested),
    ReturnScheduled(ReturnScheduled),
    NotificationRead(NotificationRead),
    NotificationArchived(NotificationArchived),
    ProfileUpdated(ProfileUpdated),
    SettingsSaved(SettingsSaved),
    CollectionBookEdited(CollectionBookEdited),
    CollectionBookRemoved(CollectionBookRemoved),
    FavoriteToggled(FavoriteToggled),
}

impl DomainEvent {
    /// ログ用のイベント名
    pub fn name(&self) -> &'static str {
        match self {
            DomainEvent::BookAdded(_) => "book_added",
            DomainEvent::RequestSubmitted(_) => "request_submitted",
            DomainEvent::AvailabilityWatched(_) => "availability_watched",
            DomainEvent::RequestApproved(_) => "request_approved",
            DomainEvent::RequestRejected(_) => "request_rejected",
            DomainEvent::RequestHandedOver(_) => "request_handed_over",
            DomainEvent::RequestCompleted(_) => "request_completed",
            DomainEvent::BorrowReturned(_) => "borrow_returned",
            DomainEvent::ExtensionRequested(_) => "extension_requested",
            DomainEvent::ReturnScheduled(_) => "return_scheduled",
            DomainEvent::NotificationRead(_) => "notification_read",
            DomainEvent::NotificationArchived(_) => "notification_archived",
            DomainEvent::ProfileUpdated(_) => "profile_updated",
            DomainEvent::SettingsSaved(_) => "settings_saved",
            DomainEvent::CollectionBookEdited(_) => "collection_book_edited",
            DomainEvent::CollectionBookRemoved(_) => "collection_book_removed",
            DomainEvent::FavoriteToggled(_) => "favorite_toggled",
        }
    }
}
