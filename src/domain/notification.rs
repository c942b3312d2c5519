use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{NotificationArchived, NotificationId, NotificationRead};

/// 通知の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationCategory {
    Request,
    Approval,
    Return,
    DueSoon,
    Overdue,
}

/// 通知フィードのタブ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationView {
    #[default]
    All,
    Requests,
    Approvals,
    /// 返却に加え、期限間近・延滞のリマインダー
    Returns,
}

impl NotificationView {
    pub fn includes(&self, category: NotificationCategory) -> bool {
        match self {
            NotificationView::All => true,
            NotificationView::Requests => category == NotificationCategory::Request,
            NotificationView::Approvals => category == NotificationCategory::Approval,
            NotificationView::Returns => matches!(
                category,
                NotificationCategory::Return
                    | NotificationCategory::DueSoon
                    | NotificationCategory::Overdue
            ),
        }
    }
}

impl std::str::FromStr for NotificationView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(NotificationView::All),
            "requests" => Ok(NotificationView::Requests),
            "approvals" => Ok(NotificationView::Approvals),
            "returns" => Ok(NotificationView::Returns),
            _ => Err(format!("Invalid notification view: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub category: NotificationCategory,
    pub title: String,
    pub message: String,
    pub user_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub read: bool,
    /// 通知本文をクリックしたときの遷移先
    pub action_url: Option<String>,
}

/// 純粋関数: タブに表示される通知（フィードの順序を保つ）
pub fn filter_view(notifications: &[Notification], view: NotificationView) -> Vec<&Notification> {
    notifications
        .iter()
        .filter(|n| view.includes(n.category))
        .collect()
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

/// 純粋関数: 通知を既読にする（`read` フラグのみ変わる）
pub fn mark_read(
    notification: &Notification,
    read_at: DateTime<Utc>,
) -> (Notification, NotificationRead) {
    let updated = Notification {
        read: true,
        ..notification.clone()
    };
    let event = NotificationRead {
        notification_id: notification.id,
        read_at,
    };
    (updated, event)
}

/// 純粋関数: 通知をフィードから取り除く
pub fn archive(notification: &Notification, archived_at: DateTime<Utc>) -> NotificationArchived {
    NotificationArchived {
        notification_id: notification.id,
        archived_at,
    }
}

/// "just now", "2 minutes ago", "1 hour ago", "3 days ago", "2 weeks ago"
pub fn relative_label(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);
    let (amount, unit) = if elapsed.num_minutes() < 1 {
        return "just now".to_string();
    } else if elapsed.num_hours() < 1 {
        (elapsed.num_minutes(), "minute")
    } else if elapsed.num_days() < 1 {
        (elapsed.num_hours(), "hour")
    } else if elapsed.num_weeks() < 1 {
        (elapsed.num_days(), "day")
    } else {
        (elapsed.num_weeks(), "week")
    };

    if amount == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", amount, unit)
    }
}
