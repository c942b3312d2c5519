use crate::domain::{
    self, DomainEvent, Notification, NotificationView, value_objects::NotificationId,
};
use chrono::{DateTime, Utc};

use super::dependencies::{ServiceDependencies, publish};
use super::errors::{Result, ServiceError};

/// フィードの1タブ分と、全タブ合計の未読数
#[derive(Debug, Clone)]
pub struct FeedPage {
    pub notifications: Vec<Notification>,
    pub unread: usize,
}

pub async fn list_notifications(
    deps: &ServiceDependencies,
    view: NotificationView,
) -> Result<FeedPage> {
    let all = deps
        .notifications
        .list_notifications()
        .await
        .map_err(ServiceError::Storage)?;

    Ok(FeedPage {
        unread: domain::notification::unread_count(&all),
        notifications: domain::notification::filter_view(&all, view)
            .into_iter()
            .cloned()
            .collect(),
    })
}

async fn get_notification(
    deps: &ServiceDependencies,
    notification_id: NotificationId,
) -> Result<Notification> {
    deps.notifications
        .get_notification(notification_id)
        .await
        .map_err(ServiceError::Storage)?
        .ok_or(ServiceError::NotificationNotFound)
}

/// 通知を既読にする（並び順と表示タブは変わらない）
pub async fn mark_read(
    deps: &ServiceDependencies,
    notification_id: NotificationId,
    read_at: DateTime<Utc>,
) -> Result<Notification> {
    let notification = get_notification(deps, notification_id).await?;
    if notification.read {
        return Ok(notification);
    }

    let (updated, event) = domain::notification::mark_read(&notification, read_at);
    deps.notifications
        .save_notification(updated.clone())
        .await
        .map_err(ServiceError::Storage)?;
    publish(deps, vec![DomainEvent::NotificationRead(event)]).await?;

    Ok(updated)
}

/// 通知をすべてのタブから完全に取り除く
pub async fn archive(
    deps: &ServiceDependencies,
    notification_id: NotificationId,
    archived_at: DateTime<Utc>,
) -> Result<()> {
    let notification = get_notification(deps, notification_id).await?;
    let event = domain::notification::archive(&notification, archived_at);

    let removed = deps
        .notifications
        .remove_notification(notification.id)
        .await
        .map_err(ServiceError::Storage)?;
    if !removed {
        return Err(ServiceError::NotificationNotFound);
    }

    publish(deps, vec![DomainEvent::NotificationArchived(event)]).await
}

/// 通知のリンク先（あれば）
pub async fn open_link(
    deps: &ServiceDependencies,
    notification_id: NotificationId,
) -> Result<Option<String>> {
    Ok(get_notification(deps, notification_id).await?.action_url)
}
