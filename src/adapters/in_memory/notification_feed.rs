use crate::domain::{Notification, NotificationId};
use crate::ports::{Result, notification_feed::NotificationFeed as NotificationFeedTrait};
use async_trait::async_trait;
use std::sync::Mutex;

use super::lock;

/// In-memory notification feed
pub struct NotificationFeed {
    notifications: Mutex<Vec<Notification>>,
}

impl NotificationFeed {
    pub fn new() -> Self {
        Self::with_notifications(Vec::new())
    }

    pub fn with_notifications(notifications: Vec<Notification>) -> Self {
        Self {
            notifications: Mutex::new(notifications),
        }
    }
}

impl Default for NotificationFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationFeedTrait for NotificationFeed {
    async fn list_notifications(&self) -> Result<Vec<Notification>> {
        Ok(lock(&self.notifications)?.clone())
    }

    async fn get_notification(
        &self,
        notification_id: NotificationId,
    ) -> Result<Option<Notification>> {
        Ok(lock(&self.notifications)?
            .iter()
            .find(|n| n.id == notification_id)
            .cloned())
    }

    async fn save_notification(&self, notification: Notification) -> Result<()> {
        let mut notifications = lock(&self.notifications)?;
        if let Some(slot) = notifications.iter_mut().find(|n| n.id == notification.id) {
            *slot = notification;
        }
        Ok(())
    }

    async fn remove_notification(&self, notification_id: NotificationId) -> Result<bool> {
        let mut notifications = lock(&self.notifications)?;
        let before = notifications.len();
        notifications.retain(|n| n.id != notification_id);
        Ok(notifications.len() < before)
    }
}
