use crate::domain::{Notification, NotificationId};
use async_trait::async_trait;

use super::Result;

/// 通知フィードのポート
///
/// 通知の生成は別の場所で行われる。ここでは読み込み・既読化・アーカイブのみ。
#[async_trait]
pub trait NotificationFeed: Send + Sync {
    /// 表示順のフィード（新しい順）
    async fn list_notifications(&self) -> Result<Vec<Notification>>;

    async fn get_notification(&self, notification_id: NotificationId)
    -> Result<Option<Notification>>;

    /// 通知をその場で置き換える。未知のIDは無視される。
    async fn save_notification(&self, notification: Notification) -> Result<()>;

    /// 通知を削除する。フィードになければ false を返す。
    async fn remove_notification(&self, notification_id: NotificationId) -> Result<bool>;
}
