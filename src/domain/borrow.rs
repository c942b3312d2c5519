use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{
    BorrowId, BorrowReturned, BorrowTransitionError, ExtensionRequested, ReturnScheduled,
};

/// 依頼できる延長の最小日数
pub const MIN_EXTENSION_DAYS: u8 = 1;

/// 依頼できる延長の最大日数
pub const MAX_EXTENSION_DAYS: u8 = 30;

/// 借りている本の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorrowStatus {
    /// 貸出期間内
    Active,
    /// 返却期限切れ
    Overdue,
    /// 返却手配済み（未受領）
    Returning,
    /// 返却済み
    Completed,
}

impl BorrowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BorrowStatus::Active => "active",
            BorrowStatus::Overdue => "overdue",
            BorrowStatus::Returning => "returning",
            BorrowStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BorrowStatus::Active => "Active",
            BorrowStatus::Overdue => "Overdue",
            BorrowStatus::Returning => "Returning",
            BorrowStatus::Completed => "Completed",
        }
    }

    fn is_open(&self) -> bool {
        matches!(self, BorrowStatus::Active | BorrowStatus::Overdue)
    }
}

/// 借り手が依頼し、持ち主の返答待ちの延長
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionRequest {
    pub days: u8,
    pub requested_at: DateTime<Utc>,
}

/// 現在のユーザーが借りている本
///
/// `days_remaining` と `progress` は保存された値で、時刻から再計算はしない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowRecord {
    pub id: BorrowId,
    pub book_title: String,
    pub owner: String,
    pub borrowed_on: NaiveDate,
    pub due_on: NaiveDate,
    /// 延滞すると負
    pub days_remaining: i64,
    pub status: BorrowStatus,
    /// 経過時間 / 貸出期間（%）。延滞時は100を超える
    pub progress: u32,
    pub pending_extension: Option<ExtensionRequest>,
}

impl BorrowRecord {
    /// プログレスバーの値（上限100）
    pub fn displayed_progress(&self) -> u32 {
        self.progress.min(100)
    }

    /// 状態ラベル。期限を過ぎた未完了の記録は常に "Overdue"。
    pub fn status_label(&self) -> &'static str {
        if self.status.is_open() && self.days_remaining < 0 {
            return BorrowStatus::Overdue.label();
        }
        self.status.label()
    }

    /// 返却期限を過ぎているか
    pub fn is_past_due(&self) -> bool {
        self.days_remaining < 0
    }

    /// "5 days" or "2 days overdue"
    pub fn remaining_label(&self) -> String {
        if self.days_remaining < 0 {
            format!("{} days overdue", self.days_remaining.unsigned_abs())
        } else {
            format!("{} days", self.days_remaining)
        }
    }
}

/// Pure function: the borrower hands the book back (active or returning → completed)
pub fn confirm_return(
    record: &BorrowRecord,
    returned_at: DateTime<Utc>,
) -> Result<(BorrowRecord, BorrowReturned), BorrowTransitionError> {
    match record.status {
        BorrowStatus::Active | BorrowStatus::Returning => {}
        other => return Err(BorrowTransitionError::CannotConfirmReturn(other)),
    }

    let updated = BorrowRecord {
        status: BorrowStatus::Completed,
        pending_extension: None,
        ..record.clone()
    };
    let event = BorrowReturned {
        borrow_id: record.id,
        returned_at,
        was_overdue: record.is_past_due(),
    };

    Ok((updated, event))
}

/// 純粋関数: 持ち主に延長を依頼する
///
/// ビジネスルール：
/// - Active の貸出のみ延長できること
/// - 1〜30日であること
/// - 新しい依頼は保留中の依頼を置き換える
pub fn request_extension(
    record: &BorrowRecord,
    days: i64,
    requested_at: DateTime<Utc>,
) -> Result<(BorrowRecord, ExtensionRequested), BorrowTransitionError> {
    if record.status != BorrowStatus::Active {
        return Err(BorrowTransitionError::CannotExtend(record.status));
    }
    let days = u8::try_from(days)
        .ok()
        .filter(|d| (MIN_EXTENSION_DAYS..=MAX_EXTENSION_DAYS).contains(d))
        .ok_or(BorrowTransitionError::InvalidExtensionDays(days))?;

    let updated = BorrowRecord {
        pending_extension: Some(ExtensionRequest { days, requested_at }),
        ..record.clone()
    };
    let event = ExtensionRequested {
        borrow_id: record.id,
        days,
        requested_at,
    };

    Ok((updated, event))
}

/// 純粋関数: 延滞中の借り手がすぐに返却を手配する
pub fn return_immediately(
    record: &BorrowRecord,
    scheduled_at: DateTime<Utc>,
) -> Result<(BorrowRecord, ReturnScheduled), BorrowTransitionError> {
    if record.status != BorrowStatus::Overdue {
        return Err(BorrowTransitionError::NotOverdue(record.status));
    }

    let updated = BorrowRecord {
        status: BorrowStatus::Returning,
        ..record.clone()
    };
    let event = ReturnScheduled {
        borrow_id: record.id,
        scheduled_at,
    };

    Ok((updated, event))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: BorrowStatus, days_remaining: i64, progress: u32) -> BorrowRecord {
        BorrowRecord {
            id: BorrowId::new(),
            book_title: "Project Hail Mary".to_string(),
            owner: "John D.".to_string(),
            borrowed_on: NaiveDate::from_ymd_opt(2024, 11, 20).unwrap(),
            due_on: NaiveDate::from_ymd_opt(2024, 12, 4).unwrap(),
            days_remaining,
            status,
            progress,
            pending_extension: None,
        }
    }

    #[test]
    fn test_displayed_progress_is_capped() {
        assert_eq!(record(BorrowStatus::Overdue, -2, 125).displayed_progress(), 100);
        assert_eq!(record(BorrowStatus::Active, 5, 66).displayed_progress(), 66);
        assert_eq!(record(BorrowStatus::Active, 0, 100).displayed_progress(), 100);
    }

    #[test]
    fn test_negative_days_always_labelled_overdue() {
        // Hand-set data may disagree; the label follows the days.
        let r = record(BorrowStatus::Active, -1, 105);
        assert_eq!(r.status_label(), "Overdue");
        assert_eq!(r.remaining_label(), "1 days overdue");

        let r = record(BorrowStatus::Overdue, -2, 125);
        assert_eq!(r.status_label(), "Overdue");
        assert_eq!(r.remaining_label(), "2 days overdue");
    }

    #[test]
    fn test_labels_for_open_record() {
        let r = record(BorrowStatus::Active, 5, 66);
        assert_eq!(r.status_label(), "Active");
        assert_eq!(r.remaining_label(), "5 days");
    }

    #[test]
    fn test_confirm_return_completes_active() {
        let r = record(BorrowStatus::Active, 5, 66);
        let (r2, event) = confirm_return(&r, Utc::now()).unwrap();
        assert_eq!(r2.status, BorrowStatus::Completed);
        assert!(!event.was_overdue);
        assert_eq!(r2.status_label(), "Completed");
    }

    #[test]
    fn test_confirm_return_rejects_overdue() {
        let r = record(BorrowStatus::Overdue, -2, 125);
        assert_eq!(
            confirm_return(&r, Utc::now()).unwrap_err(),
            BorrowTransitionError::CannotConfirmReturn(BorrowStatus::Overdue)
        );
    }

    #[test]
    fn test_extension_days_must_be_within_range() {
        let r = record(BorrowStatus::Active, 5, 66);
        assert_eq!(
            request_extension(&r, 0, Utc::now()).unwrap_err(),
            BorrowTransitionError::InvalidExtensionDays(0)
        );
        assert_eq!(
            request_extension(&r, 31, Utc::now()).unwrap_err(),
            BorrowTransitionError::InvalidExtensionDays(31)
        );
        assert_eq!(
            request_extension(&r, 300, Utc::now()).unwrap_err(),
            BorrowTransitionError::InvalidExtensionDays(300)
        );
        assert_eq!(
            request_extension(&r, -1, Utc::now()).unwrap_err(),
            BorrowTransitionError::InvalidExtensionDays(-1)
        );

        let (r2, event) = request_extension(&r, 7, Utc::now()).unwrap();
        assert_eq!(r2.pending_extension.as_ref().map(|e| e.days), Some(7));
        assert_eq!(r2.due_on, r.due_on);
        assert_eq!(event.days, 7);
    }

    #[test]
    fn test_extension_requires_active() {
        let r = record(BorrowStatus::Overdue, -2, 125);
        assert_eq!(
            request_extension(&r, 7, Utc::now()).unwrap_err(),
            BorrowTransitionError::CannotExtend(BorrowStatus::Overdue)
        );
    }

    #[test]
    fn test_return_immediately_then_confirm() {
        let r = record(BorrowStatus::Overdue, -2, 125);
        let (r, _) = return_immediately(&r, Utc::now()).unwrap();
        assert_eq!(r.status, BorrowStatus::Returning);
        assert_eq!(r.status_label(), "Returning");

        let (r, event) = confirm_return(&r, Utc::now()).unwrap();
        assert_eq!(r.status, BorrowStatus::Completed);
        assert!(event.was_overdue);
    }

    #[test]
    fn test_return_immediately_requires_overdue() {
        let r = record(BorrowStatus::Active, 5, 66);
        assert_eq!(
            return_immediately(&r, Utc::now()).unwrap_err(),
            BorrowTransitionError::NotOverdue(BorrowStatus::Active)
        );
    }
}
