use super::{BorrowStatus, RequestStatus};

/// 本の登録フォームのエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddBookError {
    /// 必須項目が空欄（タイトル・著者・ジャンル）
    MissingRequiredFields(Vec<&'static str>),
    /// 選択肢にない値
    InvalidField(String),
}

/// カタログの本へのリクエスト・入荷通知のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBookError {
    /// 交換リクエストには提供する本の記載が必要
    SwapMessageRequired,
    /// 貸出中の本は「入荷通知」を使う
    BookUnavailable,
    /// 貸出可能な本に「入荷通知」は不要
    BookAlreadyAvailable,
}

/// リクエストの状態遷移のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestTransitionError {
    /// 承認・却下は pending のリクエストのみ
    NotPending(RequestStatus),
    /// 受け渡しは approved のリクエストのみ
    NotApproved(RequestStatus),
    /// 返却済みは approved または active のリクエストのみ
    NotReturnable(RequestStatus),
}

/// 借りている本の状態遷移のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorrowTransitionError {
    /// 返却確認は active または returning の記録のみ
    CannotConfirmReturn(BorrowStatus),
    /// 延長は active の記録のみ
    CannotExtend(BorrowStatus),
    /// 延長日数が1〜30日の範囲外
    InvalidExtensionDays(i64),
    /// 即時返却は延滞中の記録のみ
    NotOverdue(BorrowStatus),
}

impl std::fmt::Display for RequestTransitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestTransitionError::NotPending(s) => {
                write!(f, "Request is {}, expected pending", s.as_str())
            }
            RequestTransitionError::NotApproved(s) => {
                write!(f, "Request is {}, expected approved", s.as_str())
            }
            RequestTransitionError::NotReturnable(s) => {
                write!(f, "Request is {}, expected approved or active", s.as_str())
            }
        }
    }
}

impl std::fmt::Display for BorrowTransitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BorrowTransitionError::CannotConfirmReturn(s) => {
                write!(f, "Cannot confirm return of a {} loan", s.as_str())
            }
            BorrowTransitionError::CannotExtend(s) => {
                write!(f, "Cannot extend a {} loan", s.as_str())
            }
            BorrowTransitionError::InvalidExtensionDays(d) => {
                write!(f, "Extension must be between 1 and 30 days, got {}", d)
            }
            BorrowTransitionError::NotOverdue(s) => {
                write!(f, "Immediate return is only for overdue loans, this one is {}", s.as_str())
            }
        }
    }
}
