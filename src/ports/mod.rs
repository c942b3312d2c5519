pub mod book_catalog;
pub mod borrow_repository;
pub mod event_log;
pub mod notification_feed;
pub mod profile_repository;
pub mod request_repository;

pub use book_catalog::BookCatalog;
pub use borrow_repository::BorrowRepository;
pub use event_log::EventLog;
pub use notification_feed::NotificationFeed;
pub use profile_repository::ProfileRepository;
pub use request_repository::RequestRepository;

/// ポート共通のResult型
///
/// ストレージの失敗はBox化され、呼び出し側からは中身を見ない。
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 条件付き書き込みの結果
///
/// 読み込んだ時点の状態がまだ保存されている場合にのみ書き込まれる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardedWrite {
    Applied,
    /// 対象が存在しない
    Missing,
    /// 読み込み後に変更されていた（何も書き込まない）
    Stale,
}
