use crate::domain::{Book, BookId};
use async_trait::async_trait;

use super::Result;

/// カタログのストレージポート
///
/// 共有された書籍一覧と「入荷通知」の監視リストを保持する。
#[async_trait]
pub trait BookCatalog: Send + Sync {
    /// 掲載順のすべての書籍
    async fn list_books(&self) -> Result<Vec<Book>>;

    async fn get_book(&self, book_id: BookId) -> Result<Option<Book>>;

    /// 新しく掲載された書籍を追加する
    async fn add_book(&self, book: Book) -> Result<()>;

    /// 「入荷通知」を登録する
    ///
    /// すでに登録済みの場合は false を返す。
    async fn watch_availability(&self, book_id: BookId) -> Result<bool>;

    async fn watched_books(&self) -> Result<Vec<BookId>>;
}
