use crate::domain::{
    self, AvailabilityWatched, Book, BookId, BookRequest, CatalogFilter, DomainEvent,
    book::Lister, commands::*,
};
use std::time::Duration;

use super::dependencies::{ServiceDependencies, publish};
use super::errors::{Result, ServiceError};

/// フィルター条件でカタログを検索する
///
/// カタログの並び順を保ち、ページングは行わない。
pub async fn search_books(deps: &ServiceDependencies, filter: &CatalogFilter) -> Result<Vec<Book>> {
    let books = deps
        .book_catalog
        .list_books()
        .await
        .map_err(ServiceError::Storage)?;

    let found: Vec<Book> = domain::book::search_books(&books, filter)
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!(total = books.len(), found = found.len(), "catalog searched");
    Ok(found)
}

pub async fn get_book(deps: &ServiceDependencies, book_id: BookId) -> Result<Book> {
    deps.book_catalog
        .get_book(book_id)
        .await
        .map_err(ServiceError::Storage)?
        .ok_or(ServiceError::BookNotFound)
}

/// カタログの本に貸出・交換リクエストを送る
///
/// 強制されるビジネスルール:
/// - 本が存在し、貸出可能であること
/// - 交換リクエストにはメッセージが必要であること
/// - リクエストは持ち主宛ての pending として送信一覧に入る
pub async fn request_book(
    deps: &ServiceDependencies,
    cmd: RequestBook,
) -> Result<(Book, BookRequest)> {
    // 1. 書籍を読み込む
    let book = get_book(deps, cmd.book_id).await?;

    // 2. ドメイン層の純粋関数でリクエストを作成
    let (request, event) = domain::book::request_book(
        &book,
        cmd.kind,
        cmd.message.as_deref(),
        cmd.requested_at,
    )?;

    // 3. 送信リクエストとして保存
    deps.requests
        .save_request(request.clone())
        .await
        .map_err(ServiceError::Storage)?;

    // 4. イベントを記録
    publish(deps, vec![DomainEvent::RequestSubmitted(event)]).await?;

    Ok((book, request))
}

/// 貸出中の本に「入荷通知」を登録する
///
/// 二度登録しても監視は一件だけ。
pub async fn notify_when_available(
    deps: &ServiceDependencies,
    cmd: WatchAvailability,
) -> Result<Book> {
    let book = get_book(deps, cmd.book_id).await?;
    domain::book::check_notify_eligible(&book)?;

    let newly_watched = deps
        .book_catalog
        .watch_availability(book.id)
        .await
        .map_err(ServiceError::Storage)?;

    if newly_watched {
        let event = AvailabilityWatched {
            book_id: book.id,
            watched_at: cmd.watched_at,
        };
        publish(deps, vec![DomainEvent::AvailabilityWatched(event)]).await?;
    } else {
        tracing::debug!(book_id = %book.id, "book already watched");
    }

    Ok(book)
}

/// 登録フォームから新しい本を掲載する
///
/// 強制されるビジネスルール:
/// - タイトル・著者・ジャンルは必須（欠けていれば何も保存しない）
/// - 正しい送信は `submit_delay` 待ってから保存される
/// - 持ち主は現在のユーザー、所在地はその地区
pub async fn add_book(
    deps: &ServiceDependencies,
    cmd: AddBook,
    submit_delay: Duration,
) -> Result<Book> {
    // 1. 現在のユーザーが出品者
    let profile = deps
        .profile
        .get_profile()
        .await
        .map_err(ServiceError::Storage)?;
    let lister = Lister {
        name: profile.name.clone(),
        location: profile.neighbourhood().to_string(),
    };

    // 2. バリデーションとエントリの作成
    let (book, event) = domain::book::add_book(&cmd.form, &lister, cmd.submitted_at)?;

    // 3. 送信待ち時間を模擬
    if !submit_delay.is_zero() {
        tokio::time::sleep(submit_delay).await;
    }

    // 4. カタログに保存
    deps.book_catalog
        .add_book(book.clone())
        .await
        .map_err(ServiceError::Storage)?;

    // 5. イベントを記録
    publish(deps, vec![DomainEvent::BookAdded(event)]).await?;

    Ok(book)
}
