use crate::application::catalog as service;
use crate::domain::{
    AddBookForm, Book,
    book::results_label,
    commands::{AddBook, RequestBook, WatchAvailability},
    value_objects::BookId,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use super::{AppState, QueryError};
use crate::api::{
    error::ApiError,
    types::{
        AddBookOptions, BookAddedResponse, BookListResponse, BookRequestBody, BooksQuery,
        Feedback, FeedbackResponse, RequestItem, RequestSentResponse,
    },
};

/// GET /books - カタログを検索・絞り込み
///
/// クエリパラメータ（すべて任意、空は「すべて」）:
/// - search: タイトルまたは著者の部分一致（大文字小文字を区別しない）
/// - genre, condition: 完全一致
/// - availability: all | available | unavailable
/// - location: 完全一致（大文字小文字を区別しない）
pub async fn list_books(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BooksQuery>,
) -> Result<Json<BookListResponse>, QueryError> {
    let filter = query.to_filter().map_err(QueryError::BadRequest)?;

    let books = service::search_books(&state.service_deps, &filter).await?;

    let count = books.len();
    Ok(Json(BookListResponse {
        books,
        count,
        label: results_label(count),
    }))
}

/// GET /books/:id - 書籍の詳細
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<Uuid>,
) -> Result<Json<Book>, ApiError> {
    let book = service::get_book(&state.service_deps, BookId::from_uuid(book_id)).await?;
    Ok(Json(book))
}

/// POST /books/:id/request - 貸出・交換リクエストを送信
///
/// 強制されるビジネスルール:
/// - 書籍が貸出可能であること
/// - 交換リクエストにはメッセージがあること
pub async fn request_book(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<Uuid>,
    Json(body): Json<BookRequestBody>,
) -> Result<(StatusCode, Json<RequestSentResponse>), ApiError> {
    let now = Utc::now();
    let cmd = RequestBook {
        book_id: BookId::from_uuid(book_id),
        kind: body.kind,
        message: body.message,
        requested_at: now,
    };

    let (book, request) = service::request_book(&state.service_deps, cmd).await?;

    let feedback = Feedback::success(
        "Request sent!",
        format!("{} request sent to {}", request.kind.label(), book.owner),
    );
    let response = RequestSentResponse {
        request: RequestItem::new(request, now),
        feedback,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /books/:id/notify - 貸出中の本の「入荷通知」
pub async fn notify_when_available(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<Uuid>,
) -> Result<Json<FeedbackResponse>, ApiError> {
    let cmd = WatchAvailability {
        book_id: BookId::from_uuid(book_id),
        watched_at: Utc::now(),
    };

    let book = service::notify_when_available(&state.service_deps, cmd).await?;

    let feedback = Feedback::success(
        "Notification Set",
        format!("You'll be notified when \"{}\" becomes available", book.title),
    );
    Ok(Json(feedback.into()))
}

/// GET /books/add - 登録フォームの選択肢と既定値
pub async fn add_book_form() -> Json<AddBookOptions> {
    Json(AddBookOptions::default())
}

/// POST /books/add - 新しい本を掲載
///
/// タイトル・著者・ジャンルは必須。正しい送信は設定された待ち時間の後に
/// 保存され、リダイレクト先を返す。
pub async fn add_book(
    State(state): State<Arc<AppState>>,
    Json(form): Json<AddBookForm>,
) -> Result<(StatusCode, Json<BookAddedResponse>), ApiError> {
    let cmd = AddBook {
        form,
        submitted_at: Utc::now(),
    };

    let book = service::add_book(&state.service_deps, cmd, state.submit_delay).await?;

    let feedback = Feedback::success(
        "Book added successfully!",
        format!("\"{}\" has been added to your collection.", book.title),
    );
    let response = BookAddedResponse {
        book,
        feedback,
        redirect_to: "/books",
    };

    Ok((StatusCode::CREATED, Json(response)))
}
