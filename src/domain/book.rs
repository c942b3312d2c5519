use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    AddBookError, Availability, BookAdded, BookId, BookRequest, Condition, Direction, Genre,
    LendingMode, RequestBookError, RequestId, RequestKind, RequestStatus, RequestSubmitted,
};

/// 登録フォームで選べる貸出期間（日数）
pub const LENDING_PERIOD_OPTIONS: [u32; 4] = [7, 14, 21, 30];

/// 既定の貸出期間（2週間）
pub const DEFAULT_LENDING_PERIOD_DAYS: u32 = 14;

/// 共有カタログに掲載された書籍
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub genre: Genre,
    pub condition: Condition,
    pub availability: Availability,
    pub owner: String,
    pub rating: f32,
    pub reviews: u32,
    pub location: String,
    pub image: Option<String>,
    pub lending_mode: LendingMode,
    pub isbn: Option<String>,
    pub description: Option<String>,
    pub lending_period_days: u32,
}

impl Book {
    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }
}

// ============================================================================
// Catalog filtering
// ============================================================================

/// 貸出状況の条件（`All` は既定のワイルドカード）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvailabilityFilter {
    #[default]
    All,
    Only(Availability),
}

/// 検索語と4つのカタログフィルター
///
/// `None` と空の検索語はワイルドカード。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilter {
    pub search: String,
    pub genre: Option<Genre>,
    pub availability: AvailabilityFilter,
    pub location: Option<String>,
    pub condition: Option<Condition>,
}

impl CatalogFilter {
    /// 空でないすべての条件に一致する場合のみ true
    pub fn matches(&self, book: &Book) -> bool {
        let term = self.search.trim().to_lowercase();
        let matches_search = term.is_empty()
            || book.title.to_lowercase().contains(&term)
            || book.author.to_lowercase().contains(&term);

        let matches_genre = self.genre.is_none_or(|genre| book.genre == genre);
        let matches_availability = match self.availability {
            AvailabilityFilter::All => true,
            AvailabilityFilter::Only(a) => book.availability == a,
        };
        let matches_location = self
            .location
            .as_deref()
            .is_none_or(|location| book.location.eq_ignore_ascii_case(location.trim()));
        let matches_condition = self.condition.is_none_or(|c| book.condition == c);

        matches_search
            && matches_genre
            && matches_availability
            && matches_location
            && matches_condition
    }

    pub fn is_empty(&self) -> bool {
        *self == CatalogFilter::default()
    }
}

/// 純粋関数: フィルター後のカタログ（カタログ順）
pub fn search_books<'a>(books: &'a [Book], filter: &CatalogFilter) -> Vec<&'a Book> {
    books.iter().filter(|book| filter.matches(book)).collect()
}

/// "1 book found" / "N books found"
pub fn results_label(count: usize) -> String {
    if count == 1 {
        "1 book found".to_string()
    } else {
        format!("{} books found", count)
    }
}

// ============================================================================
// Request composition
// ============================================================================

/// 純粋関数: カタログの本への送信リクエストを作成する
///
/// ビジネスルール：
/// - 貸出可能な本のみリクエストできること（貸出中の本は「入荷通知」）
/// - 交換リクエストには提供する本を書いたメッセージが必要であること
pub fn request_book(
    book: &Book,
    kind: RequestKind,
    message: Option<&str>,
    requested_at: DateTime<Utc>,
) -> Result<(BookRequest, RequestSubmitted), RequestBookError> {
    if !book.is_available() {
        return Err(RequestBookError::BookUnavailable);
    }

    let message = message.map(str::trim).filter(|m| !m.is_empty());
    if kind == RequestKind::Swap && message.is_none() {
        return Err(RequestBookError::SwapMessageRequired);
    }

    let request = BookRequest {
        id: RequestId::new(),
        book_title: book.title.clone(),
        counterpart: book.owner.clone(),
        direction: Direction::Outgoing,
        kind,
        requested_at,
        status: RequestStatus::Pending,
        loan_period: match kind {
            RequestKind::Borrow => Some(period_label(book.lending_period_days)),
            RequestKind::Swap => None,
        },
        swap_book: match kind {
            RequestKind::Swap => message.map(str::to_string),
            RequestKind::Borrow => None,
        },
        message: message.map(str::to_string),
    };

    let event = RequestSubmitted {
        request_id: request.id,
        book_id: book.id,
        kind,
        submitted_at: requested_at,
    };

    Ok((request, event))
}

/// 純粋関数: 「入荷通知」は貸出中の本にのみ意味がある
pub fn check_notify_eligible(book: &Book) -> Result<(), RequestBookError> {
    if book.is_available() {
        return Err(RequestBookError::BookAlreadyAvailable);
    }
    Ok(())
}

fn period_label(days: u32) -> String {
    match days {
        7 => "1 week".to_string(),
        14 => "2 weeks".to_string(),
        21 => "3 weeks".to_string(),
        30 => "1 month".to_string(),
        n => format!("{} days", n),
    }
}

// ============================================================================
// Add book
// ============================================================================

/// 登録フォームの生データ（すべてユーザーが入力したままの文字列）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddBookForm {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub genre: String,
    pub condition: Option<Condition>,
    pub description: String,
    pub lending_mode: Option<LendingMode>,
    pub lending_period_days: Option<u32>,
}

/// 新しく掲載される本に付与される出品者情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lister {
    pub name: String,
    pub location: String,
}

/// 純粋関数: 登録フォームを検証し、カタログのエントリを作成する
///
/// ビジネスルール：
/// - タイトル・著者・ジャンルは必須（空欄は未入力扱い）
/// - 状態の既定は good、貸出方式は borrow、期間は14日
/// - 新しい本は貸出可能で、評価はまだない
pub fn add_book(
    form: &AddBookForm,
    lister: &Lister,
    added_at: DateTime<Utc>,
) -> Result<(Book, BookAdded), AddBookError> {
    let mut missing = Vec::new();
    if form.title.trim().is_empty() {
        missing.push("title");
    }
    if form.author.trim().is_empty() {
        missing.push("author");
    }
    if form.genre.trim().is_empty() {
        missing.push("genre");
    }
    if !missing.is_empty() {
        return Err(AddBookError::MissingRequiredFields(missing));
    }

    let genre = form
        .genre
        .trim()
        .parse::<Genre>()
        .map_err(|e| AddBookError::InvalidField(e.to_string()))?;

    let lending_period_days = form
        .lending_period_days
        .unwrap_or(DEFAULT_LENDING_PERIOD_DAYS);
    if !LENDING_PERIOD_OPTIONS.contains(&lending_period_days) {
        return Err(AddBookError::InvalidField(format!(
            "Invalid lending period: {} days",
            lending_period_days
        )));
    }

    let non_blank = |s: &str| Some(s.trim()).filter(|s| !s.is_empty()).map(str::to_string);

    let book = Book {
        id: BookId::new(),
        title: form.title.trim().to_string(),
        author: form.author.trim().to_string(),
        genre,
        condition: form.condition.unwrap_or_default(),
        availability: Availability::Available,
        owner: lister.name.clone(),
        rating: 0.0,
        reviews: 0,
        location: lister.location.clone(),
        image: None,
        lending_mode: form.lending_mode.unwrap_or_default(),
        isbn: non_blank(&form.isbn),
        description: non_blank(&form.description),
        lending_period_days,
    };

    let event = BookAdded {
        book_id: book.id,
        title: book.title.clone(),
        added_at,
    };

    Ok((book, event))
}
