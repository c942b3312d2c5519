//! Demonstration data loaded at start-up.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::domain::profile::{CollectionCondition, ShelfStatus};
use crate::domain::{
    Availability, Book, BookId, BookRequest, BorrowId, BorrowRecord, BorrowStatus,
    CollectionBook, CollectionBookId, Condition, Direction, Genre, LendingMode, Notification,
    NotificationCategory, NotificationId, ProfileSettings, RequestId, RequestKind, RequestStatus,
    Review, UserProfile,
};

struct BookSeed<'a> {
    title: &'a str,
    author: &'a str,
    genre: Genre,
    condition: Condition,
    availability: Availability,
    owner: &'a str,
    rating: f32,
    reviews: u32,
    location: &'a str,
    image: &'a str,
    lending_mode: LendingMode,
}

impl BookSeed<'_> {
    fn build(self) -> Book {
        Book {
            id: BookId::new(),
            title: self.title.to_string(),
            author: self.author.to_string(),
            genre: self.genre,
            condition: self.condition,
            availability: self.availability,
            owner: self.owner.to_string(),
            rating: self.rating,
            reviews: self.reviews,
            location: self.location.to_string(),
            image: Some(self.image.to_string()),
            lending_mode: self.lending_mode,
            isbn: None,
            description: None,
            lending_period_days: crate::domain::book::DEFAULT_LENDING_PERIOD_DAYS,
        }
    }
}

pub fn catalog() -> Vec<Book> {
    let seeds = [
        BookSeed {
            title: "The Great Gatsby",
            author: "F. Scott Fitzgerald",
            genre: Genre::Fiction,
            condition: Condition::LikeNew,
            availability: Availability::Available,
            owner: "Sarah M.",
            rating: 4.8,
            reviews: 12,
            location: "Downtown",
            image: "/the-great-gatsby-book.jpg",
            lending_mode: LendingMode::Borrow,
        },
        BookSeed {
            title: "Atomic Habits",
            author: "James Clear",
            genre: Genre::NonFiction,
            condition: Condition::Good,
            availability: Availability::Available,
            owner: "Mike R.",
            rating: 4.9,
            reviews: 28,
            location: "East Side",
            image: "/atomic-habits-book.jpg",
            lending_mode: LendingMode::Swap,
        },
        BookSeed {
            title: "Dune",
            author: "Frank Herbert",
            genre: Genre::SciFi,
            condition: Condition::Good,
            availability: Availability::Available,
            owner: "Alex K.",
            rating: 4.7,
            reviews: 15,
            location: "North District",
            image: "/dune-book.jpg",
            lending_mode: LendingMode::Borrow,
        },
        BookSeed {
            title: "To Kill a Mockingbird",
            author: "Harper Lee",
            genre: Genre::Fiction,
            condition: Condition::LikeNew,
            availability: Availability::Unavailable,
            owner: "Emma W.",
            rating: 4.9,
            reviews: 35,
            location: "West End",
            image: "/to-kill-a-mockingbird-book.jpg",
            lending_mode: LendingMode::Borrow,
        },
        BookSeed {
            title: "Project Hail Mary",
            author: "Andy Weir",
            genre: Genre::SciFi,
            condition: Condition::Good,
            availability: Availability::Available,
            owner: "John D.",
            rating: 4.8,
            reviews: 22,
            location: "Downtown",
            image: "/project-hail-mary-book.jpg",
            lending_mode: LendingMode::Swap,
        },
        BookSeed {
            title: "The Midnight Library",
            author: "Matt Haig",
            genre: Genre::Fantasy,
            condition: Condition::Good,
            availability: Availability::Available,
            owner: "Lisa T.",
            rating: 4.6,
            reviews: 18,
            location: "East Side",
            image: "/the-midnight-library-book.jpg",
            lending_mode: LendingMode::Borrow,
        },
        BookSeed {
            title: "The Hobbit",
            author: "J.R.R. Tolkien",
            genre: Genre::Fantasy,
            condition: Condition::Good,
            availability: Availability::Available,
            owner: "David P.",
            rating: 4.9,
            reviews: 45,
            location: "North District",
            image: "/the-hobbit-book.jpg",
            lending_mode: LendingMode::Borrow,
        },
        BookSeed {
            title: "Educated",
            author: "Tara Westover",
            genre: Genre::Biography,
            condition: Condition::LikeNew,
            availability: Availability::Available,
            owner: "Rachel S.",
            rating: 4.8,
            reviews: 32,
            location: "West End",
            image: "/educated-tara-westover-book.jpg",
            lending_mode: LendingMode::Swap,
        },
    ];
    seeds.into_iter().map(BookSeed::build).collect()
}

struct RequestSeed<'a> {
    book_title: &'a str,
    counterpart: &'a str,
    direction: Direction,
    kind: RequestKind,
    age: Duration,
    status: RequestStatus,
    loan_period: Option<&'a str>,
    swap_book: Option<&'a str>,
}

impl RequestSeed<'_> {
    fn build(self, now: DateTime<Utc>) -> BookRequest {
        BookRequest {
            id: RequestId::new(),
            book_title: self.book_title.to_string(),
            counterpart: self.counterpart.to_string(),
            direction: self.direction,
            kind: self.kind,
            requested_at: now - self.age,
            status: self.status,
            loan_period: self.loan_period.map(str::to_string),
            swap_book: self.swap_book.map(str::to_string),
            message: None,
        }
    }
}

pub fn requests(now: DateTime<Utc>) -> Vec<BookRequest> {
    let seeds = [
        RequestSeed {
            book_title: "The Great Gatsby",
            counterpart: "John Smith",
            direction: Direction::Incoming,
            kind: RequestKind::Borrow,
            age: Duration::hours(2),
            status: RequestStatus::Pending,
            loan_period: Some("2 weeks"),
            swap_book: None,
        },
        RequestSeed {
            book_title: "Atomic Habits",
            counterpart: "Lisa Johnson",
            direction: Direction::Incoming,
            kind: RequestKind::Swap,
            age: Duration::days(1),
            status: RequestStatus::Approved,
            loan_period: None,
            swap_book: Some("Project Hail Mary"),
        },
        RequestSeed {
            book_title: "Dune",
            counterpart: "Mike Chen",
            direction: Direction::Incoming,
            kind: RequestKind::Borrow,
            age: Duration::days(3),
            status: RequestStatus::Rejected,
            loan_period: None,
            swap_book: None,
        },
        RequestSeed {
            book_title: "To Kill a Mockingbird",
            counterpart: "Emma Wilson",
            direction: Direction::Outgoing,
            kind: RequestKind::Borrow,
            age: Duration::hours(5),
            status: RequestStatus::Pending,
            loan_period: None,
            swap_book: None,
        },
        RequestSeed {
            book_title: "The Midnight Library",
            counterpart: "Alex King",
            direction: Direction::Outgoing,
            kind: RequestKind::Borrow,
            age: Duration::weeks(1),
            status: RequestStatus::Active,
            loan_period: Some("5 days"),
            swap_book: None,
        },
        RequestSeed {
            book_title: "Project Hail Mary",
            counterpart: "Sarah Davis",
            direction: Direction::Outgoing,
            kind: RequestKind::Borrow,
            age: Duration::weeks(2),
            status: RequestStatus::Completed,
            loan_period: None,
            swap_book: None,
        },
    ];
    seeds.into_iter().map(|s| s.build(now)).collect()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

struct BorrowSeed<'a> {
    book_title: &'a str,
    owner: &'a str,
    borrowed_on: NaiveDate,
    due_on: NaiveDate,
    days_remaining: i64,
    status: BorrowStatus,
    progress: u32,
}

impl BorrowSeed<'_> {
    fn build(self) -> BorrowRecord {
        BorrowRecord {
            id: BorrowId::new(),
            book_title: self.book_title.to_string(),
            owner: self.owner.to_string(),
            borrowed_on: self.borrowed_on,
            due_on: self.due_on,
            days_remaining: self.days_remaining,
            status: self.status,
            progress: self.progress,
            pending_extension: None,
        }
    }
}

pub fn borrows() -> Vec<BorrowRecord> {
    let seeds = [
        BorrowSeed {
            book_title: "The Great Gatsby",
            owner: "Sarah M.",
            borrowed_on: date(2024, 12, 1),
            due_on: date(2024, 12, 15),
            days_remaining: 5,
            status: BorrowStatus::Active,
            progress: 66,
        },
        BorrowSeed {
            book_title: "Project Hail Mary",
            owner: "John D.",
            borrowed_on: date(2024, 11, 20),
            due_on: date(2024, 12, 4),
            days_remaining: -2,
            status: BorrowStatus::Overdue,
            progress: 125,
        },
        BorrowSeed {
            book_title: "Atomic Habits",
            owner: "Mike R.",
            borrowed_on: date(2024, 12, 8),
            due_on: date(2024, 12, 22),
            days_remaining: 12,
            status: BorrowStatus::Active,
            progress: 28,
        },
    ];
    seeds.into_iter().map(BorrowSeed::build).collect()
}

/// Feed, newest first. The request notification deep-links to `request_link`.
pub fn notifications(now: DateTime<Utc>, request_link: Option<RequestId>) -> Vec<Notification> {
    let request_url = match request_link {
        Some(id) => format!("/requests?id={}", id),
        None => "/requests".to_string(),
    };
    let seeds = [
        NotificationSeed {
            category: NotificationCategory::Request,
            title: "New Borrow Request",
            message: "John Smith requested to borrow \"The Great Gatsby\"",
            user: Some("John Smith"),
            age: Duration::minutes(2),
            read: false,
            url: &request_url,
        },
        NotificationSeed {
            category: NotificationCategory::Approval,
            title: "Request Approved",
            message: "Emma Wilson approved your borrow request for \"To Kill a Mockingbird\"",
            user: Some("Emma Wilson"),
            age: Duration::hours(1),
            read: false,
            url: "/tracking",
        },
        NotificationSeed {
            category: NotificationCategory::DueSoon,
            title: "Book Due Soon",
            message: "\"Project Hail Mary\" is due in 3 days",
            user: None,
            age: Duration::hours(5),
            read: true,
            url: "/tracking",
        },
        NotificationSeed {
            category: NotificationCategory::Return,
            title: "Book Returned",
            message: "Mike Chen returned \"Atomic Habits\" to your collection",
            user: Some("Mike Chen"),
            age: Duration::days(1),
            read: true,
            url: "/books",
        },
        NotificationSeed {
            category: NotificationCategory::Overdue,
            title: "Book Overdue",
            message: "\"Dune\" is now 2 days overdue. Please return it soon.",
            user: None,
            age: Duration::days(2),
            read: true,
            url: "/tracking",
        },
    ];
    seeds.into_iter().map(|seed| seed.build(now)).collect()
}

struct NotificationSeed<'a> {
    category: NotificationCategory,
    title: &'a str,
    message: &'a str,
    user: Option<&'a str>,
    age: Duration,
    read: bool,
    url: &'a str,
}

impl NotificationSeed<'_> {
    fn build(self, now: DateTime<Utc>) -> Notification {
        Notification {
            id: NotificationId::new(),
            category: self.category,
            title: self.title.to_string(),
            message: self.message.to_string(),
            user_name: self.user.map(str::to_string),
            created_at: now - self.age,
            read: self.read,
            action_url: Some(self.url.to_string()),
        }
    }
}

pub fn profile() -> UserProfile {
    UserProfile {
        name: "Sarah Martinez".to_string(),
        location: "Downtown, San Francisco, CA".to_string(),
        bio: None,
        joined: "March 2023".to_string(),
        rating: 4.8,
        reviews: 42,
        books_lent: 15,
        books_shared: 28,
        active_swaps: 3,
        settings: ProfileSettings::default(),
    }
}

struct OwnedSeed<'a> {
    title: &'a str,
    author: &'a str,
    cover: &'a str,
    status: ShelfStatus,
    condition: CollectionCondition,
    lending_mode: LendingMode,
    rating: f32,
    borrows: u32,
}

impl OwnedSeed<'_> {
    fn build(self) -> CollectionBook {
        CollectionBook {
            id: CollectionBookId::new(),
            title: self.title.to_string(),
            author: self.author.to_string(),
            cover: Some(self.cover.to_string()),
            status: self.status,
            condition: self.condition,
            lending_mode: self.lending_mode,
            rating: self.rating,
            borrows: self.borrows,
            notes: None,
        }
    }
}

pub fn collection() -> Vec<CollectionBook> {
    let seeds = [
        OwnedSeed {
            title: "The Great Gatsby",
            author: "F. Scott Fitzgerald",
            cover: "/the-great-gatsby-book.jpg",
            status: ShelfStatus::Available,
            condition: CollectionCondition::Excellent,
            lending_mode: LendingMode::Borrow,
            rating: 4.8,
            borrows: 5,
        },
        OwnedSeed {
            title: "Atomic Habits",
            author: "James Clear",
            cover: "/atomic-habits-book.jpg",
            status: ShelfStatus::Borrowed,
            condition: CollectionCondition::Good,
            lending_mode: LendingMode::Swap,
            rating: 4.9,
            borrows: 8,
        },
        OwnedSeed {
            title: "Dune",
            author: "Frank Herbert",
            cover: "/dune-book.jpg",
            status: ShelfStatus::Available,
            condition: CollectionCondition::LikeNew,
            lending_mode: LendingMode::Borrow,
            rating: 4.7,
            borrows: 3,
        },
        OwnedSeed {
            title: "To Kill a Mockingbird",
            author: "Harper Lee",
            cover: "/to-kill-a-mockingbird-book.jpg",
            status: ShelfStatus::Available,
            condition: CollectionCondition::Good,
            lending_mode: LendingMode::Swap,
            rating: 4.9,
            borrows: 12,
        },
        OwnedSeed {
            title: "Project Hail Mary",
            author: "Andy Weir",
            cover: "/project-hail-mary-book.jpg",
            status: ShelfStatus::Available,
            condition: CollectionCondition::Excellent,
            lending_mode: LendingMode::Borrow,
            rating: 4.8,
            borrows: 6,
        },
        OwnedSeed {
            title: "The Midnight Library",
            author: "Matt Haig",
            cover: "/the-midnight-library-book.jpg",
            status: ShelfStatus::Available,
            condition: CollectionCondition::Good,
            lending_mode: LendingMode::Borrow,
            rating: 4.6,
            borrows: 4,
        },
        OwnedSeed {
            title: "Where the Crawdads Sing",
            author: "Delia Owens",
            cover: "/where-the-crawdads-sing-book.jpg",
            status: ShelfStatus::Available,
            condition: CollectionCondition::Excellent,
            lending_mode: LendingMode::Swap,
            rating: 4.7,
            borrows: 7,
        },
    ];
    seeds.into_iter().map(OwnedSeed::build).collect()
}

pub fn reviews(now: DateTime<Utc>) -> Vec<Review> {
    ["John Smith", "Lisa Johnson", "Mike Chen"]
        .into_iter()
        .map(|author| Review {
            title: "Reliable and Quick Responder".to_string(),
            body: concat!(
                "Sarah was great! She took excellent care of my book and returned it on time. ",
                "Highly recommend!"
            )
            .to_string(),
            stars: 5,
            author: author.to_string(),
            created_at: now - Duration::weeks(2),
        })
        .collect()
}
