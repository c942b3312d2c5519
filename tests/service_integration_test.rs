use bookswap::adapters::in_memory;
use bookswap::application::{
    ServiceDependencies, ServiceError, catalog, notifications, profile, requests, tracking,
};
use bookswap::domain::book::AvailabilityFilter;
use bookswap::domain::commands::*;
use bookswap::domain::profile::{CollectionBookEdit, CollectionCondition, ProfileEdit};
use bookswap::domain::request::available_actions;
use bookswap::domain::*;
use async_trait::async_trait;
use bookswap::ports::{self, BookCatalog, EventLog, ProfileRepository, RequestRepository};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;

mod common;

// ============================================================================
// Helpers
// ============================================================================

async fn book_titled(deps: &ServiceDependencies, title: &str) -> Book {
    catalog::search_books(deps, &CatalogFilter::default())
        .await
        .unwrap()
        .into_iter()
        .find(|b| b.title == title)
        .unwrap()
}

async fn request_where(
    deps: &ServiceDependencies,
    direction: Direction,
    status: RequestStatus,
) -> BookRequest {
    requests::list_requests(deps, Some(direction))
        .await
        .unwrap()
        .into_iter()
        .find(|r| r.status == status)
        .unwrap()
}

async fn borrow_titled(deps: &ServiceDependencies, title: &str) -> BorrowRecord {
    tracking::list_borrows(deps)
        .await
        .unwrap()
        .into_iter()
        .find(|b| b.book_title == title)
        .unwrap()
}

async fn events(deps: &ServiceDependencies) -> Vec<DomainEvent> {
    deps.event_log.list().await.unwrap()
}

fn titles(books: &[Book]) -> Vec<&str> {
    books.iter().map(|b| b.title.as_str()).collect()
}

// ============================================================================
// Catalog
// ============================================================================

#[tokio::test]
async fn test_search_dune_finds_only_dune() {
    let deps = common::seeded_deps();
    let filter = CatalogFilter {
        search: "dune".to_string(),
        ..Default::default()
    };

    let found = catalog::search_books(&deps, &filter).await.unwrap();

    assert_eq!(titles(&found), vec!["Dune"]);
}

#[tokio::test]
async fn test_filters_combine() {
    let deps = common::seeded_deps();

    let sci_fi_available = CatalogFilter {
        genre: Some(Genre::SciFi),
        availability: AvailabilityFilter::Only(Availability::Available),
        ..Default::default()
    };
    let found = catalog::search_books(&deps, &sci_fi_available).await.unwrap();
    assert_eq!(titles(&found), vec!["Dune", "Project Hail Mary"]);

    let downtown = CatalogFilter {
        location: Some("downtown".to_string()),
        ..Default::default()
    };
    let found = catalog::search_books(&deps, &downtown).await.unwrap();
    assert_eq!(titles(&found), vec!["The Great Gatsby", "Project Hail Mary"]);

    let unavailable = CatalogFilter {
        availability: AvailabilityFilter::Only(Availability::Unavailable),
        ..Default::default()
    };
    let found = catalog::search_books(&deps, &unavailable).await.unwrap();
    assert_eq!(titles(&found), vec!["To Kill a Mockingbird"]);
}

#[tokio::test]
async fn test_request_book_creates_outgoing_pending_request() {
    let deps = common::seeded_deps();
    let gatsby = book_titled(&deps, "The Great Gatsby").await;

    let cmd = RequestBook {
        book_id: gatsby.id,
        kind: RequestKind::Borrow,
        message: None,
        requested_at: Utc::now(),
    };
    let (book, request) = catalog::request_book(&deps, cmd).await.unwrap();

    assert_eq!(book.owner, "Sarah M.");
    assert_eq!(request.counterpart, "Sarah M.");
    assert_eq!(request.direction, Direction::Outgoing);
    assert_eq!(request.status, RequestStatus::Pending);
    assert_eq!(request.loan_period.as_deref(), Some("2 weeks"));

    let outgoing = requests::list_requests(&deps, Some(Direction::Outgoing))
        .await
        .unwrap();
    assert_eq!(outgoing.len(), 4);
    assert!(outgoing.iter().any(|r| r.id == request.id));

    assert!(matches!(
        events(&deps).await.as_slice(),
        [DomainEvent::RequestSubmitted(e)] if e.request_id == request.id
    ));
}

#[tokio::test]
async fn test_swap_request_without_message_is_refused() {
    let deps = common::seeded_deps();
    let habits = book_titled(&deps, "Atomic Habits").await;

    let cmd = RequestBook {
        book_id: habits.id,
        kind: RequestKind::Swap,
        message: Some("   ".to_string()),
        requested_at: Utc::now(),
    };
    let result = catalog::request_book(&deps, cmd).await;

    assert!(matches!(result, Err(ServiceError::SwapMessageRequired)));
    let outgoing = requests::list_requests(&deps, Some(Direction::Outgoing))
        .await
        .unwrap();
    assert_eq!(outgoing.len(), 3);
    assert!(events(&deps).await.is_empty());
}

#[tokio::test]
async fn test_unavailable_book_takes_notify_instead_of_request() {
    let deps = common::seeded_deps();
    let mockingbird = book_titled(&deps, "To Kill a Mockingbird").await;

    let cmd = RequestBook {
        book_id: mockingbird.id,
        kind: RequestKind::Borrow,
        message: None,
        requested_at: Utc::now(),
    };
    assert!(matches!(
        catalog::request_book(&deps, cmd).await,
        Err(ServiceError::BookUnavailable)
    ));

    for _ in 0..2 {
        let cmd = WatchAvailability {
            book_id: mockingbird.id,
            watched_at: Utc::now(),
        };
        catalog::notify_when_available(&deps, cmd).await.unwrap();
    }
    assert_eq!(
        deps.book_catalog.watched_books().await.unwrap(),
        vec![mockingbird.id]
    );
    assert_eq!(events(&deps).await.len(), 1);
}

#[tokio::test]
async fn test_notify_on_available_book_is_refused() {
    let deps = common::seeded_deps();
    let dune = book_titled(&deps, "Dune").await;

    let cmd = WatchAvailability {
        book_id: dune.id,
        watched_at: Utc::now(),
    };
    assert!(matches!(
        catalog::notify_when_available(&deps, cmd).await,
        Err(ServiceError::BookAlreadyAvailable)
    ));
}

#[tokio::test]
async fn test_unknown_book() {
    let deps = common::seeded_deps();
    assert!(matches!(
        catalog::get_book(&deps, BookId::new()).await,
        Err(ServiceError::BookNotFound)
    ));
}

// ============================================================================
// Add book
// ============================================================================

#[tokio::test]
async fn test_add_book_with_missing_fields_stores_nothing() {
    let deps = common::seeded_deps();
    let cmd = AddBook {
        form: AddBookForm {
            title: "Circe".to_string(),
            ..Default::default()
        },
        submitted_at: Utc::now(),
    };

    let result = catalog::add_book(&deps, cmd, Duration::ZERO).await;

    match result {
        Err(ServiceError::MissingRequiredFields(fields)) => {
            assert_eq!(fields, vec!["author", "genre"]);
        }
        other => panic!("expected missing fields, got {:?}", other),
    }
    let all = catalog::search_books(&deps, &CatalogFilter::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 8);
}

#[tokio::test]
async fn test_add_book_lists_it_for_the_current_user() {
    let deps = common::seeded_deps();
    let cmd = AddBook {
        form: AddBookForm {
            title: "Circe".to_string(),
            author: "Madeline Miller".to_string(),
            genre: "fantasy".to_string(),
            lending_period_days: Some(21),
            ..Default::default()
        },
        submitted_at: Utc::now(),
    };

    let book = catalog::add_book(&deps, cmd, Duration::from_millis(5))
        .await
        .unwrap();

    assert_eq!(book.owner, "Sarah Martinez");
    assert_eq!(book.location, "Downtown");
    assert!(book.is_available());
    assert_eq!(book.condition, Condition::Good);
    assert_eq!(book.lending_period_days, 21);

    let stored = catalog::get_book(&deps, book.id).await.unwrap();
    assert_eq!(stored, book);
    assert!(matches!(
        events(&deps).await.as_slice(),
        [DomainEvent::BookAdded(e)] if e.title == "Circe"
    ));
}

#[tokio::test]
async fn test_add_book_with_unknown_genre() {
    let deps = common::seeded_deps();
    let cmd = AddBook {
        form: AddBookForm {
            title: "Circe".to_string(),
            author: "Madeline Miller".to_string(),
            genre: "myth".to_string(),
            ..Default::default()
        },
        submitted_at: Utc::now(),
    };

    assert!(matches!(
        catalog::add_book(&deps, cmd, Duration::ZERO).await,
        Err(ServiceError::InvalidInput(_))
    ));
}

#[tokio::test(start_paused = true)]
async fn test_add_book_is_stored_only_after_submit_delay() {
    // Arrange
    let deps = Arc::new(common::seeded_deps());
    let cmd = AddBook {
        form: AddBookForm {
            title: "Circe".to_string(),
            author: "Madeline Miller".to_string(),
            genre: "fantasy".to_string(),
            ..Default::default()
        },
        submitted_at: Utc::now(),
    };

    // Act: 1秒の待ち時間で送信
    let submission = tokio::spawn({
        let deps = Arc::clone(&deps);
        async move { catalog::add_book(&deps, cmd, Duration::from_secs(1)).await }
    });
    tokio::task::yield_now().await;
    tokio::time::advance(Duration::from_millis(999)).await;

    // Assert: 待ち時間中はまだカタログにない
    assert!(!submission.is_finished());
    assert_eq!(deps.book_catalog.list_books().await.unwrap().len(), 8);

    tokio::time::advance(Duration::from_millis(1)).await;
    let book = submission.await.unwrap().unwrap();

    // 待ち時間の後に保存される
    let books = deps.book_catalog.list_books().await.unwrap();
    assert_eq!(books.len(), 9);
    assert_eq!(books.last(), Some(&book));
}

// ============================================================================
// Requests
// ============================================================================

/// 読み込みが遅れるリクエストストア
///
/// `get_request` は常にラップした時点の行を返す。書き込みはそのまま内側へ。
struct LaggingReads {
    inner: Arc<dyn RequestRepository>,
    snapshot: BookRequest,
}

#[async_trait]
impl RequestRepository for LaggingReads {
    async fn list_requests(
        &self,
        direction: Option<Direction>,
    ) -> ports::Result<Vec<BookRequest>> {
        self.inner.list_requests(direction).await
    }

    async fn get_request(&self, request_id: RequestId) -> ports::Result<Option<BookRequest>> {
        Ok(Some(self.snapshot.clone()).filter(|r| r.id == request_id))
    }

    async fn save_request(&self, request: BookRequest) -> ports::Result<()> {
        self.inner.save_request(request).await
    }

    async fn update_request(
        &self,
        request: BookRequest,
        expected: RequestStatus,
    ) -> ports::Result<ports::GuardedWrite> {
        self.inner.update_request(request, expected).await
    }
}

#[tokio::test]
async fn test_transition_based_on_stale_read_is_refused() {
    // Arrange: 両方の操作が pending のリクエストを読み込んだ状態
    let mut deps = common::seeded_deps();
    let store = Arc::clone(&deps.requests);
    let pending = request_where(&deps, Direction::Incoming, RequestStatus::Pending).await;
    deps.requests = Arc::new(LaggingReads {
        inner: Arc::clone(&store),
        snapshot: pending.clone(),
    });
    let transition = |action| TransitionRequest {
        request_id: pending.id,
        action,
        at: Utc::now(),
    };

    // Act: 承認が先に反映され、続いて古い状態に基づく却下
    let approved = requests::transition_request(&deps, transition(RequestAction::Approve))
        .await
        .unwrap();
    let rejected = requests::transition_request(&deps, transition(RequestAction::Reject)).await;

    // Assert: 却下は Conflict になり、承認が残る
    assert!(matches!(rejected, Err(ServiceError::Conflict(_))));
    let stored = store.get_request(pending.id).await.unwrap().unwrap();
    assert_eq!(stored, approved);
    assert_eq!(stored.status, RequestStatus::Approved);
    assert!(matches!(
        events(&deps).await.as_slice(),
        [DomainEvent::RequestApproved(_)]
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_approve_and_reject_only_one_wins() {
    for _ in 0..50 {
        // Arrange
        let deps = Arc::new(common::seeded_deps());
        let pending = request_where(&deps, Direction::Incoming, RequestStatus::Pending).await;
        let request_id = pending.id;

        // Act: 承認と却下を同時に実行
        let barrier = Arc::new(tokio::sync::Barrier::new(2));
        let run = |action| {
            let deps = Arc::clone(&deps);
            let barrier = Arc::clone(&barrier);
            tokio::spawn(async move {
                barrier.wait().await;
                let cmd = TransitionRequest {
                    request_id,
                    action,
                    at: Utc::now(),
                };
                requests::transition_request(&deps, cmd).await
            })
        };
        let approve = run(RequestAction::Approve);
        let reject = run(RequestAction::Reject);
        let results = [approve.await.unwrap(), reject.await.unwrap()];

        // Assert: 成功は一方だけで、保存された状態はその結果と一致する
        let winners: Vec<&BookRequest> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
        assert_eq!(winners.len(), 1);
        let stored = requests::get_request(&deps, request_id).await.unwrap();
        assert_eq!(&stored, winners[0]);
        assert_eq!(events(&deps).await.len(), 1);
    }
}

#[tokio::test]
async fn test_borrow_request_lifecycle() {
    let deps = common::seeded_deps();
    let pending = request_where(&deps, Direction::Incoming, RequestStatus::Pending).await;
    assert_eq!(
        available_actions(&pending),
        vec![RequestAction::Approve, RequestAction::Reject]
    );

    let mut current = pending;
    for (action, expected) in [
        (RequestAction::Approve, RequestStatus::Approved),
        (RequestAction::HandOver, RequestStatus::Active),
        (RequestAction::MarkReturned, RequestStatus::Completed),
    ] {
        let cmd = TransitionRequest {
            request_id: current.id,
            action,
            at: Utc::now(),
        };
        current = requests::transition_request(&deps, cmd).await.unwrap();
        assert_eq!(current.status, expected);
    }

    assert!(available_actions(&current).is_empty());
    let stored = requests::get_request(&deps, current.id).await.unwrap();
    assert_eq!(stored.status, RequestStatus::Completed);
    assert_eq!(events(&deps).await.len(), 3);
}

#[tokio::test]
async fn test_swap_hand_over_completes() {
    let deps = common::seeded_deps();
    let approved_swap = request_where(&deps, Direction::Incoming, RequestStatus::Approved).await;
    assert_eq!(approved_swap.kind, RequestKind::Swap);

    let cmd = TransitionRequest {
        request_id: approved_swap.id,
        action: RequestAction::HandOver,
        at: Utc::now(),
    };
    let updated = requests::transition_request(&deps, cmd).await.unwrap();

    assert_eq!(updated.status, RequestStatus::Completed);
}

#[tokio::test]
async fn test_unexposed_action_leaves_request_untouched() {
    let deps = common::seeded_deps();
    let rejected = request_where(&deps, Direction::Incoming, RequestStatus::Rejected).await;

    let cmd = TransitionRequest {
        request_id: rejected.id,
        action: RequestAction::Approve,
        at: Utc::now(),
    };
    let result = requests::transition_request(&deps, cmd).await;

    assert!(matches!(result, Err(ServiceError::ActionNotAvailable(_))));
    let stored = requests::get_request(&deps, rejected.id).await.unwrap();
    assert_eq!(stored, rejected);
    assert!(events(&deps).await.is_empty());
}

#[tokio::test]
async fn test_outgoing_pending_exposes_nothing() {
    let deps = common::seeded_deps();
    let outgoing = request_where(&deps, Direction::Outgoing, RequestStatus::Pending).await;

    let cmd = TransitionRequest {
        request_id: outgoing.id,
        action: RequestAction::Approve,
        at: Utc::now(),
    };
    assert!(matches!(
        requests::transition_request(&deps, cmd).await,
        Err(ServiceError::ActionNotAvailable(_))
    ));
}

#[tokio::test]
async fn test_list_requests_by_direction() {
    let deps = common::seeded_deps();

    let all = requests::list_requests(&deps, None).await.unwrap();
    let incoming = requests::list_requests(&deps, Some(Direction::Incoming))
        .await
        .unwrap();

    assert_eq!(all.len(), 6);
    assert_eq!(incoming.len(), 3);
    assert!(incoming.iter().all(|r| r.direction == Direction::Incoming));
}

// ============================================================================
// Loan tracker
// ============================================================================

#[tokio::test]
async fn test_confirm_return_of_active_loan() {
    let deps = common::seeded_deps();
    let gatsby = borrow_titled(&deps, "The Great Gatsby").await;

    let updated = tracking::confirm_return(&deps, gatsby.id, Utc::now())
        .await
        .unwrap();

    assert_eq!(updated.status, BorrowStatus::Completed);
    assert_eq!(
        tracking::get_borrow(&deps, gatsby.id).await.unwrap().status,
        BorrowStatus::Completed
    );
}

#[tokio::test]
async fn test_extension_request_is_recorded() {
    let deps = common::seeded_deps();
    let habits = borrow_titled(&deps, "Atomic Habits").await;

    let too_long = RequestExtension {
        borrow_id: habits.id,
        days: 31,
        requested_at: Utc::now(),
    };
    assert!(matches!(
        tracking::request_extension(&deps, too_long).await,
        Err(ServiceError::InvalidExtension(31))
    ));

    let cmd = RequestExtension {
        borrow_id: habits.id,
        days: 7,
        requested_at: Utc::now(),
    };
    let updated = tracking::request_extension(&deps, cmd).await.unwrap();

    assert_eq!(updated.pending_extension.map(|e| e.days), Some(7));
    assert_eq!(updated.due_on, habits.due_on);
}

#[tokio::test]
async fn test_overdue_loan_return_flow() {
    let deps = common::seeded_deps();
    let overdue = borrow_titled(&deps, "Project Hail Mary").await;
    assert_eq!(overdue.displayed_progress(), 100);
    assert_eq!(overdue.status_label(), "Overdue");

    let cmd = RequestExtension {
        borrow_id: overdue.id,
        days: 3,
        requested_at: Utc::now(),
    };
    assert!(matches!(
        tracking::request_extension(&deps, cmd).await,
        Err(ServiceError::ActionNotAvailable(_))
    ));

    let returning = tracking::return_immediately(&deps, overdue.id, Utc::now())
        .await
        .unwrap();
    assert_eq!(returning.status, BorrowStatus::Returning);

    let completed = tracking::confirm_return(&deps, overdue.id, Utc::now())
        .await
        .unwrap();
    assert_eq!(completed.status, BorrowStatus::Completed);
    assert!(events(&deps).await.iter().any(|e| matches!(
        e,
        DomainEvent::BorrowReturned(r) if r.was_overdue
    )));
}

// ============================================================================
// Notifications
// ============================================================================

#[tokio::test]
async fn test_mark_read_preserves_order_and_membership() {
    let deps = common::seeded_deps();
    let before = notifications::list_notifications(&deps, NotificationView::All)
        .await
        .unwrap();
    assert_eq!(before.unread, 2);
    let first = before.notifications[0].clone();

    let updated = notifications::mark_read(&deps, first.id, Utc::now())
        .await
        .unwrap();
    assert!(updated.read);

    let after = notifications::list_notifications(&deps, NotificationView::All)
        .await
        .unwrap();
    assert_eq!(after.unread, 1);
    let ids = |page: &notifications::FeedPage| {
        page.notifications.iter().map(|n| n.id).collect::<Vec<_>>()
    };
    assert_eq!(ids(&after), ids(&before));
}

#[tokio::test]
async fn test_archive_removes_from_every_view() {
    let deps = common::seeded_deps();
    let returns = notifications::list_notifications(&deps, NotificationView::Returns)
        .await
        .unwrap();
    assert_eq!(returns.notifications.len(), 3);
    let archived = returns.notifications[0].id;

    notifications::archive(&deps, archived, Utc::now())
        .await
        .unwrap();

    for view in [
        NotificationView::All,
        NotificationView::Requests,
        NotificationView::Approvals,
        NotificationView::Returns,
    ] {
        let page = notifications::list_notifications(&deps, view).await.unwrap();
        assert!(page.notifications.iter().all(|n| n.id != archived));
    }
    assert!(matches!(
        notifications::archive(&deps, archived, Utc::now()).await,
        Err(ServiceError::NotificationNotFound)
    ));
}

#[tokio::test]
async fn test_request_notification_links_to_pending_request() {
    let deps = common::seeded_deps();
    let pending = request_where(&deps, Direction::Incoming, RequestStatus::Pending).await;
    let feed = notifications::list_notifications(&deps, NotificationView::Requests)
        .await
        .unwrap();

    let link = notifications::open_link(&deps, feed.notifications[0].id)
        .await
        .unwrap();

    assert_eq!(link, Some(format!("/requests?id={}", pending.id)));
}

// ============================================================================
// Profile
// ============================================================================

#[tokio::test]
async fn test_remove_collection_book() {
    let deps = common::seeded_deps();
    let before = profile::list_collection(&deps).await.unwrap();
    assert_eq!(before.len(), 7);
    let dune = before.iter().find(|e| e.book.title == "Dune").unwrap().book.id;

    assert!(profile::toggle_favorite(&deps, dune, Utc::now()).await.unwrap());
    profile::remove_collection_book(&deps, dune, Utc::now())
        .await
        .unwrap();

    let after = profile::list_collection(&deps).await.unwrap();
    assert_eq!(after.len(), 6);
    assert!(after.iter().all(|e| e.book.id != dune));
    assert!(!deps.profile.favorites().await.unwrap().contains(&dune));
    assert!(matches!(
        profile::remove_collection_book(&deps, dune, Utc::now()).await,
        Err(ServiceError::CollectionBookNotFound)
    ));
}

#[tokio::test]
async fn test_toggle_favorite_twice() {
    let deps = common::seeded_deps();
    let book = profile::list_collection(&deps).await.unwrap()[0].book.id;

    assert!(profile::toggle_favorite(&deps, book, Utc::now()).await.unwrap());
    assert!(!profile::toggle_favorite(&deps, book, Utc::now()).await.unwrap());

    let entries = profile::list_collection(&deps).await.unwrap();
    assert!(entries.iter().all(|e| !e.favorite));
}

#[tokio::test]
async fn test_edit_collection_book_and_share() {
    let deps = common::seeded_deps();
    let dune = profile::list_collection(&deps)
        .await
        .unwrap()
        .into_iter()
        .find(|e| e.book.title == "Dune")
        .unwrap()
        .book;

    let edit = CollectionBookEdit {
        condition: Some(CollectionCondition::Good),
        notes: Some("Paperback".to_string()),
        ..Default::default()
    };
    let edited = profile::edit_collection_book(&deps, dune.id, edit, Utc::now())
        .await
        .unwrap();
    assert_eq!(edited.condition, CollectionCondition::Good);
    assert_eq!(edited.notes.as_deref(), Some("Paperback"));

    let text = profile::share_collection_book(&deps, dune.id).await.unwrap();
    assert_eq!(text, "Check out \"Dune\" - shared by Sarah Martinez");
}

#[tokio::test]
async fn test_profile_edit_and_settings_are_saved() {
    let deps = common::seeded_deps();

    let edit = ProfileEdit {
        bio: Some("Sci-fi and coffee".to_string()),
        ..Default::default()
    };
    let updated = profile::update_profile(&deps, edit, Utc::now()).await.unwrap();
    assert_eq!(updated.name, "Sarah Martinez");
    assert_eq!(updated.bio.as_deref(), Some("Sci-fi and coffee"));
    assert_eq!(updated.books_lent, 15);

    let mut settings = ProfileSettings::default();
    settings.lending.verified_only = true;
    profile::save_settings(&deps, settings, Utc::now())
        .await
        .unwrap();

    assert_eq!(profile::get_settings(&deps).await.unwrap(), settings);
    assert_eq!(
        profile::get_profile(&deps).await.unwrap().bio.as_deref(),
        Some("Sci-fi and coffee")
    );
}

#[tokio::test]
async fn test_reviews() {
    let deps = common::seeded_deps();
    let reviews = profile::list_reviews(&deps).await.unwrap();
    assert_eq!(reviews.len(), 3);
    assert!(reviews.iter().all(|r| r.stars == 5));
}

// ============================================================================
// Wiring
// ============================================================================

#[tokio::test]
async fn test_unseeded_stores_start_empty_with_a_profile() {
    let deps = in_memory::dependencies(false);

    assert!(catalog::search_books(&deps, &CatalogFilter::default())
        .await
        .unwrap()
        .is_empty());
    assert!(requests::list_requests(&deps, None).await.unwrap().is_empty());
    assert!(tracking::list_borrows(&deps).await.unwrap().is_empty());
    assert!(profile::list_collection(&deps).await.unwrap().is_empty());
    assert_eq!(
        profile::get_profile(&deps).await.unwrap().name,
        "Sarah Martinez"
    );
}
