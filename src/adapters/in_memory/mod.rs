pub mod book_catalog;
pub mod borrow_repository;
pub mod event_log;
pub mod notification_feed;
pub mod profile_repository;
pub mod request_repository;
pub mod seed;

pub use book_catalog::BookCatalog;
pub use borrow_repository::BorrowRepository;
pub use event_log::EventLog;
pub use notification_feed::NotificationFeed;
pub use profile_repository::ProfileRepository;
pub use request_repository::RequestRepository;

use crate::application::ServiceDependencies;
use crate::domain::{Direction, RequestStatus};
use crate::ports::{GuardedWrite, Result};
use chrono::Utc;
use std::sync::{Arc, Mutex, MutexGuard};

/// Wire every port to an in-memory store.
///
/// The current user's profile always exists. With `seed_demo_data` the
/// catalog, requests, loans, notifications, collection and reviews start
/// with the demonstration data; otherwise they start empty.
pub fn dependencies(seed_demo_data: bool) -> ServiceDependencies {
    let now = Utc::now();

    let (catalog, requests, borrows, notifications, collection, reviews) = if seed_demo_data {
        let requests = seed::requests(now);
        let pending_incoming = requests
            .iter()
            .find(|r| r.direction == Direction::Incoming && r.status == RequestStatus::Pending)
            .map(|r| r.id);
        (
            seed::catalog(),
            requests,
            seed::borrows(),
            seed::notifications(now, pending_incoming),
            seed::collection(),
            seed::reviews(now),
        )
    } else {
        Default::default()
    };

    ServiceDependencies {
        book_catalog: Arc::new(BookCatalog::with_books(catalog)),
        requests: Arc::new(RequestRepository::with_requests(requests)),
        borrows: Arc::new(BorrowRepository::with_borrows(borrows)),
        notifications: Arc::new(NotificationFeed::with_notifications(notifications)),
        profile: Arc::new(ProfileRepository::new(seed::profile(), collection, reviews)),
        event_log: Arc::new(EventLog::new()),
    }
}

/// Lock a store, turning a poisoned mutex into a port error
fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|e| format!("in-memory store poisoned: {}", e).into())
}

/// Replace the item with the same key in place, or append it
fn upsert<T, K: PartialEq>(items: &mut Vec<T>, item: T, key: impl Fn(&T) -> K) {
    let id = key(&item);
    match items.iter_mut().find(|existing| key(existing) == id) {
        Some(slot) => *slot = item,
        None => items.push(item),
    }
}

/// Replace the item with the same key, but only while `still_valid` holds
/// for the stored one
fn replace_if<T, K: PartialEq>(
    items: &mut [T],
    item: T,
    key: impl Fn(&T) -> K,
    still_valid: impl Fn(&T) -> bool,
) -> GuardedWrite {
    let id = key(&item);
    match items.iter_mut().find(|existing| key(existing) == id) {
        None => GuardedWrite::Missing,
        Some(slot) if !still_valid(slot) => GuardedWrite::Stale,
        Some(slot) => {
            *slot = item;
            GuardedWrite::Applied
        }
    }
}
