use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{AppState, catalog, landing, notifications, profile, requests, tracking};

/// Creates the API router
///
/// - /books: catalog search, detail, requests, "notify me", add-book form
/// - /requests: incoming/outgoing lists and the request state machine
/// - /tracking: borrowed books, returns, extensions
/// - /notifications: feed views, read, archive, deep links
/// - /profile: profile, collection, settings, reviews
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(landing::landing))
        .route("/health", get(landing::health_check))
        // Catalog
        .route("/books", get(catalog::list_books))
        .route(
            "/books/add",
            get(catalog::add_book_form).post(catalog::add_book),
        )
        .route("/books/:id", get(catalog::get_book))
        .route("/books/:id/request", post(catalog::request_book))
        .route("/books/:id/notify", post(catalog::notify_when_available))
        // Requests
        .route("/requests", get(requests::list_requests))
        .route("/requests/:id/approve", post(requests::approve_request))
        .route("/requests/:id/reject", post(requests::reject_request))
        .route("/requests/:id/hand-over", post(requests::hand_over_request))
        .route("/requests/:id/return", post(requests::mark_request_returned))
        .route("/requests/:id/message", post(requests::message_counterpart))
        // Loan tracker
        .route("/tracking", get(tracking::list_borrows))
        .route("/tracking/:id/return", post(tracking::confirm_return))
        .route("/tracking/:id/extension", post(tracking::request_extension))
        .route("/tracking/:id/return-now", post(tracking::return_immediately))
        .route("/tracking/:id/contact", post(tracking::contact_owner))
        // Notifications
        .route("/notifications", get(notifications::list_notifications))
        .route("/notifications/:id", delete(notifications::archive))
        .route("/notifications/:id/read", post(notifications::mark_read))
        .route("/notifications/:id/open", get(notifications::open))
        // Profile
        .route(
            "/profile",
            get(profile::get_profile).put(profile::update_profile),
        )
        .route("/profile/collection", get(profile::list_collection))
        .route(
            "/profile/collection/:id",
            put(profile::edit_book).delete(profile::remove_book),
        )
        .route(
            "/profile/collection/:id/favorite",
            post(profile::toggle_favorite),
        )
        .route("/profile/collection/:id/share", post(profile::share_book))
        .route(
            "/profile/settings",
            get(profile::get_settings).put(profile::save_settings),
        )
        .route("/profile/reviews", get(profile::list_reviews))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
