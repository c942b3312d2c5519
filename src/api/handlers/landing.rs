use axum::Json;

use crate::api::types::{Feature, LandingResponse, NavLink};

/// GET / - サービス紹介とナビゲーション
pub async fn landing() -> Json<LandingResponse> {
    Json(LandingResponse {
        name: "BookSwap",
        tagline: "Share Books, Build Community",
        summary: "Connect with thousands of readers. Swap, borrow, and share books. \
                  Make reading more accessible, sustainable, and fun.",
        features: vec![
            Feature {
                title: "Smart Discovery",
                description: "Search by title, author, genre, or location. \
                              Find the perfect book instantly.",
            },
            Feature {
                title: "Community First",
                description: "Connect with fellow readers, rate experiences, \
                              and build lasting relationships.",
            },
            Feature {
                title: "Real-time Tracking",
                description: "Track all requests, due dates, and borrowing history at a glance.",
            },
            Feature {
                title: "Smart Alerts",
                description: "Get instant notifications for requests, approvals, \
                              and important updates.",
            },
            Feature {
                title: "Verified Reviews",
                description: "Read honest reviews and ratings from the community \
                              to make informed decisions.",
            },
            Feature {
                title: "Quick Sharing",
                description: "Add books, manage requests, and complete swaps in just a few clicks.",
            },
        ],
        links: vec![
            NavLink { label: "Browse Books", href: "/books" },
            NavLink { label: "Requests", href: "/requests" },
            NavLink { label: "Tracking", href: "/tracking" },
            NavLink { label: "Notifications", href: "/notifications" },
            NavLink { label: "Profile", href: "/profile" },
        ],
    })
}

/// GET /health - ヘルスチェック
pub async fn health_check() -> &'static str {
    "OK"
}
