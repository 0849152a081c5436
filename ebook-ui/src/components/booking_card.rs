//! Booking Card Component
//!
//! One booking or reservation in the dashboard list.

use leptos::*;
use leptos_router::*;

use ebook::dashboard::view::CARD_CLASS;
use ebook::dashboard::{BookingCard, StatusBadge};

/// Booking card component
#[component]
pub fn BookingCardView(card: BookingCard) -> impl IntoView {
    view! {
        <div class=CARD_CLASS>
            <div class="d-flex justify-content-between align-items-start">
                <div>
                    <div class="fw-semibold">{card.primary}</div>
                    <small>{card.secondary}</small>
                </div>
                <Badge badge=card.badge />
            </div>
            <div class="d-flex justify-content-between align-items-center mt-2">
                <small>{card.meta}</small>
                <div class="d-flex align-items-center gap-2">
                    <span class="fw-semibold">{card.price}</span>
                    <A href=card.href class="btn btn-sm btn-outline-secondary">
                        "Details"
                    </A>
                </div>
            </div>
        </div>
    }
}

/// Status badge
#[component]
pub fn Badge(badge: StatusBadge) -> impl IntoView {
    view! {
        <span class=badge.class>{badge.label}</span>
    }
}
