//! Navigation Component
//!
//! Header navigation bar with logo and links.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="navbar navbar-expand bg-white border-bottom shadow-sm">
            <div class="container">
                // Logo and brand
                <A href="/" class="navbar-brand fw-bold">
                    "E-Book"
                </A>

                // Navigation links
                <div class="navbar-nav">
                    <NavLink href="/" label="Dashboard" />
                    <NavLink href="/profile" label="Profile" />
                    <NavLink href="/demo" label="Demo" />
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="nav-link px-3"
            active_class="active fw-semibold"
        >
            {label}
        </A>
    }
}
