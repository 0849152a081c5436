//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{Confirm, Dashboard, Demo, Profile};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <Router>
            <div class="min-vh-100 bg-light d-flex flex-column">
                <Nav />

                <main class="container flex-grow-1 py-4">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/profile" view=Profile />
                        <Route path="/confirm" view=Confirm />
                        <Route path="/demo" view=Demo />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="d-flex flex-column align-items-center justify-content-center text-center py-5">
            <h1 class="h3 fw-bold mb-2">"Page Not Found"</h1>
            <p class="text-muted mb-4">"The page you're looking for doesn't exist."</p>
            <A href="/" class="btn btn-primary">
                "Go to Dashboard"
            </A>
        </div>
    }
}
