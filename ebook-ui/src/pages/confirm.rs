//! Confirmation Page
//!
//! Shows the booking or reservation named by `?id=` in the URL.

use leptos::*;
use leptos_router::*;

use ebook::confirm;

use crate::state::global::GlobalState;

/// Confirmation page component
#[component]
pub fn Confirm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let location = use_location();

    let confirmation = create_memo(move |_| {
        confirm::render_query(&state.store, &state.display, &location.search.get())
    });

    view! {
        <div class="row justify-content-center">
            <div class="col-lg-6 text-center">
                <div class="display-4 text-success mb-3">"✓"</div>
                <h1 class="h3 fw-bold" id="confirmTitle">
                    {move || confirmation.get().title}
                </h1>
                <p class="text-muted" id="confirmSubtitle">
                    {move || confirmation.get().subtitle}
                </p>

                <div class="card card-body border-0 shadow-sm text-start" id="confirmDetails">
                    {move || {
                        let view_model = confirmation.get();
                        match view_model.note {
                            Some(note) => view! { <p class="mb-0">{note}</p> }.into_view(),
                            None => {
                                let last = view_model.details.len().saturating_sub(1);
                                view_model.details.into_iter().enumerate().map(|(i, row)| {
                                    let class = if i == last { "mb-0" } else { "mb-1" };
                                    view! {
                                        <p class=class>
                                            <strong>{row.label}":"</strong>
                                            " "
                                            {row.value}
                                        </p>
                                    }
                                }).collect_view()
                            }
                        }
                    }}
                </div>

                <A href="/" class="btn btn-outline-secondary mt-4">
                    "Back to dashboard"
                </A>
            </div>
        </div>
    }
}
