//! Summary Card Component
//!
//! A single headline number above the booking list.

use leptos::*;

/// Summary card component
#[component]
pub fn SummaryCard(
    /// Caption above the value
    #[prop(into)]
    label: MaybeSignal<&'static str>,
    /// Element id of the value, kept stable for styling hooks
    id: &'static str,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="card border-0 shadow-sm h-100">
            <div class="card-body">
                <div class="text-muted small">{move || label.get()}</div>
                <div class="fs-4 fw-bold mt-1" id=id>
                    {move || value.get()}
                </div>
            </div>
        </div>
    }
}
