//! Toast Notification Component
//!
//! Dismissible confirmation message shown after a successful save.

use leptos::*;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="toast-container position-fixed bottom-0 end-0 p-3">
            {move || {
                let close_state = state.clone();
                state.success.with(|slot| slot.message().map(str::to_string)).map(|msg| view! {
                    <ToastMessage
                        message=msg
                        on_close=move |_| close_state.clear_success()
                    />
                })
            }}
        </div>
    }
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
    on_close: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <div class="toast show align-items-center border-0 text-bg-success" role="status">
            <div class="d-flex">
                <div class="toast-body">
                    <span class="me-2">"✓"</span>
                    {message}
                </div>
                <button
                    type="button"
                    class="btn-close btn-close-white me-2 m-auto"
                    aria-label="Close"
                    on:click=on_close
                />
            </div>
        </div>
    }
}
