//! Profile Page
//!
//! Demo user profile stored in the browser's local storage.

use leptos::*;

use ebook::profile::{ProfileForm, ProfileStore, SaveFeedback, DEFAULT_PROFILE_KEY};

use crate::state::global::GlobalState;
use crate::storage::LocalStorage;

/// Profile page component
#[component]
pub fn Profile() -> impl IntoView {
    let state = use_context::<GlobalState>();
    let store = ProfileStore::with_key(LocalStorage, DEFAULT_PROFILE_KEY);

    // No tracing subscriber runs in the browser, so load failures go to the console
    let mut initial = ProfileForm::standard();
    if let Err(e) = store.try_load_into(&mut initial) {
        web_sys::console::warn_1(&format!("Could not load profile from storage: {}", e).into());
    }
    let form = create_rw_signal(initial);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let result = form.with_untracked(|f| store.save(f));
        if let Err(e) = &result {
            web_sys::console::error_1(&format!("Failed to save profile: {}", e).into());
        }

        match SaveFeedback::for_result(&result, state.is_some()) {
            SaveFeedback::Toast(message) => {
                if let Some(state) = &state {
                    state.show_success(&message);
                }
            }
            SaveFeedback::Alert(message) => {
                let _ = window().alert_with_message(&message);
            }
        }
    };

    let fields = form.with_untracked(|f| f.fields().to_vec());

    view! {
        <div class="row justify-content-center">
            <div class="col-lg-6">
                <h1 class="h3 fw-bold mb-1">"Profile"</h1>
                <p class="text-muted mb-4">"Saved in this browser only."</p>

                <form id="profileForm" on:submit=on_submit class="card card-body border-0 shadow-sm">
                    {fields.into_iter().map(|field| {
                        let id = field.name.clone();
                        let name = field.name.clone();
                        let input_name = field.name.clone();
                        view! {
                            <div class="mb-3">
                                <label class="form-label" for=id.clone()>{field.label}</label>
                                <input
                                    id=id
                                    name=field.name
                                    type=field.kind
                                    class="form-control"
                                    prop:value=move || {
                                        form.with(|f| f.value(&name).unwrap_or_default().to_string())
                                    }
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| {
                                            f.set(&input_name, value);
                                        });
                                    }
                                />
                            </div>
                        }
                    }).collect_view()}

                    <button type="submit" class="btn btn-primary">
                        "Save profile"
                    </button>
                </form>
            </div>
        </div>
    }
}
