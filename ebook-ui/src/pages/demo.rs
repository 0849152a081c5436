//! Demo Page
//!
//! Click-through widgets: filter chips, a slot picker and a fake booking
//! request form.

use leptos::*;

use ebook::demo::{ChipSet, Slot, SlotPicker, SubmitButton, REVERT_AFTER};

/// Demo page component
#[component]
pub fn Demo() -> impl IntoView {
    view! {
        <div class="row g-4">
            <div class="col-12">
                <h1 class="h3 fw-bold mb-1">"Book a visit"</h1>
                <p class="text-muted mb-0">"Pick what you need and a free slot."</p>
            </div>
            <div class="col-md-6">
                <FilterChips />
            </div>
            <div class="col-md-6">
                <SlotSelection />
            </div>
            <div class="col-12">
                <DemoForm />
            </div>
        </div>
    }
}

#[component]
fn FilterChips() -> impl IntoView {
    let chips = create_rw_signal(ChipSet::new([
        "Haircut",
        "Beard",
        "Kids",
        "Open now",
        "Top rated",
    ]));
    let labels = chips.with_untracked(|c| c.labels().to_vec());

    view! {
        <section class="card card-body border-0 shadow-sm">
            <h2 class="h6 fw-semibold mb-3">"Filters"</h2>
            <div class="d-flex flex-wrap gap-2">
                {labels.into_iter().enumerate().map(|(index, label)| view! {
                    <button
                        type="button"
                        class=move || {
                            if chips.with(|c| c.is_active(index)) {
                                "filter-chip btn btn-sm btn-primary active"
                            } else {
                                "filter-chip btn btn-sm btn-outline-primary"
                            }
                        }
                        on:click=move |_| chips.update(|c| {
                            c.toggle(index);
                        })
                    >
                        {label}
                    </button>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn SlotSelection() -> impl IntoView {
    let picker = create_rw_signal(SlotPicker::new(vec![
        Slot::open("10:00"),
        Slot::taken("10:30"),
        Slot::open("11:00"),
        Slot::open("11:30"),
        Slot::taken("12:00"),
        Slot::open("14:00"),
    ]));
    let slots = picker.with_untracked(|p| p.slots().to_vec());

    view! {
        <section class="card card-body border-0 shadow-sm">
            <h2 class="h6 fw-semibold mb-3">"Time"</h2>
            <div class="d-flex flex-wrap gap-2">
                {slots.into_iter().enumerate().map(|(index, slot)| {
                    let disabled = slot.disabled;
                    view! {
                        <button
                            type="button"
                            class=move || {
                                let base = "slot btn btn-sm";
                                if disabled {
                                    format!("{} btn-light disabled", base)
                                } else if picker.with(|p| p.is_selected(index)) {
                                    format!("{} btn-success active", base)
                                } else {
                                    format!("{} btn-outline-success", base)
                                }
                            }
                            on:click=move |_| picker.update(|p| {
                                p.select(index);
                            })
                        >
                            {slot.label}
                        </button>
                    }
                }).collect_view()}
            </div>
            <p class="small text-muted mt-3 mb-0">
                "Selected: "
                <span data-selected-slot="">
                    {move || picker.with(|p| p.selected_label().unwrap_or("—").to_string())}
                </span>
            </p>
        </section>
    }
}

#[component]
fn DemoForm() -> impl IntoView {
    let button = create_rw_signal(SubmitButton::new("Send request"));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if button.with_untracked(|b| b.disabled()) {
            return;
        }

        button.update(|b| b.submit());
        gloo_timers::callback::Timeout::new(REVERT_AFTER.as_millis() as u32, move || {
            button.update(|b| b.revert());
        })
        .forget();
    };

    view! {
        <form data-demo-form="" on:submit=on_submit class="card card-body border-0 shadow-sm">
            <div class="row g-2">
                <div class="col-md-5">
                    <input name="name" class="form-control" placeholder="Your name" />
                </div>
                <div class="col-md-4">
                    <input name="phone" type="tel" class="form-control" placeholder="Phone" />
                </div>
                <div class="col-md-3 d-grid">
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || button.with(|b| b.disabled())
                    >
                        {move || button.with(|b| b.label().to_string())}
                    </button>
                </div>
            </div>
        </form>
    }
}
