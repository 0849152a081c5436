//! Dashboard Page
//!
//! Bookings overview: business tabs, summary counters, filters and the
//! booking list.

use chrono::NaiveDate;
use leptos::*;

use ebook::dashboard::view::EMPTY_CLASS;
use ebook::dashboard::{BusinessType, DashboardController, Filters, ListView};

use crate::components::{BookingCardView, SummaryCard};
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // One controller per page; it holds the active business type
    let controller = create_rw_signal(DashboardController::new(
        state.store.clone(),
        state.display.clone(),
    ));

    let (query, set_query) = create_signal(String::new());
    let (secondary, set_secondary) = create_signal(String::new());
    let (date, set_date) = create_signal(chrono::Utc::now().date_naive().to_string());

    // Depends on the business type only, so typing does not rebuild the select
    let options = create_memo(move |_| controller.with(|c| c.secondary_options()));

    let dashboard = create_memo(move |_| {
        let mut filters = Filters::new().query(query.get()).secondary(secondary.get());
        filters.date = NaiveDate::parse_from_str(&date.get(), "%Y-%m-%d").ok();
        controller.with(|c| c.render(&filters))
    });

    let select_business = move |business: BusinessType| {
        controller.update(|c| c.select(business));
        // The option list is rebuilt, so the select falls back to "all"
        set_secondary.set(String::new());
    };

    view! {
        <div class="d-flex flex-column gap-4">
            // Page header with business tabs
            <div class="d-flex align-items-center justify-content-between">
                <div>
                    <h1 class="h3 fw-bold mb-0" id="currentBizTitle">
                        {move || dashboard.get().title}
                    </h1>
                    <p class="text-muted mb-0">"Today's bookings at a glance"</p>
                </div>

                <div class="btn-group">
                    {move || {
                        dashboard.get().tabs.into_iter().map(|tab| {
                            let business = tab.business;
                            let class = if tab.active {
                                "btn btn-outline-primary active"
                            } else {
                                "btn btn-outline-primary"
                            };
                            view! {
                                <button
                                    type="button"
                                    data-biz-tab=business.key()
                                    class=class
                                    on:click=move |_| select_business(business)
                                >
                                    {tab.label}
                                </button>
                            }
                        }).collect_view()
                    }}
                </div>
            </div>

            // Summary counters
            <div class="row g-3">
                <div class="col-6">
                    <SummaryCard
                        label="Bookings today"
                        id="kpiBookingsToday"
                        value=Signal::derive(move || dashboard.get().summary.count.to_string())
                    />
                </div>
                <div class="col-6">
                    <SummaryCard
                        label=Signal::derive(move || dashboard.get().summary.label)
                        id="kpiRevenueToday"
                        value=Signal::derive(move || dashboard.get().summary.metric)
                    />
                </div>
            </div>

            // Filters
            <div class="row g-2">
                <div class="col-md-5">
                    <input
                        type="search"
                        id="searchInput"
                        class="form-control"
                        placeholder="Search client, service, table..."
                        prop:value=query
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                </div>
                <div class="col-md-4">
                    <select
                        id="staffSelect"
                        class="form-select"
                        prop:value=secondary
                        on:change=move |ev| set_secondary.set(event_target_value(&ev))
                    >
                        {move || {
                            options.get().into_iter().map(|option| view! {
                                <option value=option.value>{option.label}</option>
                            }).collect_view()
                        }}
                    </select>
                </div>
                <div class="col-md-3">
                    // Informational only, never narrows the list
                    <input
                        type="date"
                        id="dateInput"
                        class="form-control"
                        prop:value=date
                        on:change=move |ev| set_date.set(event_target_value(&ev))
                    />
                </div>
            </div>

            // Booking list
            <section id="bookingList">
                {move || match dashboard.get().list {
                    ListView::Cards { cards } => cards
                        .into_iter()
                        .map(|card| view! { <BookingCardView card=card /> })
                        .collect_view(),
                    ListView::Empty { message } => view! {
                        <div class=EMPTY_CLASS>{message}</div>
                    }
                    .into_view(),
                }}
            </section>
        </div>
    }
}
