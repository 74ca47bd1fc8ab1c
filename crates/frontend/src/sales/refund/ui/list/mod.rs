pub mod state;

use contracts::sales::refund::{Refund, RefundStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::sales::refund::api;
use crate::shared::components::{
    FilterSelect, PaginationControls, SearchInput, SortableHeader, ALL_OPTION,
};
use crate::shared::date_utils::{format_datetime, format_datetime_opt};
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::list_query::Filter;
use state::create_controller;

fn refund_status_badge(status: RefundStatus) -> AnyView {
    let class = match status {
        RefundStatus::Requested => "badge badge-warn",
        RefundStatus::Approved => "badge badge-info",
        RefundStatus::Rejected => "badge badge-muted",
        RefundStatus::Completed => "badge badge-ok",
    };
    view! { <span class={class}>{status.label()}</span> }.into_any()
}

#[component]
pub fn RefundList() -> impl IntoView {
    let ctrl = create_controller();

    let rows: RwSignal<Vec<Refund>> = RwSignal::new(Vec::new());
    let (total_count, set_total_count) = signal(0u64);
    let (total_pages, set_total_pages) = signal(0u32);
    let (error, set_error) = signal(Option::<String>::None);

    let load = move || {
        let query = ctrl.params().get_untracked().to_pairs();
        spawn_local(async move {
            match api::fetch_refunds(&query).await {
                Ok(page) => {
                    rows.set(page.items);
                    set_total_count.set(page.total_count);
                    set_total_pages.set(page.total_pages);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    Effect::new(move |_| {
        let _key = ctrl.cache_key().get();
        load();
    });

    let status_value = Signal::derive(move || {
        ctrl.state().with(|s| match s.filters.status {
            Filter::All => ALL_OPTION.to_string(),
            Filter::Only(status) => status.as_str().to_string(),
        })
    });

    let on_status_change = Callback::new(move |value: String| {
        ctrl.set_filter(|s| s.filters.status = RefundStatus::parse(&value).into());
    });

    view! {
        <div class="content">
            <div class="header">
                <div class="header-actions">
                    <SearchInput
                        value=Signal::derive(move || ctrl.state().with(|s| s.search.clone()))
                        on_change=Callback::new(move |text: String| ctrl.set_search(text))
                        placeholder="Order number, reason...".to_string()
                    />
                    <FilterSelect
                        value=status_value
                        options=vec![
                            (ALL_OPTION, "All statuses"),
                            ("requested", "Requested"),
                            ("approved", "Approved"),
                            ("rejected", "Rejected"),
                            ("completed", "Completed"),
                        ]
                        on_change=on_status_change
                    />
                    <button class="btn btn-secondary" on:click=move |_| load()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            <th>"Order"</th>
                            <SortableHeader controller=ctrl field="amountCents" label="Amount" />
                            <th>"Reason"</th>
                            <th>"Status"</th>
                            <SortableHeader controller=ctrl field="requestedAt" label="Requested" />
                            <th>"Resolved"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|refund| {
                            view! {
                                <tr>
                                    <td class="mono">{refund.order_number.clone()}</td>
                                    <td class="num">{format_money(refund.amount_cents, &refund.currency)}</td>
                                    <td>{refund.reason.clone()}</td>
                                    <td>{refund_status_badge(refund.status)}</td>
                                    <td>{format_datetime(&refund.requested_at)}</td>
                                    <td>{format_datetime_opt(&refund.resolved_at)}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                page=Signal::derive(move || ctrl.state().with(|s| s.page))
                total_pages=total_pages
                total_count=total_count
                limit=Signal::derive(move || ctrl.state().with(|s| s.limit))
                on_page_change=Callback::new(move |page| ctrl.set_page(page))
                on_limit_change=Callback::new(move |limit| ctrl.set_limit(limit))
            />
        </div>
    }
}
