pub mod state;

use contracts::sales::order::{OrderId, OrderStatus, OrderSummary};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::sales::order::api;
use crate::sales::order::ui::details::OrderDetails;
use crate::shared::components::{
    FilterSelect, PaginationControls, SearchInput, SortableHeader, ALL_OPTION,
};
use crate::shared::date_utils::format_datetime;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::list_query::Filter;
use state::create_controller;

pub fn order_status_badge(status: OrderStatus) -> AnyView {
    let class = match status {
        OrderStatus::Pending => "badge badge-warn",
        OrderStatus::Paid => "badge badge-info",
        OrderStatus::Shipped => "badge badge-info",
        OrderStatus::Delivered => "badge badge-ok",
        OrderStatus::Cancelled => "badge badge-muted",
    };
    view! { <span class={class}>{status.label()}</span> }.into_any()
}

#[component]
pub fn OrderList() -> impl IntoView {
    let ctrl = create_controller();

    let rows: RwSignal<Vec<OrderSummary>> = RwSignal::new(Vec::new());
    let (total_count, set_total_count) = signal(0u64);
    let (total_pages, set_total_pages) = signal(0u32);
    let (error, set_error) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(false);
    let (opened_order, set_opened_order) = signal(Option::<OrderId>::None);

    let load = move || {
        let query = ctrl.params().get_untracked().to_pairs();
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_orders(&query).await {
                Ok(page) => {
                    rows.set(page.items);
                    set_total_count.set(page.total_count);
                    set_total_pages.set(page.total_pages);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
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
        ctrl.set_filter(|s| s.filters.status = OrderStatus::parse(&value).into());
    });

    view! {
        <div class="content">
            <div class="header">
                <div class="header-actions">
                    <SearchInput
                        value=Signal::derive(move || ctrl.state().with(|s| s.search.clone()))
                        on_change=Callback::new(move |text: String| ctrl.set_search(text))
                        placeholder="Order number, customer...".to_string()
                    />
                    <FilterSelect
                        value=status_value
                        options=vec![
                            (ALL_OPTION, "All statuses"),
                            ("pending", "Pending"),
                            ("paid", "Paid"),
                            ("shipped", "Shipped"),
                            ("delivered", "Delivered"),
                            ("cancelled", "Cancelled"),
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

            <div class="table-container" class:loading=move || loading.get()>
                <table>
                    <thead>
                        <tr>
                            <SortableHeader controller=ctrl field="number" label="Number" />
                            <th>"Customer"</th>
                            <th>"Email"</th>
                            <th>"Status"</th>
                            <th>"Items"</th>
                            <SortableHeader controller=ctrl field="totalCents" label="Total" />
                            <SortableHeader controller=ctrl field="placedAt" label="Placed" />
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|order| {
                            let id = order.id;
                            view! {
                                <tr on:click=move |_| set_opened_order.set(Some(id))>
                                    <td class="mono">{order.number.clone()}</td>
                                    <td>{order.customer_name.clone()}</td>
                                    <td>{order.customer_email.clone()}</td>
                                    <td>{order_status_badge(order.status)}</td>
                                    <td class="num">{order.item_count}</td>
                                    <td class="num">{format_money(order.total_cents, &order.currency)}</td>
                                    <td>{format_datetime(&order.placed_at)}</td>
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
                limit_options=vec![20, 50, 100]
            />

            {move || opened_order.get().map(|id| view! {
                <div class="modal-overlay">
                    <div class="modal-content modal-wide">
                        <OrderDetails
                            id=id
                            on_close=Callback::new(move |_| set_opened_order.set(None))
                        />
                    </div>
                </div>
            })}
        </div>
    }
}
