use crate::shared::icons::icon;
use leptos::prelude::*;

/// Reusable pagination controls for the list views.
///
/// Pages are 1-based, matching the list query controller and the wire
/// contract.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    page: Signal<u32>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<u64>,

    /// Current page size
    #[prop(into)]
    limit: Signal<u32>,

    /// Callback when the page changes
    on_page_change: Callback<u32>,

    /// Callback when the page size changes
    on_limit_change: Callback<u32>,

    /// Available page size options
    #[prop(optional)]
    limit_options: Option<Vec<u32>>,
) -> impl IntoView {
    let limit_opts = limit_options.unwrap_or_else(|| vec![10, 20, 50, 100]);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || page.get() <= 1
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = page.get();
                    if p > 1 {
                        on_page_change.run(p - 1);
                    }
                }
                disabled=move || page.get() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let p = page.get();
                    let total = total_pages.get().max(1);
                    let count = total_count.get();
                    format!("{} / {} ({})", p, total, count)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = page.get();
                    if p < total_pages.get() {
                        on_page_change.run(p + 1);
                    }
                }
                disabled=move || page.get() >= total_pages.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        on_page_change.run(total);
                    }
                }
                disabled=move || page.get() >= total_pages.get()
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev).parse().unwrap_or(10);
                    on_limit_change.run(val);
                }
                prop:value=move || limit.get().to_string()
            >
                {limit_opts.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || limit.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
