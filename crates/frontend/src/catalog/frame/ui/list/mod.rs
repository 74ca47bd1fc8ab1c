pub mod state;

use contracts::catalog::brand::{Brand, BrandId};
use contracts::catalog::frame::{Frame, FrameStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::brand::api as brand_api;
use crate::catalog::frame::api;
use crate::shared::components::{
    FilterSelect, PaginationControls, SearchInput, SortableHeader, ALL_OPTION,
};
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::list_query::Filter;
use state::create_controller;

fn status_badge(status: FrameStatus) -> AnyView {
    let class = match status {
        FrameStatus::Draft => "badge badge-muted",
        FrameStatus::Published => "badge badge-ok",
        FrameStatus::Archived => "badge badge-warn",
    };
    view! { <span class={class}>{status.label()}</span> }.into_any()
}

#[component]
pub fn FrameList() -> impl IntoView {
    let ctrl = create_controller();

    let rows: RwSignal<Vec<Frame>> = RwSignal::new(Vec::new());
    let brands: RwSignal<Vec<Brand>> = RwSignal::new(Vec::new());
    let (total_count, set_total_count) = signal(0u64);
    let (total_pages, set_total_pages) = signal(0u32);
    let (error, set_error) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(false);

    let load = move || {
        let query = ctrl.params().get_untracked().to_pairs();
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_frames(&query).await {
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

    // The brand dropdown needs the brand names once, independent of the
    // frame query.
    let load_brands = move || {
        spawn_local(async move {
            let query: Vec<(String, String)> = vec![
                ("page".into(), "1".into()),
                ("limit".into(), "100".into()),
                ("sortField".into(), "name".into()),
                ("sortOrder".into(), "ASC".into()),
            ];
            match brand_api::fetch_brands(&query).await {
                Ok(page) => brands.set(page.items),
                Err(e) => set_error.set(Some(format!("Failed to load brands: {}", e))),
            }
        });
    };
    load_brands();

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
        ctrl.set_filter(|s| s.filters.status = FrameStatus::parse(&value).into());
    });

    let activity_value = Signal::derive(move || {
        ctrl.state().with(|s| match s.filters.is_active {
            Filter::All => ALL_OPTION.to_string(),
            Filter::Only(true) => "true".to_string(),
            Filter::Only(false) => "false".to_string(),
        })
    });

    let on_activity_change = Callback::new(move |value: String| {
        ctrl.set_filter(|s| {
            s.filters.is_active = match value.as_str() {
                "true" => Filter::Only(true),
                "false" => Filter::Only(false),
                _ => Filter::All,
            }
        });
    });

    let on_brand_change = move |value: String| {
        let brand = BrandId::parse(&value).ok();
        ctrl.set_filter(|s| s.filters.brand = brand.into());
    };

    let handle_delete = move |frame: Frame| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!("Delete frame \"{}\"?", frame.name))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_frame(frame.id).await {
                Ok(()) => load(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="content">
            <div class="header">
                <div class="header-actions">
                    <SearchInput
                        value=Signal::derive(move || ctrl.state().with(|s| s.search.clone()))
                        on_change=Callback::new(move |text: String| ctrl.set_search(text))
                        placeholder="Search by name or SKU...".to_string()
                    />
                    <select
                        class="form-control"
                        on:change=move |ev| on_brand_change(event_target_value(&ev))
                    >
                        <option value="">"All brands"</option>
                        {move || brands.get().into_iter().map(|brand| {
                            view! {
                                <option value={brand.id.to_string()}>{brand.name}</option>
                            }
                        }).collect_view()}
                    </select>
                    <FilterSelect
                        value=status_value
                        options=vec![
                            (ALL_OPTION, "All statuses"),
                            ("draft", "Draft"),
                            ("published", "Published"),
                            ("archived", "Archived"),
                        ]
                        on_change=on_status_change
                    />
                    <FilterSelect
                        value=activity_value
                        options=vec![
                            (ALL_OPTION, "All"),
                            ("true", "Active only"),
                            ("false", "Inactive only"),
                        ]
                        on_change=on_activity_change
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
                            <SortableHeader controller=ctrl field="sku" label="SKU" />
                            <SortableHeader controller=ctrl field="name" label="Name" />
                            <th>"Brand"</th>
                            <th>"Category"</th>
                            <SortableHeader controller=ctrl field="priceCents" label="Price" />
                            <SortableHeader controller=ctrl field="stock" label="Stock" />
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|frame| {
                            let delete_frame = frame.clone();
                            let low_stock = frame.stock <= 5;
                            view! {
                                <tr>
                                    <td class="mono">{frame.sku.clone()}</td>
                                    <td>{frame.name.clone()}</td>
                                    <td>{frame.brand_name.clone()}</td>
                                    <td>{frame.category_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td class="num">{format_money(frame.price_cents, &frame.currency)}</td>
                                    <td class={if low_stock { "num stock-low" } else { "num" }}>{frame.stock}</td>
                                    <td>{status_badge(frame.status)}</td>
                                    <td>
                                        <button
                                            class="btn btn-danger btn-icon"
                                            title="Delete"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                handle_delete(delete_frame.clone());
                                            }
                                        >
                                            {icon("delete")}
                                        </button>
                                    </td>
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
