pub mod state;

use contracts::catalog::brand::Brand;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::brand::api;
use crate::catalog::brand::ui::details::BrandDetails;
use crate::shared::components::{
    FilterSelect, PaginationControls, SearchInput, SortableHeader, ALL_OPTION,
};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_query::Filter;
use state::create_controller;

#[component]
pub fn BrandList() -> impl IntoView {
    let ctrl = create_controller();

    let rows: RwSignal<Vec<Brand>> = RwSignal::new(Vec::new());
    let (total_count, set_total_count) = signal(0u64);
    let (total_pages, set_total_pages) = signal(0u32);
    let (error, set_error) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(false);
    let (show_modal, set_show_modal) = signal(false);
    let editing: RwSignal<Option<Brand>> = RwSignal::new(None);

    let load = move || {
        let query = ctrl.params().get_untracked().to_pairs();
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_brands(&query).await {
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

    // Re-fetch exactly when the effective request changes; the cache key
    // does not move on keystrokes, only once the search settles.
    Effect::new(move |_| {
        let _key = ctrl.cache_key().get();
        load();
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

    let handle_create = move |_| {
        editing.set(None);
        set_show_modal.set(true);
    };

    let handle_edit = move |brand: Brand| {
        editing.set(Some(brand));
        set_show_modal.set(true);
    };

    let handle_delete = move |brand: Brand| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!("Delete brand \"{}\"?", brand.name))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_brand(brand.id).await {
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
                        placeholder="Search brands...".to_string()
                    />
                    <FilterSelect
                        value=activity_value
                        options=vec![
                            (ALL_OPTION, "All brands"),
                            ("true", "Active only"),
                            ("false", "Inactive only"),
                        ]
                        on_change=on_activity_change
                    />
                    <button class="btn btn-primary" on:click=handle_create>
                        {icon("plus")}
                        {"New brand"}
                    </button>
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
                            <SortableHeader controller=ctrl field="name" label="Name" />
                            <th>"Slug"</th>
                            <SortableHeader controller=ctrl field="frameCount" label="Frames" />
                            <th>"Active"</th>
                            <SortableHeader controller=ctrl field="createdAt" label="Created" />
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|brand| {
                            let edit_brand = brand.clone();
                            let delete_brand = brand.clone();
                            view! {
                                <tr on:click=move |_| handle_edit(edit_brand.clone())>
                                    <td>{brand.name.clone()}</td>
                                    <td class="mono">{brand.slug.clone()}</td>
                                    <td class="num">{brand.frame_count}</td>
                                    <td>
                                        {if brand.is_active {
                                            view! { <span class="badge badge-ok">"active"</span> }.into_any()
                                        } else {
                                            view! { <span class="badge badge-muted">"inactive"</span> }.into_any()
                                        }}
                                    </td>
                                    <td>{format_date(&brand.created_at)}</td>
                                    <td>
                                        <button
                                            class="btn btn-danger btn-icon"
                                            title="Delete"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                handle_delete(delete_brand.clone());
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

            {move || if show_modal.get() {
                view! {
                    <div class="modal-overlay">
                        <div class="modal-content">
                            <BrandDetails
                                brand=editing.get()
                                on_saved=Callback::new(move |_| {
                                    set_show_modal.set(false);
                                    editing.set(None);
                                    load();
                                })
                                on_cancel=Callback::new(move |_| {
                                    set_show_modal.set(false);
                                    editing.set(None);
                                })
                            />
                        </div>
                    </div>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
