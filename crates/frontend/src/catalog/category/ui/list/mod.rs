pub mod state;

use contracts::catalog::category::{Category, CategoryStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::category::api;
use crate::shared::components::{
    FilterSelect, PaginationControls, SearchInput, SortableHeader, ALL_OPTION,
};
use crate::shared::icons::icon;
use crate::shared::list_query::Filter;
use state::create_controller;

#[component]
pub fn CategoryList() -> impl IntoView {
    let ctrl = create_controller();

    let rows: RwSignal<Vec<Category>> = RwSignal::new(Vec::new());
    let (total_count, set_total_count) = signal(0u64);
    let (total_pages, set_total_pages) = signal(0u32);
    let (error, set_error) = signal(Option::<String>::None);

    let load = move || {
        let query = ctrl.params().get_untracked().to_pairs();
        spawn_local(async move {
            match api::fetch_categories(&query).await {
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
        ctrl.set_filter(|s| s.filters.status = CategoryStatus::parse(&value).into());
    });

    view! {
        <div class="content">
            <div class="header">
                <div class="header-actions">
                    <SearchInput
                        value=Signal::derive(move || ctrl.state().with(|s| s.search.clone()))
                        on_change=Callback::new(move |text: String| ctrl.set_search(text))
                        placeholder="Search categories...".to_string()
                    />
                    <FilterSelect
                        value=status_value
                        options=vec![
                            (ALL_OPTION, "All categories"),
                            ("visible", "Visible"),
                            ("hidden", "Hidden"),
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
                            <SortableHeader controller=ctrl field="position" label="Position" />
                            <SortableHeader controller=ctrl field="name" label="Name" />
                            <th>"Slug"</th>
                            <th>"Parent"</th>
                            <th>"Status"</th>
                            <SortableHeader controller=ctrl field="frameCount" label="Frames" />
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|category| {
                            view! {
                                <tr>
                                    <td class="num">{category.position}</td>
                                    <td>{category.name.clone()}</td>
                                    <td class="mono">{category.slug.clone()}</td>
                                    <td>{category.parent_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td>
                                        {match category.status {
                                            CategoryStatus::Visible => view! { <span class="badge badge-ok">"visible"</span> }.into_any(),
                                            CategoryStatus::Hidden => view! { <span class="badge badge-muted">"hidden"</span> }.into_any(),
                                        }}
                                    </td>
                                    <td class="num">{category.frame_count}</td>
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
