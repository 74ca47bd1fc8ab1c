use contracts::catalog::color::Color;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::color::api;
use crate::shared::components::{PaginationControls, SearchInput, SortableHeader};
use crate::shared::icons::icon;
use crate::shared::list_query::{use_list_query, ListQueryOptions, NoFilters};

#[component]
pub fn ColorList() -> impl IntoView {
    let ctrl = use_list_query::<NoFilters>(
        ListQueryOptions {
            allowed_sort_fields: &["name", "frameCount"],
            ..ListQueryOptions::default()
        },
        |state| {
            state.sort_field = Some("name".to_string());
        },
    );

    let rows: RwSignal<Vec<Color>> = RwSignal::new(Vec::new());
    let (total_count, set_total_count) = signal(0u64);
    let (total_pages, set_total_pages) = signal(0u32);
    let (error, set_error) = signal(Option::<String>::None);

    let load = move || {
        let query = ctrl.params().get_untracked().to_pairs();
        spawn_local(async move {
            match api::fetch_colors(&query).await {
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

    view! {
        <div class="content">
            <div class="header">
                <div class="header-actions">
                    <SearchInput
                        value=Signal::derive(move || ctrl.state().with(|s| s.search.clone()))
                        on_change=Callback::new(move |text: String| ctrl.set_search(text))
                        placeholder="Search colors...".to_string()
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
                            <th>"Swatch"</th>
                            <SortableHeader controller=ctrl field="name" label="Name" />
                            <th>"Hex"</th>
                            <SortableHeader controller=ctrl field="frameCount" label="Frames" />
                            <th>"Active"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|color| {
                            let swatch_style = format!("background-color: {};", color.hex);
                            view! {
                                <tr>
                                    <td><span class="color-swatch" style={swatch_style}></span></td>
                                    <td>{color.name.clone()}</td>
                                    <td class="mono">{color.hex.clone()}</td>
                                    <td class="num">{color.frame_count}</td>
                                    <td>{if color.is_active { "yes" } else { "no" }}</td>
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
