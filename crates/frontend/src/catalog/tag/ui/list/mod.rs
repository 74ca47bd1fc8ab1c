use contracts::catalog::tag::Tag;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::tag::api;
use crate::shared::components::{PaginationControls, SearchInput, SortableHeader};
use crate::shared::icons::icon;
use crate::shared::list_query::{use_list_query, ListQueryOptions, NoFilters};

#[component]
pub fn TagList() -> impl IntoView {
    let ctrl = use_list_query::<NoFilters>(
        ListQueryOptions {
            allowed_sort_fields: &["name", "frameCount"],
            ..ListQueryOptions::default()
        },
        |state| {
            state.sort_field = Some("name".to_string());
        },
    );

    let rows: RwSignal<Vec<Tag>> = RwSignal::new(Vec::new());
    let (total_count, set_total_count) = signal(0u64);
    let (total_pages, set_total_pages) = signal(0u32);
    let (error, set_error) = signal(Option::<String>::None);

    let load = move || {
        let query = ctrl.params().get_untracked().to_pairs();
        spawn_local(async move {
            match api::fetch_tags(&query).await {
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

    let handle_delete = move |tag: Tag| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!("Delete tag \"{}\"?", tag.name))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_tag(tag.id).await {
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
                        placeholder="Search tags...".to_string()
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
                            <SortableHeader controller=ctrl field="name" label="Name" />
                            <th>"Slug"</th>
                            <SortableHeader controller=ctrl field="frameCount" label="Frames" />
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|tag| {
                            let delete_tag = tag.clone();
                            view! {
                                <tr>
                                    <td>{tag.name.clone()}</td>
                                    <td class="mono">{tag.slug.clone()}</td>
                                    <td class="num">{tag.frame_count}</td>
                                    <td>
                                        <button
                                            class="btn btn-danger btn-icon"
                                            title="Delete"
                                            on:click=move |_| handle_delete(delete_tag.clone())
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
