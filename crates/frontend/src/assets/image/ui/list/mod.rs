pub mod state;

use contracts::assets::image::{ImageAsset, ImageStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::assets::image::api;
use crate::shared::components::{
    FilterSelect, PaginationControls, SearchInput, SortableHeader, ALL_OPTION,
};
use crate::shared::date_utils::format_datetime;
use crate::shared::format::format_thousands;
use crate::shared::icons::icon;
use crate::shared::list_query::Filter;
use state::create_controller;

fn image_status_badge(status: ImageStatus) -> AnyView {
    let class = match status {
        ImageStatus::Processing => "badge badge-warn",
        ImageStatus::Ready => "badge badge-ok",
        ImageStatus::Failed => "badge badge-danger",
    };
    view! { <span class={class}>{status.label()}</span> }.into_any()
}

fn dimensions(asset: &ImageAsset) -> String {
    match (asset.width, asset.height) {
        (Some(w), Some(h)) => format!("{}x{}", w, h),
        _ => "-".to_string(),
    }
}

#[component]
pub fn ImageList() -> impl IntoView {
    let ctrl = create_controller();

    let rows: RwSignal<Vec<ImageAsset>> = RwSignal::new(Vec::new());
    let (total_count, set_total_count) = signal(0u64);
    let (total_pages, set_total_pages) = signal(0u32);
    let (error, set_error) = signal(Option::<String>::None);

    let load = move || {
        let query = ctrl.params().get_untracked().to_pairs();
        spawn_local(async move {
            match api::fetch_images(&query).await {
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
        ctrl.set_filter(|s| s.filters.status = ImageStatus::parse(&value).into());
    });

    let handle_delete = move |asset: ImageAsset| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!("Delete banner \"{}\"?", asset.file_name))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_image(asset.id).await {
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
                        placeholder="Search banners...".to_string()
                    />
                    <FilterSelect
                        value=status_value
                        options=vec![
                            (ALL_OPTION, "All statuses"),
                            ("processing", "Processing"),
                            ("ready", "Ready"),
                            ("failed", "Failed"),
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
                            <th>"Preview"</th>
                            <SortableHeader controller=ctrl field="fileName" label="File" />
                            <th>"Dimensions"</th>
                            <SortableHeader controller=ctrl field="sizeBytes" label="Size" />
                            <th>"Status"</th>
                            <SortableHeader controller=ctrl field="uploadedAt" label="Uploaded" />
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|asset| {
                            let delete_asset = asset.clone();
                            let dims = dimensions(&asset);
                            view! {
                                <tr>
                                    <td>
                                        <img class="thumb" src={asset.url.clone()} alt={asset.file_name.clone()} loading="lazy" />
                                    </td>
                                    <td class="mono">{asset.file_name.clone()}</td>
                                    <td class="num">{dims}</td>
                                    <td class="num">{format!("{} B", format_thousands(asset.size_bytes as i64))}</td>
                                    <td>{image_status_badge(asset.status)}</td>
                                    <td>{format_datetime(&asset.uploaded_at)}</td>
                                    <td>
                                        <button
                                            class="btn btn-danger btn-icon"
                                            title="Delete"
                                            on:click=move |_| handle_delete(delete_asset.clone())
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
