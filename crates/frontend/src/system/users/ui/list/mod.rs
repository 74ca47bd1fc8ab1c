pub mod state;

use contracts::system::users::{AdminUser, Role, UpdateUserDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::{
    FilterSelect, PaginationControls, SearchInput, SortableHeader, ALL_OPTION,
};
use crate::shared::date_utils::{format_date, format_datetime_opt};
use crate::shared::icons::icon;
use crate::shared::list_query::Filter;
use crate::system::auth::guard::RequireAdmin;
use crate::system::users::api;
use state::create_controller;

#[component]
pub fn UsersListPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <UsersList />
        </RequireAdmin>
    }
}

#[component]
fn UsersList() -> impl IntoView {
    let ctrl = create_controller();

    let rows: RwSignal<Vec<AdminUser>> = RwSignal::new(Vec::new());
    let (total_count, set_total_count) = signal(0u64);
    let (total_pages, set_total_pages) = signal(0u32);
    let (error, set_error) = signal(Option::<String>::None);

    let load = move || {
        let query = ctrl.params().get_untracked().to_pairs();
        spawn_local(async move {
            match api::fetch_users(&query).await {
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

    let role_value = Signal::derive(move || {
        ctrl.state().with(|s| match s.filters.role {
            Filter::All => ALL_OPTION.to_string(),
            Filter::Only(role) => role.as_str().to_string(),
        })
    });

    let on_role_change = Callback::new(move |value: String| {
        ctrl.set_filter(|s| s.filters.role = Role::parse(&value).into());
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

    let toggle_active = move |user: AdminUser| {
        let dto = UpdateUserDto {
            id: user.id,
            full_name: user.full_name.clone(),
            roles: user.roles.clone(),
            is_active: !user.is_active,
        };
        spawn_local(async move {
            match api::update_user(dto).await {
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
                        placeholder="Email or name...".to_string()
                    />
                    <FilterSelect
                        value=role_value
                        options=vec![
                            (ALL_OPTION, "All roles"),
                            ("admin", "Admin"),
                            ("manager", "Manager"),
                            ("support", "Support"),
                            ("content_editor", "Content editor"),
                        ]
                        on_change=on_role_change
                    />
                    <FilterSelect
                        value=activity_value
                        options=vec![
                            (ALL_OPTION, "All"),
                            ("true", "Active only"),
                            ("false", "Deactivated only"),
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

            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            <SortableHeader controller=ctrl field="email" label="Email" />
                            <th>"Name"</th>
                            <th>"Roles"</th>
                            <th>"Active"</th>
                            <SortableHeader controller=ctrl field="lastLoginAt" label="Last login" />
                            <SortableHeader controller=ctrl field="createdAt" label="Created" />
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|user| {
                            let toggle_user = user.clone();
                            let toggle_label = if user.is_active { "Deactivate" } else { "Activate" };
                            view! {
                                <tr>
                                    <td>{user.email.clone()}</td>
                                    <td>{user.full_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td>
                                        {user.roles.iter().map(|role| {
                                            view! { <span class="badge badge-info">{role.label()}</span> }
                                        }).collect_view()}
                                    </td>
                                    <td>
                                        {if user.is_active {
                                            view! { <span class="badge badge-ok">"active"</span> }.into_any()
                                        } else {
                                            view! { <span class="badge badge-muted">"deactivated"</span> }.into_any()
                                        }}
                                    </td>
                                    <td>{format_datetime_opt(&user.last_login_at)}</td>
                                    <td>{format_date(&user.created_at)}</td>
                                    <td>
                                        <button
                                            class="btn btn-secondary"
                                            on:click=move |_| toggle_active(toggle_user.clone())
                                        >
                                            {toggle_label}
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
