use leptos::prelude::*;

use super::context::{use_shell, AdminView};
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

fn nav_item(view: AdminView) -> impl IntoView {
    let shell = use_shell();
    view! {
        <li
            class=move || {
                if shell.active.get() == view { "nav-item active" } else { "nav-item" }
            }
            on:click=move |_| shell.activate(view)
        >
            {icon(view.icon_name())}
            <span>{view.title()}</span>
        </li>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let (session, _) = use_session();
    let show_users = move || {
        session
            .get()
            .user
            .as_ref()
            .map(|u| u.is_admin)
            .unwrap_or(false)
    };

    view! {
        <nav class="sidebar">
            <ul class="nav-list">
                {nav_item(AdminView::Dashboard)}
            </ul>
            <div class="nav-section">"Catalog"</div>
            <ul class="nav-list">
                {nav_item(AdminView::Brands)}
                {nav_item(AdminView::Frames)}
                {nav_item(AdminView::Colors)}
                {nav_item(AdminView::Tags)}
                {nav_item(AdminView::Categories)}
            </ul>
            <div class="nav-section">"Sales"</div>
            <ul class="nav-list">
                {nav_item(AdminView::Orders)}
                {nav_item(AdminView::Refunds)}
            </ul>
            <div class="nav-section">"Content"</div>
            <ul class="nav-list">
                {nav_item(AdminView::Images)}
            </ul>
            <Show when=show_users>
                <div class="nav-section">"System"</div>
                <ul class="nav-list">
                    {nav_item(AdminView::Users)}
                </ul>
            </Show>
        </nav>
    }
}
