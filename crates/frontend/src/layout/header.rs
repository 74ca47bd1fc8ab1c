use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::use_shell;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_session};

#[component]
pub fn Header() -> impl IntoView {
    let shell = use_shell();
    let (session, _) = use_session();

    let operator = move || {
        session.get().user.map(|u| {
            u.full_name.unwrap_or(u.email)
        })
    };

    let handle_logout = move |_| {
        spawn_local(async move {
            if let Err(e) = do_logout().await {
                log::warn!("Logout failed: {}", e);
            }
        });
    };

    view! {
        <header class="top-header">
            <h1>{move || shell.active.get().title()}</h1>
            <div class="header-session">
                <span class="header-operator">{operator}</span>
                <button class="btn btn-secondary" on:click=handle_logout>
                    {icon("logout")}
                    {"Sign out"}
                </button>
            </div>
        </header>
    }
}
