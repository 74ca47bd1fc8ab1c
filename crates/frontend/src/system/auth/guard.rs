use leptos::prelude::*;

use super::context::use_session;

/// Renders children only for admins; everyone else sees a notice instead
/// of the guarded screen. The backend enforces the same rule on its
/// endpoints, this is display-level only.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();
    let admin = move || {
        session
            .get()
            .user
            .as_ref()
            .map(|u| u.is_admin)
            .unwrap_or(false)
    };

    view! {
        <Show
            when=admin
            fallback=|| view! {
                <div class="content">
                    <div class="error">"This screen requires administrator access."</div>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
