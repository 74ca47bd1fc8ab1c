use leptos::prelude::*;

use super::header::Header;
use super::sidebar::Sidebar;

/// Two-column application shell: sidebar navigation plus the active
/// screen, with the session header on top.
#[component]
pub fn Shell(children: ChildrenFn) -> impl IntoView {
    view! {
        <div class="shell">
            <Sidebar />
            <div class="shell-main">
                <Header />
                <main class="shell-content">
                    {children()}
                </main>
            </div>
        </div>
    }
}
