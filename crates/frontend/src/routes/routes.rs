use leptos::prelude::*;

use crate::assets::image::ui::list::ImageList;
use crate::catalog::brand::ui::list::BrandList;
use crate::catalog::category::ui::list::CategoryList;
use crate::catalog::color::ui::list::ColorList;
use crate::catalog::frame::ui::list::FrameList;
use crate::catalog::tag::ui::list::TagList;
use crate::dashboards::overview::ui::OverviewDashboard;
use crate::layout::{use_shell, AdminView, Shell, ShellContext};
use crate::sales::order::ui::list::OrderList;
use crate::sales::refund::ui::list::RefundList;
use crate::system::auth::context::use_session;
use crate::system::pages::login::LoginPage;
use crate::system::users::ui::list::UsersListPage;

#[component]
fn ActiveScreen() -> impl IntoView {
    let shell = use_shell();
    move || match shell.active.get() {
        AdminView::Dashboard => view! { <OverviewDashboard /> }.into_any(),
        AdminView::Brands => view! { <BrandList /> }.into_any(),
        AdminView::Frames => view! { <FrameList /> }.into_any(),
        AdminView::Colors => view! { <ColorList /> }.into_any(),
        AdminView::Tags => view! { <TagList /> }.into_any(),
        AdminView::Categories => view! { <CategoryList /> }.into_any(),
        AdminView::Orders => view! { <OrderList /> }.into_any(),
        AdminView::Refunds => view! { <RefundList /> }.into_any(),
        AdminView::Images => view! { <ImageList /> }.into_any(),
        AdminView::Users => view! { <UsersListPage /> }.into_any(),
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    provide_context(ShellContext::new());

    view! {
        <Shell>
            <ActiveScreen />
        </Shell>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (session, _) = use_session();

    view! {
        <Show
            when=move || session.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
