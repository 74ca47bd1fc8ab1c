use leptos::prelude::*;

/// One entry per admin screen reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminView {
    Dashboard,
    Brands,
    Frames,
    Colors,
    Tags,
    Categories,
    Orders,
    Refunds,
    Images,
    Users,
}

impl AdminView {
    pub fn title(&self) -> &'static str {
        match self {
            AdminView::Dashboard => "Dashboard",
            AdminView::Brands => "Brands",
            AdminView::Frames => "Frames",
            AdminView::Colors => "Colors",
            AdminView::Tags => "Tags",
            AdminView::Categories => "Categories",
            AdminView::Orders => "Orders",
            AdminView::Refunds => "Refunds",
            AdminView::Images => "Images & banners",
            AdminView::Users => "Users",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            AdminView::Dashboard => "dashboard",
            AdminView::Brands => "brands",
            AdminView::Frames => "frames",
            AdminView::Colors => "colors",
            AdminView::Tags => "tags",
            AdminView::Categories => "categories",
            AdminView::Orders => "orders",
            AdminView::Refunds => "refunds",
            AdminView::Images => "images",
            AdminView::Users => "users",
        }
    }
}

/// App-wide shell state, provided at the root via context.
#[derive(Clone, Copy)]
pub struct ShellContext {
    pub active: RwSignal<AdminView>,
}

impl ShellContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(AdminView::Dashboard),
        }
    }

    pub fn activate(&self, view: AdminView) {
        self.active.set(view);
    }
}

impl Default for ShellContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_shell() -> ShellContext {
    use_context::<ShellContext>().expect("ShellContext not found in component tree")
}
