use crate::shared::icons::icon;
use leptos::prelude::*;

/// Dashboard stat card. `value` is pre-formatted by the caller; `None`
/// renders a placeholder while loading.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    #[prop(into)] value: Signal<Option<String>>,
    /// Secondary line under the value
    #[prop(optional, into)]
    hint: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card-header">
                <span class="stat-card-label">{label}</span>
                {icon(icon_name)}
            </div>
            <div class="stat-card-value">
                {move || value.get().unwrap_or_else(|| "\u{2014}".to_string())}
            </div>
            {move || hint.get().map(|h| view! { <div class="stat-card-hint">{h}</div> })}
        </div>
    }
}
