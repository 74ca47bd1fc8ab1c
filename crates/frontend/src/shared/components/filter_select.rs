use leptos::prelude::*;

/// Value used by every tri-state dropdown for its unset option.
///
/// The string exists only at this UI boundary: screens convert it to
/// `Filter::All` in their change handlers before it touches the
/// controller state.
pub const ALL_OPTION: &str = "all";

/// Tri-state filter dropdown.
#[component]
pub fn FilterSelect(
    /// Current option value ("all" or a concrete value)
    #[prop(into)]
    value: Signal<String>,
    /// (value, label) pairs; the first entry is usually ("all", ...)
    options: Vec<(&'static str, &'static str)>,
    /// Callback with the raw selected option value
    #[prop(into)]
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="form-control"
            on:change=move |ev| on_change.run(event_target_value(&ev))
            prop:value=move || value.get()
        >
            {options.into_iter().map(|(val, label)| {
                view! {
                    <option value={val} selected=move || value.get() == val>{label}</option>
                }
            }).collect_view()}
        </select>
    }
}
