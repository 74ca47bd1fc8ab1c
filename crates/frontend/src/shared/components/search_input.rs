use crate::shared::icons::icon;
use leptos::prelude::*;

/// Search box with a clear button.
///
/// Every keystroke is forwarded through `on_change` immediately; the list
/// query controller debounces before anything reaches the network, so the
/// input itself stays dumb.
#[component]
pub fn SearchInput(
    /// Current raw search text from the controller state
    #[prop(into)]
    value: Signal<String>,
    /// Callback for each edit
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder={placeholder}
                prop:value=move || value.get()
                on:input=move |ev| {
                    on_change.run(event_target_value(&ev));
                }
            />
            {move || if !value.get().is_empty() {
                view! {
                    <button
                        class="search-clear"
                        on:click=move |_| on_change.run(String::new())
                        title="Clear"
                    >
                        {icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
