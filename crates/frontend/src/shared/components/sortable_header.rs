use contracts::shared::SortOrder;
use leptos::prelude::*;

use crate::shared::list_query::{FilterSet, ListQueryController};

/// Indicator suffix for a column header.
pub fn sort_indicator(current: Option<&str>, field: &str, order: SortOrder) -> &'static str {
    if current == Some(field) {
        match order {
            SortOrder::Asc => " \u{25b2}",
            SortOrder::Desc => " \u{25bc}",
        }
    } else {
        " \u{21c5}"
    }
}

/// Sortable `<th>` wired to a list query controller.
///
/// Fields not in the controller's allow-list still toggle visually but are
/// dropped from the derived parameters, so a misconfigured column can
/// never reach the network.
#[component]
pub fn SortableHeader<F: FilterSet>(
    controller: ListQueryController<F>,
    field: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <th
            class="cursor-pointer user-select-none"
            on:click=move |_| controller.toggle_sort(field)
            title="Sort"
        >
            {move || {
                controller.state().with(|s| {
                    format!("{}{}", label, sort_indicator(s.sort_field.as_deref(), field, s.sort_order))
                })
            }}
        </th>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(sort_indicator(Some("name"), "name", SortOrder::Asc), " \u{25b2}");
        assert_eq!(sort_indicator(Some("name"), "name", SortOrder::Desc), " \u{25bc}");
        assert_eq!(sort_indicator(Some("name"), "sku", SortOrder::Asc), " \u{21c5}");
        assert_eq!(sort_indicator(None, "sku", SortOrder::Asc), " \u{21c5}");
    }
}
