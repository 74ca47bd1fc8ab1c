use contracts::sales::order::OrderStatus;
use contracts::shared::SortOrder;

use crate::shared::list_query::{
    use_list_query, Filter, FilterSet, ListQueryController, ListQueryOptions, QueryParams,
};

/// Filter slots of the orders list. `status` is the order status; the
/// search box matches order number, customer name and email server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderFilters {
    pub status: Filter<OrderStatus>,
}

impl FilterSet for OrderFilters {
    fn apply(&self, params: &mut QueryParams) {
        if let Some(status) = self.status.value() {
            params.set_str("status", status.as_str());
        }
    }
}

pub fn create_controller() -> ListQueryController<OrderFilters> {
    use_list_query(
        ListQueryOptions {
            allowed_sort_fields: &["number", "placedAt", "totalCents"],
            ..ListQueryOptions::default()
        },
        |state| {
            state.limit = 20;
            // Newest orders first
            state.sort_field = Some("placedAt".to_string());
            state.sort_order = SortOrder::Desc;
        },
    )
}
