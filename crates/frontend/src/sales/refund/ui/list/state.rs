use contracts::sales::refund::RefundStatus;
use contracts::shared::SortOrder;

use crate::shared::list_query::{
    use_list_query, Filter, FilterSet, ListQueryController, ListQueryOptions, QueryParams,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RefundFilters {
    pub status: Filter<RefundStatus>,
}

impl FilterSet for RefundFilters {
    fn apply(&self, params: &mut QueryParams) {
        if let Some(status) = self.status.value() {
            params.set_str("status", status.as_str());
        }
    }
}

pub fn create_controller() -> ListQueryController<RefundFilters> {
    use_list_query(
        ListQueryOptions {
            allowed_sort_fields: &["amountCents", "requestedAt"],
            ..ListQueryOptions::default()
        },
        |state| {
            state.sort_field = Some("requestedAt".to_string());
            state.sort_order = SortOrder::Desc;
        },
    )
}
