use contracts::catalog::category::CategoryStatus;

use crate::shared::list_query::{
    use_list_query, Filter, FilterSet, ListQueryController, ListQueryOptions, QueryParams,
};

/// Filter slots of the category list. The `status` parameter here is the
/// category visibility and belongs to this screen alone; other screens
/// with a `status` concept have their own controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryFilters {
    pub status: Filter<CategoryStatus>,
}

impl FilterSet for CategoryFilters {
    fn apply(&self, params: &mut QueryParams) {
        if let Some(status) = self.status.value() {
            params.set_str("status", status.as_str());
        }
    }
}

pub fn create_controller() -> ListQueryController<CategoryFilters> {
    use_list_query(
        ListQueryOptions {
            allowed_sort_fields: &["name", "position", "frameCount"],
            ..ListQueryOptions::default()
        },
        |state| {
            state.sort_field = Some("position".to_string());
        },
    )
}
