use crate::shared::list_query::{
    use_list_query, Filter, FilterSet, ListQueryController, ListQueryOptions, QueryParams,
};

/// Filter slots of the brand list. The activity flag is tri-state: unset
/// means the screen shows active and inactive brands alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BrandFilters {
    pub is_active: Filter<bool>,
}

impl FilterSet for BrandFilters {
    fn apply(&self, params: &mut QueryParams) {
        if let Some(active) = self.is_active.value() {
            params.set_bool("isActive", *active);
        }
    }
}

pub fn create_controller() -> ListQueryController<BrandFilters> {
    use_list_query(
        ListQueryOptions {
            allowed_sort_fields: &["name", "frameCount", "createdAt"],
            ..ListQueryOptions::default()
        },
        |state| {
            state.sort_field = Some("name".to_string());
        },
    )
}
