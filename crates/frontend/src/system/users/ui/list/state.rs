use contracts::system::users::Role;

use crate::shared::list_query::{
    use_list_query, Filter, FilterSet, ListQueryController, ListQueryOptions, QueryParams,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserFilters {
    pub role: Filter<Role>,
    pub is_active: Filter<bool>,
}

impl FilterSet for UserFilters {
    fn apply(&self, params: &mut QueryParams) {
        if let Some(role) = self.role.value() {
            params.set_str("role", role.as_str());
        }
        if let Some(active) = self.is_active.value() {
            params.set_bool("isActive", *active);
        }
    }
}

pub fn create_controller() -> ListQueryController<UserFilters> {
    use_list_query(
        ListQueryOptions {
            allowed_sort_fields: &["email", "createdAt", "lastLoginAt"],
            ..ListQueryOptions::default()
        },
        |state| {
            state.sort_field = Some("email".to_string());
        },
    )
}
