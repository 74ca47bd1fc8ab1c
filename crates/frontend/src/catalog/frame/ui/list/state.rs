use contracts::catalog::brand::BrandId;
use contracts::catalog::frame::FrameStatus;

use crate::shared::list_query::{
    use_list_query, Filter, FilterSet, ListQueryController, ListQueryOptions, QueryParams,
};

/// Filter slots of the frame list. Each slot emits its own named
/// parameter; the frame screen's `status` is the frame status and
/// nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameFilters {
    pub status: Filter<FrameStatus>,
    pub is_active: Filter<bool>,
    pub brand: Filter<BrandId>,
}

impl FilterSet for FrameFilters {
    fn apply(&self, params: &mut QueryParams) {
        if let Some(status) = self.status.value() {
            params.set_str("status", status.as_str());
        }
        if let Some(active) = self.is_active.value() {
            params.set_bool("isActive", *active);
        }
        if let Some(brand) = self.brand.value() {
            params.set_str("brandId", &brand.to_string());
        }
    }
}

pub fn create_controller() -> ListQueryController<FrameFilters> {
    use_list_query(
        ListQueryOptions {
            allowed_sort_fields: &["name", "sku", "priceCents", "stock", "createdAt"],
            ..ListQueryOptions::default()
        },
        |state| {
            state.limit = 20;
            state.sort_field = Some("name".to_string());
        },
    )
}
