use contracts::assets::image::{ImageOwnerType, ImageStatus};
use contracts::shared::SortOrder;

use crate::shared::list_query::{
    use_list_query, Filter, FilterSet, ListQueryController, ListQueryOptions, ParamValue,
    QueryParams,
};

/// Filter slots of the banner screen. The owner type is NOT a slot: this
/// screen is fixed to banners through a static parameter, so no user
/// filter can ever widen it to brand or frame imagery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageFilters {
    pub status: Filter<ImageStatus>,
}

impl FilterSet for ImageFilters {
    fn apply(&self, params: &mut QueryParams) {
        if let Some(status) = self.status.value() {
            params.set_str("status", status.as_str());
        }
    }
}

pub fn create_controller() -> ListQueryController<ImageFilters> {
    use_list_query(
        ListQueryOptions {
            allowed_sort_fields: &["fileName", "sizeBytes", "uploadedAt"],
            static_params: vec![(
                "ownerType",
                ParamValue::Str(ImageOwnerType::Banner.as_str().to_string()),
            )],
            ..ListQueryOptions::default()
        },
        |state| {
            state.sort_field = Some("uploadedAt".to_string());
            state.sort_order = SortOrder::Desc;
        },
    )
}
