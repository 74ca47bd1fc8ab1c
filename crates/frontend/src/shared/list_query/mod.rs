//! List query state for the paginated admin screens.
//!
//! Every list view owns one [`ListQueryController`]: the single source of
//! truth for its search/filter/sort/pagination state and the only place
//! that turns this state into the parameter shape the REST API expects.
//! The search text is debounced before it reaches the derived parameters,
//! so a typing burst produces one request, not one per keystroke.

pub mod controller;
pub mod debounce;
pub mod params;

pub use controller::{
    use_list_query, Filter, FilterSet, ListQueryController, ListQueryOptions, ListQueryState,
    NoFilters,
};
pub use debounce::{use_debounced, DEFAULT_DEBOUNCE_MS};
pub use params::{ParamValue, QueryParams};
