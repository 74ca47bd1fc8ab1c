use contracts::shared::SortOrder;
use leptos::prelude::*;

use super::debounce::{use_debounced, DEFAULT_DEBOUNCE_MS};
use super::params::{ParamValue, QueryParams};

/// Default page size for list endpoints.
pub const DEFAULT_LIMIT: u32 = 10;

/// Tri-state filter slot.
///
/// `All` is the unset state and never produces a query parameter. The UI
/// convention of an `"all"` option string stays inside the `<select>`
/// markup; by the time a value reaches this type it is either absent or a
/// concrete `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T> Filter<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Filter::All => None,
            Filter::Only(v) => Some(v),
        }
    }
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T> From<Option<T>> for Filter<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            None => Filter::All,
            Some(v) => Filter::Only(v),
        }
    }
}

/// Screen-specific filter slots.
///
/// Each list screen defines its own implementation with its own named
/// parameters, so two screens can never contend for one shared output key
/// inside a single derivation.
pub trait FilterSet: Clone + PartialEq + Default + Send + Sync + 'static {
    /// Contribute the set filters to `params`. Unset (`Filter::All`)
    /// slots contribute nothing.
    fn apply(&self, params: &mut QueryParams);
}

/// For screens that only search, sort and paginate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoFilters;

impl FilterSet for NoFilters {
    fn apply(&self, _params: &mut QueryParams) {}
}

/// The full mutable state of one list view.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQueryState<F> {
    /// Raw, undebounced search text as typed.
    pub search: String,
    /// Current page, 1-based.
    pub page: u32,
    /// Page size, always positive.
    pub limit: u32,
    /// Requested sort column; validated against the allow-list on derive.
    pub sort_field: Option<String>,
    pub sort_order: SortOrder,
    pub filters: F,
}

impl<F: Default> ListQueryState<F> {
    fn with_limit(limit: u32) -> Self {
        Self {
            search: String::new(),
            page: 1,
            limit: limit.max(1),
            sort_field: None,
            sort_order: SortOrder::Asc,
            filters: F::default(),
        }
    }
}

/// Construction-time configuration of a controller.
pub struct ListQueryOptions {
    /// Sort columns the endpoint accepts. Anything else is dropped
    /// client-side before reaching the network.
    pub allowed_sort_fields: &'static [&'static str],
    /// Parameter name the endpoint expects for free-text search.
    pub search_param: &'static str,
    /// Fixed parameters merged into every request, last, so dynamic state
    /// can never override them.
    pub static_params: Vec<(&'static str, ParamValue)>,
    pub default_limit: u32,
    pub debounce_ms: u32,
}

impl Default for ListQueryOptions {
    fn default() -> Self {
        Self {
            allowed_sort_fields: &[],
            search_param: "search",
            static_params: Vec::new(),
            default_limit: DEFAULT_LIMIT,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// Applies `patch` to a copy of `current`, resetting the page position:
/// changing the filtered set invalidates the old page.
///
/// Returns `None` when the patched state equals the current one, so a
/// no-op UI update produces no state change and no new request.
pub fn apply_patch<F>(
    current: &ListQueryState<F>,
    patch: impl FnOnce(&mut ListQueryState<F>),
) -> Option<ListQueryState<F>>
where
    F: Clone + PartialEq,
{
    let mut next = current.clone();
    patch(&mut next);
    next.page = 1;
    if next == *current {
        None
    } else {
        Some(next)
    }
}

/// Page move without a reset; `None` when already on that page.
pub fn apply_page<F>(current: &ListQueryState<F>, page: u32) -> Option<ListQueryState<F>>
where
    F: Clone + PartialEq,
{
    let page = page.max(1);
    if current.page == page {
        return None;
    }
    let mut next = current.clone();
    next.page = page;
    Some(next)
}

/// Page size change; keeps the page position per the list-UI convention
/// that only filter/search edits reset it.
pub fn apply_limit<F>(current: &ListQueryState<F>, limit: u32) -> Option<ListQueryState<F>>
where
    F: Clone + PartialEq,
{
    let limit = limit.max(1);
    if current.limit == limit {
        return None;
    }
    let mut next = current.clone();
    next.limit = limit;
    Some(next)
}

/// Pure derivation of the API parameters from the state.
///
/// `debounced_search` is the settled search value, not the raw keystroke
/// value in `state.search`. The derivation never fails: an unknown sort
/// field or unset filter is omitted, never an error.
pub fn derive_params<F: FilterSet>(
    state: &ListQueryState<F>,
    debounced_search: &str,
    opts: &ListQueryOptions,
) -> QueryParams {
    let mut params = QueryParams::new();
    params.set_int("page", i64::from(state.page));
    params.set_int("limit", i64::from(state.limit));

    let search = debounced_search.trim();
    if !search.is_empty() {
        params.set_str(opts.search_param, search);
    }

    if let Some(field) = state.sort_field.as_deref() {
        if opts.allowed_sort_fields.contains(&field) {
            params.set_str("sortField", field);
            params.set_str("sortOrder", state.sort_order.as_str());
        }
    }

    state.filters.apply(&mut params);

    // Static params go last: caller-fixed scoping wins over dynamic state.
    for (key, value) in &opts.static_params {
        params.set(key, value.clone());
    }

    params
}

/// Reactive wrapper owning one list view's query state.
///
/// `params` and `cache_key` are memos: downstream effects re-run if and
/// only if the effective request changes, not on every keystroke.
pub struct ListQueryController<F: FilterSet> {
    state: RwSignal<ListQueryState<F>>,
    params: Memo<QueryParams>,
    cache_key: Memo<String>,
}

impl<F: FilterSet> Clone for ListQueryController<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: FilterSet> Copy for ListQueryController<F> {}

impl<F: FilterSet> ListQueryController<F> {
    pub fn state(&self) -> RwSignal<ListQueryState<F>> {
        self.state
    }

    pub fn params(&self) -> Memo<QueryParams> {
        self.params
    }

    pub fn cache_key(&self) -> Memo<String> {
        self.cache_key
    }

    /// Merge a partial state patch and reset the page to 1. Short-circuits
    /// without touching the signal when the patch changes nothing.
    pub fn set_filter(&self, patch: impl FnOnce(&mut ListQueryState<F>)) {
        if let Some(next) = self.state.with_untracked(|s| apply_patch(s, patch)) {
            self.state.set(next);
        }
    }

    pub fn set_search(&self, text: String) {
        self.set_filter(|s| s.search = text);
    }

    pub fn set_page(&self, page: u32) {
        if let Some(next) = self.state.with_untracked(|s| apply_page(s, page)) {
            self.state.set(next);
        }
    }

    pub fn set_limit(&self, limit: u32) {
        if let Some(next) = self.state.with_untracked(|s| apply_limit(s, limit)) {
            self.state.set(next);
        }
    }

    /// Toggle sort on `field`: first click sorts ascending, a second click
    /// on the same column flips the direction.
    pub fn toggle_sort(&self, field: &str) {
        let field = field.to_string();
        self.set_filter(move |s| {
            if s.sort_field.as_deref() == Some(field.as_str()) {
                s.sort_order = s.sort_order.toggled();
            } else {
                s.sort_field = Some(field);
                s.sort_order = SortOrder::Asc;
            }
        });
    }
}

/// Create a controller for the current component scope.
///
/// `init` adjusts the initial state (page size, default sort, preset
/// filters) before the first derivation.
pub fn use_list_query<F: FilterSet>(
    opts: ListQueryOptions,
    init: impl FnOnce(&mut ListQueryState<F>),
) -> ListQueryController<F> {
    let mut initial = ListQueryState::with_limit(opts.default_limit);
    init(&mut initial);
    let debounce_ms = opts.debounce_ms;

    let state = RwSignal::new(initial);
    let raw_search = Signal::derive(move || state.with(|s| s.search.clone()));
    let debounced_search = use_debounced(raw_search, debounce_ms);

    let params = Memo::new(move |_| {
        let search = debounced_search.get();
        state.with(|s| derive_params(s, &search, &opts))
    });
    let cache_key = Memo::new(move |_| params.get().cache_key());

    ListQueryController {
        state,
        params,
        cache_key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct TestFilters {
        is_active: Filter<bool>,
        status: Filter<&'static str>,
        owner_type: Filter<&'static str>,
    }

    impl FilterSet for TestFilters {
        fn apply(&self, params: &mut QueryParams) {
            if let Some(active) = self.is_active.value() {
                params.set_bool("isActive", *active);
            }
            if let Some(status) = self.status.value() {
                params.set_str("status", status);
            }
            if let Some(owner) = self.owner_type.value() {
                params.set_str("ownerType", owner);
            }
        }
    }

    fn opts() -> ListQueryOptions {
        ListQueryOptions {
            allowed_sort_fields: &["name", "createdAt"],
            ..ListQueryOptions::default()
        }
    }

    fn state() -> ListQueryState<TestFilters> {
        ListQueryState::with_limit(DEFAULT_LIMIT)
    }

    #[test]
    fn test_initial_params_first_page_default_limit() {
        let params = derive_params(&state(), "", &opts());
        assert_eq!(params.get("page"), Some(&ParamValue::Int(1)));
        assert_eq!(params.get("limit"), Some(&ParamValue::Int(10)));
        assert!(!params.contains("search"));
        assert!(!params.contains("sortField"));
    }

    #[test]
    fn test_patch_resets_page_from_any_position() {
        let mut s = state();
        s.page = 7;
        let next = apply_patch(&s, |s| s.filters.is_active = Filter::Only(true))
            .expect("filter change is a state change");
        assert_eq!(next.page, 1);
    }

    #[test]
    fn test_identical_patch_is_a_noop() {
        let s = state();
        let next =
            apply_patch(&s, |s| s.filters.status = Filter::Only("draft")).expect("first change");
        // Same patch against the already-patched state: nothing changes,
        // no new state is produced.
        assert!(apply_patch(&next, |s| s.filters.status = Filter::Only("draft")).is_none());
        // Resetting search to its current empty value is also a no-op.
        assert!(apply_patch(&s, |s| s.search = String::new()).is_none());
    }

    #[test]
    fn test_page_and_limit_moves_do_not_reset_page() {
        let mut s = state();
        s.page = 3;
        let moved = apply_page(&s, 5).expect("page move");
        assert_eq!(moved.page, 5);
        assert!(apply_page(&moved, 5).is_none());

        let resized = apply_limit(&moved, 50).expect("limit change");
        assert_eq!(resized.page, 5);
        assert_eq!(resized.limit, 50);
        assert!(apply_limit(&resized, 50).is_none());
    }

    #[test]
    fn test_page_is_clamped_to_one() {
        let mut s = state();
        s.page = 2;
        assert_eq!(apply_page(&s, 0).expect("clamped move").page, 1);
    }

    #[test]
    fn test_unknown_sort_field_is_dropped() {
        let mut s = state();
        s.sort_field = Some("price".to_string());
        let params = derive_params(&s, "", &opts());
        assert!(!params.contains("sortField"));
        assert!(!params.contains("sortOrder"));
    }

    #[test]
    fn test_allowed_sort_field_is_forwarded_with_order() {
        let mut s = state();
        s.sort_field = Some("name".to_string());
        s.sort_order = SortOrder::Desc;
        let params = derive_params(&s, "", &opts());
        assert_eq!(params.get("sortField"), Some(&ParamValue::Str("name".into())));
        assert_eq!(params.get("sortOrder"), Some(&ParamValue::Str("DESC".into())));
    }

    #[test]
    fn test_unset_filter_key_is_absent() {
        let mut s = state();
        s.filters.is_active = Filter::Only(true);
        let params = derive_params(&s, "", &opts());
        assert_eq!(params.get("isActive"), Some(&ParamValue::Bool(true)));

        s.filters.is_active = Filter::All;
        let params = derive_params(&s, "", &opts());
        assert!(!params.contains("isActive"));
    }

    #[test]
    fn test_search_included_only_when_settled_and_nonempty() {
        let s = state();
        assert!(!derive_params(&s, "", &opts()).contains("search"));
        assert!(!derive_params(&s, "   ", &opts()).contains("search"));
        assert_eq!(
            derive_params(&s, " aviator ", &opts()).get("search"),
            Some(&ParamValue::Str("aviator".into()))
        );
    }

    #[test]
    fn test_search_param_name_is_configurable() {
        let opts = ListQueryOptions {
            search_param: "q",
            ..opts()
        };
        let params = derive_params(&state(), "round", &opts);
        assert!(!params.contains("search"));
        assert_eq!(params.get("q"), Some(&ParamValue::Str("round".into())));
    }

    #[test]
    fn test_raw_search_is_not_consulted() {
        let mut s = state();
        s.search = "still typi".to_string();
        // Only the settled value feeds the derivation.
        assert!(!derive_params(&s, "", &opts()).contains("search"));
    }

    #[test]
    fn test_static_params_cannot_be_overridden() {
        let opts = ListQueryOptions {
            static_params: vec![("ownerType", ParamValue::Str("brand".into()))],
            ..opts()
        };
        let mut s = state();
        s.filters.owner_type = Filter::Only("frame");
        let params = derive_params(&s, "", &opts);
        assert_eq!(
            params.get("ownerType"),
            Some(&ParamValue::Str("brand".into()))
        );
    }

    #[test]
    fn test_cache_key_tracks_effective_request() {
        let s = state();
        let a = derive_params(&s, "", &opts()).cache_key();
        // A rejected sort field leaves the effective request unchanged.
        let mut rejected = s.clone();
        rejected.sort_field = Some("price".to_string());
        assert_eq!(derive_params(&rejected, "", &opts()).cache_key(), a);

        let mut changed = s.clone();
        changed.limit = 20;
        assert_ne!(derive_params(&changed, "", &opts()).cache_key(), a);
    }

    #[test]
    fn test_sort_field_swap() {
        let mut s = state();
        s.sort_field = Some("price".to_string());
        assert!(!derive_params(&s, "", &opts()).contains("sortField"));
        s.sort_field = Some("name".to_string());
        assert_eq!(
            derive_params(&s, "", &opts()).get("sortField"),
            Some(&ParamValue::Str("name".into()))
        );
    }
}
