pub mod filter_select;
pub mod pagination_controls;
pub mod search_input;
pub mod sortable_header;
pub mod stat_card;

pub use filter_select::{FilterSelect, ALL_OPTION};
pub use pagination_controls::PaginationControls;
pub use search_input::SearchInput;
pub use sortable_header::SortableHeader;
pub use stat_card::StatCard;
