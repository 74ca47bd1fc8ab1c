pub mod page;

pub use page::{Paged, SortOrder};
