pub mod brand;
pub mod category;
pub mod color;
pub mod frame;
pub mod tag;
