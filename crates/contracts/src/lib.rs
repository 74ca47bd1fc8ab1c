//! Wire contracts shared between the admin frontend and the remote REST API.
//!
//! Everything in this crate is a plain serde DTO: the backend owns all
//! business rules, this crate only pins down the JSON shapes the admin
//! client sends and receives.

pub mod assets;
pub mod catalog;
pub mod dashboards;
pub mod sales;
pub mod shared;
pub mod system;
