//! Auth-aware navigation menu: entry points, menu sources and the controller.

pub mod controller;
pub mod entry;
pub mod source;

pub use controller::{add_services, AppMenu};
pub use entry::{EntryPoint, MenuItem, UserInfo};
pub use source::{default_user_data, user_data_from_claim, MenuSource};
