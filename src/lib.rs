pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use frameworks::config::default_room_id;
pub use frameworks::runtime::run_local;
