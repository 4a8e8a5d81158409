//! Property operations.

pub mod get;
pub mod insert;
pub mod search;

pub use get::get_property_by_id;
pub use insert::create_property;
pub use search::search_properties;
