//! API layer types - the inputs accepted by the query facade.

pub mod requests;
pub mod search;

pub use requests::{NewProperty, NewUser};
pub use search::PropertySearch;
