pub mod domain;
pub mod error;
pub mod rules;
pub mod search;

pub use domain::*;
pub use error::CoreError;
pub use rules::*;
pub use search::{build_search_url, SearchQuery};
