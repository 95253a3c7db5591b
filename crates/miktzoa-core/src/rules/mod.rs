pub mod rating;
pub mod validation;

pub use rating::{render_stars, validate_max_stars, DEFAULT_MAX_STARS, MAX_MAX_STARS};
pub use validation::{
    missing_required_fields, validate_required_fields, FormField, REQUIRED_FIELDS_NOTICE,
};
