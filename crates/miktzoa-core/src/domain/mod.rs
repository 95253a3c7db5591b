pub mod language;
pub mod phone;

pub use language::{switch_language_path, Language};
pub use phone::{format_for_display, normalize_on_input};
