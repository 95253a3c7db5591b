use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
    #[error("missing required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<String>),
    #[error("invalid max stars: {0}")]
    InvalidMaxStars(u32),
}
