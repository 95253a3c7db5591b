use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// Notice shown to the visitor when a required field is left blank.
pub const REQUIRED_FIELDS_NOTICE: &str = "אנא מלא את כל השדות הנדרשים";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

impl FormField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

pub fn missing_required_fields(fields: &[FormField]) -> Vec<String> {
    fields
        .iter()
        .filter(|field| field.is_blank())
        .map(|field| field.name.clone())
        .collect()
}

pub fn validate_required_fields(fields: &[FormField]) -> Result<(), CoreError> {
    let missing = missing_required_fields(fields);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::MissingRequiredFields(missing))
    }
}
