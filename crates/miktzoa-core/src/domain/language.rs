use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    He,
    En,
    Ru,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::He, Language::En, Language::Ru];

    pub const fn as_str(self) -> &'static str {
        match self {
            Language::He => "he",
            Language::En => "en",
            Language::Ru => "ru",
        }
    }

    /// Exact match on a URL path segment.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "he" => Some(Language::He),
            "en" => Some(Language::En),
            "ru" => Some(Language::Ru),
            _ => None,
        }
    }

    /// Unknown codes fall back to the site default.
    pub fn resolve(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim().to_ascii_lowercase();
        Self::from_code(&value).ok_or_else(|| CoreError::UnknownLanguage(raw.to_string()))
    }
}

/// Rewrites the language segment of a site path.
///
/// The first segment is replaced when it already names a language, otherwise
/// the language is inserted in front of the existing path.
pub fn switch_language_path(path: &str, lang: Language) -> String {
    let mut parts: Vec<&str> = path.split('/').collect();
    let has_language = parts
        .get(1)
        .is_some_and(|segment| Language::from_code(segment).is_some());

    if has_language {
        parts[1] = lang.as_str();
    } else {
        parts.insert(1, lang.as_str());
    }

    parts.join("/")
}
