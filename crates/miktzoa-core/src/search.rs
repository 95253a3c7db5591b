use crate::domain::Language;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

const LISTING_SEGMENT: &str = "professionals";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub profession: String,
    pub city: String,
}

impl SearchQuery {
    pub fn is_empty(&self) -> bool {
        self.profession.is_empty() && self.city.is_empty()
    }
}

/// Builds the listing URL a search form submits to.
///
/// Returns `None` when neither field is filled, in which case the form does
/// not navigate anywhere.
pub fn build_search_url(lang: Language, query: &SearchQuery) -> Option<String> {
    if query.is_empty() {
        return None;
    }

    let mut params = form_urlencoded::Serializer::new(String::new());
    if !query.profession.is_empty() {
        params.append_pair("category", &query.profession);
    }
    if !query.city.is_empty() {
        params.append_pair("city", &query.city);
    }

    Some(format!("/{}/{}?{}", lang, LISTING_SEGMENT, params.finish()))
}

#[cfg(test)]
mod tests {
    use super::{build_search_url, SearchQuery};
    use crate::domain::Language;

    fn query(profession: &str, city: &str) -> SearchQuery {
        SearchQuery {
            profession: profession.to_string(),
            city: city.to_string(),
        }
    }

    #[test]
    fn empty_query_does_not_navigate() {
        assert!(build_search_url(Language::He, &query("", "")).is_none());
    }

    #[test]
    fn both_fields_are_encoded_in_order() {
        let url = build_search_url(Language::He, &query("electrician", "Tel Aviv")).unwrap();
        assert_eq!(url, "/he/professionals?category=electrician&city=Tel+Aviv");
    }

    #[test]
    fn single_field_only() {
        let url = build_search_url(Language::En, &query("", "Haifa")).unwrap();
        assert_eq!(url, "/en/professionals?city=Haifa");
        let url = build_search_url(Language::Ru, &query("plumber", "")).unwrap();
        assert_eq!(url, "/ru/professionals?category=plumber");
    }

    #[test]
    fn non_ascii_values_are_percent_encoded() {
        let url = build_search_url(Language::He, &query("", "חיפה")).unwrap();
        assert_eq!(url, "/he/professionals?city=%D7%97%D7%99%D7%A4%D7%94");
    }

    #[test]
    fn whitespace_counts_as_filled() {
        let url = build_search_url(Language::He, &query(" ", "")).unwrap();
        assert_eq!(url, "/he/professionals?category=+");
    }
}
