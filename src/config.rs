/// Application settings. Every field has a default, so a partial JSON
/// document only overrides what it names.
use crate::error::ConfigError;
use leptos::logging::{log, warn};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    pub endpoint: String,
    pub order_by: String,
    pub max_results: u32,
    pub debounce_ms: u32,
    /// A volume with more external ratings than this is flagged popular.
    pub popular_ratings_threshold: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://www.googleapis.com/books/v1/volumes".to_string(),
            order_by: "relevance".to_string(),
            max_results: 12,
            debounce_ms: 300,
            popular_ratings_threshold: 50,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub favorites_storage_key: String,
    pub recent_reviews_cap: usize,
    /// Like count above which a liked review is reported as a promotion candidate.
    pub review_promotion_likes: u32,
    /// Like count above which a review shows up under an item's popular reviews.
    pub item_popular_review_likes: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            favorites_storage_key: "virtualLibraryFavorites".to_string(),
            recent_reviews_cap: 10,
            review_promotion_likes: 10,
            item_popular_review_likes: 50,
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads the JSON document baked in through `BIBLIO_CONFIG` at build time.
    pub fn load() -> Self {
        match option_env!("BIBLIO_CONFIG") {
            Some(raw) => Self::from_json(raw).unwrap_or_else(|err| {
                warn!("[CONFIG] Ignoring BIBLIO_CONFIG: {}", err);
                Self::default()
            }),
            None => {
                log!("[CONFIG] Using default configuration");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let config = AppConfig::from_json(
            r#"{ "search": { "debounce_ms": 500 }, "recent_reviews_cap": 3 }"#,
        )
        .unwrap();
        assert_eq!(config.search.debounce_ms, 500);
        assert_eq!(config.search.max_results, 12);
        assert_eq!(config.search.popular_ratings_threshold, 50);
        assert_eq!(config.recent_reviews_cap, 3);
        assert_eq!(config.favorites_storage_key, "virtualLibraryFavorites");
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(AppConfig::from_json("{ not json").is_err());
    }
}
