//! Google Books volumes response, with every field optional, and its
//! mapping onto catalog items.
use crate::models::item::{Availability, Item, ItemDetails, ItemKind};
use leptos::logging::warn;
use serde::Deserialize;

pub const UNKNOWN_TITLE: &str = "Título Desconhecido";
pub const UNKNOWN_AUTHOR: &str = "Autor Desconhecido";
pub const NO_DESCRIPTION: &str = "Sem descrição.";
pub const NO_CATEGORY: &str = "Sem Categoria";
pub const NO_COVER: &str = "https://placehold.co/100x150/cccccc/ffffff?text=No+Cover";

#[derive(Deserialize, Debug, Clone, Default)]
pub struct VolumesResponse {
    #[serde(default)]
    pub items: Option<Vec<Volume>>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub volume_info: Option<VolumeInfo>,
    #[serde(default)]
    pub sale_info: Option<SaleInfo>,
    #[serde(default)]
    pub access_info: Option<AccessInfo>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VolumeInfo {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub publisher: Option<String>,
    pub published_date: Option<String>,
    pub description: Option<String>,
    pub page_count: Option<u32>,
    pub categories: Option<Vec<String>>,
    pub average_rating: Option<f32>,
    pub ratings_count: Option<u32>,
    pub image_links: Option<ImageLinks>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageLinks {
    pub small_thumbnail: Option<String>,
    pub thumbnail: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SaleInfo {
    pub buy_link: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessInfo {
    pub web_reader_link: Option<String>,
    pub access_view_status: Option<String>,
    pub pdf: Option<PdfInfo>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PdfInfo {
    pub acs_token_link: Option<String>,
    pub download_link: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Leading integer of dates such as `1954`, `1954-07` or `1954-07-29`.
pub fn publication_year(date: &str) -> Option<i32> {
    date.split('-').next()?.trim().parse().ok()
}

impl Volume {
    /// Volumes without an id cannot be linked to and are skipped.
    pub fn into_item(self, popular_ratings_threshold: u32) -> Option<Item> {
        let Some(id) = non_empty(self.id) else {
            warn!("[SEARCH] Skipping volume without id");
            return None;
        };
        let info = self.volume_info.unwrap_or_default();
        let sale = self.sale_info.unwrap_or_default();
        let access = self.access_info.unwrap_or_default();

        let images = info.image_links.unwrap_or_default();
        let img = non_empty(images.small_thumbnail)
            .or_else(|| non_empty(images.thumbnail))
            .unwrap_or_else(|| NO_COVER.to_string());

        let author = info
            .authors
            .filter(|a| !a.is_empty())
            .map(|a| a.join(", "))
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

        let genres = info
            .categories
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| vec![NO_CATEGORY.to_string()]);

        let ratings_count = info.ratings_count.unwrap_or(0);

        let download_url = if access.access_view_status.as_deref() == Some("NONE") {
            None
        } else {
            access
                .pdf
                .and_then(|pdf| non_empty(pdf.acs_token_link).or_else(|| non_empty(pdf.download_link)))
        };

        Some(Item {
            id,
            title: non_empty(info.title).unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            img,
            kind: ItemKind::Book,
            details: ItemDetails {
                author: Some(author),
                director: None,
                pages: info.page_count,
                description: Some(non_empty(info.description).unwrap_or_else(|| NO_DESCRIPTION.to_string())),
                publisher: non_empty(info.publisher),
                genres,
                average_rating: info.average_rating.filter(|r| *r > 0.0),
                ratings_count,
                year: info.published_date.as_deref().and_then(publication_year),
                availability: Availability {
                    online_store_url: non_empty(sale.buy_link),
                    library_url: non_empty(access.web_reader_link),
                    download_url,
                },
            },
            similar_items: Vec::new(),
            popular: ratings_count > popular_ratings_threshold,
        })
    }
}

impl VolumesResponse {
    pub fn into_items(self, popular_ratings_threshold: u32) -> Vec<Item> {
        self.items
            .unwrap_or_default()
            .into_iter()
            .filter_map(|v| v.into_item(popular_ratings_threshold))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Vec<Item> {
        serde_json::from_str::<VolumesResponse>(raw).unwrap().into_items(50)
    }

    #[test]
    fn full_volume_maps_every_field() {
        let items = parse(
            r#"{
                "totalItems": 1,
                "items": [{
                    "id": "abc",
                    "volumeInfo": {
                        "title": "The Hobbit",
                        "authors": ["J.R.R. Tolkien", "Christopher Tolkien"],
                        "publisher": "HarperCollins",
                        "publishedDate": "1937-09-21",
                        "description": "There and back again.",
                        "pageCount": 310,
                        "categories": ["Fiction"],
                        "averageRating": 4.5,
                        "ratingsCount": 120,
                        "imageLinks": { "smallThumbnail": "http://img/s", "thumbnail": "http://img/t" }
                    },
                    "saleInfo": { "buyLink": "http://buy" },
                    "accessInfo": {
                        "webReaderLink": "http://read",
                        "accessViewStatus": "SAMPLE",
                        "pdf": { "downloadLink": "http://pdf" }
                    }
                }]
            }"#,
        );
        let item = &items[0];
        assert_eq!(item.id, "abc");
        assert_eq!(item.title, "The Hobbit");
        assert_eq!(item.img, "http://img/s");
        assert_eq!(item.details.author.as_deref(), Some("J.R.R. Tolkien, Christopher Tolkien"));
        assert_eq!(item.details.year, Some(1937));
        assert_eq!(item.details.pages, Some(310));
        assert_eq!(item.details.average_rating, Some(4.5));
        assert_eq!(item.details.availability.online_store_url.as_deref(), Some("http://buy"));
        assert_eq!(item.details.availability.library_url.as_deref(), Some("http://read"));
        assert_eq!(item.details.availability.download_url.as_deref(), Some("http://pdf"));
        assert!(item.popular);
    }

    #[test]
    fn bare_volume_gets_fallbacks() {
        let items = parse(r#"{ "items": [{ "id": "x" }] }"#);
        let item = &items[0];
        assert_eq!(item.title, UNKNOWN_TITLE);
        assert_eq!(item.img, NO_COVER);
        assert_eq!(item.details.author.as_deref(), Some(UNKNOWN_AUTHOR));
        assert_eq!(item.details.description.as_deref(), Some(NO_DESCRIPTION));
        assert_eq!(item.details.genres, vec![NO_CATEGORY.to_string()]);
        assert_eq!(item.details.average_rating, None);
        assert_eq!(item.details.ratings_count, 0);
        assert_eq!(item.details.year, None);
        assert!(item.details.availability.is_empty());
        assert!(!item.popular);
    }

    #[test]
    fn download_hidden_when_access_is_none() {
        let items = parse(
            r#"{ "items": [{ "id": "x", "accessInfo": {
                "accessViewStatus": "NONE",
                "pdf": { "acsTokenLink": "http://token" }
            } }] }"#,
        );
        assert_eq!(items[0].details.availability.download_url, None);
    }

    #[test]
    fn token_link_wins_over_download_link() {
        let items = parse(
            r#"{ "items": [{ "id": "x", "accessInfo": {
                "pdf": { "acsTokenLink": "http://token", "downloadLink": "http://pdf" }
            } }] }"#,
        );
        assert_eq!(items[0].details.availability.download_url.as_deref(), Some("http://token"));
    }

    #[test]
    fn popular_is_strictly_above_threshold() {
        let items = parse(
            r#"{ "items": [
                { "id": "a", "volumeInfo": { "ratingsCount": 50 } },
                { "id": "b", "volumeInfo": { "ratingsCount": 51 } }
            ] }"#,
        );
        assert!(!items[0].popular);
        assert!(items[1].popular);
    }

    #[test]
    fn missing_items_and_ids_yield_nothing() {
        assert!(parse(r#"{ "kind": "books#volumes", "totalItems": 0 }"#).is_empty());
        assert!(parse(r#"{ "items": null }"#).is_empty());
        assert!(parse(r#"{ "items": [{ "volumeInfo": { "title": "no id" } }] }"#).is_empty());
    }

    #[test]
    fn year_parsing() {
        assert_eq!(publication_year("2004"), Some(2004));
        assert_eq!(publication_year("2004-03"), Some(2004));
        assert_eq!(publication_year("circa"), None);
    }
}
