use serde::{Deserialize, Serialize};

pub type ItemId = String;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Book,
    Movie,
}

/// Where the item can be bought, read online or downloaded.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Availability {
    pub online_store_url: Option<String>,
    pub library_url: Option<String>,
    pub download_url: Option<String>,
}

impl Availability {
    pub fn is_empty(&self) -> bool {
        self.online_store_url.is_none() && self.library_url.is_none() && self.download_url.is_none()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ItemDetails {
    pub author: Option<String>,   // Books
    pub director: Option<String>, // Movies
    pub pages: Option<u32>,
    pub description: Option<String>,
    pub publisher: Option<String>,
    pub genres: Vec<String>,
    pub average_rating: Option<f32>, // None when nobody rated it
    pub ratings_count: u32,
    pub year: Option<i32>,
    pub availability: Availability,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub img: String,
    pub kind: ItemKind,
    pub details: ItemDetails,
    pub similar_items: Vec<ItemId>,
    pub popular: bool,
}

impl Item {
    /// Author for books, director for movies.
    pub fn creator(&self) -> Option<&str> {
        match self.kind {
            ItemKind::Book => self.details.author.as_deref(),
            ItemKind::Movie => self.details.director.as_deref(),
        }
    }
}
