// src/models/review.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,
    pub user_id: String,     // Author of the review
    pub username: String,
    pub item_id: String,     // Reviewed item
    pub item_title: String,
    pub item_img: String,
    pub rating: u8,          // 1..=5
    pub text: String,
    pub likes: u32,
    pub comments_count: u32,
    pub timestamp: DateTime<Utc>,
}
