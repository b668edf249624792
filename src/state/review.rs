use crate::error::ReviewError;
use crate::models::review::Review;
use crate::models::user::UserId;
use crate::state::notifications::{fan_out_new_review, Inbox};
use crate::store::Catalog;
use chrono::{DateTime, Utc};
use leptos::logging::log;
use uuid::Uuid;

pub struct NewReview<'a> {
    pub author_id: &'a str,
    pub item_id: &'a str,
    pub rating: u8,
    pub text: &'a str,
    pub now: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmittedReview {
    pub review: Review,
    pub notified: Vec<UserId>,
}

/// Validates and records a review, then notifies the author's followers.
/// Nothing is written when validation fails.
pub fn submit_review(
    catalog: &mut Catalog,
    inbox: &mut Inbox,
    new: NewReview<'_>,
    recent_cap: usize,
) -> Result<SubmittedReview, ReviewError> {
    match new.rating {
        0 => return Err(ReviewError::MissingRating),
        1..=5 => {}
        other => return Err(ReviewError::RatingOutOfRange(other)),
    }
    let item = catalog
        .item(new.item_id)
        .ok_or_else(|| ReviewError::ItemNotFound(new.item_id.to_string()))?;
    let author = catalog
        .user(new.author_id)
        .ok_or_else(|| ReviewError::AuthorNotFound(new.author_id.to_string()))?;

    let review = Review {
        id: format!("r-{}", Uuid::new_v4()),
        user_id: author.id.clone(),
        username: author.username.clone(),
        item_id: item.id.clone(),
        item_title: item.title.clone(),
        item_img: item.img.clone(),
        rating: new.rating,
        text: new.text.trim().to_string(),
        likes: 0,
        comments_count: 0,
        timestamp: new.now,
    };
    catalog.push_review(review.clone(), recent_cap);
    log!("[REVIEW] {} rated {} with {} star(s)", review.user_id, review.item_id, review.rating);

    let notified = fan_out_new_review(catalog, inbox, &review.user_id, &review.item_id, new.now);
    Ok(SubmittedReview { review, notified })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Closed,
    Open,
}

/// The review popup: visibility, selected stars and draft text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewComposer {
    pub form: FormState,
    pub rating: u8,
    pub text: String,
}

impl ReviewComposer {
    pub fn open(&mut self) {
        self.form = FormState::Open;
    }

    pub fn close(&mut self) {
        self.form = FormState::Closed;
    }

    pub fn is_open(&self) -> bool {
        self.form == FormState::Open
    }

    pub fn set_rating(&mut self, stars: u8) {
        self.rating = stars.min(5);
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// On success the composer closes and forgets the draft. On failure it
    /// is left exactly as it was.
    pub fn submit(
        &mut self,
        catalog: &mut Catalog,
        inbox: &mut Inbox,
        author_id: &str,
        item_id: &str,
        now: DateTime<Utc>,
        recent_cap: usize,
    ) -> Result<SubmittedReview, ReviewError> {
        let submitted = submit_review(
            catalog,
            inbox,
            NewReview {
                author_id,
                item_id,
                rating: self.rating,
                text: &self.text,
                now,
            },
            recent_cap,
        )?;
        *self = Self::default();
        Ok(submitted)
    }
}

/// Transient state of the item detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPageState {
    pub item_id: String,
    pub liked: bool,
    pub in_list: bool,
    pub composer: ReviewComposer,
}

impl ItemPageState {
    pub fn for_item(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            ..Self::default()
        }
    }

    /// Resets everything when the page switches to another item. Returns
    /// whether a reset happened.
    pub fn reset_for(&mut self, item_id: &str) -> bool {
        if self.item_id == item_id {
            return false;
        }
        *self = Self::for_item(item_id);
        true
    }
}

/// Local like state of a review card. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewLikes {
    pub liked: bool,
    pub count: u32,
}

impl ReviewLikes {
    pub fn from_review(review: &Review) -> Self {
        Self {
            liked: false,
            count: review.likes,
        }
    }

    pub fn toggle(&mut self) -> bool {
        self.liked = !self.liked;
        self.count = if self.liked {
            self.count + 1
        } else {
            self.count.saturating_sub(1)
        };
        self.liked
    }

    /// A liked review above `threshold` likes is a candidate for the popular list.
    pub fn is_promotion_candidate(&self, threshold: u32) -> bool {
        self.liked && self.count > threshold
    }
}
