use crate::models::item::{Item, ItemId};
use crate::models::review::Review;
use crate::models::user::{User, UserId};
use leptos::logging::log;

/// In-memory repository for items, users and reviews.
///
/// Pages read through the query methods and mutate only through the explicit
/// append operations below; nothing else holds the raw collections.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    users: Vec<User>,
    // Both lists are newest first.
    reviews: Vec<Review>,
    recent_reviews: Vec<Review>,
    current_user_id: UserId,
}

impl Catalog {
    /// The first user becomes the logged-in user.
    pub fn new(items: Vec<Item>, users: Vec<User>, mut reviews: Vec<Review>, recent_cap: usize) -> Self {
        reviews.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        let recent_reviews = reviews.iter().take(recent_cap).cloned().collect();
        let current_user_id = users.first().map(|u| u.id.clone()).unwrap_or_default();
        Self {
            items,
            users,
            reviews,
            recent_reviews,
            current_user_id,
        }
    }

    pub fn seeded(recent_cap: usize) -> Self {
        Self::new(
            super::seed::items(),
            super::seed::users(),
            super::seed::reviews(),
            recent_cap,
        )
    }

    // Items

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Adds an item picked from remote search results. Returns false when an
    /// item with that id already exists.
    pub fn append_item(&mut self, item: Item) -> bool {
        if self.item(&item.id).is_some() {
            return false;
        }
        log!("[CATALOG] Added item {} ({})", item.id, item.title);
        self.items.push(item);
        true
    }

    pub fn popular_items(&self) -> Vec<&Item> {
        self.items.iter().filter(|i| i.popular).collect()
    }

    /// Similar items of `item`, never including `item` itself.
    pub fn similar_items(&self, item: &Item) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|i| i.id != item.id && item.similar_items.contains(&i.id))
            .collect()
    }

    /// Catalog entries whose id is in `ids`, in catalog order.
    pub fn items_with_ids(&self, ids: &[ItemId]) -> Vec<&Item> {
        self.items.iter().filter(|i| ids.contains(&i.id)).collect()
    }

    // Users

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub(crate) fn user_mut(&mut self, id: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == id)
    }

    pub fn current_user_id(&self) -> &str {
        &self.current_user_id
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user(&self.current_user_id)
    }

    /// Case-insensitive username search. A blank term matches nobody.
    pub fn search_users(&self, term: &str, exclude: &str) -> Vec<&User> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.users
            .iter()
            .filter(|u| u.id != exclude && u.username.to_lowercase().contains(&needle))
            .collect()
    }

    // Follow graph

    pub fn following_of(&self, id: &str) -> &[UserId] {
        self.user(id).map(|u| u.following.as_slice()).unwrap_or(&[])
    }

    pub fn is_following(&self, follower: &str, target: &str) -> bool {
        self.following_of(follower).iter().any(|id| id == target)
    }

    pub fn followers_of(&self, id: &str) -> Vec<&User> {
        self.users
            .iter()
            .filter(|u| u.following.iter().any(|f| f == id))
            .collect()
    }

    pub fn follower_count(&self, id: &str) -> usize {
        self.followers_of(id).len()
    }

    pub fn following_count(&self, id: &str) -> usize {
        self.following_of(id).len()
    }

    // Reviews

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn recent_reviews(&self) -> &[Review] {
        &self.recent_reviews
    }

    /// Reviews of an item, newest first.
    pub fn reviews_for_item(&self, item_id: &str) -> Vec<&Review> {
        let mut found: Vec<&Review> = self.reviews.iter().filter(|r| r.item_id == item_id).collect();
        found.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        found
    }

    /// Reviews of an item with more than `min_likes` likes, most liked first.
    pub fn popular_reviews_for_item(&self, item_id: &str, min_likes: u32) -> Vec<&Review> {
        let mut found: Vec<&Review> = self
            .reviews
            .iter()
            .filter(|r| r.item_id == item_id && r.likes > min_likes)
            .collect();
        found.sort_by(|a, b| b.likes.cmp(&a.likes));
        found
    }

    pub fn reviews_by_user(&self, user_id: &str) -> Vec<&Review> {
        self.reviews.iter().filter(|r| r.user_id == user_id).collect()
    }

    /// Most liked reviews across the catalog.
    pub fn popular_reviews(&self, limit: usize) -> Vec<&Review> {
        let mut found: Vec<&Review> = self.reviews.iter().filter(|r| r.likes > 0).collect();
        found.sort_by(|a, b| b.likes.cmp(&a.likes));
        found.truncate(limit);
        found
    }

    /// Prepends to both lists and trims the recent list to `recent_cap`.
    pub fn push_review(&mut self, review: Review, recent_cap: usize) {
        self.recent_reviews.insert(0, review.clone());
        self.recent_reviews.truncate(recent_cap);
        self.reviews.insert(0, review);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    fn catalog() -> Catalog {
        Catalog::seeded(10)
    }

    #[test]
    fn current_user_is_first_record() {
        let catalog = catalog();
        assert_eq!(catalog.current_user_id(), seed::users()[0].id);
    }

    #[test]
    fn append_item_deduplicates() {
        let mut catalog = catalog();
        let existing = catalog.items()[0].clone();
        let before = catalog.items().len();
        assert!(!catalog.append_item(existing.clone()));

        let mut fresh = existing;
        fresh.id = "gb-123".into();
        assert!(catalog.append_item(fresh));
        assert_eq!(catalog.items().len(), before + 1);
        assert!(catalog.item("gb-123").is_some());
    }

    #[test]
    fn similar_items_exclude_self() {
        let catalog = catalog();
        for item in catalog.items() {
            assert!(catalog.similar_items(item).iter().all(|s| s.id != item.id));
        }
    }

    #[test]
    fn user_search_is_case_insensitive_and_skips_viewer() {
        let catalog = catalog();
        let viewer = catalog.current_user_id().to_string();
        let viewer_name = catalog.current_user().unwrap().username.to_uppercase();

        assert!(catalog.search_users(&viewer_name, &viewer).is_empty());
        assert!(catalog.search_users("   ", &viewer).is_empty());

        let other = &catalog.users()[1];
        let hits = catalog.search_users(&other.username.to_uppercase(), &viewer);
        assert!(hits.iter().any(|u| u.id == other.id));
    }

    #[test]
    fn recent_reviews_are_bounded() {
        let mut catalog = Catalog::new(seed::items(), seed::users(), seed::reviews(), 2);
        assert_eq!(catalog.recent_reviews().len(), 2);

        let mut review = catalog.reviews()[0].clone();
        review.id = "r-new".into();
        let total = catalog.reviews().len();
        catalog.push_review(review, 2);

        assert_eq!(catalog.recent_reviews().len(), 2);
        assert_eq!(catalog.recent_reviews()[0].id, "r-new");
        assert_eq!(catalog.reviews().len(), total + 1);
        assert_eq!(catalog.reviews()[0].id, "r-new");
    }

    #[test]
    fn item_reviews_are_newest_first() {
        let catalog = catalog();
        for item in catalog.items() {
            let reviews = catalog.reviews_for_item(&item.id);
            assert!(reviews.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
        }
    }

    #[test]
    fn follower_counts_are_derived_from_follow_lists() {
        let catalog = catalog();
        for user in catalog.users() {
            let expected = catalog
                .users()
                .iter()
                .filter(|u| u.following.contains(&user.id))
                .count();
            assert_eq!(catalog.follower_count(&user.id), expected);
        }
    }
}
