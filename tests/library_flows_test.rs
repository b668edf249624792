use bibliovirtual::config::SearchConfig;
use bibliovirtual::error::{FollowError, ReviewError};
use bibliovirtual::search::SearchPlan;
use bibliovirtual::state::favorites::{self, Favorites};
use bibliovirtual::state::follows::{toggle_follow, FollowChange};
use bibliovirtual::state::notifications::Inbox;
use bibliovirtual::state::review::ReviewComposer;
use bibliovirtual::state::search_box::{FilterKey, KeyOutcome, SearchBox};
use bibliovirtual::store::Catalog;
use bibliovirtual::utils::storage::{KeyValueStorage, MemoryStorage};
use chrono::{TimeZone, Utc};
use leptos::logging::log;

const FAVORITES_KEY: &str = "virtualLibraryFavorites";

#[test]
fn test_favorite_membership_follows_toggle_parity() {
    let storage = MemoryStorage::new();

    for toggles in 1..=5 {
        let mut favorites = Favorites::new();
        for _ in 0..toggles {
            favorites.toggle("b2");
            favorites::save(&storage, FAVORITES_KEY, &favorites).unwrap();
        }
        let reloaded = favorites::load(&storage, FAVORITES_KEY);
        log!("[TEST] {} toggle(s) -> {:?}", toggles, reloaded.ids());
        assert_eq!(reloaded.contains("b2"), toggles % 2 == 1);
    }
}

#[test]
fn test_malformed_favorites_are_discarded() {
    let storage = MemoryStorage::new();
    storage.set(FAVORITES_KEY, r#"{"b1": true}"#).unwrap();

    let favorites = favorites::load(&storage, FAVORITES_KEY);

    assert!(favorites.is_empty());
    assert_eq!(storage.get(FAVORITES_KEY).unwrap(), None);
}

#[test]
fn test_follow_toggle_is_an_involution() {
    let mut catalog = Catalog::seeded(10);
    let before = catalog.following_of("u1").to_vec();

    assert_eq!(toggle_follow(&mut catalog, "u1", "u4"), Ok(FollowChange::Followed));
    assert!(catalog.is_following("u1", "u4"));
    assert_eq!(toggle_follow(&mut catalog, "u1", "u4"), Ok(FollowChange::Unfollowed));

    assert_eq!(catalog.following_of("u1"), before.as_slice());
}

#[test]
fn test_self_follow_is_rejected() {
    let mut catalog = Catalog::seeded(10);
    let before = catalog.following_of("u1").to_vec();

    assert_eq!(toggle_follow(&mut catalog, "u1", "u1"), Err(FollowError::SelfFollow));
    assert_eq!(catalog.following_of("u1"), before.as_slice());
}

#[test]
fn test_author_filter_becomes_inauthor_clause() {
    let mut search = SearchBox::default();
    search.set_input("autor:Tolkien");

    assert_eq!(search.handle_key("Enter"), KeyOutcome::FilterAdded(FilterKey::Autor));
    assert_eq!(search.input, "");
    assert_eq!(search.filters.get(FilterKey::Autor), Some("Tolkien"));

    let plan = SearchPlan::build(&search.input, &search.filters).unwrap();
    let url = plan.url(&SearchConfig::default());
    log!("[TEST] {}", url);
    assert!(url.contains("q=inauthor%3A%22Tolkien%22&"));
    assert!(url.contains("maxResults=12"));
}

#[test]
fn test_backspace_on_empty_input_removes_newest_filter() {
    let mut search = SearchBox::default();
    search.set_input("genero:Fantasia");
    search.handle_key("Enter");
    search.set_input("autor:Tolkien");
    search.handle_key("Enter");

    assert_eq!(search.handle_key("Backspace"), KeyOutcome::FilterRemoved(FilterKey::Autor));
    assert_eq!(search.filters.get(FilterKey::Genero), Some("Fantasia"));
    assert_eq!(search.filters.len(), 1);
}

#[test]
fn test_review_without_rating_writes_nothing() {
    let mut catalog = Catalog::seeded(10);
    let mut inbox = Inbox::new();
    let mut composer = ReviewComposer::default();
    composer.open();
    composer.set_text("Sem estrelas");

    let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let result = composer.submit(&mut catalog, &mut inbox, "u1", "b1", now, 10);

    assert_eq!(result, Err(ReviewError::MissingRating));
    assert_eq!(catalog.reviews().len(), Catalog::seeded(10).reviews().len());
    assert!(composer.is_open());
    assert_eq!(inbox.for_recipient("u3").len(), 0);
}

#[test]
fn test_review_is_prepended_and_followers_notified() {
    let mut catalog = Catalog::seeded(10);
    let mut inbox = Inbox::new();
    let mut composer = ReviewComposer::default();
    composer.open();
    composer.set_rating(4);
    composer.set_text("  Great  ");

    let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
    let submitted = composer
        .submit(&mut catalog, &mut inbox, "u1", "b1", now, 10)
        .unwrap();

    assert_eq!(submitted.review.text, "Great");
    assert_eq!(catalog.reviews()[0].id, submitted.review.id);
    assert_eq!(catalog.recent_reviews()[0].id, submitted.review.id);
    assert_eq!(composer, ReviewComposer::default());

    // u3 and u4 follow u1
    let mut notified = submitted.notified.clone();
    notified.sort();
    assert_eq!(notified, vec!["u3".to_string(), "u4".to_string()]);
    for follower in ["u3", "u4"] {
        let mailbox = inbox.for_recipient(follower);
        assert_eq!(mailbox.len(), 1);
        assert_eq!(mailbox[0].actor_id, "u1");
        assert_eq!(mailbox[0].item_id, "b1");
        assert!(!mailbox[0].read);
    }
    assert!(inbox.for_recipient("u2").is_empty());
}

#[test]
fn test_review_by_user_without_followers_notifies_nobody() {
    let mut catalog = Catalog::seeded(10);
    let mut inbox = Inbox::new();
    let mut composer = ReviewComposer::default();
    composer.set_rating(5);

    let submitted = composer
        .submit(&mut catalog, &mut inbox, "u4", "m1", Utc::now(), 10)
        .unwrap();

    assert!(submitted.notified.is_empty());
    for user in catalog.users() {
        assert!(inbox.for_recipient(&user.id).is_empty());
    }
}

#[test]
fn test_new_review_keeps_existing_review_ids() {
    let mut catalog = Catalog::seeded(10);
    let mut inbox = Inbox::new();
    let before: Vec<String> = catalog.reviews_for_item("b1").iter().map(|r| r.id.clone()).collect();

    let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
    let mut ids = Vec::new();
    for stars in [3, 5] {
        let mut composer = ReviewComposer::default();
        composer.set_rating(stars);
        ids.push(composer.submit(&mut catalog, &mut inbox, "u2", "b1", now, 10).unwrap().review.id);
    }
    assert_ne!(ids[0], ids[1]);

    // Lists render one card per id, so earlier ids must survive untouched.
    let after: Vec<String> = catalog.reviews_for_item("b1").iter().map(|r| r.id.clone()).collect();
    assert_eq!(after.len(), before.len() + 2);
    assert_eq!(&after[2..], &before[..]);
    let mut unique = after.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), after.len());
}
