//! Shared reactive state, provided once by `App` and read by every page.
use crate::config::AppConfig;
use crate::error::{FollowError, ReviewError};
use crate::models::item::Item;
use crate::state::favorites::{self, Favorites};
use crate::state::follows::{toggle_follow, FollowChange};
use crate::state::notifications::Inbox;
use crate::state::review::{ReviewComposer, SubmittedReview};
use crate::store::Catalog;
use crate::utils::storage::LocalStorage;
use chrono::Utc;
use leptos::logging::{error, log, warn};
use leptos::*;

#[derive(Clone, Copy)]
pub struct AppState {
    pub catalog: RwSignal<Catalog>,
    pub favorites: RwSignal<Favorites>,
    pub inbox: RwSignal<Inbox>,
    pub config: StoredValue<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            catalog: create_rw_signal(Catalog::seeded(config.recent_reviews_cap)),
            favorites: create_rw_signal(Favorites::new()),
            inbox: create_rw_signal(Inbox::new()),
            config: store_value(config),
        }
    }

    pub fn provide(config: AppConfig) -> Self {
        let state = Self::new(config);
        provide_context(state);
        state
    }

    /// The logged-in user never changes during a session.
    pub fn viewer_id(&self) -> String {
        self.catalog.with_untracked(|c| c.current_user_id().to_string())
    }

    /// Browser only: reads the persisted favorites once at startup.
    pub fn load_favorites(&self) {
        let key = self.config.with_value(|c| c.favorites_storage_key.clone());
        match LocalStorage::open() {
            Ok(storage) => self.favorites.set(favorites::load(&storage, &key)),
            Err(err) => warn!("[FAVORITES] {}; favorites will not persist", err),
        }
    }

    pub fn toggle_favorite(&self, item_id: &str) {
        self.favorites.update(|f| {
            let now_favorite = f.toggle(item_id);
            log!("[FAVORITES] {} -> {}", item_id, now_favorite);
        });

        let key = self.config.with_value(|c| c.favorites_storage_key.clone());
        let saved = LocalStorage::open()
            .and_then(|storage| self.favorites.with_untracked(|f| favorites::save(&storage, &key, f)));
        if let Err(err) = saved {
            error!("[FAVORITES] Failed to save favorites: {}", err);
        }
    }

    pub fn is_favorite(&self, item_id: &str) -> bool {
        self.favorites.with(|f| f.contains(item_id))
    }

    pub fn toggle_follow(&self, target: &str) -> Result<FollowChange, FollowError> {
        let viewer = self.viewer_id();
        if viewer == target {
            return Err(FollowError::SelfFollow);
        }
        self.catalog
            .try_update(|catalog| toggle_follow(catalog, &viewer, target))
            .unwrap_or_else(|| Err(FollowError::UnknownUser(target.to_string())))
    }

    pub fn is_following(&self, target: &str) -> bool {
        let viewer = self.viewer_id();
        self.catalog.with(|c| c.is_following(&viewer, target))
    }

    /// Submits the composer's draft as the viewer's review of `item_id`.
    pub fn submit_review(&self, composer: &mut ReviewComposer, item_id: &str) -> Result<SubmittedReview, ReviewError> {
        if composer.rating == 0 {
            return Err(ReviewError::MissingRating);
        }
        let viewer = self.viewer_id();
        let cap = self.config.with_value(|c| c.recent_reviews_cap);
        let mut inbox = self.inbox.get_untracked();

        let result = self
            .catalog
            .try_update(|catalog| composer.submit(catalog, &mut inbox, &viewer, item_id, Utc::now(), cap))
            .unwrap_or_else(|| Err(ReviewError::ItemNotFound(item_id.to_string())));
        if result.is_ok() {
            self.inbox.set(inbox);
        }
        result
    }

    pub fn mark_notification_read(&self, notification_id: &str) {
        let viewer = self.viewer_id();
        self.inbox.update(|inbox| {
            inbox.mark_read(&viewer, notification_id);
        });
    }

    pub fn unread_notifications(&self) -> usize {
        let viewer = self.viewer_id();
        self.inbox.with(|inbox| inbox.unread_count(&viewer))
    }

    /// Keeps a remote search result so its detail page can resolve it.
    pub fn adopt_search_result(&self, item: Item) {
        self.catalog.update(|catalog| {
            catalog.append_item(item);
        });
    }
}

pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}
