use crate::error::StorageError;
use crate::models::item::ItemId;
use crate::utils::storage::KeyValueStorage;
use leptos::logging::{error, log, warn};
use serde_json::Value;

/// Favorited item ids in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: Vec<ItemId>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids<I: IntoIterator<Item = ItemId>>(ids: I) -> Self {
        let mut favorites = Self::new();
        for id in ids {
            if !favorites.contains(&id) {
                favorites.ids.push(id);
            }
        }
        favorites
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|f| f == id)
    }

    /// Adds the id if absent, removes it otherwise. Returns whether the id is
    /// a favorite afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|f| f == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

fn parse(key: &str, raw: &str) -> Result<Favorites, StorageError> {
    let corrupt = |reason: String| StorageError::Corrupt {
        key: key.to_string(),
        reason,
    };
    match serde_json::from_str::<Value>(raw).map_err(|e| corrupt(e.to_string()))? {
        Value::Array(entries) => {
            let ids = entries.into_iter().filter_map(|entry| match entry {
                Value::String(id) => Some(id),
                other => {
                    warn!("[FAVORITES] Skipping non-string favorite entry: {}", other);
                    None
                }
            });
            Ok(Favorites::from_ids(ids))
        }
        other => Err(corrupt(format!("expected an array, found {}", other))),
    }
}

/// Reads the persisted favorites. Anything that is not a JSON array is
/// dropped together with its key and the set starts empty.
pub fn load<S: KeyValueStorage>(storage: &S, key: &str) -> Favorites {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Favorites::new(),
        Err(err) => {
            error!("[FAVORITES] Failed to read favorites: {}", err);
            return Favorites::new();
        }
    };

    match parse(key, &raw) {
        Ok(favorites) => {
            log!("[FAVORITES] Loaded {} favorites", favorites.len());
            favorites
        }
        Err(err) => {
            warn!("[FAVORITES] {}. Resetting.", err);
            if let Err(err) = storage.remove(key) {
                error!("[FAVORITES] Failed to clear corrupt favorites: {}", err);
            }
            Favorites::new()
        }
    }
}

pub fn save<S: KeyValueStorage>(storage: &S, key: &str, favorites: &Favorites) -> Result<(), StorageError> {
    let raw = serde_json::to_string(favorites.ids()).map_err(|e| StorageError::Write {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    storage.set(key, &raw)
}
