#![cfg(target_arch = "wasm32")]

use bibliovirtual::search::Debouncer;
use bibliovirtual::state::favorites::{self, Favorites};
use bibliovirtual::utils::storage::{KeyValueStorage, LocalStorage};
use gloo_timers::future::sleep;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const KEY: &str = "virtualLibraryFavorites";

#[wasm_bindgen_test]
fn test_favorites_round_trip_through_local_storage() {
    let storage = LocalStorage::open().unwrap();
    storage.remove(KEY).unwrap();

    let favorites = Favorites::from_ids(vec!["b1".to_string(), "m2".to_string()]);
    favorites::save(&storage, KEY, &favorites).unwrap();

    assert_eq!(storage.get(KEY).unwrap().as_deref(), Some(r#"["b1","m2"]"#));
    assert_eq!(favorites::load(&storage, KEY), favorites);
    storage.remove(KEY).unwrap();
}

#[wasm_bindgen_test]
fn test_corrupt_local_storage_entry_is_removed() {
    let storage = LocalStorage::open().unwrap();
    storage.set(KEY, "not json").unwrap();

    assert!(favorites::load(&storage, KEY).is_empty());
    assert_eq!(storage.get(KEY).unwrap(), None);
}

#[wasm_bindgen_test]
async fn test_debouncer_runs_only_the_last_callback() {
    let fired = Rc::new(Cell::new(0u32));
    let mut debouncer = Debouncer::new(50);

    for value in 1..=3 {
        let fired = fired.clone();
        debouncer.schedule(move || fired.set(value));
        sleep(Duration::from_millis(10)).await;
    }
    sleep(Duration::from_millis(100)).await;

    assert_eq!(fired.get(), 3);
}

#[wasm_bindgen_test]
async fn test_cancelled_debouncer_never_fires() {
    let fired = Rc::new(Cell::new(false));
    let mut debouncer = Debouncer::new(20);
    {
        let fired = fired.clone();
        debouncer.schedule(move || fired.set(true));
    }
    debouncer.cancel();
    sleep(Duration::from_millis(60)).await;

    assert!(!fired.get());
}
