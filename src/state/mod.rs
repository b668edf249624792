pub mod context;
pub mod favorites;
pub mod follows;
pub mod notifications;
pub mod profile;
pub mod review;
pub mod search_box;

pub use context::{use_app_state, AppState};
